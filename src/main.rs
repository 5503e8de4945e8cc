use anyhow::Result;

use maimai_rating::cli::{Cli, Command};
use maimai_rating::services::ReportOptions;
use maimai_rating::{
    handle_completions, handle_import, handle_levels, handle_profiles, handle_report, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match &cli.command {
        Command::Report {
            profile,
            sort,
            filter,
            json,
        } => {
            let options = ReportOptions {
                sort: *sort,
                filter: *filter,
                json: *json,
            };
            handle_report(config, profile, options)
        }
        Command::Levels { profile } => handle_levels(config, profile),
        Command::Import {
            profile,
            difficulty,
            file,
        } => handle_import(config, profile, *difficulty, file.as_deref()),
        Command::Profiles => handle_profiles(config),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
