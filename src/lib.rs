pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod parsing;
pub mod profiles;
pub mod rating;
pub mod report;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use std::io;
use std::path::Path;

use crate::config::settings::AppConfig;
use crate::domain::Difficulty;
use crate::services::{ImportService, ReportOptions, ReportService};

pub fn interpret() -> Cli {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    cli
}

pub fn handle_report(config_path: Option<&Path>, profile: &str, options: ReportOptions) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let service = ReportService::new(config)?;
    service.run(profile, options)
}

pub fn handle_levels(config_path: Option<&Path>, profile: &str) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let service = ReportService::new(config)?;
    service.run_levels(profile)
}

pub fn handle_import(
    config_path: Option<&Path>,
    profile: &str,
    difficulty: Difficulty,
    file: Option<&Path>,
) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let service = ImportService::new(&config)?;
    let written = service.run(profile, difficulty, file)?;
    println!("{} bytes written to {}/{}", written, profile, difficulty.file_name());
    Ok(())
}

pub fn handle_profiles(config_path: Option<&Path>) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let service = ReportService::new(config)?;
    println!("Existing profiles:");
    for profile in service.list_profiles()? {
        println!("- {}", profile);
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
