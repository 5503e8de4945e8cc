use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::Difficulty;
use crate::report::{Filter, SortKey};

#[derive(Parser, Debug)]
#[command(author, version, about = "maimai best 50 rating calculator")]
pub struct Cli {
    /// JSON config file (defaults to $MAIMAI_RATING_CONFIG, then built-in settings)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Show the best 50 rating and score table of a profile
    Report {
        /// Profile name
        profile: String,
        /// Sort column
        #[arg(short, long, value_enum, default_value_t = SortKey::Rating)]
        sort: SortKey,
        /// Which plays to list
        #[arg(short, long, value_enum, default_value_t = Filter::All)]
        filter: Filter,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show what each chart level needs to raise the rating
    Levels {
        /// Profile name
        profile: String,
    },
    /// Store a pasted score log for one difficulty of a profile
    Import {
        /// Profile name
        profile: String,
        /// basic, advanced, expert, master or remaster
        #[arg(short, long)]
        difficulty: Difficulty,
        /// File holding the pasted text (reads stdin when omitted)
        file: Option<PathBuf>,
    },
    /// List existing profiles
    Profiles,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
