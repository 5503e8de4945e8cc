use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::config::settings::AppConfig;
use crate::domain::Difficulty;
use crate::parsing::{ScoreLogParser, TitleNormalizer};
use crate::profiles::ProfileStore;

/// Copies a pasted score log into a profile
pub struct ImportService {
    store: ProfileStore,
    parser: ScoreLogParser,
}

impl ImportService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            store: ProfileStore::new(&config.profiles.profiles_path)?,
            parser: ScoreLogParser::new(TitleNormalizer::new(&config.aliases))?,
        })
    }

    /// Store text from `source` (stdin when `None`), returning the bytes written
    pub fn run(&self, profile: &str, difficulty: Difficulty, source: Option<&Path>) -> Result<usize> {
        info!("=== Importing {} log into profile {} ===\n", difficulty, profile);

        let text = read_source(source)?;
        let written = self.import_text(profile, difficulty, &text)?;

        info!("=== Import Complete ===");
        Ok(written)
    }

    pub fn import_text(&self, profile: &str, difficulty: Difficulty, text: &str) -> Result<usize> {
        let plays = self.parser.parse(text);
        info!("  → {} plays recognised in pasted text", plays.len());

        self.store.save_raw(profile, difficulty, text)
    }
}

fn read_source(source: Option<&Path>) -> Result<String> {
    match source {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read score log: {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read score log from stdin")?;
            Ok(text)
        }
    }
}
