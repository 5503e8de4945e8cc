use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Difficulty, PlayRecord};
use crate::errors::profile_context;
use crate::parsing::ScoreLogParser;

/// Directory of player profiles, one raw score log per difficulty:
/// `<root>/<profile>/<difficulty>.txt`
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    /// Create a store rooted at `root`, creating the directory if needed
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).context("Failed to create profiles directory")?;
        Ok(Self { root })
    }

    /// Profile names, sorted
    pub fn list_profiles(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).context("Failed to read profiles directory")? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn exists(&self, profile: &str) -> bool {
        self.profile_dir(profile).is_dir()
    }

    /// Store pasted text for one difficulty, returning the bytes written
    pub fn save_raw(&self, profile: &str, difficulty: Difficulty, text: &str) -> Result<usize> {
        let dir = self.profile_dir(profile);
        fs::create_dir_all(&dir).with_context(|| profile_context("create", profile))?;

        let file_path = self.build_log_path(profile, difficulty);
        fs::write(&file_path, text).with_context(|| profile_context("write", profile))?;

        info!("Saved {} bytes to {}", text.len(), file_path.display());
        Ok(text.len())
    }

    /// Raw text for one difficulty, `None` when it was never imported
    pub fn load_raw(&self, profile: &str, difficulty: Difficulty) -> Result<Option<String>> {
        let file_path = self.build_log_path(profile, difficulty);
        if !file_path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&file_path).with_context(|| profile_context("read", profile))?;
        Ok(Some(text))
    }

    /// Every play in the profile, difficulty by difficulty in log order
    pub fn load_plays(&self, profile: &str, parser: &ScoreLogParser) -> Result<Vec<PlayRecord>> {
        if !self.exists(profile) {
            bail!("Profile not found: {}", profile);
        }

        let mut plays = Vec::new();
        for difficulty in Difficulty::ALL {
            let Some(text) = self.load_raw(profile, difficulty)? else {
                debug!("No {} log for profile {}", difficulty, profile);
                continue;
            };
            plays.extend(
                parser
                    .parse(&text)
                    .into_iter()
                    .map(|raw| raw.with_difficulty(difficulty)),
            );
        }

        info!("  → Loaded {} plays for profile {}", plays.len(), profile);
        Ok(plays)
    }

    // --- Helper Methods ---

    fn profile_dir(&self, profile: &str) -> PathBuf {
        self.root.join(profile)
    }

    fn build_log_path(&self, profile: &str, difficulty: Difficulty) -> PathBuf {
        self.profile_dir(profile).join(difficulty.file_name())
    }
}
