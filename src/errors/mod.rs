use serde::Serialize;
use std::path::Path;
use thiserror::Error;

use crate::domain::{Difficulty, PlayRecord};

/// A parsed play that did not join with exactly one catalog chart
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{title} [{difficulty}] with max score {max_score} matched {matches} charts")]
pub struct UnmatchedPlay {
    pub title: String,
    pub difficulty: Difficulty,
    pub max_score: u32,
    pub accuracy: f64,
    pub matches: usize,
}

impl UnmatchedPlay {
    pub fn new(play: &PlayRecord, matches: usize) -> Self {
        Self {
            title: play.title.clone(),
            difficulty: play.difficulty,
            max_score: play.max_score,
            accuracy: play.accuracy,
            matches,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        self.matches > 1
    }
}

/// Failures of the rating core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    #[error("unmatched play: {0}")]
    UnmatchedPlay(#[from] UnmatchedPlay),

    #[error("chart catalog is empty or not loaded")]
    CatalogUnavailable,
}

/// Add context to catalog errors
pub fn catalog_context(path: &Path) -> String {
    format!("Failed to load chart catalog from: {}", path.display())
}

/// Add context to profile errors
pub fn profile_context(operation: &str, profile: &str) -> String {
    format!("Failed to {} profile: {}", operation, profile)
}

/// Add context to config errors
pub fn config_context(path: &Path) -> String {
    format!("Failed to load config from: {}", path.display())
}
