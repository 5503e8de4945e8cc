use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::aliases::{default_aliases, TitleAlias};
use crate::errors::config_context;

/// Environment variable naming a config file when `--config` is not given
pub const CONFIG_ENV_VAR: &str = "MAIMAI_RATING_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    pub profiles_path: PathBuf,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            profiles_path: PathBuf::from("profiles"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub song_data_path: PathBuf,
    /// Versions whose charts count toward the new bucket
    pub new_versions: Vec<String>,
    /// Max score = note count * this
    pub max_score_per_note: u32,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            song_data_path: PathBuf::from("songdata.json"),
            new_versions: vec![
                "PRiSM".to_string(),
                "PRiSM PLUS".to_string(),
                "BUDDiES PLUS".to_string(),
            ],
            max_score_per_note: 3,
        }
    }
}

impl CatalogSettings {
    pub fn is_new_version(&self, version: &str) -> bool {
        self.new_versions.iter().any(|v| v == version)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub profiles: ProfileSettings,
    pub catalog: CatalogSettings,
    /// Full alias table; replaces the built-in one when given
    pub aliases: Vec<TitleAlias>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            profiles: ProfileSettings::default(),
            catalog: CatalogSettings::default(),
            aliases: default_aliases(),
        }
    }

    /// Config from the given file, else from `MAIMAI_RATING_CONFIG`, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match resolve_path(path) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::new()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).with_context(|| config_context(path))?;
        let config = Self::from_json(&json).with_context(|| config_context(path))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Keys missing from the JSON keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse config JSON")
    }
}

fn resolve_path(path: Option<&Path>) -> Option<PathBuf> {
    path.map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}
