use std::collections::HashMap;

use crate::config::aliases::{default_aliases, TitleAlias};

/// Rewrites pasted title spellings to the catalog's canonical ones
#[derive(Debug, Clone)]
pub struct TitleNormalizer {
    replacements: HashMap<String, String>,
}

impl TitleNormalizer {
    pub fn new(aliases: &[TitleAlias]) -> Self {
        let replacements = aliases
            .iter()
            .map(|alias| (alias.from.clone(), alias.to.clone()))
            .collect();
        Self { replacements }
    }

    pub fn normalize(&self, title: &str) -> String {
        self.replacements
            .get(title)
            .cloned()
            .unwrap_or_else(|| title.to_string())
    }
}

impl Default for TitleNormalizer {
    fn default() -> Self {
        Self::new(&default_aliases())
    }
}
