use serde::{Deserialize, Serialize};

/// Title alias mapping a pasted spelling to the catalog spelling
///
/// New entries are needed whenever a release shows a title in the score
/// list differently from the song data. Extra aliases go in the `aliases`
/// array of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleAlias {
    pub from: String,
    pub to: String,
}

impl TitleAlias {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Aliases known to be needed for the current song data
pub fn default_aliases() -> Vec<TitleAlias> {
    vec![
        TitleAlias::new("Help me, ERINNNNNN!!（Band ver.）", "Help me, ERINNNNNN!!"),
        TitleAlias::new("Bad Apple!! feat.nomico", "Bad Apple!! feat nomico"),
    ]
}
