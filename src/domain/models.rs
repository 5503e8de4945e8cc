use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chart difficulty slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Advanced,
    Expert,
    Master,
    #[serde(rename = "remaster")]
    ReMaster,
}

impl Difficulty {
    /// All difficulties in profile reading order
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Basic,
        Difficulty::Advanced,
        Difficulty::Expert,
        Difficulty::Master,
        Difficulty::ReMaster,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Basic => "basic",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
            Difficulty::Master => "master",
            Difficulty::ReMaster => "remaster",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Basic => "BASIC",
            Difficulty::Advanced => "ADVANCED",
            Difficulty::Expert => "EXPERT",
            Difficulty::Master => "MASTER",
            Difficulty::ReMaster => "Re:MASTER",
        }
    }

    /// RGB colour used when rendering the difficulty
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Difficulty::Basic => (0x22, 0xbb, 0x5b),
            Difficulty::Advanced => (0xfb, 0x9c, 0x2d),
            Difficulty::Expert => (0xf6, 0x48, 0x61),
            Difficulty::Master => (0x9e, 0x45, 0xe2),
            Difficulty::ReMaster => (0xdb, 0xaa, 0xff),
        }
    }

    /// Name of the raw log file holding this difficulty inside a profile
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" | "b" => Ok(Difficulty::Basic),
            "advanced" | "a" => Ok(Difficulty::Advanced),
            "expert" | "e" => Ok(Difficulty::Expert),
            "master" | "m" => Ok(Difficulty::Master),
            "remaster" | "re:master" | "r" => Ok(Difficulty::ReMaster),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

/// Chart flavour: standard or deluxe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    #[serde(rename = "std")]
    Standard,
    #[serde(rename = "dx")]
    Deluxe,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Standard => "STD",
            ChartType::Deluxe => "DX",
        }
    }
}

/// Exact-match join key between a play and the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartKey {
    pub title: String,
    pub difficulty: Difficulty,
    pub max_score: u32,
}

/// A single chart from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub title: String,
    pub difficulty: Difficulty,
    pub internal_level: f64,
    pub max_score: u32,
    pub is_new: bool,
    pub chart_type: ChartType,
}

impl Chart {
    pub fn key(&self) -> ChartKey {
        ChartKey {
            title: self.title.clone(),
            difficulty: self.difficulty,
            max_score: self.max_score,
        }
    }
}

/// One play as read from the pasted log, before its difficulty is known
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPlay {
    pub title: String,
    pub accuracy: f64,
    pub score: u32,
    pub max_score: u32,
}

impl RawPlay {
    pub fn with_difficulty(self, difficulty: Difficulty) -> PlayRecord {
        PlayRecord {
            title: self.title,
            difficulty,
            accuracy: self.accuracy,
            score: self.score,
            max_score: self.max_score,
        }
    }
}

const STAR_THRESHOLDS: [f64; 5] = [0.85, 0.90, 0.93, 0.95, 0.97];

/// A parsed play tagged with the difficulty it was recorded on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub title: String,
    pub difficulty: Difficulty,
    pub accuracy: f64,
    pub score: u32,
    pub max_score: u32,
}

impl PlayRecord {
    pub fn key(&self) -> ChartKey {
        ChartKey {
            title: self.title.clone(),
            difficulty: self.difficulty,
            max_score: self.max_score,
        }
    }

    /// Share of the maximum score, 0.0 when the maximum is unknown
    pub fn score_ratio(&self) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        self.score as f64 / self.max_score as f64
    }

    /// Cosmetic 0-5 star count derived from the score ratio
    pub fn star_count(&self) -> usize {
        let ratio = self.score_ratio();
        STAR_THRESHOLDS.iter().filter(|&&t| ratio >= t).count()
    }
}
