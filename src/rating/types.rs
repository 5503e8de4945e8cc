use serde::Serialize;
use std::fmt;

use super::ranks::Rank;
use crate::domain::{Chart, Difficulty, PlayRecord};
use crate::errors::UnmatchedPlay;

pub const NEW_BUCKET_SIZE: u8 = 15;
pub const OLD_BUCKET_SIZE: u8 = 35;
pub const TOTAL_BUCKET_SIZE: u8 = NEW_BUCKET_SIZE + OLD_BUCKET_SIZE;

/// Which half of the best 50 a play counts toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bucket {
    New,
    Old,
}

impl Bucket {
    pub fn from_rank(bucket_rank: u8) -> Option<Self> {
        match bucket_rank {
            1..=NEW_BUCKET_SIZE => Some(Bucket::New),
            r if r <= TOTAL_BUCKET_SIZE => Some(Bucket::Old),
            _ => None,
        }
    }
}

/// A play joined with its chart and rated
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPlay {
    pub play: PlayRecord,
    pub chart: Chart,
    pub rating: u32,
    pub bucket_rank: Option<u8>,
}

impl ScoredPlay {
    pub fn new(play: PlayRecord, chart: Chart, rating: u32) -> Self {
        Self {
            play,
            chart,
            rating,
            bucket_rank: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.chart.is_new
    }

    pub fn internal_level(&self) -> f64 {
        self.chart.internal_level
    }

    pub fn title(&self) -> &str {
        &self.play.title
    }

    pub fn difficulty(&self) -> Difficulty {
        self.play.difficulty
    }

    pub fn bucket(&self) -> Option<Bucket> {
        self.bucket_rank.and_then(Bucket::from_rank)
    }

    /// Position inside its own bucket, e.g. (3, 15) or (12, 35)
    pub fn bucket_position(&self) -> Option<(u8, u8)> {
        let rank = self.bucket_rank?;
        match self.bucket()? {
            Bucket::New => Some((rank, NEW_BUCKET_SIZE)),
            Bucket::Old => Some((rank - NEW_BUCKET_SIZE, OLD_BUCKET_SIZE)),
        }
    }
}

/// Ranked summary of one import
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlayerAggregate {
    pub plays: Vec<ScoredPlay>,
    pub new_bucket_total: u32,
    pub old_bucket_total: u32,
    pub min_new_bucket_rating: u32,
    pub min_old_bucket_rating: u32,
    pub unmatched: Vec<UnmatchedPlay>,
}

impl PlayerAggregate {
    pub fn combined_total(&self) -> u32 {
        self.new_bucket_total.saturating_add(self.old_bucket_total)
    }

    pub fn new_count(&self) -> usize {
        self.count_in(Bucket::New)
    }

    pub fn old_count(&self) -> usize {
        self.count_in(Bucket::Old)
    }

    /// Mean rating over the full best-50 slot count
    pub fn average(&self) -> f64 {
        self.combined_total() as f64 / TOTAL_BUCKET_SIZE as f64
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    fn count_in(&self, bucket: Bucket) -> usize {
        self.plays
            .iter()
            .filter(|p| p.bucket() == Some(bucket))
            .count()
    }
}

/// Rating gain reachable by moving up to `rank`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Improvement {
    pub delta_rating: u32,
    pub rank: &'static Rank,
}

impl fmt::Display for Improvement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} for {}", self.delta_rating, self.rank)
    }
}

/// One row of the hypothetical per-level advice table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselineRow {
    pub level: f64,
    pub new_chart: Option<Improvement>,
    pub old_chart: Option<Improvement>,
}
