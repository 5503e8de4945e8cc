use clap::ValueEnum;
use serde::Serialize;
use std::cmp::Ordering;

use crate::domain::Difficulty;
use crate::rating::{advise, rank_for, Improvement, PlayerAggregate, ScoredPlay};

const TITLE_WIDTH: usize = 30;

/// Column the score table is sorted by (always descending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum SortKey {
    Rating,
    Accuracy,
    Dx,
    Level,
}

/// Which plays the score table shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum Filter {
    All,
    New,
    Old,
    B50,
}

impl Filter {
    pub fn accepts(&self, play: &ScoredPlay) -> bool {
        match self {
            Filter::All => true,
            Filter::New => play.is_new(),
            Filter::Old => !play.is_new(),
            Filter::B50 => play.bucket_rank.is_some(),
        }
    }
}

/// One display row of the score table
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub position: usize,
    pub song: String,
    pub is_new: bool,
    pub difficulty: Difficulty,
    pub difficulty_text: String,
    pub accuracy_text: String,
    pub rank: &'static str,
    pub dx_text: String,
    pub rating: u32,
    pub rating_text: String,
    pub improvement: Option<Improvement>,
}

/// Filtered, sorted rows with advice attached.
/// Ties share a position and the following group skips ahead.
pub fn build_rows(aggregate: &PlayerAggregate, sort: SortKey, filter: Filter) -> Vec<ReportRow> {
    let mut plays: Vec<&ScoredPlay> = aggregate.plays.iter().filter(|p| filter.accepts(p)).collect();
    plays.sort_by(|a, b| compare_by(sort, b, a));

    let mut rows = Vec::with_capacity(plays.len());
    let mut position = 0;
    for (index, play) in plays.iter().enumerate() {
        let starts_group = index == 0 || compare_by(sort, play, plays[index - 1]) != Ordering::Equal;
        if starts_group {
            position = index + 1;
        }
        rows.push(build_row(aggregate, play, position));
    }
    rows
}

/// "Rating: 12345 (4000 + 8345; avg 246.9)"
pub fn rating_summary(aggregate: &PlayerAggregate) -> String {
    format!(
        "Rating: {} ({} + {}; avg {:.1})",
        aggregate.combined_total(),
        aggregate.new_bucket_total,
        aggregate.old_bucket_total,
        aggregate.average()
    )
}

fn compare_by(sort: SortKey, a: &ScoredPlay, b: &ScoredPlay) -> Ordering {
    match sort {
        SortKey::Rating => a.rating.cmp(&b.rating),
        SortKey::Accuracy => a.play.accuracy.total_cmp(&b.play.accuracy),
        SortKey::Dx => a.play.score_ratio().total_cmp(&b.play.score_ratio()),
        SortKey::Level => a.internal_level().total_cmp(&b.internal_level()),
    }
}

fn build_row(aggregate: &PlayerAggregate, play: &ScoredPlay, position: usize) -> ReportRow {
    ReportRow {
        position,
        song: song_text(play),
        is_new: play.is_new(),
        difficulty: play.difficulty(),
        difficulty_text: format!("{} {:.1}", play.difficulty().label(), play.internal_level()),
        accuracy_text: format!("{:.4}%", play.play.accuracy * 100.0),
        rank: rank_for(play.play.accuracy).name,
        dx_text: dx_text(play),
        rating: play.rating,
        rating_text: rating_text(play),
        improvement: advise(aggregate, play),
    }
}

/// "[N] Title…" truncated to the column width, then the chart type
fn song_text(play: &ScoredPlay) -> String {
    let prefix = if play.is_new() { "[N] " } else { "" };
    let full = format!("{}{}", prefix, play.title());
    format!("{} {}", truncate(&full, TITLE_WIDTH), play.chart.chart_type.as_str())
}

fn dx_text(play: &ScoredPlay) -> String {
    format!(
        "{}/{} {}* {:.1}%",
        play.play.score,
        play.play.max_score,
        play.play.star_count(),
        play.play.score_ratio() * 100.0
    )
}

fn rating_text(play: &ScoredPlay) -> String {
    match play.bucket_position() {
        Some((slot, size)) => format!("{} {}/{}", play.rating, slot, size),
        None => play.rating.to_string(),
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}
