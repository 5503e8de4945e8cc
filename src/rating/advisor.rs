use super::calculator::{max_rating, minimal_improvement};
use super::types::{BaselineRow, Improvement, PlayerAggregate, ScoredPlay};

const TABLE_MIN_LEVEL_TENTHS: u32 = 100;
const TABLE_MAX_LEVEL_TENTHS: u32 = 150;

/// Smallest rank jump on this play that would raise the aggregate
pub fn advise(aggregate: &PlayerAggregate, play: &ScoredPlay) -> Option<Improvement> {
    let target = target_rating(aggregate, play.is_new(), play.rating);
    minimal_improvement(play.internal_level(), target)
}

/// Same as `advise` for a chart the player has not played yet
pub fn advise_level(aggregate: &PlayerAggregate, internal_level: f64, is_new: bool) -> Option<Improvement> {
    let target = target_rating(aggregate, is_new, 0);
    minimal_improvement(internal_level, target)
}

/// Per-level advice for unplayed charts, from 10.0 to 15.0.
/// Levels that cannot beat the weaker bucket even at the cap are left out.
pub fn baseline_table(aggregate: &PlayerAggregate) -> Vec<BaselineRow> {
    let weakest = baseline(aggregate, true);

    (TABLE_MIN_LEVEL_TENTHS..=TABLE_MAX_LEVEL_TENTHS)
        .map(|tenths| tenths as f64 / 10.0)
        .filter(|&level| max_rating(level) > weakest)
        .map(|level| BaselineRow {
            level,
            new_chart: advise_level(aggregate, level, true),
            old_chart: advise_level(aggregate, level, false),
        })
        .collect()
}

/// A new chart can land in either bucket, so it competes with the weaker one
fn baseline(aggregate: &PlayerAggregate, is_new: bool) -> u32 {
    if is_new {
        aggregate
            .min_new_bucket_rating
            .min(aggregate.min_old_bucket_rating)
    } else {
        aggregate.min_old_bucket_rating
    }
}

/// Never advise a downgrade: a play above the baseline must beat itself
fn target_rating(aggregate: &PlayerAggregate, is_new: bool, current_rating: u32) -> u32 {
    baseline(aggregate, is_new).max(current_rating)
}
