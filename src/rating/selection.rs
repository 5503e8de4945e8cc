use log::{debug, info, warn};

use super::calculator::rating;
use super::types::{
    Bucket, PlayerAggregate, ScoredPlay, NEW_BUCKET_SIZE, OLD_BUCKET_SIZE,
};
use crate::domain::{Chart, ChartCatalog, PlayRecord};
use crate::errors::{RatingError, UnmatchedPlay};

/// Joins plays with the catalog, rates them and fills the best 50.
///
/// Plays that do not match exactly one chart are kept on the aggregate as
/// `unmatched` and excluded from every total. An empty catalog aborts.
pub fn aggregate(plays: &[PlayRecord], catalog: &ChartCatalog) -> Result<PlayerAggregate, RatingError> {
    ensure_catalog(catalog)?;
    info!("Aggregating {} plays against {} charts", plays.len(), catalog.len());

    let (mut scored, unmatched) = join_and_rate(plays, catalog)?;
    sort_by_rating(&mut scored);

    let minimums = assign_buckets(&mut scored);
    let (new_bucket_total, old_bucket_total) = sum_buckets(&scored);
    info!(
        "  → Best 50: {} ({} + {}), {} unmatched",
        new_bucket_total + old_bucket_total,
        new_bucket_total,
        old_bucket_total,
        unmatched.len()
    );

    Ok(PlayerAggregate {
        plays: scored,
        new_bucket_total,
        old_bucket_total,
        min_new_bucket_rating: minimums.new,
        min_old_bucket_rating: minimums.old,
        unmatched,
    })
}

/// The single chart a play belongs to
pub fn match_chart<'a>(play: &PlayRecord, catalog: &'a ChartCatalog) -> Result<&'a Chart, RatingError> {
    match catalog.lookup(&play.key()) {
        [chart] => Ok(chart),
        candidates => Err(UnmatchedPlay::new(play, candidates.len()).into()),
    }
}

fn ensure_catalog(catalog: &ChartCatalog) -> Result<(), RatingError> {
    if catalog.is_empty() {
        return Err(RatingError::CatalogUnavailable);
    }
    Ok(())
}

fn join_and_rate(
    plays: &[PlayRecord],
    catalog: &ChartCatalog,
) -> Result<(Vec<ScoredPlay>, Vec<UnmatchedPlay>), RatingError> {
    let mut scored = Vec::with_capacity(plays.len());
    let mut unmatched = Vec::new();

    for play in plays {
        match match_chart(play, catalog) {
            Ok(chart) => scored.push(rate_play(play, chart)),
            Err(RatingError::UnmatchedPlay(miss)) => {
                warn!("Skipping play: {}", miss);
                unmatched.push(miss);
            }
            Err(e) => return Err(e),
        }
    }

    Ok((scored, unmatched))
}

fn rate_play(play: &PlayRecord, chart: &Chart) -> ScoredPlay {
    let value = rating(chart.internal_level, play.accuracy);
    debug!(
        "{} [{}] {:.4}% -> {}",
        play.title,
        play.difficulty,
        play.accuracy * 100.0,
        value
    );
    ScoredPlay::new(play.clone(), chart.clone(), value)
}

/// Stable: equal ratings keep encounter order
fn sort_by_rating(plays: &mut [ScoredPlay]) {
    plays.sort_by(|a, b| b.rating.cmp(&a.rating));
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct BucketMinimums {
    new: u32,
    old: u32,
}

/// Greedy walk over the sorted plays. A new chart prefers the new bucket but
/// falls through to the old one once the new bucket is full.
fn assign_buckets(plays: &mut [ScoredPlay]) -> BucketMinimums {
    let mut new_count: u8 = 0;
    let mut old_count: u8 = 0;
    let mut minimums = BucketMinimums::default();

    for play in plays.iter_mut() {
        if new_count == NEW_BUCKET_SIZE && old_count == OLD_BUCKET_SIZE {
            break;
        }

        if play.is_new() && new_count < NEW_BUCKET_SIZE {
            new_count += 1;
            play.bucket_rank = Some(new_count);
            minimums.new = play.rating;
        } else if old_count < OLD_BUCKET_SIZE {
            old_count += 1;
            play.bucket_rank = Some(NEW_BUCKET_SIZE + old_count);
            minimums.old = play.rating;
        }
    }

    // A bucket with free slots accepts any rating
    if new_count < NEW_BUCKET_SIZE {
        minimums.new = 0;
    }
    if old_count < OLD_BUCKET_SIZE {
        minimums.old = 0;
    }

    minimums
}

fn sum_buckets(plays: &[ScoredPlay]) -> (u32, u32) {
    plays.iter().fold((0, 0), |(new, old), play| match play.bucket() {
        Some(Bucket::New) => (new.saturating_add(play.rating), old),
        Some(Bucket::Old) => (new, old.saturating_add(play.rating)),
        None => (new, old),
    })
}
