use super::ranks::{lowest_rank, Rank, RANKS};
use super::types::Improvement;

/// Accuracy above this earns no additional rating
pub const ACCURACY_CAP: f64 = 1.005;

/// First rank (highest threshold first) reached by the accuracy.
/// The lookup uses the unclamped accuracy.
pub fn rank_for(accuracy: f64) -> &'static Rank {
    RANKS
        .iter()
        .find(|rank| accuracy >= rank.threshold)
        .unwrap_or_else(lowest_rank)
}

/// Rating of a play: floor(level * min(accuracy, cap) * rank constant)
pub fn rating(internal_level: f64, accuracy: f64) -> u32 {
    let rank = rank_for(accuracy);
    let value = internal_level * accuracy.min(ACCURACY_CAP) * rank.constant;
    truncate_rating(value)
}

/// Highest rating attainable on a chart of this level
pub fn max_rating(internal_level: f64) -> u32 {
    rating(internal_level, ACCURACY_CAP)
}

/// Lowest rank whose rating on this level beats `target`.
/// `None` once the target is at or above the maximum attainable rating.
pub fn minimal_improvement(internal_level: f64, target: u32) -> Option<Improvement> {
    RANKS.iter().rev().find_map(|rank| {
        let candidate = rating(internal_level, rank.threshold);
        (candidate > target).then(|| Improvement {
            delta_rating: candidate - target,
            rank,
        })
    })
}

fn truncate_rating(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_example() {
        assert_eq!(rank_for(0.99).name, "SS");
        assert_eq!(rating(14.0, 0.99), 288);
    }

    #[test]
    fn test_rating_is_monotonic_in_accuracy() {
        for level in [1.0, 7.5, 12.6, 13.9, 14.0, 15.0] {
            let mut previous = 0;
            for step in 0..=1020 {
                let accuracy = step as f64 / 1000.0;
                let current = rating(level, accuracy);
                assert!(current >= previous, "level {level} accuracy {accuracy}");
                previous = current;
            }
        }
    }

    #[test]
    fn test_clamp_only_affects_multiplier() {
        assert_eq!(rating(13.7, 1.005), rating(13.7, 1.010));
        assert_eq!(rank_for(1.010).name, "SSS+");
        assert_eq!(rank_for(1.005).name, "SSS+");
        assert_eq!(rank_for(1.004999).name, "SSS");
    }

    #[test]
    fn test_low_ranks_rate_zero() {
        assert_eq!(rating(14.0, 0.79), 0);
        assert_eq!(rank_for(0.0).name, "D");
        assert_eq!(rank_for(-0.5).name, "D");
        assert_eq!(rating(14.0, 0.8), 152);
    }

    #[test]
    fn test_max_rating() {
        // 13.0 * 1.005 * 22.4 = 292.656
        assert_eq!(max_rating(13.0), 292);
    }

    #[test]
    fn test_minimal_improvement_picks_lowest_sufficient_rank() {
        // SS on 14.0 rates 288, S+ rates 278
        let improvement = minimal_improvement(14.0, 280).unwrap();
        assert_eq!(improvement.rank.name, "SS");
        assert_eq!(improvement.delta_rating, 8);
    }

    #[test]
    fn test_minimal_improvement_none_at_maximum() {
        for level in [10.0, 12.5, 14.0, 15.0] {
            let top = max_rating(level);
            assert!(minimal_improvement(level, top).is_none());
            assert!(minimal_improvement(level, top + 10).is_none());

            let below = minimal_improvement(level, top - 1).unwrap();
            assert!(below.delta_rating > 0);
        }
    }

    #[test]
    fn test_minimal_improvement_from_zero() {
        let improvement = minimal_improvement(14.0, 0).unwrap();
        assert_eq!(improvement.rank.name, "A");
        assert_eq!(improvement.delta_rating, 152);
    }
}
