pub mod advisor;
pub mod calculator;
pub mod ranks;
pub mod selection;
pub mod types;

pub use advisor::{advise, advise_level, baseline_table};
pub use calculator::{max_rating, minimal_improvement, rank_for, rating};
pub use ranks::{Rank, RANKS};
pub use selection::aggregate;
pub use types::{Bucket, BaselineRow, Improvement, PlayerAggregate, ScoredPlay};
