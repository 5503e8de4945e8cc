pub mod aliases;
pub mod score_log;

pub use aliases::TitleNormalizer;
pub use score_log::ScoreLogParser;
