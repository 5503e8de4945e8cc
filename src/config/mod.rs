pub mod aliases;
pub mod settings;

pub use aliases::{default_aliases, TitleAlias};
pub use settings::AppConfig;
