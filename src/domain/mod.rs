mod collection;
pub mod models;

pub use collection::ChartCatalog;
pub use models::*;
