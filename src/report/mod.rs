pub mod render;
pub mod view;

pub use view::{build_rows, rating_summary, Filter, ReportRow, SortKey};
