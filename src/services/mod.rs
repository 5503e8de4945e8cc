pub mod import;
pub mod report;

pub use import::ImportService;
pub use report::{ReportOptions, ReportService};
