pub mod loader;

pub use loader::{build_catalog, load_catalog, parse_catalog, SongData};
