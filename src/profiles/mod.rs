mod store;

pub use store::ProfileStore;
