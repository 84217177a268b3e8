//! Catalog store adapters.
//!
//! Both implement [`stockkeep_inventory::CatalogStore`]: the JSON file store is
//! what the CLI runs on, the in-memory store backs tests.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryCatalogStore;
pub use json_file::JsonFileStore;
