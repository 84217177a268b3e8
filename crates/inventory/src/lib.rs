//! Inventory domain module.
//!
//! Items, the in-memory catalog, and the storage port the catalog writes
//! through to. Concrete stores live in `stockkeep-infra`.

pub mod catalog;
pub mod item;
pub mod store;

pub use catalog::{AdjustError, Catalog};
pub use item::{Item, ItemPatch, parse_price};
pub use store::{CatalogStore, ItemMap, StoreError, index_items};
