//! Catalog persistence boundary.

use std::path::PathBuf;
use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;

use stockkeep_core::ItemId;

use crate::item::Item;

/// Items keyed by id, in catalog order.
pub type ItemMap = IndexMap<ItemId, Item>;

/// Build an [`ItemMap`] from records in stored order.
///
/// A repeated id keeps the slot of its first record and the fields of its last.
pub fn index_items(items: impl IntoIterator<Item = Item>) -> ItemMap {
    let mut map = ItemMap::new();
    for item in items {
        map.insert(item.item_id.clone(), item);
    }
    map
}

/// Catalog storage error.
///
/// These are infrastructure failures. Callers do not recover from them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("catalog storage i/o failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog file {path} is malformed: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("catalog storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Whole-catalog store.
///
/// There is no incremental API: `save` replaces everything previously stored
/// with exactly the given items.
pub trait CatalogStore {
    /// Load every stored item. Returns an empty map when nothing was saved yet.
    fn load(&self) -> Result<ItemMap, StoreError>;

    /// Overwrite the stored catalog with `items`.
    fn save(&self, items: &ItemMap) -> Result<(), StoreError>;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn load(&self) -> Result<ItemMap, StoreError> {
        (**self).load()
    }

    fn save(&self, items: &ItemMap) -> Result<(), StoreError> {
        (**self).save(items)
    }
}

impl<S> CatalogStore for &S
where
    S: CatalogStore + ?Sized,
{
    fn load(&self) -> Result<ItemMap, StoreError> {
        (**self).load()
    }

    fn save(&self, items: &ItemMap) -> Result<(), StoreError> {
        (**self).save(items)
    }
}
