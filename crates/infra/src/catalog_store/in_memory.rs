use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use stockkeep_inventory::{CatalogStore, Item, ItemMap, StoreError, index_items};

/// In-memory catalog store.
///
/// Intended for tests/dev. Counts saves so callers can check write-through.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    items: RwLock<ItemMap>,
    saves: AtomicUsize,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `items`, as if saved by an earlier run.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: RwLock::new(index_items(items)),
            saves: AtomicUsize::new(0),
        }
    }

    /// Currently stored items.
    pub fn snapshot(&self) -> Result<ItemMap, StoreError> {
        self.load()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn load(&self) -> Result<ItemMap, StoreError> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(items.clone())
    }

    fn save(&self, items: &ItemMap) -> Result<(), StoreError> {
        let mut stored = self
            .items
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        *stored = items.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
