use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use stockkeep_inventory::{CatalogStore, Item, ItemMap, StoreError, index_items};

/// Catalog stored as one JSON array of item records.
///
/// Every save rewrites the whole file. There is no locking, so two processes
/// saving at once can lose each other's changes.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> Result<ItemMap, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no catalog file yet");
                return Ok(ItemMap::new());
            }
            Err(err) => return Err(StoreError::io(self.path.clone(), err)),
        };

        let records: Vec<Item> = serde_json::from_str(&raw)
            .map_err(|e| StoreError::malformed(self.path.clone(), e.to_string()))?;
        Ok(index_items(records))
    }

    fn save(&self, items: &ItemMap) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let records: Vec<&Item> = items.values().collect();
        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| StoreError::malformed(self.path.clone(), e.to_string()))?;

        fs::write(&self.path, json).map_err(|e| StoreError::io(self.path.clone(), e))?;
        tracing::debug!(path = %self.path.display(), items = records.len(), "catalog file written");
        Ok(())
    }
}
