//! In-memory catalog with write-through persistence.
//!
//! Every mutating call that changes something rewrites the whole store before
//! returning, so a completed call leaves memory and storage equal.

use thiserror::Error;

use stockkeep_core::{DomainError, ItemId};

use crate::item::{Item, ItemPatch};
use crate::store::{CatalogStore, ItemMap, StoreError};

/// Failure of [`Catalog::adjust_quantity`].
#[derive(Debug, Error)]
pub enum AdjustError {
    /// Unknown item, or a quantity that does not fit; nothing was changed.
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Keyed collection of items backed by a [`CatalogStore`].
///
/// One instance per process; callers construct it explicitly and pass it to
/// whatever needs it.
#[derive(Debug)]
pub struct Catalog<S> {
    items: ItemMap,
    store: S,
}

impl<S: CatalogStore> Catalog<S> {
    /// Load the catalog from `store` (empty if nothing was stored yet).
    pub fn open(store: S) -> Result<Self, StoreError> {
        let items = store.load()?;
        tracing::debug!(items = items.len(), "catalog loaded");
        Ok(Self { items, store })
    }

    /// Insert `item`, overwriting any item with the same id in place.
    pub fn add(&mut self, item: Item) -> Result<(), StoreError> {
        let item_id = item.item_id.clone();
        let replaced = self.items.insert(item_id.clone(), item).is_some();
        self.persist()?;
        tracing::info!(item_id = %item_id, replaced, "item added");
        Ok(())
    }

    /// Apply `patch` to an existing item.
    ///
    /// Returns `false` without touching the store if the id is unknown.
    pub fn update(&mut self, item_id: &ItemId, patch: ItemPatch) -> Result<bool, StoreError> {
        let Some(item) = self.items.get_mut(item_id) else {
            tracing::warn!(item_id = %item_id, "update ignored: unknown item");
            return Ok(false);
        };
        patch.apply_to(item);
        self.persist()?;
        tracing::info!(item_id = %item_id, "item updated");
        Ok(true)
    }

    /// Remove an item, keeping the order of the others.
    ///
    /// Returns `None` without touching the store if the id is unknown.
    pub fn remove(&mut self, item_id: &ItemId) -> Result<Option<Item>, StoreError> {
        let Some(removed) = self.items.shift_remove(item_id) else {
            tracing::warn!(item_id = %item_id, "remove ignored: unknown item");
            return Ok(None);
        };
        self.persist()?;
        tracing::info!(item_id = %item_id, "item removed");
        Ok(Some(removed))
    }

    /// Add `delta` to an item's on-hand quantity and persist.
    ///
    /// Returns the new quantity. An unknown id or a result outside `i64`
    /// leaves the catalog and the store untouched.
    pub fn adjust_quantity(&mut self, item_id: &ItemId, delta: i64) -> Result<i64, AdjustError> {
        let item = self
            .items
            .get_mut(item_id)
            .ok_or_else(|| DomainError::item_not_found(item_id.as_str()))?;
        let on_hand = item.quantity.checked_add(delta).ok_or_else(|| {
            DomainError::validation(format!(
                "quantity of Item ID {item_id} would overflow: {} + {delta}",
                item.quantity
            ))
        })?;
        item.quantity = on_hand;
        self.persist()?;
        tracing::info!(item_id = %item_id, delta, on_hand, "stock adjusted");
        Ok(on_hand)
    }

    /// All items in catalog order.
    pub fn list(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn get(&self, item_id: &ItemId) -> Option<&Item> {
        self.items.get(item_id)
    }

    pub fn contains(&self, item_id: &ItemId) -> bool {
        self.items.contains_key(item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &ItemMap {
        &self.items
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.save(&self.items)?;
        tracing::debug!(items = self.items.len(), "catalog persisted");
        Ok(())
    }
}
