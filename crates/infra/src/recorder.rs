//! Sale and return recording.
//!
//! The recorder is the only place where a transaction meets the catalog:
//!
//! ```text
//! (item_id, quantity, price[, reason])
//!   ↓
//! 1. Build a transient Transaction dated now
//!   ↓
//! 2. Look up on-hand quantity (ItemNotFound if absent)
//!   ↓
//! 3. Decide the stock delta (InsufficientStock for oversized sales)
//!   ↓
//! 4. Apply the delta through the catalog (write-through to the store)
//! ```
//!
//! The transaction is logged and dropped; no ledger is kept.

use chrono::Local;
use rust_decimal::Decimal;
use thiserror::Error;

use stockkeep_core::{DomainError, ItemId};
use stockkeep_inventory::{AdjustError, Catalog, CatalogStore, StoreError};
use stockkeep_sales::Transaction;

#[derive(Debug, Error)]
pub enum RecordError {
    /// Business rejection; the catalog is unchanged.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Persisting the new quantity failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<AdjustError> for RecordError {
    fn from(err: AdjustError) -> Self {
        match err {
            AdjustError::Domain(err) => RecordError::Domain(err),
            AdjustError::Store(err) => RecordError::Store(err),
        }
    }
}

/// Applies sales and returns to a catalog.
pub struct TransactionRecorder<'c, S> {
    catalog: &'c mut Catalog<S>,
}

impl<'c, S: CatalogStore> TransactionRecorder<'c, S> {
    pub fn new(catalog: &'c mut Catalog<S>) -> Self {
        Self { catalog }
    }

    /// Sell `quantity` units. Returns the new on-hand quantity.
    pub fn record_sale(
        &mut self,
        item_id: &ItemId,
        quantity: i64,
        price: Decimal,
    ) -> Result<i64, RecordError> {
        self.record(Transaction::sale(
            item_id.clone(),
            quantity,
            price,
            Local::now(),
        ))
    }

    /// Take back `quantity` units. Returns the new on-hand quantity.
    pub fn record_return(
        &mut self,
        item_id: &ItemId,
        quantity: i64,
        price: Decimal,
        reason: &str,
    ) -> Result<i64, RecordError> {
        self.record(Transaction::returned(
            item_id.clone(),
            quantity,
            price,
            Local::now(),
            reason,
        ))
    }

    fn record(&mut self, transaction: Transaction) -> Result<i64, RecordError> {
        let item_id = transaction.item_id();
        let on_hand = self
            .catalog
            .get(item_id)
            .map(|item| item.quantity)
            .ok_or_else(|| DomainError::item_not_found(item_id.as_str()))?;

        let delta = transaction.stock_delta(on_hand)?;
        let on_hand = self.catalog.adjust_quantity(item_id, delta)?;

        let details = transaction.details();
        tracing::debug!(
            kind = transaction.kind().as_str(),
            item_id = %details.item_id,
            quantity = details.quantity,
            price = %details.price,
            date = %details.date_string(),
            reason = transaction.reason(),
            on_hand,
            "transaction applied"
        );
        Ok(on_hand)
    }
}
