//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (unknown items, stock
/// rules, malformed values). Storage and rendering failures belong to the
/// infrastructure layer and are never folded into this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The referenced item is not in the catalog.
    #[error("Item ID {0} not found in the inventory.")]
    ItemNotFound(String),

    /// A sale asked for more units than are on hand.
    #[error(
        "Insufficient quantity for Item ID {item_id}. Available: {available}, Requested: {requested}"
    )]
    InsufficientStock {
        item_id: String,
        available: i64,
        requested: i64,
    },

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn item_not_found(item_id: impl Into<String>) -> Self {
        Self::ItemNotFound(item_id.into())
    }

    pub fn insufficient_stock(item_id: impl Into<String>, available: i64, requested: i64) -> Self {
        Self::InsufficientStock {
            item_id: item_id.into(),
            available,
            requested,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
