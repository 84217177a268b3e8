use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockkeep_core::{DomainError, DomainResult, ItemId, TransactionId};

/// Display format of transaction dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fields shared by every transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDetails {
    /// Never assigned while transactions are not stored.
    pub transaction_id: Option<TransactionId>,
    pub item_id: ItemId,
    pub quantity: i64,
    pub price: Decimal,
    pub date: DateTime<Local>,
}

impl TransactionDetails {
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// `quantity x price`, or a validation error if it does not fit a `Decimal`.
    pub fn amount(&self) -> DomainResult<Decimal> {
        Decimal::from(self.quantity)
            .checked_mul(self.price)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "amount of {} x {} for Item ID {} overflows",
                    self.quantity, self.price, self.item_id
                ))
            })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Sale,
    Return,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Sale => "sale",
            TransactionKind::Return => "return",
        }
    }
}

/// A sale or a customer return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transaction {
    Sale(TransactionDetails),
    Return {
        details: TransactionDetails,
        reason: String,
    },
}

impl Transaction {
    pub fn sale(item_id: ItemId, quantity: i64, price: Decimal, date: DateTime<Local>) -> Self {
        Transaction::Sale(TransactionDetails {
            transaction_id: None,
            item_id,
            quantity,
            price,
            date,
        })
    }

    pub fn returned(
        item_id: ItemId,
        quantity: i64,
        price: Decimal,
        date: DateTime<Local>,
        reason: impl Into<String>,
    ) -> Self {
        Transaction::Return {
            details: TransactionDetails {
                transaction_id: None,
                item_id,
                quantity,
                price,
                date,
            },
            reason: reason.into(),
        }
    }

    pub fn details(&self) -> &TransactionDetails {
        match self {
            Transaction::Sale(details) => details,
            Transaction::Return { details, .. } => details,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Sale(_) => TransactionKind::Sale,
            Transaction::Return { .. } => TransactionKind::Return,
        }
    }

    pub fn item_id(&self) -> &ItemId {
        &self.details().item_id
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Transaction::Sale(_) => None,
            Transaction::Return { reason, .. } => Some(reason),
        }
    }

    /// Change to apply to an item currently holding `on_hand` units.
    ///
    /// A sale may not take more than is on hand. A return is always accepted,
    /// whether or not a matching sale ever happened.
    pub fn stock_delta(&self, on_hand: i64) -> DomainResult<i64> {
        match self {
            Transaction::Sale(details) => {
                if on_hand < details.quantity {
                    return Err(DomainError::insufficient_stock(
                        details.item_id.as_str(),
                        on_hand,
                        details.quantity,
                    ));
                }
                details.quantity.checked_neg().ok_or_else(|| {
                    DomainError::validation(format!(
                        "quantity {} for Item ID {} is out of range",
                        details.quantity, details.item_id
                    ))
                })
            }
            Transaction::Return { details, .. } => Ok(details.quantity),
        }
    }
}
