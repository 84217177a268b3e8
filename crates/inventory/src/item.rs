use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockkeep_core::{DomainError, DomainResult, Entity, ItemId};

/// Parse a price as typed by an operator: plain decimal or scientific notation.
pub fn parse_price(s: &str) -> DomainResult<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|e| DomainError::validation(format!("invalid price '{s}': {e}")))
}

/// A stock item as held in the catalog and written to the store.
///
/// Field names are the on-disk record keys. `price` is written as a JSON
/// number carrying every digit of the decimal, so reloading is exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: ItemId,
    pub name: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    /// On-hand units. Non-negative by convention only.
    pub quantity: i64,
}

impl Item {
    pub fn new(
        item_id: impl Into<ItemId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
        quantity: i64,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.item_id
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Category: {}, Price: {}, Quantity: {}",
            self.item_id, self.name, self.category, self.price, self.quantity
        )
    }
}

/// Partial update of an item.
///
/// A field is applied iff it is `Some`, so zero prices, zero quantities and
/// empty strings are real updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i64>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
    }

    pub fn apply_to(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
    }
}
