use core::str::FromStr;

use chrono::{DateTime, Local};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use stockkeep_core::{DomainError, DomainResult, ItemId};
use stockkeep_inventory::{Catalog, CatalogStore, ItemMap, parse_price};
use stockkeep_sales::{DATE_FORMAT, Transaction};

/// US letter, in points.
pub const PAGE_WIDTH_PT: f32 = 612.0;
pub const PAGE_HEIGHT_PT: f32 = 792.0;
pub const FONT_SIZE_PT: f32 = 12.0;

const LEFT_MARGIN_PT: f32 = 100.0;
const HEADER_Y_PT: f32 = 750.0;
const TIMESTAMP_Y_PT: f32 = 730.0;
const SEPARATOR_Y_PT: f32 = 710.0;
const FIRST_LINE_Y_PT: f32 = 690.0;
const LINE_STEP_PT: f32 = 20.0;
const SEPARATOR: &str = "---------------------------------------";

/// Invoice identifier: the issue time as `YYYYMMDDHHMMSS`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(String);

impl InvoiceId {
    pub fn issued_at(at: DateTime<Local>) -> Self {
        Self(at.format("%Y%m%d%H%M%S").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the rendered document.
    pub fn file_name(&self) -> String {
        format!("invoice_{}.pdf", self.0)
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One invoice line as typed on the command line: `item_id,quantity,price`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleSpec {
    pub item_id: ItemId,
    pub quantity: i64,
    pub price: Decimal,
}

impl FromStr for SaleSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [item_id, quantity, price] = parts.as_slice() else {
            return Err(DomainError::validation(format!(
                "sale '{s}' must be item_id,quantity,price"
            )));
        };

        let item_id: ItemId = item_id.parse()?;
        let quantity = quantity
            .parse::<i64>()
            .map_err(|e| DomainError::validation(format!("sale '{s}': quantity: {e}")))?;
        let price = parse_price(price)?;

        Ok(Self {
            item_id,
            quantity,
            price,
        })
    }
}

/// Lookup of display names for invoice lines.
pub trait ItemDirectory {
    fn item_name(&self, item_id: &ItemId) -> Option<&str>;
}

impl ItemDirectory for ItemMap {
    fn item_name(&self, item_id: &ItemId) -> Option<&str> {
        self.get(item_id).map(|item| item.name.as_str())
    }
}

impl<S: CatalogStore> ItemDirectory for Catalog<S> {
    fn item_name(&self, item_id: &ItemId) -> Option<&str> {
        self.get(item_id).map(|item| item.name.as_str())
    }
}

/// A batch of sales billed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    id: InvoiceId,
    issued_at: DateTime<Local>,
    sales: Vec<Transaction>,
}

impl Invoice {
    /// Build an invoice; every sale is dated at the issue time.
    pub fn new(issued_at: DateTime<Local>, specs: impl IntoIterator<Item = SaleSpec>) -> Self {
        let sales = specs
            .into_iter()
            .map(|spec| Transaction::sale(spec.item_id, spec.quantity, spec.price, issued_at))
            .collect();
        Self {
            id: InvoiceId::issued_at(issued_at),
            issued_at,
            sales,
        }
    }

    pub fn id(&self) -> &InvoiceId {
        &self.id
    }

    pub fn issued_at(&self) -> DateTime<Local> {
        self.issued_at
    }

    pub fn sales(&self) -> &[Transaction] {
        &self.sales
    }

    /// Sum of `quantity x price` over all lines.
    pub fn total(&self) -> DomainResult<Decimal> {
        self.sales.iter().try_fold(Decimal::ZERO, |total, sale| {
            total
                .checked_add(sale.details().amount()?)
                .ok_or_else(|| DomainError::validation("invoice total overflows"))
        })
    }

    /// Place every line of text on the page.
    ///
    /// Fails on the first sale whose item is not in `directory`. Lines are not
    /// paginated; a long invoice runs below the bottom edge.
    pub fn layout(&self, directory: &impl ItemDirectory) -> DomainResult<InvoiceLayout> {
        let mut lines = vec![
            TextLine::at(HEADER_Y_PT, format!("Invoice ID: {}", self.id)),
            TextLine::at(TIMESTAMP_Y_PT, self.issued_at.format(DATE_FORMAT).to_string()),
            TextLine::at(SEPARATOR_Y_PT, SEPARATOR.to_string()),
        ];

        let mut y = FIRST_LINE_Y_PT;
        for sale in &self.sales {
            let details = sale.details();
            let name = directory
                .item_name(&details.item_id)
                .ok_or_else(|| DomainError::item_not_found(details.item_id.as_str()))?;
            lines.push(TextLine::at(
                y,
                format!(
                    "Item: {name}, Quantity: {}, Price: {}, Date: {}",
                    details.quantity,
                    details.price,
                    details.date_string()
                ),
            ));
            y -= LINE_STEP_PT;
        }

        let total = self.total()?;
        lines.push(TextLine::at(
            y - LINE_STEP_PT,
            format!("Total Amount: ${}", format_amount(total)),
        ));

        Ok(InvoiceLayout { lines, total })
    }
}

/// Money to two decimal places, half away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// A run of text anchored at its baseline start, in points from the bottom-left.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

impl TextLine {
    fn at(y: f32, text: String) -> Self {
        Self {
            x: LEFT_MARGIN_PT,
            y,
            text,
        }
    }
}

/// Positioned content of a one-page invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLayout {
    pub lines: Vec<TextLine>,
    pub total: Decimal,
}
