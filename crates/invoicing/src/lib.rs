//! Invoicing domain module.
//!
//! Builds invoices from ad-hoc sale lines and lays them out on a page. Writing
//! the document to disk is left to `stockkeep-infra`.

pub mod invoice;

pub use invoice::{
    FONT_SIZE_PT, Invoice, InvoiceId, InvoiceLayout, ItemDirectory, PAGE_HEIGHT_PT,
    PAGE_WIDTH_PT, SaleSpec, TextLine, format_amount,
};
