//! Infrastructure layer: catalog storage, transaction recording, invoice output.

pub mod catalog_store;
pub mod invoice_pdf;
pub mod recorder;

pub use catalog_store::{InMemoryCatalogStore, JsonFileStore};
pub use invoice_pdf::{InvoiceRenderer, RenderError};
pub use recorder::{RecordError, TransactionRecorder};

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod test_support;
