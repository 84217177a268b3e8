use std::path::PathBuf;

use stockkeep_infra::{InvoiceRenderer, JsonFileStore};
use stockkeep_inventory::{Catalog, StoreError};

use crate::args::Cli;

pub const DEFAULT_DATA_FILE: &str = "items.json";
pub const DEFAULT_INVOICE_DIR: &str = "bills";

/// Where the catalog lives and where invoices go.
///
/// Relative paths resolve against the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub invoice_dir: PathBuf,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data_file: cli.data_file.clone(),
            invoice_dir: cli.invoice_dir.clone(),
        }
    }

    pub fn open_catalog(&self) -> Result<Catalog<JsonFileStore>, StoreError> {
        Catalog::open(JsonFileStore::new(&self.data_file))
    }

    pub fn renderer(&self) -> InvoiceRenderer {
        InvoiceRenderer::new(&self.invoice_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            invoice_dir: PathBuf::from(DEFAULT_INVOICE_DIR),
        }
    }
}
