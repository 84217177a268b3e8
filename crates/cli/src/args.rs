//! Command-line grammar.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use stockkeep_core::ItemId;
use stockkeep_inventory::parse_price;
use stockkeep_invoicing::SaleSpec;

/// Advanced Inventory Management System CLI
#[derive(Debug, Parser)]
#[command(name = "stockkeep")]
pub struct Cli {
    /// Catalog file
    #[arg(
        long,
        global = true,
        env = "STOCKKEEP_DATA_FILE",
        default_value = "items.json"
    )]
    pub data_file: PathBuf,

    /// Directory invoices are written to
    #[arg(
        long,
        global = true,
        env = "STOCKKEEP_INVOICE_DIR",
        default_value = "bills"
    )]
    pub invoice_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add a new item
    #[command(name = "add_item")]
    AddItem {
        /// Item ID
        item_id: ItemId,
        /// Item name
        name: String,
        /// Item category
        category: String,
        /// Item price
        #[arg(allow_negative_numbers = true, value_parser = parse_price)]
        price: Decimal,
        /// Item quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Update an existing item
    #[command(name = "update_item")]
    UpdateItem {
        /// Item ID
        item_id: ItemId,
        /// New item name
        #[arg(long)]
        name: Option<String>,
        /// New item category
        #[arg(long)]
        category: Option<String>,
        /// New item price
        #[arg(long, allow_negative_numbers = true, value_parser = parse_price)]
        price: Option<Decimal>,
        /// New item quantity
        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<i64>,
    },

    /// Remove an existing item
    #[command(name = "remove_item")]
    RemoveItem {
        /// Item ID
        item_id: ItemId,
    },

    /// View all items
    #[command(name = "view_items")]
    ViewItems,

    /// Record a sale transaction
    #[command(name = "record_sale")]
    RecordSale {
        /// Item ID
        item_id: ItemId,
        /// Quantity sold
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
        /// Sale price
        #[arg(allow_negative_numbers = true, value_parser = parse_price)]
        price: Decimal,
    },

    /// Record a return transaction
    #[command(name = "record_return")]
    RecordReturn {
        /// Item ID
        item_id: ItemId,
        /// Quantity returned
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
        /// Return price
        #[arg(allow_negative_numbers = true, value_parser = parse_price)]
        price: Decimal,
        /// Reason for return
        reason: String,
    },

    /// Generate an invoice for sales
    #[command(name = "generate_invoice")]
    GenerateInvoice {
        /// Sales data in the format item_id,quantity,price
        #[arg(required = true, num_args = 1..)]
        sales: Vec<SaleSpec>,
    },
}
