//! Command execution.
//!
//! Every subcommand runs against an already-opened catalog and reports to a
//! caller-supplied writer. Business rejections are printed and reported as
//! [`Outcome::Rejected`]; storage and rendering failures are returned as
//! errors.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;

use stockkeep_core::DomainError;
use stockkeep_infra::{InvoiceRenderer, RecordError, RenderError, TransactionRecorder};
use stockkeep_inventory::{Catalog, CatalogStore, Item, ItemPatch};
use stockkeep_invoicing::Invoice;

use crate::args::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Unknown item, insufficient stock or an out-of-range amount. Nothing was
    /// changed.
    Rejected,
}

impl Outcome {
    pub fn exit_status(self) -> u8 {
        match self {
            Outcome::Completed => 0,
            Outcome::Rejected => 1,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

pub fn execute<S, W>(
    command: Command,
    catalog: &mut Catalog<S>,
    renderer: &InvoiceRenderer,
    out: &mut W,
) -> anyhow::Result<Outcome>
where
    S: CatalogStore,
    W: Write,
{
    match command {
        Command::AddItem {
            item_id,
            name,
            category,
            price,
            quantity,
        } => {
            catalog
                .add(Item::new(item_id, name, category, price, quantity))
                .context("failed to save catalog")?;
            writeln!(out, "Item added successfully!")?;
        }

        Command::UpdateItem {
            item_id,
            name,
            category,
            price,
            quantity,
        } => {
            let patch = ItemPatch {
                name,
                category,
                price,
                quantity,
            };
            // An unknown id is logged by the catalog and still reported as done.
            catalog
                .update(&item_id, patch)
                .context("failed to save catalog")?;
            writeln!(out, "Item updated successfully!")?;
        }

        Command::RemoveItem { item_id } => {
            catalog
                .remove(&item_id)
                .context("failed to save catalog")?;
            writeln!(out, "Item removed successfully!")?;
        }

        Command::ViewItems => {
            for item in catalog.list() {
                writeln!(out, "{item}")?;
            }
        }

        Command::RecordSale {
            item_id,
            quantity,
            price,
        } => {
            let recorded = TransactionRecorder::new(catalog).record_sale(&item_id, quantity, price);
            match recorded {
                Ok(_) => writeln!(out, "Sale recorded successfully!")?,
                Err(RecordError::Domain(err)) => return reject(out, err),
                Err(RecordError::Store(err)) => {
                    return Err(anyhow::Error::new(err).context("failed to record sale"));
                }
            }
        }

        Command::RecordReturn {
            item_id,
            quantity,
            price,
            reason,
        } => {
            let recorded =
                TransactionRecorder::new(catalog).record_return(&item_id, quantity, price, &reason);
            match recorded {
                Ok(_) => writeln!(out, "Return recorded successfully!")?,
                Err(RecordError::Domain(err)) => return reject(out, err),
                Err(RecordError::Store(err)) => {
                    return Err(anyhow::Error::new(err).context("failed to record return"));
                }
            }
        }

        Command::GenerateInvoice { sales } => {
            let invoice = Invoice::new(Local::now(), sales);
            match renderer.render(&invoice, &*catalog) {
                Ok(_) => writeln!(
                    out,
                    "Invoice generated successfully with ID: {}",
                    invoice.id()
                )?,
                Err(RenderError::Domain(err)) => return reject(out, err),
                Err(err) => {
                    return Err(anyhow::Error::new(err).context("failed to generate invoice"));
                }
            }
        }
    }

    Ok(Outcome::Completed)
}

fn reject<W: Write>(out: &mut W, err: DomainError) -> anyhow::Result<Outcome> {
    tracing::warn!(error = %err, "command rejected");
    writeln!(out, "Error: {err}")?;
    Ok(Outcome::Rejected)
}
