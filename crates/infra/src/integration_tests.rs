//! End-to-end tests over the JSON file store.
//!
//! Tests: Catalog → JsonFileStore → reload, Recorder → Catalog, Catalog → Renderer
//!
//! Verifies:
//! - A fresh process sees exactly what the previous one wrote
//! - Rejected transactions leave the file untouched
//! - Invoices read names from the current catalog

use std::fs;

use chrono::Local;
use rust_decimal::Decimal;

use stockkeep_core::{DomainError, ItemId};
use stockkeep_inventory::{Catalog, CatalogStore, Item, ItemPatch};
use stockkeep_invoicing::{Invoice, SaleSpec};

use crate::catalog_store::JsonFileStore;
use crate::invoice_pdf::InvoiceRenderer;
use crate::recorder::{RecordError, TransactionRecorder};
use crate::test_support::scratch_dir;

fn sku1() -> ItemId {
    ItemId::new("sku1")
}

#[test]
fn widget_scenario_survives_reloads() {
    let dir = scratch_dir("it-scenario");
    let store = JsonFileStore::new(dir.join("items.json"));

    {
        let mut catalog = Catalog::open(store.clone()).unwrap();
        catalog
            .add(Item::new("sku1", "Widget", "Tools", Decimal::new(999, 2), 50))
            .unwrap();
    }

    // Each block is a separate "process": it only knows what is on disk.
    {
        let catalog = Catalog::open(store.clone()).unwrap();
        assert_eq!(catalog.get(&sku1()).unwrap().quantity, 50);
    }

    {
        let mut catalog = Catalog::open(store.clone()).unwrap();
        let on_hand = TransactionRecorder::new(&mut catalog)
            .record_sale(&sku1(), 20, Decimal::new(999, 2))
            .unwrap();
        assert_eq!(on_hand, 30);
    }

    {
        let mut catalog = Catalog::open(store.clone()).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();
        let err = TransactionRecorder::new(&mut catalog)
            .record_sale(&sku1(), 40, Decimal::new(999, 2))
            .unwrap_err();
        assert!(matches!(
            err,
            RecordError::Domain(DomainError::InsufficientStock { .. })
        ));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    {
        let mut catalog = Catalog::open(store.clone()).unwrap();
        let on_hand = TransactionRecorder::new(&mut catalog)
            .record_return(&sku1(), 5, Decimal::new(999, 2), "defective")
            .unwrap();
        assert_eq!(on_hand, 35);
    }

    let catalog = Catalog::open(store.clone()).unwrap();
    assert_eq!(catalog.get(&sku1()).unwrap().quantity, 35);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn disk_matches_memory_after_each_mutation() {
    let dir = scratch_dir("it-writethrough");
    let store = JsonFileStore::new(dir.join("items.json"));
    let mut catalog = Catalog::open(store.clone()).unwrap();

    catalog
        .add(Item::new("a", "A", "c", Decimal::ONE, 1))
        .unwrap();
    assert_eq!(&store.load().unwrap(), catalog.items());

    catalog
        .add(Item::new("b", "B", "c", Decimal::TEN, 2))
        .unwrap();
    assert_eq!(&store.load().unwrap(), catalog.items());

    catalog
        .update(
            &ItemId::new("a"),
            ItemPatch {
                price: Some(Decimal::ZERO),
                ..ItemPatch::default()
            },
        )
        .unwrap();
    assert_eq!(&store.load().unwrap(), catalog.items());
    assert_eq!(store.load().unwrap()[&ItemId::new("a")].price, Decimal::ZERO);

    catalog.remove(&ItemId::new("b")).unwrap();
    assert_eq!(&store.load().unwrap(), catalog.items());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn invoice_uses_current_catalog_names() {
    let dir = scratch_dir("it-invoice");
    let store = JsonFileStore::new(dir.join("items.json"));
    let mut catalog = Catalog::open(store).unwrap();
    catalog
        .add(Item::new("A", "Anvil", "Tools", Decimal::TEN, 3))
        .unwrap();
    catalog
        .add(Item::new("B", "Bolt", "Hardware", Decimal::new(5, 0), 9))
        .unwrap();

    let specs: Vec<SaleSpec> = ["A,2,10.0", "B,1,5.0"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let invoice = Invoice::new(Local::now(), specs);

    let layout = invoice.layout(&catalog).unwrap();
    assert!(layout.lines[3].text.starts_with("Item: Anvil, Quantity: 2"));
    assert_eq!(layout.lines.last().unwrap().text, "Total Amount: $25.00");

    let renderer = InvoiceRenderer::new(dir.join("bills"));
    let path = renderer.render(&invoice, &catalog).unwrap();
    assert!(path.starts_with(dir.join("bills")));

    // Invoicing never changes stock.
    assert_eq!(catalog.get(&ItemId::new("A")).unwrap().quantity, 3);

    let _ = fs::remove_dir_all(&dir);
}
