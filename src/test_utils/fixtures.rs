//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Document, Entry, NewEntry};

/// Create a stored entry
pub fn entry(entry_type: &str, value: f64) -> Entry {
    Entry {
        entry_type: entry_type.to_string(),
        value,
        description: String::new(),
    }
}

/// Create a request payload for adding an entry
pub fn entry_payload(entry_type: &str, value: f64) -> NewEntry {
    NewEntry {
        entry_type: entry_type.to_string(),
        value,
        description: String::new(),
    }
}

/// A document with a few entries spread across categories
///
/// Totals: assets 251_500, debts 120_800, net worth 130_700.
pub fn test_document() -> Document {
    let mut doc = Document::default();
    doc.assets
        .get_mut("real_estate")
        .unwrap()
        .push(entry("condo", 240_000.0));
    doc.assets
        .get_mut("stocks")
        .unwrap()
        .push(entry("index fund", 10_000.0));
    doc.assets.get_mut("cash").unwrap().push(entry("checking", 1_500.0));
    doc.debts
        .get_mut("credit_card")
        .unwrap()
        .push(entry("visa", 800.0));
    doc.debts
        .get_mut("mortgage")
        .unwrap()
        .push(entry("condo loan", 120_000.0));
    doc
}
