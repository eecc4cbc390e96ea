//! Document domain entity
//!
//! The full net-worth record: two mappings from category name to an ordered
//! list of entries. A document is loaded fresh from the store at the start
//! of every request and discarded at the end.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AssetCategory, Category, DebtCategory, Entry, RecordKind};

/// The persisted net-worth document
///
/// Keys are the category names from [`AssetCategory`] / [`DebtCategory`].
/// BTreeMap keeps the serialized form stable across saves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub assets: BTreeMap<String, Vec<Entry>>,
    pub debts: BTreeMap<String, Vec<Entry>>,
}

impl Default for Document {
    /// The initial document: every predefined category present and empty
    fn default() -> Self {
        Document {
            assets: AssetCategory::ALL
                .iter()
                .map(|c| (c.key().to_string(), Vec::new()))
                .collect(),
            debts: DebtCategory::ALL
                .iter()
                .map(|c| (c.key().to_string(), Vec::new()))
                .collect(),
        }
    }
}

impl Document {
    pub fn lists(&self, kind: RecordKind) -> &BTreeMap<String, Vec<Entry>> {
        match kind {
            RecordKind::Asset => &self.assets,
            RecordKind::Debt => &self.debts,
        }
    }

    /// The entry list for a validated category
    ///
    /// Re-inserts the key if a hand-edited file dropped it, preserving the
    /// invariant that every predefined category maps to a list.
    pub fn entries_mut(&mut self, category: Category) -> &mut Vec<Entry> {
        let lists = match category.kind() {
            RecordKind::Asset => &mut self.assets,
            RecordKind::Debt => &mut self.debts,
        };
        lists.entry(category.key().to_string()).or_default()
    }

    /// Sum of `value` over every entry of every category of the given kind
    pub fn total(&self, kind: RecordKind) -> f64 {
        self.lists(kind)
            .values()
            .flatten()
            .map(|entry| entry.value)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(entry_type: &str, value: f64) -> Entry {
        Entry {
            entry_type: entry_type.to_string(),
            value,
            description: String::new(),
        }
    }

    #[test]
    fn default_document_has_all_categories_empty() {
        let doc = Document::default();
        assert_eq!(doc.assets.len(), 3);
        assert_eq!(doc.debts.len(), 3);
        for key in ["real_estate", "stocks", "cash"] {
            assert_eq!(doc.assets[key], Vec::<Entry>::new());
        }
        for key in ["credit_card", "student_loan", "mortgage"] {
            assert_eq!(doc.debts[key], Vec::<Entry>::new());
        }
    }

    #[test]
    fn totals_sum_across_categories() {
        let mut doc = Document::default();
        doc.assets.get_mut("cash").unwrap().push(entry("checking", 500.0));
        doc.assets
            .get_mut("stocks")
            .unwrap()
            .push(entry("index fund", 1500.0));
        doc.debts
            .get_mut("credit_card")
            .unwrap()
            .push(entry("visa", 300.0));

        assert_eq!(doc.total(RecordKind::Asset), 2000.0);
        assert_eq!(doc.total(RecordKind::Debt), 300.0);
    }

    #[test]
    fn entries_mut_restores_missing_category() {
        let mut doc = Document::default();
        doc.assets.remove("cash");

        let cash = Category::parse(RecordKind::Asset, "cash").unwrap();
        doc.entries_mut(cash).push(entry("checking", 100.0));

        assert_eq!(doc.assets["cash"].len(), 1);
    }

    #[test]
    fn document_round_trips_through_toml() {
        let mut doc = Document::default();
        doc.assets.get_mut("cash").unwrap().push(Entry {
            entry_type: "checking".to_string(),
            value: 500.0,
            description: "main account".to_string(),
        });

        let text = toml::to_string_pretty(&doc).unwrap();
        let loaded: Document = toml::from_str(&text).unwrap();
        assert_eq!(loaded, doc);
    }
}
