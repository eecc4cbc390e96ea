//! Entry domain entity
//!
//! One asset or debt line item. Entries have no identity beyond their
//! position in a category's list.

use serde::{Deserialize, Serialize};

/// A single line item in a category
///
/// `value` defaults to zero on load so hand-edited documents that drop the
/// field still sum cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "type")]
    pub entry_type: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub description: String,
}

/// Request payload for adding an entry
///
/// `type` and `value` are required; `description` defaults to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEntry {
    #[serde(rename = "type")]
    pub entry_type: String,
    pub value: f64,
    #[serde(default)]
    pub description: String,
}

impl From<NewEntry> for Entry {
    fn from(new: NewEntry) -> Self {
        Entry {
            entry_type: new.entry_type,
            value: new.value,
            description: new.description,
        }
    }
}
