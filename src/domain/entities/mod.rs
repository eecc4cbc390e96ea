//! Domain entities
//!
//! Pure data model for the net-worth document: categories, entries, and the
//! document itself.

pub mod category;
pub mod document;
pub mod entry;

pub use category::{AssetCategory, Category, DebtCategory, RecordKind};
pub use document::Document;
pub use entry::{Entry, NewEntry};
