//! Net-worth service
//!
//! Use cases over the document store: summary reporting, adding entries,
//! and deleting entries. Every mutation is a full load -> mutate -> save
//! cycle; a write lock serializes those cycles so two concurrent mutations
//! cannot lose each other's update.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

use crate::domain::entities::{Category, Document, NewEntry, RecordKind};
use crate::domain::ports::DocumentStore;
use crate::error::{AppError, DomainError};

/// Summary totals over the whole document
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_assets: f64,
    pub total_debts: f64,
    pub net_worth: f64,
}

impl Summary {
    pub fn of(doc: &Document) -> Self {
        let total_assets = doc.total(RecordKind::Asset);
        let total_debts = doc.total(RecordKind::Debt);
        Summary {
            total_assets,
            total_debts,
            net_worth: total_assets - total_debts,
        }
    }
}

/// The full document plus its summary, as returned by GET /api/networth
#[derive(Debug, Clone, Serialize)]
pub struct NetWorthReport {
    pub data: Document,
    pub summary: Summary,
}

/// Service for reading and mutating the net-worth document
pub struct NetWorthService<S>
where
    S: DocumentStore,
{
    store: Arc<S>,
    // Held across every load -> mutate -> save cycle
    write_lock: Mutex<()>,
}

impl<S> NetWorthService<S>
where
    S: DocumentStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Load the document and compute summary totals
    pub async fn report(&self) -> Result<NetWorthReport, AppError> {
        let doc = self.store.load().await?;
        let summary = Summary::of(&doc);
        Ok(NetWorthReport { data: doc, summary })
    }

    /// Append an entry to the end of a category's list and persist
    ///
    /// Fails with `InvalidCategory` when the name is not one of the
    /// predefined categories for that kind; nothing is saved on failure.
    pub async fn add_entry(
        &self,
        kind: RecordKind,
        category: &str,
        entry: NewEntry,
    ) -> Result<(), AppError> {
        let category = Self::validate_category(kind, category)?;

        let _guard = self.write_lock.lock().await;
        let mut doc = self.store.load().await?;
        doc.entries_mut(category).push(entry.into());
        self.store.save(&doc).await?;

        tracing::info!("Added {} entry to {}", kind, category.key());
        Ok(())
    }

    /// Remove the entry at a zero-based position and persist
    ///
    /// Entries after the removed position shift down by one. Fails with
    /// `IndexOutOfRange` when the index is negative or past the end, leaving
    /// the document untouched.
    pub async fn delete_entry(
        &self,
        kind: RecordKind,
        category: &str,
        index: i64,
    ) -> Result<(), AppError> {
        let category = Self::validate_category(kind, category)?;

        let _guard = self.write_lock.lock().await;
        let mut doc = self.store.load().await?;
        let entries = doc.entries_mut(category);
        if index < 0 || index as usize >= entries.len() {
            return Err(DomainError::IndexOutOfRange { kind, index }.into());
        }
        entries.remove(index as usize);
        self.store.save(&doc).await?;

        tracing::info!("Deleted {} entry {} from {}", kind, index, category.key());
        Ok(())
    }

    fn validate_category(kind: RecordKind, name: &str) -> Result<Category, DomainError> {
        Category::parse(kind, name).ok_or_else(|| DomainError::InvalidCategory {
            kind,
            name: name.to_string(),
        })
    }
}
