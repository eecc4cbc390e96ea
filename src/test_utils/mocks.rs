//! Mock implementations of port traits
//!
//! In-memory store that can be pre-populated and inspected by tests.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::Document;
use crate::domain::ports::DocumentStore;
use crate::error::StoreError;

// ============================================================================
// In-Memory Document Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryDocumentStore {
    doc: RwLock<Option<Document>>,
    saves: RwLock<u32>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a document, as if a file already existed
    pub fn with_document(doc: Document) -> Self {
        Self {
            doc: RwLock::new(Some(doc)),
            saves: RwLock::new(0),
        }
    }

    /// Current persisted document (default if nothing was ever saved)
    pub fn snapshot(&self) -> Document {
        self.doc
            .read()
            .unwrap()
            .clone()
            .unwrap_or_default()
    }

    /// How many times `save` was called
    pub fn save_count(&self) -> u32 {
        *self.saves.read().unwrap()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn load(&self) -> Result<Document, StoreError> {
        Ok(self.snapshot())
    }

    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        *self.doc.write().unwrap() = Some(doc.clone());
        *self.saves.write().unwrap() += 1;
        Ok(())
    }
}
