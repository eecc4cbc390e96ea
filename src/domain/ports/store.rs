//! Document store port
//!
//! The single persistence seam of the system. There is no partial update:
//! every mutation loads the whole document and saves the whole document.

use async_trait::async_trait;

use crate::domain::entities::Document;
use crate::error::StoreError;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load the full document, or the default document if none was ever saved
    async fn load(&self) -> Result<Document, StoreError>;

    /// Serialize the full document, overwriting any previous content
    async fn save(&self, doc: &Document) -> Result<(), StoreError>;
}
