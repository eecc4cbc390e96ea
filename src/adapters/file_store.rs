//! File-backed document store
//!
//! Persists the document as a single TOML file. The whole file is read on
//! every load and rewritten on every save; a missing file reads as the
//! default document and only comes into existence on the first save.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::entities::Document;
use crate::domain::ports::DocumentStore;
use crate::error::StoreError;

pub struct FileDocumentStore {
    path: PathBuf,
}

impl FileDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn load(&self) -> Result<Document, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(toml::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Document file {:?} absent, using default", self.path);
                Ok(Document::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let text = toml::to_string_pretty(doc)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        // Plain overwrite, matching the observable single-document semantics.
        tokio::fs::write(&self.path, text).await?;
        Ok(())
    }
}
