//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod file_store;

pub use file_store::FileDocumentStore;
