//! Test utilities
//!
//! Shared helpers for unit and integration tests.
//!
//! The store mock is written by hand rather than generated: the port is a
//! single small trait, and a hand-rolled in-memory implementation doubles
//! as a behavior probe (save counting, snapshots).

pub mod fixtures;
pub mod mocks;

pub use fixtures::{entry, entry_payload, test_document};
pub use mocks::InMemoryDocumentStore;
