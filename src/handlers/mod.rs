//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod networth;

pub use networth::{add_asset, add_debt, delete_asset, delete_debt, get_networth};
