//! Application layer
//!
//! Use cases over the domain entities and ports.

pub mod networth_service;

pub use networth_service::{NetWorthReport, NetWorthService, Summary};
