//! Unified error types for the net-worth API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `StoreError`: Document store errors
//! - `AppError`: Application layer errors (wraps the others for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::RecordKind;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid {kind} category: {name}")]
    InvalidCategory { kind: RecordKind, name: String },

    #[error("{kind} index not found: {index}")]
    IndexOutOfRange { kind: RecordKind, index: i64 },
}

/// Document store errors
///
/// Corrupted or unreadable backing files are not recovered from; they
/// surface as server errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Document serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(e @ DomainError::InvalidCategory { .. }) => {
                (StatusCode::BAD_REQUEST, "Invalid category", Some(e.to_string()))
            }
            AppError::Domain(e @ DomainError::IndexOutOfRange { .. }) => {
                (StatusCode::NOT_FOUND, "Not found", Some(e.to_string()))
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
