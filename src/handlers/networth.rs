//! Net-worth handlers
//!
//! Endpoints for the summary view and for adding/deleting asset and debt
//! entries. Category names and delete indexes arrive as path parameters;
//! the index is parsed as a signed integer so negative values reach the
//! service and map to 404 rather than a routing error.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::app::NetWorthReport;
use crate::domain::entities::{NewEntry, RecordKind};
use crate::error::AppError;
use crate::AppState;

/// Acknowledgement body for mutations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(MessageResponse {
            message: message.into(),
        })
    }
}

/// GET /api/networth
///
/// Returns the full document plus summary totals.
pub async fn get_networth(State(state): State<AppState>) -> Result<Json<NetWorthReport>, AppError> {
    let report = state.networth_service.report().await?;
    Ok(Json(report))
}

/// POST /api/assets/:category
pub async fn add_asset(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(entry): Json<NewEntry>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .networth_service
        .add_entry(RecordKind::Asset, &category, entry)
        .await?;
    Ok(MessageResponse::new("Asset added successfully"))
}

/// POST /api/debts/:category
pub async fn add_debt(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(entry): Json<NewEntry>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .networth_service
        .add_entry(RecordKind::Debt, &category, entry)
        .await?;
    Ok(MessageResponse::new("Debt added successfully"))
}

/// DELETE /api/assets/:category/:index
pub async fn delete_asset(
    State(state): State<AppState>,
    Path((category, index)): Path<(String, i64)>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .networth_service
        .delete_entry(RecordKind::Asset, &category, index)
        .await?;
    Ok(MessageResponse::new("Asset deleted successfully"))
}

/// DELETE /api/debts/:category/:index
pub async fn delete_debt(
    State(state): State<AppState>,
    Path((category, index)): Path<(String, i64)>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .networth_service
        .delete_entry(RecordKind::Debt, &category, index)
        .await?;
    Ok(MessageResponse::new("Debt deleted successfully"))
}
