//! Net-Worth API Server
//!
//! A minimal personal net-worth tracker: a JSON API over a single document
//! file holding categorized assets and debts.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::FileDocumentStore;
use app::NetWorthService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub networth_service: Arc<NetWorthService<FileDocumentStore>>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes and middleware
fn app(state: AppState) -> Router {
    // Single fixed development origin; wildcards are invalid once
    // credentials are allowed, so methods and headers mirror the request.
    let origin = state
        .config
        .allowed_origin
        .parse::<HeaderValue>()
        .expect("ALLOWED_ORIGIN must be a valid header value");
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        // Health check
        .route("/health", get(health))
        // Net-worth summary
        .route("/api/networth", get(handlers::get_networth))
        // Entry management
        .route("/api/assets/:category", post(handlers::add_asset))
        .route("/api/debts/:category", post(handlers::add_debt))
        .route(
            "/api/assets/:category/:index",
            delete(handlers::delete_asset),
        )
        .route("/api/debts/:category/:index", delete(handlers::delete_debt))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,networth_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Net-Worth API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Document file: {:?}", config.data_file);

    // Wire adapters and services
    let store = Arc::new(FileDocumentStore::new(config.data_file.clone()));
    let networth_service = Arc::new(NetWorthService::new(store));

    let state = AppState {
        networth_service,
        config: config.clone(),
    };

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app(state)).await.unwrap();
}
