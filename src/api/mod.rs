//! HTTP/JSON API Layer
//!
//! REST endpoints for the scavenger-hunt companion app. The phone client
//! supplies its device id explicitly on every request; the server keeps no
//! session state.
//!
//! ## Architecture
//! ```text
//! Phone SPA (QR scanner, collection, trading UI)
//!       ↓ HTTP, JSON body
//! Axum Router (port 5000)
//!       ↓
//! Resource Handlers (players, cards, clues, trades, admin)
//!       ↓
//! PostgresStore (PostgreSQL)
//! ```

pub mod admin;
pub mod cards;
pub mod clues;
pub mod error;
pub mod players;
pub mod trades;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::metrics::ServerMetrics;
use crate::storage::postgres::PostgresStore;

/// Shared state available to all API handlers
#[derive(Clone)]
pub struct ApiState {
    pub pg: Arc<PostgresStore>,
    /// Server-wide metrics (lock-free atomics)
    pub metrics: Arc<ServerMetrics>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct ApiRootResponse {
    message: &'static str,
}

async fn api_root() -> Json<ApiRootResponse> {
    Json(ApiRootResponse {
        message: "Scavenger Hunt API is running!",
    })
}

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    message: &'static str,
}

/// GET /api/status — database connectivity probe
async fn database_status(State(state): State<ApiState>) -> (StatusCode, Json<StatusResponse>) {
    match state.pg.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "ok",
                message: "Database connection successful.",
            }),
        ),
        Err(e) => {
            error!("Database connection check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse {
                    status: "error",
                    message: "Database connection failed.",
                }),
            )
        }
    }
}

/// Build the full API router with all resource endpoints
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(crate::metrics::prometheus_handler))
        .route("/metrics/json", get(crate::metrics::json_metrics_handler))
        .route("/api", get(api_root))
        .route("/api/status", get(database_status))
        .merge(players::routes())
        .merge(cards::routes())
        .merge(clues::routes())
        .merge(trades::routes())
        .merge(admin::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::metrics::metrics_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP API server on the given port
pub async fn start_api_server(pg: Arc<PostgresStore>, port: u16) -> Result<(), std::io::Error> {
    let metrics = ServerMetrics::new();
    let state = ApiState { pg, metrics };
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received, draining connections");
}
