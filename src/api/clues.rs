//! Clues — QR scan recording and admin clue management
//!
//! Endpoints:
//! - POST   /api/clues/scan
//! - GET    /api/clues
//! - POST   /api/clues
//! - PUT    /api/clues/{id}
//! - DELETE /api/clues/{id}
//!
//! Clue ids are admin-chosen so they can match pre-printed QR codes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::ApiState;

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/api/clues/scan", post(scan_clue))
        .route("/api/clues", get(list_clues).post(create_clue))
        .route("/api/clues/{id}", put(update_clue).delete(delete_clue))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
pub struct ScanRequest {
    #[serde(rename = "deviceID")]
    pub device_id: Option<String>,
    #[serde(rename = "clueId")]
    pub clue_id: Option<i64>,
}

#[derive(Serialize)]
pub struct ScanResponse {
    pub message: String,
    #[serde(rename = "alreadyScanned")]
    pub already_scanned: bool,
}

#[derive(Deserialize)]
pub struct CreateClueRequest {
    pub id: Option<i64>,
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateClueRequest {
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct ClueResponse {
    pub id: i64,
    pub message: String,
}

// ============================================================================
// Handlers
// ============================================================================

async fn scan_clue(
    State(state): State<ApiState>,
    Json(req): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, ApiError> {
    let (device_id, clue_id) = match (req.device_id, req.clue_id) {
        (Some(d), Some(c)) if !d.is_empty() => (d, c),
        _ => return Err(ApiError::bad_request("Device ID and Clue ID are required.")),
    };

    let outcome = state.pg.scan_clue(&device_id, clue_id).await?;
    Ok(Json(ScanResponse {
        message: outcome.message,
        already_scanned: outcome.already_scanned,
    }))
}

async fn list_clues(State(state): State<ApiState>) -> Result<Json<Vec<ClueResponse>>, ApiError> {
    let rows = state.pg.list_clues().await?;
    let clues = rows
        .into_iter()
        .map(|r| ClueResponse {
            id: r.id,
            message: r.message,
        })
        .collect();

    Ok(Json(clues))
}

async fn create_clue(
    State(state): State<ApiState>,
    Json(req): Json<CreateClueRequest>,
) -> Result<(StatusCode, Json<ClueResponse>), ApiError> {
    let (id, message) = match (req.id, req.message) {
        (Some(i), Some(m)) if !m.is_empty() => (i, m),
        _ => return Err(ApiError::bad_request("Clue ID and message are required.")),
    };

    let row = state.pg.create_clue(id, &message).await?;
    Ok((
        StatusCode::CREATED,
        Json(ClueResponse {
            id: row.id,
            message: row.message,
        }),
    ))
}

async fn update_clue(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateClueRequest>,
) -> Result<Json<ClueResponse>, ApiError> {
    let message = req.message.unwrap_or_default();
    if message.is_empty() {
        return Err(ApiError::bad_request("Clue message is required."));
    }

    let row = state
        .pg
        .update_clue(id, &message)
        .await?
        .ok_or_else(|| ApiError::not_found("Clue not found."))?;

    Ok(Json(ClueResponse {
        id: row.id,
        message: row.message,
    }))
}

async fn delete_clue(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let deleted = state.pg.delete_clue(id).await?;
    if !deleted {
        return Err(ApiError::not_found("Clue not found."));
    }

    Ok(StatusCode::NO_CONTENT)
}
