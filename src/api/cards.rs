//! Cards — The master card catalog
//!
//! Endpoints:
//! - GET /api/cards

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::error::ApiError;
use super::ApiState;

pub fn routes() -> Router<ApiState> {
    Router::new().route("/api/cards", get(get_card_definitions))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct CatalogResponse {
    pub cards: Vec<CardDefinition>,
}

#[derive(Serialize)]
pub struct CardDefinition {
    pub card_id: i64,
    pub name: String,
    pub rarity: String,
    pub description: String,
    pub image_path: String,
}

// ============================================================================
// Handlers
// ============================================================================

async fn get_card_definitions(
    State(state): State<ApiState>,
) -> Result<Json<CatalogResponse>, ApiError> {
    let rows = state.pg.get_card_definitions().await?;
    let cards = rows
        .into_iter()
        .map(|r| CardDefinition {
            card_id: r.card_id,
            name: r.name,
            rarity: r.rarity,
            description: r.description,
            image_path: r.image_path,
        })
        .collect();

    Ok(Json(CatalogResponse { cards }))
}
