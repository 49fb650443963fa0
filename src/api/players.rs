//! Players — Registration, profile, collection, search, card award
//!
//! Endpoints:
//! - POST /api/players
//! - GET  /api/players/search
//! - GET  /api/players/{deviceID}
//! - PUT  /api/players/{deviceID}
//! - GET  /api/players/{deviceID}/cards
//! - POST /api/players/{deviceID}/award-random-card

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::ApiState;
use crate::storage::postgres::{PlayerCardRow, PlayerRow};

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/api/players", post(create_player))
        .route("/api/players/search", get(search_players))
        .route(
            "/api/players/{device_id}",
            get(get_player_profile).put(update_player),
        )
        .route("/api/players/{device_id}/cards", get(get_player_cards))
        .route(
            "/api/players/{device_id}/award-random-card",
            post(award_random_card),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
pub struct CreatePlayerRequest {
    #[serde(rename = "deviceID")]
    pub device_id: Option<String>,
    #[serde(rename = "playerName")]
    pub player_name: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePlayerRequest {
    #[serde(rename = "playerName")]
    pub player_name: Option<String>,
}

#[derive(Serialize)]
pub struct PlayerResponse {
    pub id: i64,
    pub device_id: String,
    pub player_name: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<PlayerRow> for PlayerResponse {
    fn from(row: PlayerRow) -> Self {
        Self {
            id: row.id,
            device_id: row.device_id,
            player_name: row.player_name,
            created_at: row.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub term: Option<String>,
    #[serde(rename = "excludeDeviceID")]
    pub exclude_device_id: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub players: Vec<PlayerSearchEntry>,
}

#[derive(Serialize)]
pub struct PlayerSearchEntry {
    pub device_id: String,
    pub player_name: String,
}

#[derive(Serialize)]
pub struct CollectionResponse {
    pub cards: Vec<OwnedCard>,
}

#[derive(Serialize)]
pub struct OwnedCard {
    pub instance_id: i64,
    pub card_id: i64,
    pub name: String,
    pub rarity: String,
    pub description: String,
    pub image_path: String,
}

impl From<PlayerCardRow> for OwnedCard {
    fn from(row: PlayerCardRow) -> Self {
        Self {
            instance_id: row.instance_id,
            card_id: row.card_id,
            name: row.name,
            rarity: row.rarity,
            description: row.description,
            image_path: row.image_path,
        }
    }
}

#[derive(Serialize)]
pub struct AwardedCardResponse {
    pub instance_id: i64,
    pub player_id: i64,
    pub card_id: i64,
    pub name: String,
    pub rarity: String,
    pub description: String,
    pub image_path: String,
}

// ============================================================================
// Handlers
// ============================================================================

async fn create_player(
    State(state): State<ApiState>,
    Json(req): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), ApiError> {
    let device_id = req.device_id.unwrap_or_default();
    let player_name = req.player_name.unwrap_or_default();
    if device_id.is_empty() || player_name.is_empty() {
        return Err(ApiError::bad_request(
            "deviceID and playerName are required.",
        ));
    }

    let row = state.pg.create_player(&device_id, &player_name).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

async fn get_player_profile(
    State(state): State<ApiState>,
    Path(device_id): Path<String>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let row = state
        .pg
        .get_player_by_device(&device_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Player not found."))?;

    Ok(Json(row.into()))
}

async fn update_player(
    State(state): State<ApiState>,
    Path(device_id): Path<String>,
    Json(req): Json<UpdatePlayerRequest>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let player_name = req.player_name.unwrap_or_default();
    if player_name.is_empty() {
        return Err(ApiError::bad_request("playerName is required."));
    }

    let row = state
        .pg
        .rename_player(&device_id, &player_name)
        .await?
        .ok_or_else(|| ApiError::not_found("Player not found."))?;

    Ok(Json(row.into()))
}

async fn search_players(
    State(state): State<ApiState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = query.term.unwrap_or_default();
    if term.trim().len() < 2 {
        return Err(ApiError::bad_request(
            "A search term of at least 2 characters is required.",
        ));
    }

    let exclude = query.exclude_device_id.unwrap_or_default();
    let rows = state.pg.search_players(&term, &exclude).await?;
    let players = rows
        .into_iter()
        .map(|r| PlayerSearchEntry {
            device_id: r.device_id,
            player_name: r.player_name,
        })
        .collect();

    Ok(Json(SearchResponse { players }))
}

async fn get_player_cards(
    State(state): State<ApiState>,
    Path(device_id): Path<String>,
) -> Result<Json<CollectionResponse>, ApiError> {
    let rows = state.pg.get_player_cards(&device_id).await?;
    let cards = rows.into_iter().map(OwnedCard::from).collect();

    Ok(Json(CollectionResponse { cards }))
}

async fn award_random_card(
    State(state): State<ApiState>,
    Path(device_id): Path<String>,
) -> Result<(StatusCode, Json<AwardedCardResponse>), ApiError> {
    let awarded = state.pg.award_random_card(&device_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(AwardedCardResponse {
            instance_id: awarded.instance_id,
            player_id: awarded.player_id,
            card_id: awarded.card_id,
            name: awarded.name,
            rarity: awarded.rarity,
            description: awarded.description,
            image_path: awarded.image_path,
        }),
    ))
}
