//! Admin — Console login, player roster, game settings
//!
//! Endpoints:
//! - POST /api/admin/login
//! - GET  /api/admin/players
//! - GET  /api/admin/settings/required-cards
//! - PUT  /api/admin/settings/required-cards
//!
//! Login verifies a bcrypt hash; both unknown usernames and wrong passwords
//! answer the same 401 so the response does not reveal which part failed.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::error;

use super::error::ApiError;
use super::ApiState;

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/api/admin/login", post(admin_login))
        .route("/api/admin/players", get(get_players_overview))
        .route(
            "/api/admin/settings/required-cards",
            get(get_required_cards).put(update_required_cards),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
pub struct AdminLoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct AdminLoginResponse {
    pub message: String,
    #[serde(rename = "adminId")]
    pub admin_id: i64,
}

#[derive(Serialize)]
pub struct PlayerOverview {
    pub id: i64,
    pub device_id: String,
    pub player_name: String,
    #[serde(rename = "uniqueCards")]
    pub unique_cards: Vec<UniqueCard>,
}

#[derive(Serialize)]
pub struct UniqueCard {
    pub card_id: i64,
    pub name: String,
    pub rarity: String,
}

#[derive(Serialize)]
pub struct RequiredCardsResponse {
    pub required_cards: i64,
}

#[derive(Deserialize)]
pub struct UpdateRequiredCardsRequest {
    pub value: Option<serde_json::Value>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Handlers
// ============================================================================

async fn admin_login(
    State(state): State<ApiState>,
    Json(req): Json<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, ApiError> {
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let admin = state
        .pg
        .get_admin_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    // A malformed stored hash counts as a failed match
    let valid = bcrypt::verify(&password, &admin.password_hash).unwrap_or(false);
    if !valid {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    Ok(Json(AdminLoginResponse {
        message: "Admin login successful".to_string(),
        admin_id: admin.id,
    }))
}

async fn get_players_overview(
    State(state): State<ApiState>,
) -> Result<Json<Vec<PlayerOverview>>, ApiError> {
    let players = state.pg.list_players_overview().await?;
    let cards = state.pg.list_unique_cards_by_player().await?;

    let mut by_player: HashMap<i64, Vec<UniqueCard>> = HashMap::new();
    for card in cards {
        by_player.entry(card.player_id).or_default().push(UniqueCard {
            card_id: card.card_id,
            name: card.name,
            rarity: card.rarity,
        });
    }

    let overview = players
        .into_iter()
        .map(|p| PlayerOverview {
            id: p.id,
            device_id: p.device_id,
            player_name: p.player_name,
            unique_cards: by_player.remove(&p.id).unwrap_or_default(),
        })
        .collect();

    Ok(Json(overview))
}

async fn get_required_cards(
    State(state): State<ApiState>,
) -> Result<Json<RequiredCardsResponse>, ApiError> {
    let value = state
        .pg
        .get_setting("required_cards")
        .await?
        .ok_or_else(|| ApiError::not_found("Setting not found"))?;

    let required_cards: i64 = value.parse().map_err(|_| {
        error!("Setting required_cards holds a non-integer value: {}", value);
        ApiError::internal()
    })?;

    Ok(Json(RequiredCardsResponse { required_cards }))
}

async fn update_required_cards(
    State(state): State<ApiState>,
    Json(req): Json<UpdateRequiredCardsRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    // Strict type check: only a non-negative JSON integer is accepted
    let value = match req.value.as_ref().and_then(|v| v.as_i64()) {
        Some(v) if v >= 0 => v,
        _ => return Err(ApiError::bad_request("Invalid value for required_cards")),
    };

    state
        .pg
        .put_setting("required_cards", &value.to_string())
        .await?;

    Ok(Json(MessageResponse {
        message: "required_cards updated successfully".to_string(),
    }))
}
