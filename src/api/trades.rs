//! Trades — Card trading between players
//!
//! Endpoints:
//! - POST /api/trades
//! - GET  /api/trades/{deviceID}           (pending trades, either party)
//! - PUT  /api/trades/{tradeId}            (accept / reject / cancel)
//! - GET  /api/trades/{deviceID}/history   (resolved trades)
//!
//! A trade offers one owned card instance and may optionally request a
//! specific card definition in return; the receiver picks the actual card
//! to give when accepting.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::ApiState;
use crate::storage::postgres::{PendingTradeRow, TradeAction, TradeHistoryRow};

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/api/trades", post(create_trade))
        .route(
            "/api/trades/{id}",
            get(get_pending_trades).put(respond_to_trade),
        )
        .route("/api/trades/{id}/history", get(get_trade_history))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
pub struct CreateTradeRequest {
    #[serde(rename = "offeringPlayerDeviceID")]
    pub offering_player_device_id: Option<String>,
    #[serde(rename = "receivingPlayerDeviceID")]
    pub receiving_player_device_id: Option<String>,
    #[serde(rename = "offeredCardInstanceID")]
    pub offered_card_instance_id: Option<i64>,
    #[serde(rename = "requestedCardID")]
    pub requested_card_id: Option<i64>,
}

#[derive(Serialize)]
pub struct CreateTradeResponse {
    pub message: String,
    #[serde(rename = "tradeId")]
    pub trade_id: i64,
}

#[derive(Deserialize)]
pub struct RespondTradeRequest {
    #[serde(rename = "deviceID")]
    pub device_id: Option<String>,
    pub action: Option<String>,
    #[serde(rename = "cardToGiveInstanceID")]
    pub card_to_give_instance_id: Option<i64>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct PendingTradesResponse {
    pub trades: Vec<PendingTrade>,
}

#[derive(Serialize)]
pub struct PendingTrade {
    pub trade_id: i64,
    pub status: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub offering_player_name: String,
    pub offering_player_device_id: String,
    pub receiving_player_name: String,
    pub receiving_player_device_id: String,
    pub offered_card_name: String,
    pub offered_card_rarity: String,
    pub offered_card_image_path: String,
    pub requested_card_name: Option<String>,
    pub requested_card_rarity: Option<String>,
}

impl From<PendingTradeRow> for PendingTrade {
    fn from(row: PendingTradeRow) -> Self {
        Self {
            trade_id: row.trade_id,
            status: row.status,
            created_at: row.created_at,
            offering_player_name: row.offering_player_name,
            offering_player_device_id: row.offering_player_device_id,
            receiving_player_name: row.receiving_player_name,
            receiving_player_device_id: row.receiving_player_device_id,
            offered_card_name: row.offered_card_name,
            offered_card_rarity: row.offered_card_rarity,
            offered_card_image_path: row.offered_card_image_path,
            requested_card_name: row.requested_card_name,
            requested_card_rarity: row.requested_card_rarity,
        }
    }
}

#[derive(Serialize)]
pub struct TradeHistoryResponse {
    pub history: Vec<HistoryEntry>,
}

#[derive(Serialize)]
pub struct HistoryEntry {
    pub trade_id: i64,
    pub status: String,
    pub other_player_name: String,
    pub my_role: String,
    pub offered_card_name: String,
    pub offered_card_image_path: String,
    pub accepted_card_name: Option<String>,
    pub accepted_card_image_path: Option<String>,
}

impl From<TradeHistoryRow> for HistoryEntry {
    fn from(row: TradeHistoryRow) -> Self {
        Self {
            trade_id: row.trade_id,
            status: row.status,
            other_player_name: row.other_player_name,
            my_role: row.my_role,
            offered_card_name: row.offered_card_name,
            offered_card_image_path: row.offered_card_image_path,
            accepted_card_name: row.accepted_card_name,
            accepted_card_image_path: row.accepted_card_image_path,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn create_trade(
    State(state): State<ApiState>,
    Json(req): Json<CreateTradeRequest>,
) -> Result<(StatusCode, Json<CreateTradeResponse>), ApiError> {
    let (offering, receiving, offered_instance) = match (
        req.offering_player_device_id,
        req.receiving_player_device_id,
        req.offered_card_instance_id,
    ) {
        (Some(o), Some(r), Some(c)) if !o.is_empty() && !r.is_empty() => (o, r, c),
        _ => {
            return Err(ApiError::bad_request(
                "Missing required fields for creating a trade.",
            ))
        }
    };

    let trade_id = state
        .pg
        .create_trade(&offering, &receiving, offered_instance, req.requested_card_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTradeResponse {
            message: "Trade offer created successfully!".to_string(),
            trade_id,
        }),
    ))
}

async fn get_pending_trades(
    State(state): State<ApiState>,
    Path(device_id): Path<String>,
) -> Result<Json<PendingTradesResponse>, ApiError> {
    let rows = state.pg.get_pending_trades(&device_id).await?;
    let trades = rows.into_iter().map(PendingTrade::from).collect();

    Ok(Json(PendingTradesResponse { trades }))
}

async fn get_trade_history(
    State(state): State<ApiState>,
    Path(device_id): Path<String>,
) -> Result<Json<TradeHistoryResponse>, ApiError> {
    let rows = state.pg.get_trade_history(&device_id).await?;
    let history = rows.into_iter().map(HistoryEntry::from).collect();

    Ok(Json(TradeHistoryResponse { history }))
}

async fn respond_to_trade(
    State(state): State<ApiState>,
    Path(trade_id): Path<i64>,
    Json(req): Json<RespondTradeRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let device_id = req.device_id.unwrap_or_default();

    let action = match req.action.as_deref() {
        Some("accept") => {
            let Some(card_to_give) = req.card_to_give_instance_id else {
                return Err(ApiError::bad_request(
                    "A card must be selected to complete the trade.",
                ));
            };
            TradeAction::Accept { card_to_give }
        }
        Some("reject") => TradeAction::Reject,
        Some("cancel") => TradeAction::Cancel,
        _ => return Err(ApiError::bad_request("Invalid trade action.")),
    };

    let message = state
        .pg
        .respond_to_trade(trade_id, &device_id, action)
        .await?;

    Ok(Json(MessageResponse {
        message: message.to_string(),
    }))
}
