//! Scavenger Hunt Server Library
//!
//! This library provides the core modules for the scavenger-hunt backend:
//! - PostgreSQL storage for players, cards, clues, trades, and settings
//! - HTTP/JSON API with per-resource routers
//! - Rarity-weighted display draw for card reveal animations
//! - Server metrics with Prometheus + JSON export

pub mod api; // HTTP/JSON API endpoints for the phone client
pub mod draw; // Rarity tiers + weighted display draw
pub mod metrics; // Server metrics (Prometheus + JSON export)
pub mod storage; // PostgreSQL storage layer

// Re-export commonly used types
pub use draw::Rarity;
pub use storage::postgres::{PostgresError, PostgresStore};
