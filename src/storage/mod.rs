//! Storage Layer - Persistent data for the scavenger hunt
//!
//! Everything lives in PostgreSQL:
//! - **players / player_cards / player_clues**: per-device registration,
//!   owned card instances, scanned clues
//! - **card_definitions / clues**: catalog content managed by admins
//! - **trades**: the card-trading lifecycle
//! - **settings / admin_users**: game configuration and the admin console
//!
//! ## Usage
//! ```rust,ignore
//! let store = storage::init_storage("postgres://...", 10).await?;
//!
//! let player = store.get_player_by_device("abc-123").await?;
//! let awarded = store.award_random_card("abc-123").await?;
//! ```

pub mod migrations;
pub mod postgres;
pub mod seed_data;

use anyhow::Context;
use tracing::info;

use self::postgres::PostgresStore;

/// Connect to PostgreSQL, run migrations, and seed initial data
pub async fn init_storage(
    postgres_url: &str,
    pg_max_connections: u32,
) -> anyhow::Result<PostgresStore> {
    let store = PostgresStore::new(postgres_url, pg_max_connections)
        .await
        .context("connecting to PostgreSQL")?;
    seed_data::seed_all(&store).await?;
    info!("PostgreSQL store initialized and seeded");

    Ok(store)
}
