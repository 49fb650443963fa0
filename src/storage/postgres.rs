//! PostgreSQL Storage - All persistent hunt data
//!
//! Every table lives in PostgreSQL; `sqlx` provides the async pool and
//! runtime-checked queries.
//!
//! ## Tables
//! - players, card_definitions, player_cards
//! - clues, player_clues
//! - trades
//! - settings, admin_users
//!
//! Business-rule failures (missing player, not the card's owner, stale trade
//! status, duplicate device id) are returned as typed errors whose messages
//! are the exact client-facing text; the API layer maps them onto HTTP
//! statuses.

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::FromRow;
use tracing::{debug, info};

use super::migrations;

/// PostgreSQL connection pool wrapper
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

/// Error type for PostgreSQL operations
#[derive(Debug, thiserror::Error)]
pub enum PostgresError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Conflict(String),
}

/// A player's response to a pending trade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeAction {
    Accept { card_to_give: i64 },
    Reject,
    Cancel,
}

/// Result of scanning a clue
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub message: String,
    pub already_scanned: bool,
}

impl PostgresStore {
    /// Connect to PostgreSQL and run migrations
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        info!("PostgreSQL connected (max_connections={})", max_connections);

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    /// Connect with an existing pool (for testing)
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run all pending migrations
    pub async fn run_migrations(&self) -> Result<(), PostgresError> {
        // Create migrations tracking table
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS _migrations (
                name VARCHAR(100) PRIMARY KEY,
                applied_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
            )",
        )
        .execute(&self.pool)
        .await?;

        for (name, sql) in migrations::get_migrations() {
            let applied: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM _migrations WHERE name = $1)")
                    .bind(name)
                    .fetch_one(&self.pool)
                    .await?;

            if !applied {
                info!("Running migration: {}", name);
                sqlx::raw_sql(sql)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| PostgresError::Migration(format!("{}: {}", name, e)))?;

                sqlx::query("INSERT INTO _migrations (name) VALUES ($1)")
                    .bind(name)
                    .execute(&self.pool)
                    .await?;

                info!("Migration applied: {}", name);
            } else {
                debug!("Migration already applied: {}", name);
            }
        }

        Ok(())
    }

    // ========================================================================
    // Player Operations
    // ========================================================================

    /// Create a new player profile
    pub async fn create_player(
        &self,
        device_id: &str,
        player_name: &str,
    ) -> Result<PlayerRow, PostgresError> {
        let row = sqlx::query_as::<_, PlayerRow>(
            "INSERT INTO players (device_id, player_name)
             VALUES ($1, $2)
             RETURNING id, device_id, player_name, created_at",
        )
        .bind(device_id)
        .bind(player_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                PostgresError::Conflict("A player with this device ID already exists.".into())
            } else {
                e.into()
            }
        })?;

        info!("Created player: {} (device={})", player_name, device_id);
        Ok(row)
    }

    /// Get a player's profile by device id
    pub async fn get_player_by_device(
        &self,
        device_id: &str,
    ) -> Result<Option<PlayerRow>, PostgresError> {
        let row = sqlx::query_as::<_, PlayerRow>(
            "SELECT id, device_id, player_name, created_at
             FROM players WHERE device_id = $1",
        )
        .bind(device_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Update a player's display name; `None` when no such device id
    pub async fn rename_player(
        &self,
        device_id: &str,
        player_name: &str,
    ) -> Result<Option<PlayerRow>, PostgresError> {
        let row = sqlx::query_as::<_, PlayerRow>(
            "UPDATE players SET player_name = $2 WHERE device_id = $1
             RETURNING id, device_id, player_name, created_at",
        )
        .bind(device_id)
        .bind(player_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Search players by name fragment, excluding the caller's own device id.
    /// Minimum term length is enforced at the API layer.
    pub async fn search_players(
        &self,
        term: &str,
        exclude_device_id: &str,
    ) -> Result<Vec<PlayerSearchRow>, PostgresError> {
        let pattern = format!("%{}%", term);
        let rows = sqlx::query_as::<_, PlayerSearchRow>(
            "SELECT device_id, player_name FROM players
             WHERE player_name ILIKE $1 AND device_id != $2
             ORDER BY player_name
             LIMIT 10",
        )
        .bind(&pattern)
        .bind(exclude_device_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // ========================================================================
    // Card Operations
    // ========================================================================

    /// Get the full card catalog
    pub async fn get_card_definitions(&self) -> Result<Vec<CardDefinitionRow>, PostgresError> {
        let rows = sqlx::query_as::<_, CardDefinitionRow>(
            "SELECT card_id, name, rarity, description, image_path
             FROM card_definitions
             ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a player's collection (owned instances with definition details)
    pub async fn get_player_cards(
        &self,
        device_id: &str,
    ) -> Result<Vec<PlayerCardRow>, PostgresError> {
        let player_id = self.require_player_id(device_id, "Player not found.").await?;

        let rows = sqlx::query_as::<_, PlayerCardRow>(
            "SELECT pc.instance_id, cd.card_id, cd.name, cd.rarity, cd.description, cd.image_path
             FROM player_cards pc
             JOIN card_definitions cd ON pc.card_id = cd.card_id
             WHERE pc.player_id = $1
             ORDER BY cd.name",
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Award one uniformly-random card from the catalog to a player (atomic).
    ///
    /// Returns the new owned instance merged with its definition fields.
    pub async fn award_random_card(
        &self,
        device_id: &str,
    ) -> Result<AwardedCardRow, PostgresError> {
        let mut tx = self.pool.begin().await?;

        let player_id: Option<i64> =
            sqlx::query_scalar("SELECT id FROM players WHERE device_id = $1")
                .bind(device_id)
                .fetch_optional(&mut *tx)
                .await?;
        let player_id =
            player_id.ok_or_else(|| PostgresError::NotFound("Player not found.".into()))?;

        let card: Option<CardDefinitionRow> = sqlx::query_as(
            "SELECT card_id, name, rarity, description, image_path
             FROM card_definitions
             ORDER BY RANDOM()
             LIMIT 1",
        )
        .fetch_optional(&mut *tx)
        .await?;
        let card = card.ok_or_else(|| {
            PostgresError::NotFound("No cards available in the game to award.".into())
        })?;

        let instance_id: i64 = sqlx::query_scalar(
            "INSERT INTO player_cards (player_id, card_id) VALUES ($1, $2)
             RETURNING instance_id",
        )
        .bind(player_id)
        .bind(card.card_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            "Awarded '{}' to player {} (instance={})",
            card.name, player_id, instance_id
        );
        Ok(AwardedCardRow {
            instance_id,
            player_id,
            card_id: card.card_id,
            name: card.name,
            rarity: card.rarity,
            description: card.description,
            image_path: card.image_path,
        })
    }

    // ========================================================================
    // Clue Operations
    // ========================================================================

    /// Record a clue scan and return its message (atomic).
    ///
    /// Idempotent per (player, clue): a repeat scan writes nothing and
    /// returns the stored message flagged `already_scanned`.
    pub async fn scan_clue(
        &self,
        device_id: &str,
        clue_id: i64,
    ) -> Result<ScanOutcome, PostgresError> {
        let mut tx = self.pool.begin().await?;

        let player_id: Option<i64> =
            sqlx::query_scalar("SELECT id FROM players WHERE device_id = $1")
                .bind(device_id)
                .fetch_optional(&mut *tx)
                .await?;
        let player_id = player_id.ok_or_else(|| {
            PostgresError::NotFound("Player not found. Please register first.".into())
        })?;

        let already_scanned: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM player_clues WHERE player_id = $1 AND clue_id = $2)",
        )
        .bind(player_id)
        .bind(clue_id)
        .fetch_one(&mut *tx)
        .await?;

        let message: Option<String> = sqlx::query_scalar("SELECT message FROM clues WHERE id = $1")
            .bind(clue_id)
            .fetch_optional(&mut *tx)
            .await?;

        if already_scanned {
            // The clue may have been deleted since the original scan
            let message =
                message.unwrap_or_else(|| "This clue seems to be a mystery!".to_string());
            return Ok(ScanOutcome {
                message: format!("You have already found this clue: \"{}\"", message),
                already_scanned: true,
            });
        }

        let message =
            message.ok_or_else(|| PostgresError::NotFound("Clue not found.".into()))?;

        // ON CONFLICT covers a concurrent first scan of the same pair
        let inserted = sqlx::query(
            "INSERT INTO player_clues (player_id, clue_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(player_id)
        .bind(clue_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        if inserted == 0 {
            return Ok(ScanOutcome {
                message: format!("You have already found this clue: \"{}\"", message),
                already_scanned: true,
            });
        }

        info!("Player {} scanned clue {}", player_id, clue_id);
        Ok(ScanOutcome {
            message,
            already_scanned: false,
        })
    }

    /// List all clues
    pub async fn list_clues(&self) -> Result<Vec<ClueRow>, PostgresError> {
        let rows = sqlx::query_as::<_, ClueRow>("SELECT id, message FROM clues ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Create a clue with an admin-chosen id (matches the printed QR code)
    pub async fn create_clue(&self, id: i64, message: &str) -> Result<ClueRow, PostgresError> {
        let row = sqlx::query_as::<_, ClueRow>(
            "INSERT INTO clues (id, message) VALUES ($1, $2) RETURNING id, message",
        )
        .bind(id)
        .bind(message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                PostgresError::Conflict("A clue with this ID already exists.".into())
            } else {
                e.into()
            }
        })?;

        info!("Created clue {}", id);
        Ok(row)
    }

    /// Update a clue's message; `None` when no such clue
    pub async fn update_clue(
        &self,
        id: i64,
        message: &str,
    ) -> Result<Option<ClueRow>, PostgresError> {
        let row = sqlx::query_as::<_, ClueRow>(
            "UPDATE clues SET message = $2 WHERE id = $1 RETURNING id, message",
        )
        .bind(id)
        .bind(message)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Delete a clue; returns whether a row was removed
    pub async fn delete_clue(&self, id: i64) -> Result<bool, PostgresError> {
        let result = sqlx::query("DELETE FROM clues WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ========================================================================
    // Trade Operations
    // ========================================================================

    /// Create a pending trade offer (atomic).
    ///
    /// The offered instance must currently belong to the offering player.
    pub async fn create_trade(
        &self,
        offering_device_id: &str,
        receiving_device_id: &str,
        offered_card_instance_id: i64,
        requested_card_id: Option<i64>,
    ) -> Result<i64, PostgresError> {
        let mut tx = self.pool.begin().await?;

        let offering_id: Option<i64> =
            sqlx::query_scalar("SELECT id FROM players WHERE device_id = $1")
                .bind(offering_device_id)
                .fetch_optional(&mut *tx)
                .await?;
        let receiving_id: Option<i64> =
            sqlx::query_scalar("SELECT id FROM players WHERE device_id = $1")
                .bind(receiving_device_id)
                .fetch_optional(&mut *tx)
                .await?;

        let (Some(offering_id), Some(receiving_id)) = (offering_id, receiving_id) else {
            return Err(PostgresError::NotFound("One or both players not found.".into()));
        };

        let owner: Option<i64> =
            sqlx::query_scalar("SELECT player_id FROM player_cards WHERE instance_id = $1")
                .bind(offered_card_instance_id)
                .fetch_optional(&mut *tx)
                .await?;
        if owner != Some(offering_id) {
            return Err(PostgresError::Forbidden(
                "You do not own the card you are trying to trade.".into(),
            ));
        }

        let trade_id: i64 = sqlx::query_scalar(
            "INSERT INTO trades (offering_player_id, receiving_player_id,
                                 offered_card_instance_id, requested_card_id, status)
             VALUES ($1, $2, $3, $4, 'pending')
             RETURNING trade_id",
        )
        .bind(offering_id)
        .bind(receiving_id)
        .bind(offered_card_instance_id)
        .bind(requested_card_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            "Created trade {} ({} -> {})",
            trade_id, offering_device_id, receiving_device_id
        );
        Ok(trade_id)
    }

    /// All pending trades where the player is either party, newest first,
    /// enriched with both players' and both cards' display attributes
    pub async fn get_pending_trades(
        &self,
        device_id: &str,
    ) -> Result<Vec<PendingTradeRow>, PostgresError> {
        let player_id = self.require_player_id(device_id, "Player not found.").await?;

        let rows = sqlx::query_as::<_, PendingTradeRow>(
            "SELECT
                t.trade_id,
                t.status,
                t.created_at,
                op.player_name AS offering_player_name,
                op.device_id   AS offering_player_device_id,
                rp.player_name AS receiving_player_name,
                rp.device_id   AS receiving_player_device_id,
                ocd.name       AS offered_card_name,
                ocd.rarity     AS offered_card_rarity,
                ocd.image_path AS offered_card_image_path,
                rcd.name       AS requested_card_name,
                rcd.rarity     AS requested_card_rarity
             FROM trades t
             JOIN players op ON t.offering_player_id = op.id
             JOIN players rp ON t.receiving_player_id = rp.id
             JOIN player_cards oc ON t.offered_card_instance_id = oc.instance_id
             JOIN card_definitions ocd ON oc.card_id = ocd.card_id
             LEFT JOIN card_definitions rcd ON t.requested_card_id = rcd.card_id
             WHERE (t.offering_player_id = $1 OR t.receiving_player_id = $1)
               AND t.status = 'pending'
             ORDER BY t.created_at DESC",
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Resolved (non-pending) trades for the player, newest first, tagged
    /// with the caller's role relative to the original offer direction
    pub async fn get_trade_history(
        &self,
        device_id: &str,
    ) -> Result<Vec<TradeHistoryRow>, PostgresError> {
        let player_id = self.require_player_id(device_id, "Player not found.").await?;

        let rows = sqlx::query_as::<_, TradeHistoryRow>(
            "SELECT
                t.trade_id,
                t.status,
                CASE WHEN t.offering_player_id = $1
                     THEN rp.player_name ELSE op.player_name END AS other_player_name,
                CASE WHEN t.offering_player_id = $1
                     THEN 'offered' ELSE 'received' END AS my_role,
                ocd.name       AS offered_card_name,
                ocd.image_path AS offered_card_image_path,
                acd.name       AS accepted_card_name,
                acd.image_path AS accepted_card_image_path
             FROM trades t
             JOIN players op ON t.offering_player_id = op.id
             JOIN players rp ON t.receiving_player_id = rp.id
             JOIN player_cards oc ON t.offered_card_instance_id = oc.instance_id
             JOIN card_definitions ocd ON oc.card_id = ocd.card_id
             LEFT JOIN player_cards ac ON t.accepted_card_instance_id = ac.instance_id
             LEFT JOIN card_definitions acd ON ac.card_id = acd.card_id
             WHERE (t.offering_player_id = $1 OR t.receiving_player_id = $1)
               AND t.status != 'pending'
             ORDER BY t.created_at DESC",
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Resolve a pending trade (atomic, row-locked).
    ///
    /// Accept/reject are the receiving player's moves; cancel is the
    /// offering player's. Acceptance swaps ownership of both instances and
    /// records which card was given in return; any failure rolls back the
    /// whole response so no partial swap is ever observable.
    pub async fn respond_to_trade(
        &self,
        trade_id: i64,
        responder_device_id: &str,
        action: TradeAction,
    ) -> Result<&'static str, PostgresError> {
        let mut tx = self.pool.begin().await?;

        let responder_id: Option<i64> =
            sqlx::query_scalar("SELECT id FROM players WHERE device_id = $1")
                .bind(responder_device_id)
                .fetch_optional(&mut *tx)
                .await?;
        let responder_id =
            responder_id.ok_or_else(|| PostgresError::NotFound("Player not found.".into()))?;

        // Row lock: concurrent responses to the same trade serialize here,
        // so only one of them can observe 'pending'.
        let trade: Option<TradeRow> = sqlx::query_as(
            "SELECT trade_id, offering_player_id, receiving_player_id,
                    offered_card_instance_id, requested_card_id,
                    accepted_card_instance_id, status, created_at
             FROM trades WHERE trade_id = $1
             FOR UPDATE",
        )
        .bind(trade_id)
        .fetch_optional(&mut *tx)
        .await?;
        let trade = trade.ok_or_else(|| PostgresError::NotFound("Trade not found.".into()))?;

        if trade.status != "pending" {
            return Err(PostgresError::Conflict(
                "This trade is no longer pending.".into(),
            ));
        }

        let message = match action {
            TradeAction::Accept { card_to_give } => {
                if trade.receiving_player_id != responder_id {
                    return Err(PostgresError::Forbidden(
                        "You do not have permission to modify this trade.".into(),
                    ));
                }

                let owner: Option<i64> = sqlx::query_scalar(
                    "SELECT player_id FROM player_cards WHERE instance_id = $1",
                )
                .bind(card_to_give)
                .fetch_optional(&mut *tx)
                .await?;
                if owner != Some(responder_id) {
                    return Err(PostgresError::Forbidden(
                        "You do not own the card you are trying to give.".into(),
                    ));
                }

                // Swap card ownership
                sqlx::query("UPDATE player_cards SET player_id = $1 WHERE instance_id = $2")
                    .bind(trade.receiving_player_id)
                    .bind(trade.offered_card_instance_id)
                    .execute(&mut *tx)
                    .await?;
                sqlx::query("UPDATE player_cards SET player_id = $1 WHERE instance_id = $2")
                    .bind(trade.offering_player_id)
                    .bind(card_to_give)
                    .execute(&mut *tx)
                    .await?;

                sqlx::query(
                    "UPDATE trades SET status = 'accepted', accepted_card_instance_id = $2
                     WHERE trade_id = $1",
                )
                .bind(trade_id)
                .bind(card_to_give)
                .execute(&mut *tx)
                .await?;

                "Trade accepted!"
            }
            TradeAction::Reject => {
                if trade.receiving_player_id != responder_id {
                    return Err(PostgresError::Forbidden(
                        "You do not have permission to modify this trade.".into(),
                    ));
                }

                sqlx::query("UPDATE trades SET status = 'rejected' WHERE trade_id = $1")
                    .bind(trade_id)
                    .execute(&mut *tx)
                    .await?;

                "Trade rejected."
            }
            TradeAction::Cancel => {
                if trade.offering_player_id != responder_id {
                    return Err(PostgresError::Forbidden(
                        "You do not have permission to modify this trade.".into(),
                    ));
                }

                sqlx::query("UPDATE trades SET status = 'cancelled' WHERE trade_id = $1")
                    .bind(trade_id)
                    .execute(&mut *tx)
                    .await?;

                "Trade cancelled."
            }
        };

        tx.commit().await?;

        info!("Trade {} resolved: {}", trade_id, message);
        Ok(message)
    }

    // ========================================================================
    // Admin Operations
    // ========================================================================

    /// Look up an admin account by username
    pub async fn get_admin_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUserRow>, PostgresError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            "SELECT id, username, password_hash FROM admin_users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// All players, for the admin roster
    pub async fn list_players_overview(&self) -> Result<Vec<PlayerOverviewRow>, PostgresError> {
        let rows = sqlx::query_as::<_, PlayerOverviewRow>(
            "SELECT id, device_id, player_name FROM players ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Distinct card definitions owned per player, for the admin roster
    pub async fn list_unique_cards_by_player(&self) -> Result<Vec<UniqueCardRow>, PostgresError> {
        let rows = sqlx::query_as::<_, UniqueCardRow>(
            "SELECT DISTINCT pc.player_id, cd.card_id, cd.name, cd.rarity
             FROM player_cards pc
             JOIN card_definitions cd ON pc.card_id = cd.card_id
             ORDER BY pc.player_id, cd.name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a setting's raw value
    pub async fn get_setting(&self, name: &str) -> Result<Option<String>, PostgresError> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT setting_value FROM settings WHERE setting_name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Upsert a setting
    pub async fn put_setting(&self, name: &str, value: &str) -> Result<(), PostgresError> {
        sqlx::query(
            "INSERT INTO settings (setting_name, setting_value) VALUES ($1, $2)
             ON CONFLICT (setting_name) DO UPDATE SET setting_value = EXCLUDED.setting_value",
        )
        .bind(name)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Database connectivity probe
    pub async fn ping(&self) -> Result<(), PostgresError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Resolve a device id to a player id or fail with the given message
    async fn require_player_id(
        &self,
        device_id: &str,
        missing_message: &str,
    ) -> Result<i64, PostgresError> {
        let id: Option<i64> = sqlx::query_scalar("SELECT id FROM players WHERE device_id = $1")
            .bind(device_id)
            .fetch_optional(&self.pool)
            .await?;

        id.ok_or_else(|| PostgresError::NotFound(missing_message.to_string()))
    }
}

/// True when the error is a PostgreSQL unique-constraint violation (23505)
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(e) if e.code().as_deref() == Some("23505"))
}

// ============================================================================
// Row types (for sqlx query_as mapping)
// ============================================================================

#[derive(Debug, Clone, FromRow)]
pub struct PlayerRow {
    pub id: i64,
    pub device_id: String,
    pub player_name: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, FromRow)]
pub struct PlayerSearchRow {
    pub device_id: String,
    pub player_name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct CardDefinitionRow {
    pub card_id: i64,
    pub name: String,
    pub rarity: String,
    pub description: String,
    pub image_path: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct PlayerCardRow {
    pub instance_id: i64,
    pub card_id: i64,
    pub name: String,
    pub rarity: String,
    pub description: String,
    pub image_path: String,
}

/// A freshly-awarded instance with its definition fields merged in
#[derive(Debug, Clone)]
pub struct AwardedCardRow {
    pub instance_id: i64,
    pub player_id: i64,
    pub card_id: i64,
    pub name: String,
    pub rarity: String,
    pub description: String,
    pub image_path: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct ClueRow {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct TradeRow {
    pub trade_id: i64,
    pub offering_player_id: i64,
    pub receiving_player_id: i64,
    pub offered_card_instance_id: i64,
    pub requested_card_id: Option<i64>,
    pub accepted_card_instance_id: Option<i64>,
    pub status: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, FromRow)]
pub struct PendingTradeRow {
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

#[derive(Debug, Clone, FromRow)]
pub struct TradeHistoryRow {
    pub trade_id: i64,
    pub status: String,
    pub other_player_name: String,
    pub my_role: String,
    pub offered_card_name: String,
    pub offered_card_image_path: String,
    pub accepted_card_name: Option<String>,
    pub accepted_card_image_path: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct AdminUserRow {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct PlayerOverviewRow {
    pub id: i64,
    pub device_id: String,
    pub player_name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct UniqueCardRow {
    pub player_id: i64,
    pub card_id: i64,
    pub name: String,
    pub rarity: String,
}
