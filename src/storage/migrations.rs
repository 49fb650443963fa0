//! Database Migrations - PostgreSQL schema for the Scavenger Hunt backend
//!
//! One versioned SQL block per migration, applied in order by
//! `PostgresStore::run_migrations`. Reference data (the card catalog,
//! default settings) is seeded separately in `seed_data`.

/// SQL migration for creating all tables
pub const MIGRATION_V1: &str = r#"
-- ============================================================================
-- Scavenger Hunt Database Schema v1
-- ============================================================================

-- ============================================================================
-- 1. Players
-- ============================================================================

CREATE TABLE IF NOT EXISTS players (
    id              BIGSERIAL PRIMARY KEY,
    device_id       VARCHAR(100) UNIQUE NOT NULL,  -- client-generated identity
    player_name     VARCHAR(100) NOT NULL,
    created_at      TIMESTAMP WITH TIME ZONE DEFAULT NOW()
);

CREATE INDEX idx_players_device ON players(device_id);

-- ============================================================================
-- 2. Card Catalog & Owned Instances
-- ============================================================================

CREATE TABLE IF NOT EXISTS card_definitions (
    card_id         BIGSERIAL PRIMARY KEY,
    name            VARCHAR(100) UNIQUE NOT NULL,
    rarity          VARCHAR(20) NOT NULL
        CHECK (rarity IN ('Common', 'Rare', 'Epic', 'Legendary')),
    description     TEXT NOT NULL DEFAULT '',
    image_path      VARCHAR(255) NOT NULL
);

-- One row per physically-owned copy. player_id is the only mutable column;
-- it changes exclusively inside an accepted trade's transaction.
CREATE TABLE IF NOT EXISTS player_cards (
    instance_id     BIGSERIAL PRIMARY KEY,
    player_id       BIGINT NOT NULL REFERENCES players(id) ON DELETE CASCADE,
    card_id         BIGINT NOT NULL REFERENCES card_definitions(card_id),
    acquired_at     TIMESTAMP WITH TIME ZONE DEFAULT NOW()
);

CREATE INDEX idx_player_cards_player ON player_cards(player_id);
CREATE INDEX idx_player_cards_definition ON player_cards(card_id);

-- ============================================================================
-- 3. Clues & Scan Records
-- ============================================================================

-- Clue ids are admin-chosen so they match the printed QR codes.
CREATE TABLE IF NOT EXISTS clues (
    id              BIGINT PRIMARY KEY,
    message         TEXT NOT NULL
);

-- Existence of a row means "this player has already scanned this clue".
CREATE TABLE IF NOT EXISTS player_clues (
    player_id       BIGINT NOT NULL REFERENCES players(id) ON DELETE CASCADE,
    clue_id         BIGINT NOT NULL REFERENCES clues(id) ON DELETE CASCADE,
    scanned_at      TIMESTAMP WITH TIME ZONE DEFAULT NOW(),

    PRIMARY KEY (player_id, clue_id)
);

-- ============================================================================
-- 4. Trades
-- ============================================================================

CREATE TABLE IF NOT EXISTS trades (
    trade_id                  BIGSERIAL PRIMARY KEY,
    offering_player_id        BIGINT NOT NULL REFERENCES players(id),
    receiving_player_id       BIGINT NOT NULL REFERENCES players(id),
    offered_card_instance_id  BIGINT NOT NULL REFERENCES player_cards(instance_id),
    requested_card_id         BIGINT REFERENCES card_definitions(card_id),
    accepted_card_instance_id BIGINT REFERENCES player_cards(instance_id),
    status                    VARCHAR(20) NOT NULL DEFAULT 'pending'
        CHECK (status IN ('pending', 'accepted', 'rejected', 'cancelled')),
    created_at                TIMESTAMP WITH TIME ZONE DEFAULT NOW()
);

CREATE INDEX idx_trades_offering ON trades(offering_player_id, status);
CREATE INDEX idx_trades_receiving ON trades(receiving_player_id, status);

-- ============================================================================
-- 5. Settings & Admin Accounts
-- ============================================================================

CREATE TABLE IF NOT EXISTS settings (
    setting_name    VARCHAR(100) PRIMARY KEY,
    setting_value   VARCHAR(255) NOT NULL
);

CREATE TABLE IF NOT EXISTS admin_users (
    id              BIGSERIAL PRIMARY KEY,
    username        VARCHAR(100) UNIQUE NOT NULL,
    password_hash   VARCHAR(255) NOT NULL  -- bcrypt
);
"#;

/// Get all migration SQL statements in order
pub fn get_migrations() -> Vec<(&'static str, &'static str)> {
    vec![
        ("v1_initial_schema", MIGRATION_V1),
    ]
}
