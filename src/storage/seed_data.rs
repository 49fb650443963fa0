//! Seed Data - Initial card catalog and game settings
//!
//! Populates the database with the starter card set and default settings.
//! Every insert is keyed on a unique column and skips rows that already
//! exist, so seeding is safe to run on every startup.

use anyhow::Context;
use tracing::info;

use super::postgres::PostgresStore;

struct CardSeed {
    name: &'static str,
    rarity: &'static str,
    image_path: &'static str,
    description: &'static str,
}

/// Seed all tables with initial data
pub async fn seed_all(store: &PostgresStore) -> anyhow::Result<()> {
    let mut total = 0;
    total += seed_card_catalog(store).await?;
    total += seed_settings(store).await?;

    info!("Seeded {} total rows", total);
    Ok(())
}

/// Seed the collectible card catalog
async fn seed_card_catalog(store: &PostgresStore) -> anyhow::Result<usize> {
    let cards = vec![
        CardSeed {
            name: "SGT Pepper",
            rarity: "Legendary",
            image_path: "/images/cards/6.webp",
            description: "Provides moral boosting meow.",
        },
        CardSeed {
            name: "The Virtual Virtuoso",
            rarity: "Epic",
            image_path: "/images/cards/7.webp",
            description: "Long range skill bypasses all physical barriers.",
        },
        CardSeed {
            name: "The Proactive Pathfinder",
            rarity: "Epic",
            image_path: "/images/cards/8.webp",
            description: "Quick Learn buff allows him to quickly learn any new skill.",
        },
        CardSeed {
            name: "The Vanguard Engineer",
            rarity: "Rare",
            image_path: "/images/cards/1.webp",
            description: "Targets the most difficult Tech challenges.",
        },
        CardSeed {
            name: "The Master Crafter",
            rarity: "Common",
            image_path: "/images/cards/2.webp",
            description: "Hardware skill can revive bricked electronics.",
        },
        CardSeed {
            name: "Dark Web Tabby",
            rarity: "Rare",
            image_path: "/images/cards/11.webp",
            description: "A malicious attacker that bypasses security to infect hardware.",
        },
        CardSeed {
            name: "The Client Whisperer",
            rarity: "Common",
            image_path: "/images/cards/10.webp",
            description: "Passive aura that strengthens the bond between client and tech.",
        },
        CardSeed {
            name: "The Polished Professional",
            rarity: "Rare",
            image_path: "/images/cards/9.webp",
            description: "Ensures a smooth installation for new hardware.",
        },
        CardSeed {
            name: "The Velocity Victor",
            rarity: "Epic",
            image_path: "/images/cards/5.webp",
            description: "Clears multiple tickets from the queue at once.",
        },
        CardSeed {
            name: "The Nexus Coordinator",
            rarity: "Rare",
            image_path: "/images/cards/3.webp",
            description: "Powerful enchantment grants \u{2018}High Morale\u{2019} Buff.",
        },
        CardSeed {
            name: "The Gilded Guardian",
            rarity: "Rare",
            image_path: "/images/cards/4.webp",
            description: "Erects an impenetrable shield around company assets.",
        },
    ];

    let mut count = 0;
    for card in &cards {
        let inserted = sqlx::query(
            "INSERT INTO card_definitions (name, rarity, description, image_path)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(card.name)
        .bind(card.rarity)
        .bind(card.description)
        .bind(card.image_path)
        .execute(store.pool())
        .await
        .with_context(|| format!("seeding card '{}'", card.name))?
        .rows_affected();
        count += inserted as usize;
    }

    info!("Seeded {} card definitions", count);
    Ok(count)
}

/// Seed default settings. Existing values are left alone so an admin's
/// tuning survives restarts.
async fn seed_settings(store: &PostgresStore) -> anyhow::Result<usize> {
    let settings = vec![("required_cards", "11")];

    let mut count = 0;
    for (name, value) in &settings {
        let inserted = sqlx::query(
            "INSERT INTO settings (setting_name, setting_value)
             VALUES ($1, $2)
             ON CONFLICT (setting_name) DO NOTHING",
        )
        .bind(name)
        .bind(value)
        .execute(store.pool())
        .await
        .with_context(|| format!("seeding setting '{}'", name))?
        .rows_affected();
        count += inserted as usize;
    }

    info!("Seeded {} settings", count);
    Ok(count)
}

/// Create or update the admin account from startup configuration.
///
/// The password is stored as a bcrypt hash; re-running with a new password
/// rotates the stored hash.
pub async fn seed_admin_account(
    store: &PostgresStore,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    let password_hash =
        bcrypt::hash(password, bcrypt::DEFAULT_COST).context("hashing admin password")?;

    sqlx::query(
        "INSERT INTO admin_users (username, password_hash) VALUES ($1, $2)
         ON CONFLICT (username) DO UPDATE SET password_hash = EXCLUDED.password_hash",
    )
    .bind(username)
    .bind(&password_hash)
    .execute(store.pool())
    .await
    .context("seeding admin account")?;

    info!("Admin account ready: {}", username);
    Ok(())
}
