//! Card Draw — Rarity tiers and the weighted display draw
//!
//! Two draw paths exist and are deliberately independent:
//! - the storage layer awards a uniformly-random catalog card (that draw
//!   creates the owned copy)
//! - reveal animations draw a rarity-weighted card here, purely for display
//!
//! The weighted draw is deterministic from a caller-supplied seed, so a
//! reveal can be replayed; only the award response changes ownership.

use serde::{Deserialize, Serialize};

use crate::storage::postgres::CardDefinitionRow;

// ============================================================================
// Rarity System
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Scan order for the weighted draw, rarest first
pub const DRAW_ORDER: [Rarity; 4] = [
    Rarity::Legendary,
    Rarity::Epic,
    Rarity::Rare,
    Rarity::Common,
];

#[derive(Debug, thiserror::Error)]
#[error("unknown rarity: {0}")]
pub struct UnknownRarity(String);

impl Rarity {
    /// Draw weight; tiers are drawn proportionally to weight / total
    pub fn draw_weight(&self) -> f64 {
        match self {
            Rarity::Common => 91.0,
            Rarity::Rare => 9.0,
            Rarity::Epic => 9.0,
            Rarity::Legendary => 1.0,
        }
    }

    /// The text stored in `card_definitions.rarity`
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl std::str::FromStr for Rarity {
    type Err = UnknownRarity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Common" => Ok(Rarity::Common),
            "Rare" => Ok(Rarity::Rare),
            "Epic" => Ok(Rarity::Epic),
            "Legendary" => Ok(Rarity::Legendary),
            other => Err(UnknownRarity(other.to_string())),
        }
    }
}

// ============================================================================
// Weighted Display Draw
// ============================================================================

/// Draw a rarity tier from a 0.0–1.0 roll.
///
/// Cumulative scan over normalized weights in `DRAW_ORDER`; a roll at or
/// below a tier's cumulative share lands in that tier.
pub fn draw_rarity(roll: f64) -> Rarity {
    let total: f64 = DRAW_ORDER.iter().map(|r| r.draw_weight()).sum();
    let mut cumulative = 0.0;
    for rarity in DRAW_ORDER {
        cumulative += rarity.draw_weight() / total;
        if roll <= cumulative {
            return rarity;
        }
    }
    Rarity::Common
}

/// Pick a card for a reveal animation, deterministic from `seed`.
///
/// Draws a tier, then a uniform member of that tier. An empty drawn tier
/// falls through toward Common; if every tier from the drawn one on is
/// empty, any catalog card is picked uniformly. `None` only when the
/// catalog itself is empty.
pub fn pick_display_card(catalog: &[CardDefinitionRow], seed: u64) -> Option<&CardDefinitionRow> {
    if catalog.is_empty() {
        return None;
    }

    let mut h = next_seed(seed);
    let roll = ((h >> 32) as u32) as f64 / u32::MAX as f64;
    let drawn = draw_rarity(roll);

    let start = DRAW_ORDER.iter().position(|r| *r == drawn).unwrap_or(0);
    for rarity in &DRAW_ORDER[start..] {
        let tier: Vec<&CardDefinitionRow> = catalog
            .iter()
            .filter(|card| card.rarity == rarity.as_str())
            .collect();
        if !tier.is_empty() {
            h = next_seed(h);
            return Some(tier[(h % tier.len() as u64) as usize]);
        }
    }

    h = next_seed(h);
    Some(&catalog[(h % catalog.len() as u64) as usize])
}

fn next_seed(h: u64) -> u64 {
    h.wrapping_mul(6364136223846793005).wrapping_add(1)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: i64, name: &str, rarity: Rarity) -> CardDefinitionRow {
        CardDefinitionRow {
            card_id: id,
            name: name.to_string(),
            rarity: rarity.as_str().to_string(),
            description: String::new(),
            image_path: String::new(),
        }
    }

    fn full_catalog() -> Vec<CardDefinitionRow> {
        vec![
            card(1, "Alpha", Rarity::Common),
            card(2, "Beta", Rarity::Common),
            card(3, "Gamma", Rarity::Rare),
            card(4, "Delta", Rarity::Epic),
            card(5, "Omega", Rarity::Legendary),
        ]
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
    }

    #[test]
    fn test_rarity_round_trip() {
        for rarity in DRAW_ORDER {
            assert_eq!(rarity.as_str().parse::<Rarity>().unwrap(), rarity);
        }
        assert!("Mythic".parse::<Rarity>().is_err());
    }

    #[test]
    fn test_draw_weights_normalized() {
        let total: f64 = DRAW_ORDER.iter().map(|r| r.draw_weight()).sum();
        let normalized: f64 = DRAW_ORDER.iter().map(|r| r.draw_weight() / total).sum();
        assert!((normalized - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_draw_rarity_boundaries() {
        // Cumulative shares: 1/110, 10/110, 19/110, 110/110
        assert_eq!(draw_rarity(0.0), Rarity::Legendary);
        assert_eq!(draw_rarity(0.009), Rarity::Legendary);
        assert_eq!(draw_rarity(0.05), Rarity::Epic);
        assert_eq!(draw_rarity(0.15), Rarity::Rare);
        assert_eq!(draw_rarity(0.5), Rarity::Common);
        assert_eq!(draw_rarity(1.0), Rarity::Common);
    }

    #[test]
    fn test_pick_display_card_deterministic() {
        let catalog = full_catalog();
        let first = pick_display_card(&catalog, 12345).unwrap();
        let second = pick_display_card(&catalog, 12345).unwrap();
        assert_eq!(first.card_id, second.card_id);
    }

    #[test]
    fn test_pick_display_card_empty_catalog() {
        assert!(pick_display_card(&[], 42).is_none());
    }

    #[test]
    fn test_pick_display_card_empty_tier_falls_through() {
        // No Legendary or Epic cards; every seed must still produce a pick
        let catalog = vec![
            card(1, "Alpha", Rarity::Common),
            card(2, "Gamma", Rarity::Rare),
        ];
        for seed in 0..200u64 {
            let picked = pick_display_card(&catalog, seed).unwrap();
            assert!(picked.card_id == 1 || picked.card_id == 2);
        }
    }

    #[test]
    fn test_pick_display_card_commons_dominate() {
        let catalog = full_catalog();
        let mut commons = 0;
        let mut legendaries = 0;
        for seed in 0..2000u64 {
            match pick_display_card(&catalog, seed) {
                Some(c) if c.rarity == Rarity::Common.as_str() => commons += 1,
                Some(c) if c.rarity == Rarity::Legendary.as_str() => legendaries += 1,
                _ => {}
            }
        }
        assert!(commons > legendaries);
    }
}
