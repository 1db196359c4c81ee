//! "At least one starter" reference table.
//!
//! Shows how opening consistency grows, with diminishing returns, as more
//! starter cards are added to a deck.

use serde::Serialize;

use crate::deck::{CardGroup, DeckConfig};
use crate::probability::calculate_probability;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StarterRow {
    pub starters: u32,
    /// Chance of opening with at least one starter, as a percentage rounded
    /// to two decimals
    pub probability: f64,
}

/// One row per starter count in `1..=max_starters`, skipping counts the deck
/// cannot hold.
pub fn starter_table(deck: &DeckConfig, max_starters: u32) -> Vec<StarterRow> {
    (1..=max_starters)
        .filter_map(|starters| {
            let group = [CardGroup::new("Starters", starters, 1, starters)];
            calculate_probability(deck, &group).map(|p| StarterRow {
                starters,
                probability: (p * 100.0 * 100.0).round() / 100.0,
            })
        })
        .collect()
}

/// Gain from each additional starter: differences between consecutive rows,
/// rounded to two decimals.
pub fn marginal_gains(rows: &[StarterRow]) -> Vec<f64> {
    rows.windows(2)
        .map(|w| ((w[1].probability - w[0].probability) * 100.0).round() / 100.0)
        .collect()
}
