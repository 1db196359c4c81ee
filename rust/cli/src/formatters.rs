//! Text formatters for probabilities, groups and chart rows.
//!
//! Pure functions; every command renders through these so text output stays
//! consistent.
//!
//! ## Example
//!
//! ```rust
//! use drawodds_cli::formatters::{format_percentage, format_progress_bar};
//!
//! assert_eq!(format_percentage(Some(0.91926)), "91.93%");
//! assert_eq!(format_percentage(None), "n/a");
//! assert_eq!(format_progress_bar(Some(0.5), 10), "[#####-----]");
//! ```

use drawodds_engine::rating::{badge_tone, consistency_rating, progress_tone};
use drawodds_engine::series::SeriesPoint;
use drawodds_engine::{CardGroup, DeckConfig};

/// Probability as a percentage with two decimals, or `n/a` when undefined.
pub fn format_percentage(probability: Option<f64>) -> String {
    match probability {
        Some(p) => format!("{:.2}%", p * 100.0),
        None => "n/a".to_string(),
    }
}

pub fn format_deck(deck: &DeckConfig) -> String {
    format!("Deck: {} cards, hand: {}", deck.total_cards, deck.hand_size)
}

/// Human-readable target range for a group, after the same fallbacks the
/// engine applies.
pub fn format_target(group: &CardGroup) -> String {
    if !group.is_active() {
        return "no target".to_string();
    }
    let (lo, hi) = group.bounds();
    if lo == hi {
        format!("exactly {}", lo)
    } else if lo == 0 {
        format!("at most {}", hi)
    } else if hi >= group.copies {
        format!("at least {}", lo)
    } else {
        format!("{} to {}", lo, hi)
    }
}

pub fn format_group(group: &CardGroup) -> String {
    let name = if group.name.is_empty() {
        "(unnamed)"
    } else {
        group.name.as_str()
    };
    let noun = if group.copies == 1 { "copy" } else { "copies" };
    format!(
        "{}: {} {}, {}",
        name,
        group.copies,
        noun,
        format_target(group)
    )
}

/// Fixed-width bar filled in proportion to the probability.
pub fn format_progress_bar(probability: Option<f64>, width: usize) -> String {
    let filled = probability
        .map(|p| ((p * width as f64).round() as usize).min(width))
        .unwrap_or(0);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Rating headline followed by both colour buckets, e.g.
/// `⭐ Excellent probability (badge: success, bar: success)`.
pub fn format_rating(probability: Option<f64>) -> String {
    match consistency_rating(probability) {
        Some(rating) => format!(
            "{} (badge: {}, bar: {})",
            rating.headline(),
            badge_tone(probability).as_str(),
            progress_tone(probability).as_str()
        ),
        None => String::new(),
    }
}

pub fn format_series_row(point: &SeriesPoint) -> String {
    format!("{:>3}  {:>6.2}%  {}", point.x, point.y, point.label)
}
