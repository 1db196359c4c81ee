//! Chart series built by sweeping a group's copy count.

use serde::{Deserialize, Serialize};

use crate::deck::{assigned_cards, CardGroup, DeckConfig};
use crate::probability::calculate_probability;

/// Sweep length used when the caller has no preference.
pub const DEFAULT_SWEEP_MAX: u32 = 20;

/// Percentage at which a configuration is considered playable.
pub const OPTIMAL_THRESHOLD: f64 = 75.0;

/// Percentage at which a configuration is considered excellent.
pub const EXCELLENT_THRESHOLD: f64 = 90.0;

/// One point on a probability-versus-copies chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Copies used for this evaluation
    pub x: u32,
    /// Probability as a percentage
    pub y: f64,
    pub label: String,
}

impl SeriesPoint {
    fn new(count: u32, percentage: f64) -> Self {
        Self {
            x: count,
            y: percentage,
            label: point_label(count, percentage),
        }
    }
}

/// `"1 card: 12.5%"`, `"7 cards: 63.9%"`.
pub fn point_label(count: u32, percentage: f64) -> String {
    let noun = if count == 1 { "card" } else { "cards" };
    format!("{} {}: {:.1}%", count, noun, percentage)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sweeps the first group that has copies from 1 to `max_count`, holding its
/// thresholds and every other group fixed.
///
/// When the swept count would over-assign the deck, that single evaluation
/// runs against a deck grown to `max(assigned, hand_size)`. Counts whose
/// result is undefined are skipped. Without any group holding copies the
/// series is empty.
///
/// # Examples
///
/// ```
/// use drawodds_engine::deck::{CardGroup, DeckConfig};
/// use drawodds_engine::series::generate_series;
///
/// let deck = DeckConfig::new(40, 5);
/// let groups = [CardGroup::new("Starters", 12, 1, 20)];
/// let points = generate_series(&deck, &groups, 20);
/// assert_eq!(points.len(), 20);
/// assert_eq!(points[0].label, "1 card: 12.5%");
/// ```
pub fn generate_series(deck: &DeckConfig, groups: &[CardGroup], max_count: u32) -> Vec<SeriesPoint> {
    let Some(target) = groups.iter().position(|g| g.copies > 0) else {
        return Vec::new();
    };

    (1..=max_count)
        .filter_map(|count| {
            let mut swept = groups.to_vec();
            swept[target].copies = count;

            let mut point_deck = *deck;
            let assigned = assigned_cards(&swept);
            if assigned > u64::from(point_deck.total_cards) {
                let grown = assigned.max(u64::from(point_deck.hand_size));
                point_deck.total_cards = u32::try_from(grown).unwrap_or(u32::MAX);
            }

            calculate_probability(&point_deck, &swept).map(|p| {
                let percentage = p * 100.0;
                SeriesPoint {
                    x: count,
                    y: round_to_hundredths(percentage),
                    label: point_label(count, percentage),
                }
            })
        })
        .collect()
}

/// Sweeps every group that has copies in lockstep from 1 to `max_count`.
///
/// The deck is never grown and an undefined result plots as 0, so the series
/// always has `max_count` points (empty when no group has copies). With two
/// or more active groups this diverges from [`generate_series`] by design of
/// the chart it feeds.
pub fn generate_scaled_series(
    deck: &DeckConfig,
    groups: &[CardGroup],
    max_count: u32,
) -> Vec<SeriesPoint> {
    if !groups.iter().any(|g| g.copies > 0) {
        return Vec::new();
    }

    (1..=max_count)
        .map(|count| {
            let scaled: Vec<CardGroup> = groups
                .iter()
                .map(|g| CardGroup {
                    copies: if g.copies > 0 { count } else { 0 },
                    ..g.clone()
                })
                .collect();
            let percentage = calculate_probability(deck, &scaled).map_or(0.0, |p| p * 100.0);
            SeriesPoint::new(count, percentage)
        })
        .collect()
}

/// First point reaching [`OPTIMAL_THRESHOLD`], otherwise the earliest highest
/// point.
pub fn optimal_point(points: &[SeriesPoint]) -> Option<&SeriesPoint> {
    points
        .iter()
        .find(|p| p.y >= OPTIMAL_THRESHOLD)
        .or_else(|| {
            points
                .iter()
                .reduce(|best, p| if p.y > best.y { p } else { best })
        })
}
