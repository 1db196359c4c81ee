use serde::{Deserialize, Serialize};

/// Deck and hand dimensions for a single calculation.
///
/// Plain value type. The engine places no upper bound on either field; a
/// front end may clamp them for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckConfig {
    /// Number of cards in the deck (N)
    pub total_cards: u32,
    /// Number of cards drawn into the opening hand (n)
    pub hand_size: u32,
}

impl DeckConfig {
    pub fn new(total_cards: u32, hand_size: u32) -> Self {
        Self {
            total_cards,
            hand_size,
        }
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::new(40, 5)
    }
}

/// A named subset of the deck together with the range of copies the hand
/// must contain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardGroup {
    /// Display label; never used in computation
    #[serde(default)]
    pub name: String,
    /// Copies of this group in the deck (K)
    pub copies: u32,
    /// Fewest copies the hand may hold for the constraint to hold
    #[serde(default)]
    pub min_needed: u32,
    /// Most copies the hand may hold; zero means "not set"
    #[serde(default)]
    pub max_needed: u32,
}

impl CardGroup {
    pub fn new(name: impl Into<String>, copies: u32, min_needed: u32, max_needed: u32) -> Self {
        Self {
            name: name.into(),
            copies,
            min_needed,
            max_needed,
        }
    }

    /// A group takes part in the calculation only when it has copies and at
    /// least one of its thresholds is set.
    pub fn is_active(&self) -> bool {
        self.copies > 0 && (self.min_needed > 0 || self.max_needed > 0)
    }

    /// Inclusive `(lo, hi)` draw-count range before clamping to copies and
    /// hand size.
    ///
    /// An unset maximum falls back to the minimum (an exact count), and with
    /// neither set the range opens up to every copy.
    pub fn bounds(&self) -> (u32, u32) {
        let lo = self.min_needed;
        let hi = if self.max_needed > 0 {
            self.max_needed
        } else if self.min_needed > 0 {
            self.min_needed
        } else {
            self.copies
        };
        (lo, hi)
    }
}

/// Total copies claimed by `groups`, active or not.
pub fn assigned_cards(groups: &[CardGroup]) -> u64 {
    groups.iter().map(|g| u64::from(g.copies)).sum()
}
