//! Probability of an opening hand satisfying every active card group.
//!
//! A single active group gets the exact hypergeometric tail sum. With several
//! active groups each one is evaluated on its own against the same deck and
//! hand, and the results are multiplied. That product treats the groups as
//! independent, which draws without replacement from one deck are not; the
//! figure drifts from the true joint probability as the groups' combined
//! copies approach the hand size. Reference outputs depend on the product, so
//! it stays.

use tracing::{debug, trace};

use crate::combinatorics::tail_sum;
use crate::deck::{assigned_cards, CardGroup, DeckConfig};

/// Why a configuration has no probability to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uncalculable {
    /// Deck size is zero
    EmptyDeck,
    /// Hand size is zero
    EmptyHand,
    /// More cards drawn than the deck holds
    HandExceedsDeck,
    /// Groups claim more copies than the deck holds
    OverAssigned { assigned: u64, total: u32 },
    /// No group has both copies and a threshold
    NoActiveGroup,
    /// Binomial coefficients overflow `f64` for this deck
    Overflow,
}

impl std::fmt::Display for Uncalculable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Uncalculable::EmptyDeck => write!(f, "deck has no cards"),
            Uncalculable::EmptyHand => write!(f, "hand size is zero"),
            Uncalculable::HandExceedsDeck => write!(f, "hand is larger than the deck"),
            Uncalculable::OverAssigned { assigned, total } => write!(
                f,
                "groups assign {} cards but the deck only has {}",
                assigned, total
            ),
            Uncalculable::NoActiveGroup => write!(f, "no group has copies and a target"),
            Uncalculable::Overflow => write!(f, "deck is too large to evaluate"),
        }
    }
}

/// Checks the preconditions shared by every calculation.
pub fn check_calculable(deck: &DeckConfig, groups: &[CardGroup]) -> Result<(), Uncalculable> {
    if deck.total_cards == 0 {
        return Err(Uncalculable::EmptyDeck);
    }
    if deck.hand_size == 0 {
        return Err(Uncalculable::EmptyHand);
    }
    let assigned = assigned_cards(groups);
    if assigned > u64::from(deck.total_cards) {
        return Err(Uncalculable::OverAssigned {
            assigned,
            total: deck.total_cards,
        });
    }
    if !groups.iter().any(CardGroup::is_active) {
        return Err(Uncalculable::NoActiveGroup);
    }
    if deck.hand_size > deck.total_cards {
        return Err(Uncalculable::HandExceedsDeck);
    }
    Ok(())
}

/// Probability that the hand holds between `lo` and `hi` copies of `group`,
/// computed as if it were the only group in the deck.
pub fn group_probability(deck: &DeckConfig, group: &CardGroup) -> f64 {
    let (lo, hi) = group.bounds();
    tail_sum(
        i64::from(deck.total_cards),
        i64::from(group.copies),
        i64::from(deck.hand_size),
        i64::from(lo),
        i64::from(hi),
    )
}

/// Probability in `[0, 1]` that a random hand satisfies every active group,
/// or `None` when the configuration is not calculable.
///
/// `None` means "nothing to display" and is distinct from `Some(0.0)`, which
/// is returned for targets that cannot be met (e.g. needing more copies than
/// fit in the hand).
///
/// # Examples
///
/// ```
/// use drawodds_engine::deck::{CardGroup, DeckConfig};
/// use drawodds_engine::probability::calculate_probability;
///
/// let deck = DeckConfig::new(40, 5);
/// let starters = [CardGroup::new("Starters", 15, 1, 15)];
/// let p = calculate_probability(&deck, &starters).unwrap();
/// assert!((p - 0.9193).abs() < 1e-4);
///
/// let nothing = [CardGroup::new("", 0, 1, 0)];
/// assert_eq!(calculate_probability(&deck, &nothing), None);
/// ```
pub fn calculate_probability(deck: &DeckConfig, groups: &[CardGroup]) -> Option<f64> {
    match evaluate(deck, groups) {
        Ok(p) => Some(p),
        Err(reason) => {
            debug!(
                total_cards = deck.total_cards,
                hand_size = deck.hand_size,
                %reason,
                "probability undefined"
            );
            None
        }
    }
}

/// Like [`calculate_probability`], but says why there is no result.
pub fn evaluate(deck: &DeckConfig, groups: &[CardGroup]) -> Result<f64, Uncalculable> {
    check_calculable(deck, groups)?;

    let probability = groups
        .iter()
        .filter(|g| g.is_active())
        .map(|g| {
            let p = group_probability(deck, g);
            trace!(group = %g.name, copies = g.copies, p, "group probability");
            p
        })
        .product::<f64>();

    // Past roughly 1000 cards C(N, n) is infinite and the ratio is NaN.
    if !probability.is_finite() {
        return Err(Uncalculable::Overflow);
    }
    Ok(probability.clamp(0.0, 1.0))
}
