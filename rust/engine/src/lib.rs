//! # drawodds-engine: Opening-Hand Probability Engine
//!
//! Pure, stateless math for "how likely is my opening hand to contain what I
//! need?". A deck is described by its size and hand size, and the targets by
//! card groups (copies in the deck plus an inclusive range of copies wanted
//! in hand).
//!
//! ## Core Modules
//!
//! - [`combinatorics`] - Binomial coefficient, hypergeometric term and tail sums
//! - [`deck`] - `DeckConfig` and `CardGroup` value types
//! - [`probability`] - Combined probability over every active group
//! - [`rating`] - Rating labels and colour buckets for a probability
//! - [`series`] - Probability-versus-copies chart series
//! - [`starters`] - "At least one starter" reference table
//! - [`scenario`] - Serialisable deck + groups with JSON loading
//! - [`presets`] - Prebuilt example scenarios
//! - [`errors`] - Error types for boundary validation
//!
//! ## Quick Start
//!
//! ```rust
//! use drawodds_engine::deck::{CardGroup, DeckConfig};
//! use drawodds_engine::probability::calculate_probability;
//! use drawodds_engine::rating::rating_label;
//!
//! let deck = DeckConfig::new(40, 5);
//! let groups = vec![CardGroup::new("Hand Traps", 18, 3, 3)];
//!
//! let p = calculate_probability(&deck, &groups);
//! println!("{:?} ({})", p, rating_label(p));
//! ```
//!
//! ## Undefined Results
//!
//! Configurations that cannot be evaluated (empty deck, over-assigned deck,
//! no active group) yield `None` rather than an error. Front ends show
//! nothing for `None`; `Some(0.0)` is a real, computed zero.
//!
//! ```rust
//! use drawodds_engine::deck::{CardGroup, DeckConfig};
//! use drawodds_engine::probability::calculate_probability;
//!
//! let deck = DeckConfig::new(40, 5);
//! let over = [CardGroup::new("a", 25, 1, 0), CardGroup::new("b", 20, 1, 0)];
//! assert_eq!(calculate_probability(&deck, &over), None);
//!
//! let impossible = [CardGroup::new("a", 3, 4, 4)];
//! assert_eq!(calculate_probability(&deck, &impossible), Some(0.0));
//! ```

pub mod combinatorics;
pub mod deck;
pub mod errors;
pub mod presets;
pub mod probability;
pub mod rating;
pub mod scenario;
pub mod series;
pub mod starters;

pub use deck::{CardGroup, DeckConfig};
pub use errors::EngineError;
pub use probability::calculate_probability;
pub use scenario::Scenario;
pub use series::SeriesPoint;
