use serde::{Deserialize, Serialize};

use crate::deck::{CardGroup, DeckConfig};
use crate::errors::EngineError;
use crate::probability::calculate_probability;

/// A deck together with the groups to evaluate against it.
///
/// Serialises flat, matching the `{ totalCards, handSize, groups }` shape
/// used by saved and shared configurations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(flatten)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub groups: Vec<CardGroup>,
}

impl Scenario {
    pub fn new(deck: DeckConfig, groups: Vec<CardGroup>) -> Self {
        Self { deck, groups }
    }

    /// Parses a scenario, rejecting malformed shapes (negative or non-numeric
    /// counts, missing deck fields) with [`EngineError::InvalidScenario`].
    pub fn from_json(s: &str) -> Result<Self, EngineError> {
        serde_json::from_str(s).map_err(|e| EngineError::InvalidScenario(e.to_string()))
    }

    pub fn probability(&self) -> Option<f64> {
        calculate_probability(&self.deck, &self.groups)
    }
}
