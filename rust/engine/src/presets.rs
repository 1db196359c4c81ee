//! Prebuilt scenarios offered as quick starting points.

use crate::deck::{CardGroup, DeckConfig};
use crate::errors::EngineError;
use crate::scenario::Scenario;

/// Id of the blank starting configuration.
pub const BLANK_ID: &str = "empty";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub scenario: Scenario,
}

struct PresetDef {
    id: &'static str,
    name: &'static str,
    total_cards: u32,
    hand_size: u32,
    groups: &'static [(&'static str, u32, u32, u32)],
}

const PRESETS: &[PresetDef] = &[
    PresetDef {
        id: BLANK_ID,
        name: "Blank",
        total_cards: 40,
        hand_size: 5,
        groups: &[("", 0, 1, 0)],
    },
    PresetDef {
        id: "two-card-combo",
        name: "Allure of Darkness plus an dark monster",
        total_cards: 40,
        hand_size: 5,
        groups: &[("Allure of Darkness", 3, 1, 3), ("Dark Monsters", 16, 1, 16)],
    },
    PresetDef {
        id: "minimum-desired",
        name: "At least one handtrap in opening hand",
        total_cards: 40,
        hand_size: 5,
        groups: &[("Hand Traps", 18, 1, 3)],
    },
    PresetDef {
        id: "exactly-desired",
        name: "Exactly three handtraps in opening hand",
        total_cards: 40,
        hand_size: 5,
        groups: &[("Hand Traps", 18, 3, 3)],
    },
    PresetDef {
        id: "grass-in-60",
        name: "Grass Looks Greener in a sixty card deck",
        total_cards: 60,
        hand_size: 5,
        groups: &[("That Grass Looks Greener", 1, 1, 1)],
    },
    PresetDef {
        id: "hollie-sue-enable",
        name: "Hollie Sue turn zero combo",
        total_cards: 40,
        hand_size: 5,
        groups: &[
            ("Vanquish Soul Hollie Sue", 3, 1, 3),
            ("Other Vanquish Soul", 15, 1, 15),
            ("Fire/Dark Monster", 19, 1, 4),
        ],
    },
    PresetDef {
        id: "one-copy-playset",
        name: "Open with one copy from a three-card playset",
        total_cards: 40,
        hand_size: 5,
        groups: &[("Mulcharmy Fuwalos", 3, 1, 3)],
    },
    PresetDef {
        id: "two-limited",
        name: "Two limited cards",
        total_cards: 40,
        hand_size: 5,
        groups: &[("Called by the Grave", 1, 1, 1), ("Triple Tactics Talent", 1, 1, 1)],
    },
];

impl PresetDef {
    fn build(&self) -> Preset {
        let groups = self
            .groups
            .iter()
            .map(|&(name, copies, min, max)| CardGroup::new(name, copies, min, max))
            .collect();
        Preset {
            id: self.id,
            name: self.name,
            scenario: Scenario::new(DeckConfig::new(self.total_cards, self.hand_size), groups),
        }
    }
}

/// Every preset, in display order.
pub fn all() -> Vec<Preset> {
    PRESETS.iter().map(PresetDef::build).collect()
}

pub fn find(id: &str) -> Option<Preset> {
    PRESETS.iter().find(|p| p.id == id).map(PresetDef::build)
}

pub fn require(id: &str) -> Result<Preset, EngineError> {
    find(id).ok_or_else(|| EngineError::UnknownPreset { id: id.to_string() })
}

/// The blank configuration a fresh calculator starts from.
pub fn blank() -> Preset {
    PRESETS[0].build()
}
