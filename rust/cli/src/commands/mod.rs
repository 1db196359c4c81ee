//! Command handler modules for the drawodds CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, never taken from the process
//! - Errors propagated via `CliError`
//!
//! Input resolution shared by `calc` and `series` lives here.

mod calc;
mod cfg;
mod presets;
mod series;
mod starters;

pub use calc::handle_calc_command;
pub use cfg::handle_cfg_command;
pub use presets::handle_presets_command;
pub use series::handle_series_command;
pub use starters::handle_starters_command;

use std::io::Write;

use drawodds_engine::{presets as prebuilt, DeckConfig, Scenario};
use tracing::debug;

use crate::cli::DeckArgs;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::io_utils::read_text;
use crate::ui;
use crate::validation::parse_group_specs;

pub(crate) fn load_config(err: &mut dyn Write) -> Result<Config, CliError> {
    match config::load() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            Err(CliError::Config(e.to_string()))
        }
    }
}

/// Builds the scenario a command should evaluate.
///
/// A preset or scenario file supplies deck and groups; otherwise the deck
/// comes from the configuration and the groups from `--group`. `--deck` and
/// `--hand` override the deck either way.
pub(crate) fn resolve_scenario(
    input: &DeckArgs,
    cfg: &Config,
    err: &mut dyn Write,
) -> Result<Scenario, CliError> {
    let loaded = if let Some(id) = &input.preset {
        Some(prebuilt::require(id)?.scenario)
    } else if let Some(path) = &input.scenario {
        let text = read_text(path).map_err(CliError::InvalidInput)?;
        Some(Scenario::from_json(&text)?)
    } else {
        None
    };

    let mut scenario = match loaded {
        Some(scenario) => {
            if !input.groups.is_empty() {
                ui::warn_parameter_unused(err, "group")?;
            }
            scenario
        }
        None => {
            if input.groups.is_empty() {
                return Err(CliError::InvalidInput(
                    "at least one --group, --preset or --scenario is required".into(),
                ));
            }
            let groups = parse_group_specs(&input.groups).map_err(CliError::InvalidInput)?;
            Scenario::new(DeckConfig::new(cfg.deck_size, cfg.hand_size), groups)
        }
    };

    if let Some(deck) = input.deck {
        scenario.deck.total_cards = deck;
    }
    if let Some(hand) = input.hand {
        scenario.deck.hand_size = hand;
    }
    debug!(
        total_cards = scenario.deck.total_cards,
        hand_size = scenario.deck.hand_size,
        groups = scenario.groups.len(),
        "resolved scenario"
    );
    Ok(scenario)
}
