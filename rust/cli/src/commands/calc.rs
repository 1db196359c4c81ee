//! Probability calculation for a single deck configuration.

use std::io::Write;

use drawodds_engine::probability::evaluate;
use drawodds_engine::rating::{badge_tone, consistency_rating, progress_tone};

use crate::cli::DeckArgs;
use crate::error::CliError;
use crate::formatters::{
    format_deck, format_group, format_percentage, format_progress_bar, format_rating,
};
use crate::ui;

const BAR_WIDTH: usize = 20;

/// Handle the calc command.
///
/// Prints the deck, each group with its target, the combined probability and
/// its rating. An undefined result is not an error: the probability prints as
/// `n/a` and a warning on `err` says why.
pub fn handle_calc_command(
    input: &DeckArgs,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = super::load_config(err)?;
    let scenario = super::resolve_scenario(input, &cfg, err)?;
    let deck = scenario.deck;
    let groups = &scenario.groups;

    let probability = match evaluate(&deck, groups) {
        Ok(p) => Some(p),
        Err(reason) => {
            ui::display_warning(err, &format!("Nothing to calculate: {}", reason))?;
            None
        }
    };

    if json {
        let display = serde_json::json!({
            "totalCards": deck.total_cards,
            "handSize": deck.hand_size,
            "groups": groups,
            "probability": probability,
            "percentage": probability.map(|p| (p * 100.0 * 100.0).round() / 100.0),
            "rating": consistency_rating(probability).map(|r| r.label()),
            "badge": badge_tone(probability),
            "progress": progress_tone(probability),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
        return Ok(());
    }

    writeln!(out, "{}", format_deck(&deck))?;
    writeln!(out, "Groups:")?;
    for group in groups {
        writeln!(out, "  {}", format_group(group))?;
    }
    match probability {
        Some(_) => {
            writeln!(
                out,
                "Probability: {} {}",
                format_percentage(probability),
                format_progress_bar(probability, BAR_WIDTH)
            )?;
            writeln!(out, "Rating: {}", format_rating(probability))?;
        }
        None => writeln!(out, "Probability: {}", format_percentage(None))?,
    }
    Ok(())
}
