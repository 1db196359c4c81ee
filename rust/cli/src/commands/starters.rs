//! "At least one starter" reference table.

use std::io::Write;

use drawodds_engine::starters::{marginal_gains, starter_table};
use drawodds_engine::DeckConfig;

use crate::error::CliError;
use crate::formatters::format_deck;

/// Handle the starters command. `deck` and `hand` fall back to configuration.
pub fn handle_starters_command(
    deck: Option<u32>,
    hand: Option<u32>,
    max: u32,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = super::load_config(err)?;
    let deck = DeckConfig::new(deck.unwrap_or(cfg.deck_size), hand.unwrap_or(cfg.hand_size));

    let rows = starter_table(&deck, max);
    let gains = marginal_gains(&rows);

    if json {
        let display = serde_json::json!({
            "totalCards": deck.total_cards,
            "handSize": deck.hand_size,
            "rows": rows,
            "gains": gains,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
        return Ok(());
    }

    writeln!(out, "{}", format_deck(&deck))?;
    writeln!(out, "Starters  Probability     Gain")?;
    for (i, row) in rows.iter().enumerate() {
        let gain = match i.checked_sub(1).and_then(|j| gains.get(j)) {
            Some(g) => format!("{:+.2}", g),
            None => "-".to_string(),
        };
        writeln!(out, "{:>8}  {:>10.2}%  {:>7}", row.starters, row.probability, gain)?;
    }
    Ok(())
}
