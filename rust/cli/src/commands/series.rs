//! Probability-versus-copies series for chart rendering.

use std::io::Write;

use drawodds_engine::series::{generate_scaled_series, generate_series, optimal_point};

use crate::cli::{DeckArgs, SweepMode};
use crate::error::CliError;
use crate::formatters::{format_deck, format_series_row};

/// Handle the series command.
///
/// `max` falls back to the configured sweep length. Text output is one row
/// per point followed by the optimal point; `--json` prints the points with
/// the optimal point alongside.
pub fn handle_series_command(
    input: &DeckArgs,
    max: Option<u32>,
    mode: SweepMode,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = super::load_config(err)?;
    let scenario = super::resolve_scenario(input, &cfg, err)?;
    let max = max.unwrap_or(cfg.series_max);

    let points = match mode {
        SweepMode::Focused => generate_series(&scenario.deck, &scenario.groups, max),
        SweepMode::Scaled => generate_scaled_series(&scenario.deck, &scenario.groups, max),
    };
    let optimal = optimal_point(&points);

    if json {
        let display = serde_json::json!({
            "mode": mode.as_str(),
            "points": points,
            "optimal": optimal,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
        return Ok(());
    }

    writeln!(out, "{} ({} sweep)", format_deck(&scenario.deck), mode.as_str())?;
    if points.is_empty() {
        writeln!(out, "No group has copies to sweep.")?;
        return Ok(());
    }
    for point in &points {
        writeln!(out, "{}", format_series_row(point))?;
    }
    if let Some(best) = optimal {
        writeln!(out, "Optimal point: {}", best.label)?;
    }
    Ok(())
}
