//! Lists the prebuilt scenarios.

use std::io::Write;

use drawodds_engine::presets;

use crate::error::CliError;
use crate::formatters::{format_deck, format_group, format_percentage};

pub fn handle_presets_command(json: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let all = presets::all();

    if json {
        let display: Vec<serde_json::Value> = all
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.id,
                    "name": p.name,
                    "scenario": p.scenario,
                    "probability": p.scenario.probability(),
                })
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
        return Ok(());
    }

    for preset in &all {
        writeln!(
            out,
            "{:<18} {:>7}  {}",
            preset.id,
            format_percentage(preset.scenario.probability()),
            preset.name
        )?;
        writeln!(out, "{:<18} {}", "", format_deck(&preset.scenario.deck))?;
        for group in preset.scenario.groups.iter().filter(|g| g.copies > 0) {
            writeln!(out, "{:<18}   {}", "", format_group(group))?;
        }
    }
    Ok(())
}
