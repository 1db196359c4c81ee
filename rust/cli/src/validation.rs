//! Input parsing and validation for command-line group definitions.
//!
//! Groups are given on the command line as `[NAME=]COPIES[:MIN[:MAX]]`:
//! - `Hand Traps=18:1:3` → 18 copies, want 1 to 3 in hand
//! - `Starters=15:1` → 15 copies, want exactly 1 (MAX unset falls back to MIN)
//! - `3` → unnamed, 3 copies, want exactly 1
//!
//! ## Error Handling
//!
//! Parse failures come back as `Err(String)` with a message naming the
//! offending part, ready to wrap in `CliError::InvalidInput`.

use drawodds_engine::CardGroup;

/// Minimum wanted when a spec omits it, matching a freshly added group.
pub const DEFAULT_MIN_NEEDED: u32 = 1;

/// Parse one `[NAME=]COPIES[:MIN[:MAX]]` group spec.
///
/// # Example
///
/// ```rust
/// # use drawodds_cli::validation::parse_group_spec;
/// use drawodds_engine::CardGroup;
///
/// assert_eq!(
///     parse_group_spec("Hand Traps=18:1:3"),
///     Ok(CardGroup::new("Hand Traps", 18, 1, 3))
/// );
/// assert_eq!(parse_group_spec("3"), Ok(CardGroup::new("", 3, 1, 0)));
/// assert!(parse_group_spec("x=three").is_err());
/// ```
pub fn parse_group_spec(input: &str) -> Result<CardGroup, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty group spec".to_string());
    }

    let (name, counts) = match input.rsplit_once('=') {
        Some((name, counts)) => (name.trim(), counts.trim()),
        None => ("", input),
    };

    let parts: Vec<&str> = counts.split(':').map(str::trim).collect();
    if parts.len() > 3 {
        return Err(format!(
            "Too many fields in '{}' (expected COPIES[:MIN[:MAX]])",
            input
        ));
    }

    let field = |idx: usize, what: &str| -> Result<Option<u32>, String> {
        match parts.get(idx) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<u32>()
                .map(Some)
                .map_err(|_| format!("Invalid {} '{}' in group '{}'", what, raw, input)),
        }
    };

    let copies = field(0, "copies")?.unwrap_or(0);
    let min_needed = field(1, "minimum")?.unwrap_or(DEFAULT_MIN_NEEDED);
    let max_needed = field(2, "maximum")?.unwrap_or(0);

    if max_needed > 0 && max_needed < min_needed {
        return Err(format!(
            "Maximum {} is below minimum {} in group '{}'",
            max_needed, min_needed, input
        ));
    }

    Ok(CardGroup::new(name, copies, min_needed, max_needed))
}

/// Parse every spec, stopping at the first failure.
pub fn parse_group_specs(specs: &[String]) -> Result<Vec<CardGroup>, String> {
    specs.iter().map(|s| parse_group_spec(s)).collect()
}
