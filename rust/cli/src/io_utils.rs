//! File helpers for scenario input.

/// Read a text file, dropping a leading UTF-8 BOM if present.
///
/// # Example
///
/// ```rust,no_run
/// # use drawodds_cli::io_utils::read_text;
/// let json = read_text("scenario.json").unwrap();
/// ```
pub fn read_text(path: &str) -> Result<String, String> {
    let mut content =
        std::fs::read_to_string(path).map_err(|e| format!("Cannot read {}: {}", path, e))?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Strip the U+FEFF byte order mark some editors put at the start of a file.
fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
