use fob_alias::AliasDefinition;

/// Parse a `NAME=DIR` alias definition.
///
/// The split happens at the first `=`, so directories may contain `=`.
///
/// # Errors
///
/// Returns an error message when either side is empty or `=` is missing.
pub fn parse_alias(s: &str) -> Result<AliasDefinition, String> {
    s.parse::<AliasDefinition>().map_err(|e| e.to_string())
}

/// Parse a file extension, accepting an optional leading dot.
///
/// # Examples
///
/// Valid: ts, .tsx, mjs
/// Invalid: "", ".", src/ts
pub fn parse_extension(s: &str) -> Result<String, String> {
    let ext = s.trim().trim_start_matches('.');

    if ext.is_empty() {
        return Err("Extension cannot be empty".to_string());
    }

    if ext.contains(['/', '\\']) {
        return Err(format!("Extension cannot contain a path separator: '{}'", s));
    }

    Ok(ext.to_string())
}
