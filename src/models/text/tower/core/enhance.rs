//! Row enhancement: uppercasing, space substitution, separators.

/// Enhances every raw row independently.
pub(super) fn enhance_rows(rows: Vec<String>) -> Vec<String> {
    rows.iter().map(|row| enhance_row(row)).collect()
}

/// Uppercases the row, shows internal spaces as asterisks, and separates
/// its characters with single spaces.
///
/// A row of `n` characters becomes `2n - 1` characters; the empty row maps
/// to the empty string. No leading or trailing space is added.
fn enhance_row(row: &str) -> String {
    let tokens: Vec<String> = row.chars().map(token).map(String::from).collect();
    tokens.join(" ")
}

/// Maps one raw character to its rendered token.
///
/// Uppercasing is a locale-invariant, character-by-character ASCII mapping.
/// Characters without a single-character ASCII uppercase form pass through
/// unchanged, preserving the one-token-per-character invariant.
fn token(c: char) -> char {
    if c == ' ' { '*' } else { c.to_ascii_uppercase() }
}
