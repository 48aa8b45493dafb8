//! Value and name normalization shared by the parser and the executor.
//!
//! Values are untyped text. Literals that appear in WHERE conditions and in
//! UPDATE assignments go through [`sanitize_literal`], which keeps only ASCII
//! letters, digits and underscores, so `'New-York'` compares as `NewYork` and
//! `35.5` as `355`. INSERT values are stored as written (minus their quotes).

/// Strips every character that is not an ASCII letter, digit or underscore.
///
/// The surrounding quotes of a string literal have already been removed by
/// the lexer by the time a literal gets here.
pub fn sanitize_literal(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Column names must match `[A-Za-z][A-Za-z0-9_]*`.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Normalizes a database or table name: trimmed, lowercased, with anything
/// outside `[a-z0-9_]` removed. Returns `None` if nothing is left.
pub fn clean_name(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_lowercase();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
