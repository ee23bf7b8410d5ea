//! Tokenizer for the textual public-output vector.
//!
//! Provers print the output vector as `[1 0 3 00 01 02 ...]`. Separators may
//! be whitespace or commas; one pair of enclosing brackets is optional.

/// Splits a printed output vector into tokens.
///
/// # Example
///
/// ```rust
/// use hyle_core::tokens::tokenize;
///
/// assert_eq!(tokenize("[1 0 3 00, 01 02]"), vec!["1", "0", "3", "00", "01", "02"]);
/// assert!(tokenize("[]").is_empty());
/// ```
pub fn tokenize(input: &str) -> Vec<&str> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    inner
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect()
}
