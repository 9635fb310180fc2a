//! Tokenizer — normalizes raw text into lowercase ASCII-alphanumeric tokens.

/// Lowercases `text`, blanks every character outside `[a-z0-9]` and whitespace,
/// then splits on whitespace. Empty input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
