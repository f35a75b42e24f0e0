//! Text normalization.
//!
//! Turns raw review text into the ordered token sequence the embedding
//! lookup operates on: lowercased, punctuation stripped, whitespace
//! collapsed. Pure functions, no configuration.


/// Normalizes raw review text into tokens.
///
/// Every non-alphanumeric character is treated as a token boundary, so
/// punctuation disappears and runs of whitespace collapse. Empty or
/// whitespace-only input yields an empty token list, not an error.
///
/// Output invariant: every token is non-empty, lowercase, and contains no
/// whitespace.
pub fn normalize(text: &str) -> Vec<String> {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            cleaned.extend(c.to_lowercase());
        } else {
            cleaned.push(' ');
        }
    }

    cleaned.split_whitespace().map(str::to_string).collect()
}
