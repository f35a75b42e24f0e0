//! Feature fusion.
//!
//! Combines the aggregated text vector with the parsed rating and the
//! normalized token count into the single feature vector the classifier
//! consumes.
//!
//! # Feature Vector Layout (D + 2 dimensions)
//!
//! | Index  | Feature                    |
//! |--------|----------------------------|
//! | 0      | Rating (parsed or neutral) |
//! | 1      | Token count                |
//! | 2..D+2 | Mean text vector           |
//!
//! The classifier was trained on exactly this layout; the order is part of
//! the artifact contract and must not change.

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::review::RawRating;

/// Parses a raw rating into a number, substituting `neutral` on any
/// failure. Partial-failure semantics: a malformed rating degrades to the
/// neutral default instead of failing the review.
pub fn parse_rating(raw: &RawRating, neutral: f32) -> f32 {
    match raw {
        RawRating::Number(value) if value.is_finite() => *value as f32,
        RawRating::Number(_) => neutral,
        RawRating::Text(text) => match text.trim().parse::<f32>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                debug!(rating = %text, "Unparseable rating, substituting neutral default");
                neutral
            }
        },
        RawRating::Absent => neutral,
    }
}

/// Builds the fused feature vector `[rating, token_count, *text_vector]`.
pub fn fuse(rating: f32, token_count: usize, text_vector: &[f32]) -> Vec<f32> {
    let mut features = Vec::with_capacity(crate::constants::feature_dim(text_vector.len()));
    features.push(rating);
    features.push(token_count as f32);
    features.extend_from_slice(text_vector);
    features
}
