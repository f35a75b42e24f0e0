//! Cross-cutting, shared constants.
//!
//! The fallback values here are business policy, not incidental defaults:
//! a review whose rating cannot be parsed is scored as if it carried the
//! scale midpoint, and a review with no embeddable text is labelled `Real`
//! without consulting the classifier. Both are overridable per pipeline via
//! [`PipelinePolicy`](crate::pipeline::PipelinePolicy).

use crate::review::Label;

/// Default word-embedding dimension, matching the pre-trained table this
/// crate ships against. The real dimension always comes from the loaded
/// artifact; this is only the fallback for configs built without one.
pub const DEFAULT_EMBEDDING_DIM: usize = 100;

/// Rating substituted when the raw rating cannot be parsed as a number.
/// Midpoint of the 1-5 star scale.
pub const NEUTRAL_RATING: f32 = 3.0;

/// Label assigned to degenerate input (no token resolves in the embedding
/// table), bypassing the classifier entirely.
pub const DEGENERATE_LABEL: Label = Label::Real;

/// Number of scalar features prepended to the text vector: rating and
/// token count, in that order.
pub const RATING_LENGTH_FEATURES: usize = 2;

/// Classifier input dimension for a given embedding dimension.
///
/// The classifier was trained on the layout `[rating, token_count, *text]`,
/// so its expected input is always the embedding dimension plus
/// [`RATING_LENGTH_FEATURES`].
pub const fn feature_dim(embedding_dim: usize) -> usize {
    embedding_dim + RATING_LENGTH_FEATURES
}
