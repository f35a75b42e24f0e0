//! Review classification pipeline.
//!
//! Wires the stages together: normalize → aggregate → fuse → classify.
//! The pipeline owns no per-review state; the embedding table and
//! classifier are loaded once, shared read-only, and injected at
//! construction so tests can run against fixture artifacts.
//!
//! Data anomalies (malformed rating, empty text, fully out-of-vocabulary
//! text) degrade to the policy defaults and never abort a batch. Only
//! artifact-level failures (a broken classifier backend, mismatched
//! artifact dimensions) surface as errors.

mod error;


pub use error::PipelineError;

use std::sync::Arc;

use tracing::{debug, info};

use crate::classifier::ReviewClassifier;
use crate::constants::{DEGENERATE_LABEL, NEUTRAL_RATING, RATING_LENGTH_FEATURES, feature_dim};
use crate::embedding::{EmbeddingTable, mean_vector};
use crate::features::{fuse, parse_rating};
use crate::normalize::normalize;
use crate::review::{Label, Review, Verdict};

/// Fallback policy applied per review.
///
/// These are deliberate business defaults, not error handling: reviews
/// with unusable fields still get a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelinePolicy {
    /// Rating used when the raw rating cannot be parsed.
    pub neutral_rating: f32,
    /// Label assigned when no token resolves in the embedding table.
    pub degenerate_label: Label,
}

impl Default for PipelinePolicy {
    fn default() -> Self {
        Self {
            neutral_rating: NEUTRAL_RATING,
            degenerate_label: DEGENERATE_LABEL,
        }
    }
}

/// Review classification pipeline over shared, read-only artifacts.
#[derive(Debug)]
pub struct ReviewPipeline {
    table: Arc<EmbeddingTable>,
    classifier: ReviewClassifier,
    policy: PipelinePolicy,
}

impl ReviewPipeline {
    /// Creates a pipeline with the default policy.
    ///
    /// Fails if the classifier's expected input dimension does not match
    /// the embedding dimension plus the two scalar features; the artifacts
    /// were trained together and a mismatch means the wrong pair was
    /// loaded.
    pub fn new(
        table: Arc<EmbeddingTable>,
        classifier: ReviewClassifier,
    ) -> Result<Self, PipelineError> {
        Self::with_policy(table, classifier, PipelinePolicy::default())
    }

    /// Creates a pipeline with an explicit fallback policy.
    pub fn with_policy(
        table: Arc<EmbeddingTable>,
        classifier: ReviewClassifier,
        policy: PipelinePolicy,
    ) -> Result<Self, PipelineError> {
        let expected = feature_dim(table.dim());
        if classifier.input_dim() != expected {
            return Err(PipelineError::ArtifactMismatch {
                classifier_dim: classifier.input_dim(),
                extra: RATING_LENGTH_FEATURES,
                expected,
            });
        }

        info!(
            embedding_dim = table.dim(),
            vocab_size = table.len(),
            input_dim = classifier.input_dim(),
            "Review pipeline ready"
        );

        Ok(Self {
            table,
            classifier,
            policy,
        })
    }

    /// Classifies a single review.
    ///
    /// Degenerate input (no embeddable tokens) short-circuits to the
    /// policy label without invoking the classifier.
    pub fn classify(&self, review: &Review) -> Result<Label, PipelineError> {
        let tokens = normalize(&review.text);

        let Some(text_vector) = mean_vector(&self.table, &tokens) else {
            debug!(
                text_len = review.text.len(),
                token_count = tokens.len(),
                label = ?self.policy.degenerate_label,
                "Degenerate input, applying policy label"
            );
            return Ok(self.policy.degenerate_label);
        };

        let rating = parse_rating(&review.rating, self.policy.neutral_rating);
        let features = fuse(rating, tokens.len(), &text_vector);

        Ok(self.classifier.predict(&features)?)
    }

    /// Classifies a batch of reviews, one [`Verdict`] per input, input
    /// order preserved.
    ///
    /// Reviews are independent: per-review anomalies degrade via the
    /// policy and never abort the batch. Only a classifier backend
    /// failure (an artifact problem, not a data problem) errors out.
    pub fn classify_batch(&self, reviews: &[Review]) -> Result<Vec<Verdict>, PipelineError> {
        debug!(batch_size = reviews.len(), "Classifying review batch");

        reviews
            .iter()
            .map(|review| {
                let label = self.classify(review)?;
                Ok(Verdict {
                    text: review.text.clone(),
                    rating: review.rating.clone(),
                    label,
                })
            })
            .collect()
    }

    /// The shared embedding table.
    pub fn table(&self) -> &EmbeddingTable {
        &self.table
    }

    /// The classifier adapter.
    pub fn classifier(&self) -> &ReviewClassifier {
        &self.classifier
    }

    /// The active fallback policy.
    pub fn policy(&self) -> &PipelinePolicy {
        &self.policy
    }
}
