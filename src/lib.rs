//! Revlens library crate (used by the CLI and integration tests).
//!
//! Classifies product reviews as genuine or computer-generated. The core
//! is a fixed linear pipeline per review:
//!
//! ```text
//! normalize → aggregate (mean word embedding) → fuse (+ rating, length) → classify
//! ```
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Review`], [`RawRating`], [`Label`], [`Verdict`] - Domain types
//! - [`Config`], [`ConfigError`] - Environment-backed configuration
//!
//! ## Artifacts
//! - [`EmbeddingTable`], [`EmbeddingError`] - Pre-trained word embeddings
//! - [`ReviewClassifier`], [`ClassifierConfig`] - Pre-trained binary classifier
//!
//! Both artifacts are loaded once at startup and shared read-only for the
//! process lifetime; load failures are fatal, never per-review.
//!
//! ## Pipeline
//! - [`ReviewPipeline`], [`PipelinePolicy`] - Batch orchestration with
//!   explicit fallback policy (neutral rating, degenerate-input label)
//!
//! ## Constants
//! Policy defaults ([`NEUTRAL_RATING`], [`DEGENERATE_LABEL`]) and the
//! feature layout contract ([`RATING_LENGTH_FEATURES`], [`feature_dim`]).

pub mod classifier;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod features;
pub mod normalize;
pub mod pipeline;
pub mod review;

pub use classifier::{ClassifierConfig, ClassifierError, DEFAULT_INPUT_DIM, ReviewClassifier};
pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_EMBEDDING_DIM, DEGENERATE_LABEL, NEUTRAL_RATING, RATING_LENGTH_FEATURES, feature_dim,
};
pub use embedding::{EmbeddingError, EmbeddingTable, mean_vector};
pub use features::{fuse, parse_rating};
pub use normalize::normalize;
pub use pipeline::{PipelineError, PipelinePolicy, ReviewPipeline};
pub use review::{Label, RawRating, Review, Verdict};
