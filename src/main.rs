//! Revlens CLI entrypoint.
//!
//! Reads a JSON array of reviews on stdin, writes one JSON verdict per
//! review on stdout (input order preserved). Artifacts are loaded once at
//! startup from `REVLENS_*` paths; load failures are fatal.

use std::io::Read;
use std::sync::Arc;

use revlens::classifier::{ClassifierConfig, ReviewClassifier};
use revlens::config::Config;
use revlens::constants::feature_dim;
use revlens::embedding::EmbeddingTable;
use revlens::pipeline::{PipelinePolicy, ReviewPipeline};
use revlens::review::Review;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let table = match &config.embeddings_path {
        Some(path) => Arc::new(EmbeddingTable::load(path)?),
        None => anyhow::bail!(
            "REVLENS_EMBEDDINGS_PATH is not set; an embedding table is required"
        ),
    };

    let classifier_config = match &config.classifier_path {
        Some(path) => ClassifierConfig::new(path.clone(), feature_dim(table.dim())),
        None => {
            tracing::warn!(
                "No REVLENS_CLASSIFIER_PATH configured, running classifier in stub mode"
            );
            ClassifierConfig::stub(feature_dim(table.dim()))
        }
    };
    let classifier = ReviewClassifier::load(classifier_config)?;

    let policy = PipelinePolicy {
        neutral_rating: config.neutral_rating,
        ..Default::default()
    };
    let pipeline = ReviewPipeline::with_policy(table, classifier, policy)?;

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let reviews: Vec<Review> = serde_json::from_str(&input)?;

    tracing::info!(batch_size = reviews.len(), "Classifying reviews");
    let verdicts = pipeline.classify_batch(&reviews)?;

    serde_json::to_writer_pretty(std::io::stdout(), &verdicts)?;
    println!();

    Ok(())
}
