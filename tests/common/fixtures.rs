//! Shared fixtures: on-disk artifact pairs for end-to-end pipeline tests.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use candle_core::{Device, Tensor};
use tempfile::TempDir;

use revlens::classifier::{ClassifierConfig, ReviewClassifier};
use revlens::constants::feature_dim;
use revlens::embedding::EmbeddingTable;
use revlens::pipeline::ReviewPipeline;

/// Fixture vocabulary, two dimensions per vector.
pub const FIXTURE_DIM: usize = 2;

/// Writes a small word2vec-format embedding table and returns its path.
pub fn write_embeddings(dir: &Path) -> PathBuf {
    let path = dir.join("embeddings.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "4 {}", FIXTURE_DIM).unwrap();
    writeln!(file, "great 1.0 0.0").unwrap();
    writeln!(file, "terrible 3.0 0.0").unwrap();
    writeln!(file, "product 0.0 2.0").unwrap();
    writeln!(file, "love 0.5 0.5").unwrap();
    path
}

/// Writes linear classifier weights deciding purely on the rating feature:
/// decision = rating - 3.5 (rating >= 4 classifies as Fake).
pub fn write_classifier(dir: &Path) -> PathBuf {
    let device = Device::Cpu;
    let input_dim = feature_dim(FIXTURE_DIM);

    let mut weight = vec![0.0_f32; input_dim];
    weight[0] = 1.0;

    let mut tensors = HashMap::new();
    tensors.insert(
        "classifier.weight".to_string(),
        Tensor::from_vec(weight, (1, input_dim), &device).unwrap(),
    );
    tensors.insert(
        "classifier.bias".to_string(),
        Tensor::from_vec(vec![-3.5_f32], (1,), &device).unwrap(),
    );

    let path = dir.join("classifier.safetensors");
    candle_core::safetensors::save(&tensors, &path).unwrap();
    path
}

/// Loads both fixture artifacts from disk and builds a pipeline, the same
/// startup path the CLI takes.
pub fn fixture_pipeline(dir: &TempDir) -> ReviewPipeline {
    let embeddings_path = write_embeddings(dir.path());
    let classifier_path = write_classifier(dir.path());

    let table = Arc::new(EmbeddingTable::load(embeddings_path).unwrap());
    let classifier = ReviewClassifier::load(ClassifierConfig::new(
        classifier_path,
        feature_dim(table.dim()),
    ))
    .unwrap();

    ReviewPipeline::new(table, classifier).unwrap()
}
