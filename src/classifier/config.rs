use std::path::PathBuf;

use crate::constants::{DEFAULT_EMBEDDING_DIM, feature_dim};

use super::error::ClassifierError;

/// Default classifier input dimension (embedding dim + rating + length).
pub const DEFAULT_INPUT_DIM: usize = feature_dim(DEFAULT_EMBEDDING_DIM);

#[derive(Debug, Clone)]
/// Configuration for [`ReviewClassifier`](super::ReviewClassifier).
pub struct ClassifierConfig {
    /// Path to the safetensors weights file.
    pub weights_path: PathBuf,
    /// Expected feature vector dimension.
    pub input_dim: usize,
    /// If true, run in deterministic stub mode (no weights file required).
    pub testing_stub: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            weights_path: PathBuf::new(),
            input_dim: DEFAULT_INPUT_DIM,
            testing_stub: false,
        }
    }
}

impl ClassifierConfig {
    /// Creates a config for a weights file with the given input dimension.
    pub fn new<P: Into<PathBuf>>(weights_path: P, input_dim: usize) -> Self {
        Self {
            weights_path: weights_path.into(),
            input_dim,
            testing_stub: false,
        }
    }

    /// Creates a stub config (no weights file; deterministic decisions).
    pub fn stub(input_dim: usize) -> Self {
        Self {
            weights_path: PathBuf::new(),
            input_dim,
            testing_stub: true,
        }
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.input_dim <= crate::constants::RATING_LENGTH_FEATURES {
            return Err(ClassifierError::InvalidConfig {
                reason: format!(
                    "input_dim ({}) leaves no room for a text vector",
                    self.input_dim
                ),
            });
        }

        if self.testing_stub {
            return Ok(());
        }

        if self.weights_path.as_os_str().is_empty() {
            return Err(ClassifierError::InvalidConfig {
                reason: "weights_path is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.weights_path.exists() {
            return Err(ClassifierError::WeightsNotFound {
                path: self.weights_path.clone(),
            });
        }

        Ok(())
    }
}
