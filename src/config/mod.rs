//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `REVLENS_*` environment
//! variables. Artifact paths left unset put the classifier in stub mode
//! (useful for tests and smoke runs, never for real classification).

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::NEUTRAL_RATING;

/// Process configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `REVLENS_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the word2vec-format embedding table.
    pub embeddings_path: Option<PathBuf>,

    /// Path to the classifier safetensors weights.
    pub classifier_path: Option<PathBuf>,

    /// Rating substituted for unparseable ratings. Default: `3.0`.
    pub neutral_rating: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            embeddings_path: None,
            classifier_path: None,
            neutral_rating: NEUTRAL_RATING,
        }
    }
}

impl Config {
    const ENV_EMBEDDINGS_PATH: &'static str = "REVLENS_EMBEDDINGS_PATH";
    const ENV_CLASSIFIER_PATH: &'static str = "REVLENS_CLASSIFIER_PATH";
    const ENV_NEUTRAL_RATING: &'static str = "REVLENS_NEUTRAL_RATING";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let embeddings_path = Self::parse_optional_path_from_env(Self::ENV_EMBEDDINGS_PATH);
        let classifier_path = Self::parse_optional_path_from_env(Self::ENV_CLASSIFIER_PATH);
        let neutral_rating =
            Self::parse_f32_from_env(Self::ENV_NEUTRAL_RATING, defaults.neutral_rating)?;

        Ok(Self {
            embeddings_path,
            classifier_path,
            neutral_rating,
        })
    }

    /// Validates configured paths (does not load the artifacts).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for path in [&self.embeddings_path, &self.classifier_path]
            .into_iter()
            .flatten()
        {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `true` if both artifact paths are configured.
    pub fn artifacts_configured(&self) -> bool {
        self.embeddings_path.is_some() && self.classifier_path.is_some()
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_f32_from_env(var_name: &'static str, default: f32) -> Result<f32, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::InvalidNumber {
                name: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }
}
