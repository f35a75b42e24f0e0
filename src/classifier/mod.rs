//! Pre-trained binary classifier adapter.
//!
//! Wraps the opaque decision artifact (a linear decision function exported
//! as safetensors) behind the one contract the pipeline needs: one feature
//! vector in, one [`Label`] out. Use [`ClassifierConfig::stub`] for
//! tests/examples without a weights file.

/// Classifier configuration.
pub mod config;
mod error;

#[cfg(test)]
mod tests;

pub use config::{ClassifierConfig, DEFAULT_INPUT_DIM};
pub use error::ClassifierError;

use candle_core::{DType, Device, Tensor};
use candle_nn::{Linear, Module, VarBuilder};
use tracing::{debug, info, warn};

use crate::review::Label;

enum ClassifierBackend {
    Model { linear: Linear, device: Device },
    Stub,
}

/// Binary fake-review classifier (supports stub mode).
///
/// The real backend is a linear decision function `w·x + b` loaded from a
/// safetensors artifact (`classifier.weight` of shape `[1, input_dim]` and
/// `classifier.bias` of shape `[1]`). A positive decision value maps to
/// raw output 1 ([`Label::Fake`]), otherwise 0 ([`Label::Real`]).
pub struct ReviewClassifier {
    backend: ClassifierBackend,
    config: ClassifierConfig,
}

impl std::fmt::Debug for ReviewClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewClassifier")
            .field(
                "backend",
                &match &self.backend {
                    ClassifierBackend::Model { device, .. } => format!("Model({:?})", device),
                    ClassifierBackend::Stub => "Stub".to_string(),
                },
            )
            .field("input_dim", &self.config.input_dim)
            .finish()
    }
}

impl ReviewClassifier {
    /// Loads the classifier from a config (stub mode is supported).
    pub fn load(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Classifier running in STUB mode (testing only)");
            return Ok(Self {
                backend: ClassifierBackend::Stub,
                config,
            });
        }

        let device = Device::Cpu;
        let linear = Self::load_linear(&config, &device)?;

        info!(
            weights_path = %config.weights_path.display(),
            input_dim = config.input_dim,
            "Classifier weights loaded"
        );

        Ok(Self {
            backend: ClassifierBackend::Model { linear, device },
            config,
        })
    }

    fn load_linear(config: &ClassifierConfig, device: &Device) -> Result<Linear, ClassifierError> {
        // SAFETY: memory-mapping safetensors is the standard candle pattern.
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(
                &[config.weights_path.clone()],
                DType::F32,
                device,
            )
            .map_err(|e| ClassifierError::LoadFailed {
                reason: format!("failed to mmap safetensors: {}", e),
            })?
        };

        candle_nn::linear(config.input_dim, 1, vb.pp("classifier")).map_err(|e| {
            ClassifierError::LoadFailed {
                reason: format!("failed to build decision layer: {}", e),
            }
        })
    }

    /// Classifies one fused feature vector.
    ///
    /// Rejects vectors whose dimension does not match the artifact's
    /// expected input; anything else is an inference error from the
    /// backend.
    pub fn predict(&self, features: &[f32]) -> Result<Label, ClassifierError> {
        if features.len() != self.config.input_dim {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.config.input_dim,
                actual: features.len(),
            });
        }

        let decision = match &self.backend {
            ClassifierBackend::Model { linear, device } => {
                self.decision_value(features, linear, device)?
            }
            ClassifierBackend::Stub => Self::stub_decision(features),
        };

        let label = Label::from_raw(u8::from(decision > 0.0));
        debug!(decision, ?label, "Classifier decision");
        Ok(label)
    }

    fn decision_value(
        &self,
        features: &[f32],
        linear: &Linear,
        device: &Device,
    ) -> Result<f32, ClassifierError> {
        let input = Tensor::new(features, device)?.unsqueeze(0)?;
        let output = linear.forward(&input)?;
        let values = output.flatten_all()?.to_vec1::<f32>()?;

        values
            .first()
            .copied()
            .ok_or_else(|| ClassifierError::InferenceFailed {
                reason: "decision layer produced no output".to_string(),
            })
    }

    /// Deterministic stand-in decision for stub mode: hash the feature bit
    /// patterns into a value in [-1, 1].
    fn stub_decision(features: &[f32]) -> f32 {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        for value in features {
            value.to_bits().hash(&mut hasher);
        }

        let state = hasher
            .finish()
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0
    }

    /// Expected feature vector dimension.
    pub fn input_dim(&self) -> usize {
        self.config.input_dim
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, ClassifierBackend::Stub)
    }

    /// Returns the classifier configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}
