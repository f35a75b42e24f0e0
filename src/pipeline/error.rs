use thiserror::Error;

use crate::classifier::ClassifierError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error(
        "classifier input dimension ({classifier_dim}) does not match \
         embedding dimension + {extra} ({expected})"
    )]
    ArtifactMismatch {
        classifier_dim: usize,
        extra: usize,
        expected: usize,
    },
}
