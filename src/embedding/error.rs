use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding table not found at path: {path}")]
    TableNotFound { path: PathBuf },

    #[error("failed to read embedding table: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed embedding table at line {line}: {reason}")]
    ParseFailed { line: usize, reason: String },

    #[error("dimension mismatch at line {line}: expected {expected}, got {actual}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("embedding table contains no vectors")]
    EmptyTable,
}
