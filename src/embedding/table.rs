use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::EmbeddingError;

/// Pre-trained word-embedding table: token → fixed-dimension vector.
///
/// Loaded once at startup from a word2vec-format text file and held
/// read-only for the process lifetime. All vectors share one dimension,
/// enforced at load time so lookups never need to re-check it.
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
    vectors: HashMap<String, Vec<f32>>,
    dim: usize,
}

impl EmbeddingTable {
    /// Loads a table from the word2vec text format: an optional
    /// `vocab_size dim` header line, then one `token v1 .. vD` line per
    /// entry. Load failures are fatal (startup-time) errors.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EmbeddingError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EmbeddingError::TableNotFound {
                path: PathBuf::from(path),
            });
        }

        let reader = BufReader::new(File::open(path)?);
        let table = Self::parse(reader)?;

        info!(
            path = %path.display(),
            vocab_size = table.len(),
            dim = table.dim(),
            "Embedding table loaded"
        );

        Ok(table)
    }

    fn parse<R: BufRead>(reader: R) -> Result<Self, EmbeddingError> {
        let mut vectors: HashMap<String, Vec<f32>> = HashMap::new();
        let mut dim: Option<usize> = None;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let mut fields = trimmed.split_whitespace();
            let token = fields
                .next()
                .ok_or_else(|| EmbeddingError::ParseFailed {
                    line: line_no,
                    reason: "missing token".to_string(),
                })?
                .to_string();

            let values: Vec<f32> = fields
                .map(|field| {
                    field.parse::<f32>().map_err(|e| EmbeddingError::ParseFailed {
                        line: line_no,
                        reason: format!("invalid value '{}': {}", field, e),
                    })
                })
                .collect::<Result<_, _>>()?;

            // word2vec header line: "vocab_size dim" (token parses as a count)
            if line_no == 1 && values.len() == 1 && token.parse::<usize>().is_ok() {
                debug!(vocab_size = %token, "Skipping word2vec header line");
                continue;
            }

            if values.is_empty() {
                return Err(EmbeddingError::ParseFailed {
                    line: line_no,
                    reason: format!("token '{}' has no vector values", token),
                });
            }

            match dim {
                None => dim = Some(values.len()),
                Some(expected) if expected != values.len() => {
                    return Err(EmbeddingError::DimensionMismatch {
                        line: line_no,
                        expected,
                        actual: values.len(),
                    });
                }
                Some(_) => {}
            }

            vectors.insert(token, values);
        }

        let dim = dim.ok_or(EmbeddingError::EmptyTable)?;
        Ok(Self { vectors, dim })
    }

    /// Builds a table from in-memory pairs (tests and fixtures).
    ///
    /// All vectors must share one dimension; the table must be non-empty.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, EmbeddingError>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut vectors: HashMap<String, Vec<f32>> = HashMap::new();
        let mut dim: Option<usize> = None;

        for (idx, (token, values)) in pairs.into_iter().enumerate() {
            match dim {
                None if !values.is_empty() => dim = Some(values.len()),
                None => {
                    return Err(EmbeddingError::ParseFailed {
                        line: idx + 1,
                        reason: "empty vector".to_string(),
                    });
                }
                Some(expected) if expected != values.len() => {
                    return Err(EmbeddingError::DimensionMismatch {
                        line: idx + 1,
                        expected,
                        actual: values.len(),
                    });
                }
                Some(_) => {}
            }
            vectors.insert(token.into(), values);
        }

        let dim = dim.ok_or(EmbeddingError::EmptyTable)?;
        Ok(Self { vectors, dim })
    }

    /// Looks up a token's vector. Out-of-vocabulary tokens return `None`.
    pub fn get(&self, token: &str) -> Option<&[f32]> {
        self.vectors.get(token).map(Vec::as_slice)
    }

    /// Returns `true` if the token is in the vocabulary.
    pub fn contains(&self, token: &str) -> bool {
        self.vectors.contains_key(token)
    }

    /// Vector dimension shared by every entry.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Returns `true` if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
