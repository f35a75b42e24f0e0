use tracing::debug;

use super::table::EmbeddingTable;

/// Reduces a token sequence to one text vector by element-wise arithmetic
/// mean over the tokens found in the table.
///
/// Out-of-vocabulary tokens are dropped, not zero-filled; the mean is taken
/// over resolved vectors only so a review's length does not scale the
/// result. Returns `None` when no token resolves — the caller's degenerate
/// input policy takes over from there.
pub fn mean_vector(table: &EmbeddingTable, tokens: &[String]) -> Option<Vec<f32>> {
    let mut sum = vec![0.0_f32; table.dim()];
    let mut resolved = 0usize;

    for token in tokens {
        if let Some(vector) = table.get(token) {
            for (acc, value) in sum.iter_mut().zip(vector) {
                *acc += value;
            }
            resolved += 1;
        }
    }

    if resolved == 0 {
        debug!(token_count = tokens.len(), "No tokens resolved in vocabulary");
        return None;
    }

    let count = resolved as f32;
    for value in &mut sum {
        *value /= count;
    }

    debug!(
        token_count = tokens.len(),
        resolved,
        "Aggregated text vector"
    );

    Some(sum)
}
