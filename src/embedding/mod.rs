//! Pre-trained word embeddings.
//!
//! - [`table`] loads and holds the token → vector mapping.
//! - [`aggregate`] pools per-token vectors into one vector per review.

pub mod aggregate;
mod error;
pub mod table;


pub use aggregate::mean_vector;
pub use error::EmbeddingError;
pub use table::EmbeddingTable;
