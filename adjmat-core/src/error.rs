//! Error types for edge list conversion.

use thiserror::Error;

/// Result type alias using [`GraphError`].
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised while converting an edge list.
///
/// All of them are detected before any matrix storage is allocated, so a
/// failed conversion never yields a partially populated matrix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An input row is not a pair of integer vertex ids.
    #[error("Invalid input at edge {index}: {reason}")]
    InvalidInput { index: usize, reason: String },

    /// An edge references a negative vertex id.
    #[error("Invalid edge {index} ({u}, {v}): vertex ids must be non-negative")]
    InvalidEdge { index: usize, u: i64, v: i64 },

    /// The matrix order is not addressable on this platform.
    #[error("Adjacency matrix of order {n} is too large to allocate")]
    TooLarge { n: u64 },
}
