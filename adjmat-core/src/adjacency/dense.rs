//! Dense adjacency matrix construction.
//!
//! M[i,j] = number of edges between i and j, with M symmetric and a
//! self-loop at i contributing 1 to M[i,i].

use adjmat_linalg::dense::DenseMatrix;
use tracing::debug;

use super::fits_allocation;
use crate::edge::{normalize_edges, Edge, NormalizedEdges};
use crate::error::{GraphError, Result};

/// Extra rows allowed for faer's padded column stride.
const COLUMN_STRIDE_HEADROOM: usize = 64;

/// Convert an undirected edge list to a dense adjacency matrix.
///
/// The order is `max vertex id + 1`; an empty edge list gives a `0 x 0`
/// matrix.
pub fn edge_list_to_adj_matrix(edges: &[Edge]) -> Result<DenseMatrix> {
    let normalized = normalize_edges(edges)?;
    dense_from_normalized(&normalized)
}

/// Build the dense matrix from already normalized edges.
pub fn dense_from_normalized(normalized: &NormalizedEdges) -> Result<DenseMatrix> {
    let n = normalized.n();
    let cells = n
        .checked_add(COLUMN_STRIDE_HEADROOM)
        .and_then(|rows| rows.checked_mul(n));
    if !cells.is_some_and(fits_allocation::<f64>) {
        return Err(GraphError::TooLarge { n: n as u64 });
    }

    let mut adj = DenseMatrix::zeros(n, n);
    for &(i, j, w) in normalized.triples() {
        adj.set(i, j, w);
    }

    debug!(
        "Dense adjacency: {} edges -> {}x{} ({} non-zero)",
        normalized.n_edges(),
        n,
        n,
        normalized.triples().len()
    );

    Ok(adj)
}
