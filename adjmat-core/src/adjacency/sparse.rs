//! Sparse adjacency matrix construction.
//!
//! Emits the normalized triples straight into CSR form. Normalization
//! already merged duplicate coordinates, so each stored entry is unique
//! and the row-major order of the triples gives ascending columns per row.

use adjmat_linalg::sparse::SparseMatrix;
use tracing::debug;

use super::fits_allocation;
use crate::edge::{normalize_edges, Edge, NormalizedEdges};
use crate::error::{GraphError, Result};

/// Convert an undirected edge list to a CSR adjacency matrix.
///
/// Logically identical to [`edge_list_to_adj_matrix`](super::dense::edge_list_to_adj_matrix);
/// only non-zero entries are stored.
pub fn edge_list_to_adj_matrix_sparse(edges: &[Edge]) -> Result<SparseMatrix> {
    let normalized = normalize_edges(edges)?;
    sparse_from_normalized(&normalized)
}

/// Build the sparse matrix from already normalized edges.
///
/// The row-pointer array holds `n + 1` offsets, so an order whose
/// pointers cannot be allocated is rejected up front.
pub fn sparse_from_normalized(normalized: &NormalizedEdges) -> Result<SparseMatrix> {
    let n = normalized.n();
    if !n.checked_add(1).is_some_and(fits_allocation::<usize>) {
        return Err(GraphError::TooLarge { n: n as u64 });
    }
    let (rows, cols, vals) = normalized.to_coo();
    let sparse = SparseMatrix::from_triplets(n, n, &rows, &cols, &vals);

    debug!(
        "Sparse adjacency: {} edges -> {}x{} ({} stored entries)",
        normalized.n_edges(),
        n,
        n,
        sparse.nnz()
    );

    Ok(sparse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::dense::edge_list_to_adj_matrix;

    #[test]
    fn test_csr_structure() {
        let m = edge_list_to_adj_matrix_sparse(&[(2, 0), (0, 1), (2, 2), (0, 1)]).unwrap();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.row_ptr(), vec![0, 2, 3, 5]);
        assert_eq!(m.col_indices(), &[1, 2, 0, 0, 2]);
        assert_eq!(m.values(), &[2.0, 1.0, 2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_duplicates_stored_once() {
        let m = edge_list_to_adj_matrix_sparse(&[(0, 1), (0, 1), (1, 0)]).unwrap();
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.get(0, 1), 3.0);
        assert_eq!(m.get(1, 0), 3.0);
    }

    #[test]
    fn test_self_loop_counted_once() {
        let m = edge_list_to_adj_matrix_sparse(&[(2, 2)]).unwrap();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.nnz(), 1);
        assert_eq!(m.get(2, 2), 1.0);
    }

    #[test]
    fn test_empty_is_zero_by_zero() {
        let m = edge_list_to_adj_matrix_sparse(&[]).unwrap();
        assert_eq!(m.nrows(), 0);
        assert_eq!(m.ncols(), 0);
        assert_eq!(m.nnz(), 0);
    }

    #[test]
    fn test_negative_vertex_rejected() {
        let err = edge_list_to_adj_matrix_sparse(&[(0, 1), (-1, 0)]).unwrap_err();
        assert_eq!(err, GraphError::InvalidEdge { index: 1, u: -1, v: 0 });
    }

    #[test]
    fn test_row_pointers_beyond_address_space_rejected() {
        let err = edge_list_to_adj_matrix_sparse(&[(0, i64::MAX)]).unwrap_err();
        assert_eq!(err, GraphError::TooLarge { n: 1 << 63 });
    }

    #[test]
    fn test_matches_dense() {
        let edges = [(0, 4), (4, 0), (1, 1), (3, 2), (2, 3), (0, 2)];
        let sparse = edge_list_to_adj_matrix_sparse(&edges).unwrap();
        let dense = edge_list_to_adj_matrix(&edges).unwrap();
        assert_eq!(sparse.to_dense(), dense);
    }
}
