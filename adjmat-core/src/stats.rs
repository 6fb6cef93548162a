//! Summary statistics of an adjacency matrix.

use adjmat_linalg::sparse::SparseMatrix;

/// Structural summary of an undirected adjacency matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    /// Matrix order.
    pub n_vertices: usize,
    /// Total edge weight, each undirected edge counted once.
    pub total_weight: f64,
    /// Stored (non-zero) matrix entries.
    pub stored_entries: usize,
    /// Sum of the diagonal.
    pub self_loop_weight: f64,
    /// `stored_entries / n^2`, 0 for an empty matrix.
    pub density: f64,
    /// Row sums; a self-loop contributes its weight once.
    pub degrees: Vec<f64>,
    /// Vertices with no incident edge.
    pub isolated_vertices: usize,
}

impl GraphStats {
    /// Compute the summary from a sparse adjacency matrix.
    pub fn from_sparse(adj: &SparseMatrix) -> Self {
        let n = adj.nrows();
        let total_weight: f64 = adj
            .triplets()
            .filter(|&(i, j, _)| j >= i)
            .map(|(_, _, v)| v)
            .sum();
        let self_loop_weight: f64 = adj.diag().iter().sum();

        let degrees = adj.row_sums();
        let isolated_vertices = degrees.iter().filter(|&&d| d == 0.0).count();
        let density = if n == 0 {
            0.0
        } else {
            adj.nnz() as f64 / (n as f64 * n as f64)
        };

        Self {
            n_vertices: n,
            total_weight,
            stored_entries: adj.nnz(),
            self_loop_weight,
            density,
            degrees,
            isolated_vertices,
        }
    }

    /// Largest row sum, 0 for an empty matrix.
    pub fn max_degree(&self) -> f64 {
        self.degrees.iter().copied().fold(0.0, f64::max)
    }
}
