#![allow(clippy::needless_range_loop)]
//! Sparse adjacency matrix backed by sprs.
//!
//! Stores the matrix in CSR form: `row_ptr[i]..row_ptr[i + 1]` indexes
//! into `col_indices` and `values` for row `i`, with column indices
//! strictly increasing inside every row.

use sprs::{CsMatI, TriMat};

use crate::dense::DenseMatrix;

/// A sparse matrix wrapper around sprs CSR format.
#[derive(Debug, Clone)]
pub struct SparseMatrix {
    inner: CsMatI<f64, usize>,
    nrows: usize,
    ncols: usize,
}

impl SparseMatrix {
    /// Create a sparse matrix from COO (coordinate) triplets.
    ///
    /// Triplets sharing a coordinate are summed into one stored entry.
    pub fn from_triplets(
        nrows: usize,
        ncols: usize,
        rows: &[usize],
        cols: &[usize],
        vals: &[f64],
    ) -> Self {
        assert_eq!(rows.len(), cols.len());
        assert_eq!(rows.len(), vals.len());
        let mut tri = TriMat::with_capacity((nrows, ncols), rows.len());
        for i in 0..rows.len() {
            tri.add_triplet(rows[i], cols[i], vals[i]);
        }
        let csr = tri.to_csr();
        Self {
            inner: csr,
            nrows,
            ncols,
        }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.inner.nnz()
    }

    /// Get element at (row, col). Returns 0.0 if not stored.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        match self.inner.get(row, col) {
            Some(&v) => v,
            None => 0.0,
        }
    }

    /// Row pointer offsets, length `nrows + 1`.
    pub fn row_ptr(&self) -> Vec<usize> {
        self.inner.indptr().to_proper().into_owned()
    }

    /// Column index of every stored entry, row-major.
    pub fn col_indices(&self) -> &[usize] {
        self.inner.indices()
    }

    /// Value of every stored entry, row-major.
    pub fn values(&self) -> &[f64] {
        self.inner.data()
    }

    /// Iterate over every stored `(row, col, value)` in row-major order.
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.inner
            .outer_iterator()
            .enumerate()
            .flat_map(|(i, row)| row.iter().map(move |(j, &v)| (i, j, v)).collect::<Vec<_>>())
    }

    /// Expand into a dense matrix of the same shape.
    pub fn to_dense(&self) -> DenseMatrix {
        let mut dense = DenseMatrix::zeros(self.nrows, self.ncols);
        for (i, j, v) in self.triplets() {
            dense.set(i, j, v);
        }
        dense
    }

    /// Sum of each row. For an adjacency matrix this is the degree vector.
    pub fn row_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.nrows];
        for (i, _, v) in self.triplets() {
            sums[i] += v;
        }
        sums
    }

    /// Extract the diagonal entries.
    pub fn diag(&self) -> Vec<f64> {
        let n = self.nrows.min(self.ncols);
        let mut d = vec![0.0; n];
        for i in 0..n {
            d[i] = self.get(i, i);
        }
        d
    }

    /// Exact symmetry check over stored entries.
    pub fn is_symmetric(&self) -> bool {
        self.nrows == self.ncols && self.triplets().all(|(i, j, v)| self.get(j, i) == v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_triplets() {
        let m = SparseMatrix::from_triplets(2, 2, &[0, 1], &[0, 1], &[3.0, 7.0]);
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.get(0, 0), 3.0);
        assert_eq!(m.get(1, 1), 7.0);
        assert_eq!(m.get(0, 1), 0.0);
    }

    #[test]
    fn test_duplicate_triplets_are_summed() {
        let m = SparseMatrix::from_triplets(2, 2, &[0, 0, 1], &[1, 1, 0], &[1.0, 1.0, 2.0]);
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(1, 0), 2.0);
    }

    #[test]
    fn test_csr_layout() {
        // [0 1 1]
        // [1 0 0]
        // [1 0 2]
        let m = SparseMatrix::from_triplets(
            3,
            3,
            &[2, 0, 1, 0, 2],
            &[0, 2, 0, 1, 2],
            &[1.0, 1.0, 1.0, 1.0, 2.0],
        );
        assert_eq!(m.row_ptr(), vec![0, 2, 3, 5]);
        assert_eq!(m.col_indices(), &[1, 2, 0, 0, 2]);
        assert_eq!(m.values(), &[1.0, 1.0, 1.0, 1.0, 2.0]);
        assert_eq!(m.row_sums(), vec![2.0, 1.0, 3.0]);
        assert_eq!(m.diag(), vec![0.0, 0.0, 2.0]);
        assert!(m.is_symmetric());
    }

    #[test]
    fn test_to_dense() {
        let m = SparseMatrix::from_triplets(2, 2, &[0, 1, 1], &[1, 0, 1], &[3.0, 3.0, 1.0]);
        assert_eq!(m.to_dense(), DenseMatrix::from_row_major(2, 2, &[0.0, 3.0, 3.0, 1.0]));
    }

    #[test]
    fn test_empty() {
        let m = SparseMatrix::from_triplets(0, 0, &[], &[], &[]);
        assert_eq!(m.nrows(), 0);
        assert_eq!(m.nnz(), 0);
        assert_eq!(m.row_ptr(), vec![0]);
        assert_eq!(m.to_dense().nrows(), 0);
    }
}
