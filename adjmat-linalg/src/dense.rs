#![allow(clippy::needless_range_loop)]
//! Dense adjacency matrix backed by faer.
//!
//! Wraps faer's column-major `Mat<f64>`. Adjacency matrices are square
//! and symmetric, so the layout never leaks into the public API: every
//! accessor takes `(row, col)` and row-major helpers exist for tests and
//! writers.

use faer::Mat;

/// A dense matrix wrapper around faer's `Mat<f64>`.
#[derive(Debug, Clone)]
pub struct DenseMatrix {
    inner: Mat<f64>,
}

impl DenseMatrix {
    /// Create a new dense matrix filled with zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            inner: Mat::zeros(nrows, ncols),
        }
    }

    /// Create a dense matrix from a flat slice in row-major order.
    pub fn from_row_major(nrows: usize, ncols: usize, data: &[f64]) -> Self {
        assert_eq!(data.len(), nrows * ncols);
        let inner = Mat::from_fn(nrows, ncols, |i, j| data[i * ncols + j]);
        Self { inner }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.inner.nrows()
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.inner.ncols()
    }

    /// Whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Get element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.inner.read(row, col)
    }

    /// Set element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.inner.write(row, col, value);
    }

    /// Extract row as a Vec<f64>.
    pub fn row(&self, i: usize) -> Vec<f64> {
        let m = self.ncols();
        let mut v = Vec::with_capacity(m);
        for j in 0..m {
            v.push(self.inner.read(i, j));
        }
        v
    }

    /// Sum of each row. For an adjacency matrix this is the degree vector.
    pub fn row_sums(&self) -> Vec<f64> {
        let n = self.nrows();
        let mut sums = vec![0.0; n];
        for j in 0..self.ncols() {
            for i in 0..n {
                sums[i] += self.inner.read(i, j);
            }
        }
        sums
    }

    /// Number of entries that are not exactly zero.
    pub fn count_nonzero(&self) -> usize {
        let mut count = 0;
        for j in 0..self.ncols() {
            for i in 0..self.nrows() {
                if self.inner.read(i, j) != 0.0 {
                    count += 1;
                }
            }
        }
        count
    }

    /// Exact symmetry check: `M[i][j] == M[j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.nrows();
        for j in 0..n {
            for i in (j + 1)..n {
                if self.inner.read(i, j) != self.inner.read(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Extract the data as a flat Vec in row-major order.
    pub fn to_row_major(&self) -> Vec<f64> {
        let mut data = Vec::with_capacity(self.nrows() * self.ncols());
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                data.push(self.inner.read(i, j));
            }
        }
        data
    }
}

impl PartialEq for DenseMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.nrows() == other.nrows()
            && self.ncols() == other.ncols()
            && self.to_row_major() == other.to_row_major()
    }
}

impl std::fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                if j > 0 {
                    write!(f, "\t")?;
                }
                let v = self.inner.read(i, j);
                if v.fract() == 0.0 {
                    write!(f, "{}", v as i64)?;
                } else {
                    write!(f, "{:.6}", v)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
