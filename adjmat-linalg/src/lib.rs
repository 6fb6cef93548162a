//! adjmat-linalg: Matrix containers for adjmat
//!
//! Provides the dense (faer) and sparse (sprs CSR) matrix types that
//! the edge-list converters produce.

pub mod dense;
pub mod sparse;

pub use dense::DenseMatrix;
pub use sparse::SparseMatrix;
