//! adjmat-io: Edge list input and matrix output for adjmat
//!
//! Reads plain-text edge lists and writes adjacency matrices as dense
//! TSV, MatrixMarket coordinate files, or CSR JSON.

pub mod edge_list;
pub mod matrix_io;

pub use edge_list::{parse_edge_list, read_edge_list};
