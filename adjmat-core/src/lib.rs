//! adjmat-core: Edge list to adjacency matrix conversion
//!
//! Turns an undirected edge list into a dense or a compressed-row
//! adjacency matrix. Both converters share one normalization step that
//! validates vertex ids, sizes the matrix, and accumulates mirrored,
//! deduplicated weights.

pub mod adjacency;
pub mod edge;
pub mod error;
pub mod stats;

pub use adjacency::dense::edge_list_to_adj_matrix;
pub use adjacency::sparse::edge_list_to_adj_matrix_sparse;
pub use edge::{edges_from_rows, normalize_edges, Edge, NormalizedEdges};
pub use error::{GraphError, Result};
pub use stats::GraphStats;
