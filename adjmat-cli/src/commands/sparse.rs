//! Sparse adjacency matrix output.
//!
//! adjmat sparse --edges graph.edges --output-prefix out/graph [--json]

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use tracing::info;

use adjmat_core::edge_list_to_adj_matrix_sparse;
use adjmat_io::edge_list::read_edge_list;
use adjmat_io::matrix_io::{write_csr_json, write_matrix_market};

#[derive(Args)]
pub struct SparseArgs {
    /// Edge list file (one "u v" pair per line)
    #[arg(long)]
    edges: PathBuf,

    /// Output file prefix
    #[arg(long)]
    output_prefix: PathBuf,

    /// Also write the CSR arrays as JSON (<prefix>.csr.json)
    #[arg(long)]
    json: bool,
}

/// Append `suffix` to `prefix`, keeping any dots already in the prefix.
fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut path = prefix.as_os_str().to_owned();
    path.push(suffix);
    PathBuf::from(path)
}

pub fn run(args: SparseArgs) -> Result<()> {
    info!("=== Sparse adjacency matrix ===");

    let edges = read_edge_list(&args.edges)?;
    let adj = edge_list_to_adj_matrix_sparse(&edges)?;

    let mtx_path = with_suffix(&args.output_prefix, ".mtx");
    write_matrix_market(&adj, &mtx_path)?;
    info!(
        "Sparse matrix saved to {}: {}x{}, {} stored entries",
        mtx_path.display(),
        adj.nrows(),
        adj.ncols(),
        adj.nnz()
    );

    if args.json {
        let json_path = with_suffix(&args.output_prefix, ".csr.json");
        write_csr_json(&adj, &json_path)?;
        info!("CSR JSON saved to {}", json_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_suffix_keeps_dots() {
        assert_eq!(
            with_suffix(Path::new("out/graph.v1"), ".mtx"),
            PathBuf::from("out/graph.v1.mtx")
        );
        assert_eq!(
            with_suffix(Path::new("graph"), ".csr.json"),
            PathBuf::from("graph.csr.json")
        );
    }

    #[test]
    fn test_run_writes_mtx_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let edges = dir.path().join("graph.edges");
        std::fs::write(&edges, "0 1\n1 2\n2 2\n").unwrap();
        let prefix = dir.path().join("graph.v1");

        run(SparseArgs {
            edges,
            output_prefix: prefix.clone(),
            json: true,
        })
        .unwrap();

        let mtx = std::fs::read_to_string(with_suffix(&prefix, ".mtx")).unwrap();
        assert!(mtx.lines().any(|l| l == "3 3 3"));
        assert!(with_suffix(&prefix, ".csr.json").exists());
        assert!(!dir.path().join("graph.mtx").exists());
    }

    #[test]
    fn test_run_rejects_negative_vertex() {
        let dir = tempfile::tempdir().unwrap();
        let edges = dir.path().join("graph.edges");
        std::fs::write(&edges, "-1 0\n").unwrap();

        let err = run(SparseArgs {
            edges,
            output_prefix: dir.path().join("graph"),
            json: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("non-negative"));
        assert!(!dir.path().join("graph.mtx").exists());
    }
}
