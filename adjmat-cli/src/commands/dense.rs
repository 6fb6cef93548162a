//! Dense adjacency matrix output.
//!
//! adjmat dense --edges graph.edges [--output graph.tsv]

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use adjmat_core::edge_list_to_adj_matrix;
use adjmat_io::edge_list::read_edge_list;
use adjmat_io::matrix_io::{save_dense_tsv, write_dense_tsv};

#[derive(Args)]
pub struct DenseArgs {
    /// Edge list file (one "u v" pair per line)
    #[arg(long)]
    edges: PathBuf,

    /// Output TSV file (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub fn run(args: DenseArgs) -> Result<()> {
    info!("=== Dense adjacency matrix ===");

    let edges = read_edge_list(&args.edges)?;
    let adj = edge_list_to_adj_matrix(&edges)?;
    info!("Matrix order: {}", adj.nrows());

    match args.output {
        Some(path) => {
            save_dense_tsv(&adj, &path)?;
            info!("Dense matrix saved to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            write_dense_tsv(&adj, &mut stdout.lock())?;
        }
    }

    Ok(())
}
