//! Graph summary.
//!
//! adjmat stats --edges graph.edges

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use adjmat_core::{edge_list_to_adj_matrix_sparse, GraphStats};
use adjmat_io::edge_list::read_edge_list;

#[derive(Args)]
pub struct StatsArgs {
    /// Edge list file (one "u v" pair per line)
    #[arg(long)]
    edges: PathBuf,
}

fn summarize(path: &Path) -> Result<String> {
    let edges = read_edge_list(path)?;
    let adj = edge_list_to_adj_matrix_sparse(&edges)?;
    let stats = GraphStats::from_sparse(&adj);

    Ok(format!(
        "Edge list: {}\n\
         Input edges: {}\n\
         Vertices: {}\n\
         Total edge weight: {}\n\
         Stored entries: {}\n\
         Self-loop weight: {}\n\
         Isolated vertices: {}\n\
         Max degree: {}\n\
         Density: {:.6}",
        path.display(),
        edges.len(),
        stats.n_vertices,
        stats.total_weight,
        stats.stored_entries,
        stats.self_loop_weight,
        stats.isolated_vertices,
        stats.max_degree(),
        stats.density,
    ))
}

pub fn run(args: StatsArgs) -> Result<()> {
    println!("{}", summarize(&args.edges)?);
    Ok(())
}
