//! adjmat: edge list to adjacency matrix conversion.
//!
//! CLI entry point using clap for argument parsing.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "adjmat",
    version,
    about = "Convert undirected edge lists to adjacency matrices",
    long_about = "Reads a plain-text edge list and writes its adjacency matrix,\n\
                   either dense (TSV) or sparse (MatrixMarket / CSR JSON)."
)]
struct Cli {
    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the dense n x n adjacency matrix as TSV
    Dense(commands::dense::DenseArgs),

    /// Write the sparse adjacency matrix as MatrixMarket (and optionally CSR JSON)
    Sparse(commands::sparse::SparseArgs),

    /// Print a structural summary of the graph
    Stats(commands::stats::StatsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("adjmat v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Dense(args) => commands::dense::run(args),
        Commands::Sparse(args) => commands::sparse::run(args),
        Commands::Stats(args) => commands::stats::run(args),
    }
}
