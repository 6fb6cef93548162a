//! Plain-text edge list reader.
//!
//! One edge per line, two integer vertex ids separated by whitespace
//! or a comma:
//! ```text
//! # triangle with a pendant vertex
//! 0 1
//! 1,2
//! 2 0
//! 2 3
//! ```
//! Blank lines and lines starting with `#` or `%` are skipped. Ids are
//! parsed as signed integers so that negative ids reach the converters
//! and are rejected there.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use adjmat_core::{edges_from_rows, Edge, GraphError};

/// Parse an edge list from text.
pub fn parse_edge_list(contents: &str) -> Result<Vec<Edge>> {
    let mut rows: Vec<Vec<i64>> = Vec::new();
    let mut line_numbers: Vec<usize> = Vec::new();

    for (line_idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('%') {
            continue;
        }

        let mut row = Vec::with_capacity(2);
        for token in line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let id: i64 = token.parse().map_err(|_| GraphError::InvalidInput {
                index: rows.len(),
                reason: format!(
                    "line {}: '{}' is not an integer vertex id",
                    line_idx + 1,
                    token
                ),
            })?;
            row.push(id);
        }
        rows.push(row);
        line_numbers.push(line_idx + 1);
    }

    let edges = edges_from_rows(&rows).map_err(|e| match e {
        GraphError::InvalidInput { index, reason } => GraphError::InvalidInput {
            index,
            reason: format!("line {}: {}", line_numbers[index], reason),
        },
        other => other,
    })?;

    Ok(edges)
}

/// Read an edge list file.
pub fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<Vec<Edge>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read edge list: {}", path.display()))?;
    let edges = parse_edge_list(&contents)
        .with_context(|| format!("Failed to parse edge list: {}", path.display()))?;
    info!("Read {} edges from {}", edges.len(), path.display());
    Ok(edges)
}
