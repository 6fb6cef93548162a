//! Edge validation and normalization.
//!
//! Both converters consume a [`NormalizedEdges`]: the matrix order plus
//! the accumulated `(row, col, weight)` triples in row-major order, one
//! per coordinate. The weighting policy lives here and only here:
//!
//! - an edge `(u, v)` with `u != v` adds 1 to `(u, v)` and to `(v, u)`
//! - a self-loop `(u, u)` adds 1 to `(u, u)` once
//! - parallel edges accumulate instead of collapsing to 1

use std::collections::BTreeMap;

use tracing::trace;

use crate::error::{GraphError, Result};

/// An undirected edge between two vertex ids.
///
/// Ids are signed so that negative input is representable and can be
/// rejected with [`GraphError::InvalidEdge`].
pub type Edge = (i64, i64);

/// Validate raw integer rows into edges.
///
/// Every row must hold exactly two vertex ids.
pub fn edges_from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Vec<Edge>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| match row.as_ref() {
            &[u, v] => Ok((u, v)),
            other => Err(GraphError::InvalidInput {
                index,
                reason: format!("expected 2 vertex ids, got {}", other.len()),
            }),
        })
        .collect()
}

/// Edge list reduced to matrix order and accumulated weights.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEdges {
    n: usize,
    n_edges: usize,
    triples: Vec<(usize, usize, f64)>,
}

impl NormalizedEdges {
    /// Matrix order: max vertex id + 1, or 0 for an empty edge list.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of input edges, duplicates included.
    pub fn n_edges(&self) -> usize {
        self.n_edges
    }

    /// Accumulated `(row, col, weight)` entries, row-major, unique per coordinate.
    pub fn triples(&self) -> &[(usize, usize, f64)] {
        &self.triples
    }

    /// Split the triples into parallel row, column and value vectors.
    pub fn to_coo(&self) -> (Vec<usize>, Vec<usize>, Vec<f64>) {
        let mut rows = Vec::with_capacity(self.triples.len());
        let mut cols = Vec::with_capacity(self.triples.len());
        let mut vals = Vec::with_capacity(self.triples.len());
        for &(i, j, w) in &self.triples {
            rows.push(i);
            cols.push(j);
            vals.push(w);
        }
        (rows, cols, vals)
    }
}

fn vertex_index(index: usize, u: i64, v: i64, id: i64) -> Result<usize> {
    if id < 0 {
        return Err(GraphError::InvalidEdge { index, u, v });
    }
    usize::try_from(id).map_err(|_| GraphError::TooLarge { n: id as u64 + 1 })
}

/// Validate an edge list and accumulate its adjacency weights.
///
/// Validation covers the whole list before anything is returned, so the
/// first offending edge (by position) is the one reported.
pub fn normalize_edges(edges: &[Edge]) -> Result<NormalizedEdges> {
    let mut weights: BTreeMap<(usize, usize), f64> = BTreeMap::new();
    let mut max_id: Option<usize> = None;

    for (index, &(u, v)) in edges.iter().enumerate() {
        let a = vertex_index(index, u, v, u)?;
        let b = vertex_index(index, u, v, v)?;
        max_id = Some(max_id.map_or(a.max(b), |m| m.max(a).max(b)));

        if a == b {
            *weights.entry((a, a)).or_insert(0.0) += 1.0;
        } else {
            *weights.entry((a, b)).or_insert(0.0) += 1.0;
            *weights.entry((b, a)).or_insert(0.0) += 1.0;
        }
    }

    let n = match max_id {
        Some(m) => m
            .checked_add(1)
            .ok_or(GraphError::TooLarge { n: u64::MAX })?,
        None => 0,
    };

    let triples: Vec<(usize, usize, f64)> =
        weights.into_iter().map(|((i, j), w)| (i, j, w)).collect();

    trace!(
        "Normalized {} edges: n={}, {} distinct entries",
        edges.len(),
        n,
        triples.len()
    );

    Ok(NormalizedEdges {
        n,
        n_edges: edges.len(),
        triples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_to_edges() {
        let rows = vec![vec![0, 1], vec![2, 2]];
        assert_eq!(edges_from_rows(&rows).unwrap(), vec![(0, 1), (2, 2)]);
    }

    #[test]
    fn test_rows_wrong_arity() {
        let rows: Vec<Vec<i64>> = vec![vec![0, 1], vec![1, 2, 3]];
        let err = edges_from_rows(&rows).unwrap_err();
        assert!(matches!(err, GraphError::InvalidInput { index: 1, .. }));

        let rows: Vec<Vec<i64>> = vec![vec![4]];
        assert!(matches!(
            edges_from_rows(&rows),
            Err(GraphError::InvalidInput { index: 0, .. })
        ));
    }

    #[test]
    fn test_normalize_mirrors_and_accumulates() {
        let norm = normalize_edges(&[(1, 0), (0, 1), (2, 2)]).unwrap();
        assert_eq!(norm.n(), 3);
        assert_eq!(norm.n_edges(), 3);
        assert_eq!(
            norm.triples(),
            &[(0, 1, 2.0), (1, 0, 2.0), (2, 2, 1.0)]
        );
    }

    #[test]
    fn test_normalize_empty() {
        let norm = normalize_edges(&[]).unwrap();
        assert_eq!(norm.n(), 0);
        assert!(norm.triples().is_empty());
    }

    #[test]
    fn test_normalize_rejects_negative() {
        let err = normalize_edges(&[(0, 1), (3, -2)]).unwrap_err();
        assert_eq!(err, GraphError::InvalidEdge { index: 1, u: 3, v: -2 });
    }

    #[test]
    fn test_to_coo() {
        let norm = normalize_edges(&[(0, 2)]).unwrap();
        let (rows, cols, vals) = norm.to_coo();
        assert_eq!(rows, vec![0, 2]);
        assert_eq!(cols, vec![2, 0]);
        assert_eq!(vals, vec![1.0, 1.0]);
    }
}
