//! Adjacency matrix writers and a MatrixMarket reader.
//!
//! Three output layouts:
//! - dense TSV: one matrix row per line, tab-separated
//! - MatrixMarket: `coordinate real symmetric`, upper triangle, 1-indexed
//! - CSR JSON: `{ nrows, ncols, row_ptr, col_indices, values }`

use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use adjmat_linalg::{DenseMatrix, SparseMatrix};

/// Write a dense matrix as tab-separated rows.
pub fn write_dense_tsv<W: Write>(matrix: &DenseMatrix, out: &mut W) -> Result<()> {
    write!(out, "{}", matrix)?;
    Ok(())
}

/// Write a dense matrix to a TSV file.
pub fn save_dense_tsv(matrix: &DenseMatrix, path: &Path) -> Result<()> {
    let f = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(f);
    write_dense_tsv(matrix, &mut writer)?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Write a symmetric sparse matrix in MatrixMarket coordinate format.
///
/// Only the upper triangle (including the diagonal) is written.
pub fn write_matrix_market(matrix: &SparseMatrix, path: &Path) -> Result<()> {
    let f = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut f = BufWriter::new(f);
    writeln!(f, "%%MatrixMarket matrix coordinate real symmetric")?;

    let entries: Vec<(usize, usize, f64)> =
        matrix.triplets().filter(|&(i, j, _)| j >= i).collect();

    writeln!(f, "{} {} {}", matrix.nrows(), matrix.ncols(), entries.len())?;
    for (i, j, v) in entries {
        writeln!(f, "{} {} {}", i + 1, j + 1, v)?; // 1-indexed
    }
    f.flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Read a symmetric MatrixMarket coordinate file.
///
/// Off-diagonal entries are mirrored into the lower triangle.
pub fn read_matrix_market(path: &Path) -> Result<SparseMatrix> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read MatrixMarket file: {}", path.display()))?;

    let mut dims: Option<(usize, usize)> = None;
    let mut rows = Vec::new();
    let mut cols = Vec::new();
    let mut vals = Vec::new();

    for (line_idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();

        let Some((nrows, ncols)) = dims else {
            // First non-comment line is dimensions: nrows ncols nnz
            if fields.len() != 3 {
                bail!("line {}: expected 'nrows ncols nnz' header", line_idx + 1);
            }
            dims = Some((fields[0].parse()?, fields[1].parse()?));
            continue;
        };

        if fields.len() != 3 {
            bail!("line {}: expected 'row col value'", line_idx + 1);
        }
        let row: usize = fields[0].parse()?;
        let col: usize = fields[1].parse()?;
        let val: f64 = fields[2].parse()?;
        if row == 0 || col == 0 || row > nrows || col > ncols {
            bail!(
                "line {}: entry ({}, {}) outside {}x{} matrix",
                line_idx + 1,
                row,
                col,
                nrows,
                ncols
            );
        }
        let (row, col) = (row - 1, col - 1);
        rows.push(row);
        cols.push(col);
        vals.push(val);
        if row != col {
            rows.push(col);
            cols.push(row);
            vals.push(val);
        }
    }

    let Some((nrows, ncols)) = dims else {
        bail!("{}: missing MatrixMarket size header", path.display());
    };
    Ok(SparseMatrix::from_triplets(nrows, ncols, &rows, &cols, &vals))
}

/// Serializable view of a CSR matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsrDocument {
    pub nrows: usize,
    pub ncols: usize,
    pub row_ptr: Vec<usize>,
    pub col_indices: Vec<usize>,
    pub values: Vec<f64>,
}

impl CsrDocument {
    pub fn from_sparse(matrix: &SparseMatrix) -> Self {
        Self {
            nrows: matrix.nrows(),
            ncols: matrix.ncols(),
            row_ptr: matrix.row_ptr(),
            col_indices: matrix.col_indices().to_vec(),
            values: matrix.values().to_vec(),
        }
    }
}

/// Save the CSR arrays as pretty-printed JSON.
pub fn write_csr_json(matrix: &SparseMatrix, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&CsrDocument::from_sparse(matrix))?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
