//! Compressed sparse row (CSR) matrix.
//!
//! Layout:
//!   row_ptr  = prefix sum of per-row entry counts, length rows + 1
//!   col_idx  = column of each stored entry, grouped by row, ascending
//!   values   = stored entries, parallel to col_idx
//!
//!   row r occupies col_idx[row_ptr[r] .. row_ptr[r + 1]]

use std::mem::size_of;

use crate::error::{DrillError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    rows: usize,
    cols: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<f32>,
}

impl CsrMatrix {
    /// Builds a matrix from `(row, col, value)` triplets.
    ///
    /// The shape is the largest row and column seen plus one. Repeated
    /// coordinates are summed. An empty triplet list has no shape and is an
    /// error, as is a shape whose dense size does not fit in `usize`.
    pub fn from_triplets(triplets: &[(usize, usize, f32)]) -> Result<Self> {
        if triplets.is_empty() {
            return Err(DrillError::EmptyTriplets);
        }

        let max_row = triplets.iter().map(|&(r, _, _)| r).max().unwrap_or(0);
        let max_col = triplets.iter().map(|&(_, c, _)| c).max().unwrap_or(0);
        let overflow = || DrillError::ShapeOverflow {
            row: max_row,
            col: max_col,
        };
        let rows = max_row.checked_add(1).ok_or_else(overflow)?;
        let cols = max_col.checked_add(1).ok_or_else(overflow)?;

        Self::with_shape(rows, cols, triplets)
    }

    /// Builds a `rows x cols` matrix from triplets, rejecting any entry that
    /// falls outside the shape. Unlike [`CsrMatrix::from_triplets`], an empty
    /// list is fine and yields an all-zero matrix.
    pub fn with_shape(rows: usize, cols: usize, triplets: &[(usize, usize, f32)]) -> Result<Self> {
        let overflow = || DrillError::ShapeOverflow {
            row: rows.saturating_sub(1),
            col: cols.saturating_sub(1),
        };
        let ptr_len = rows.checked_add(1).ok_or_else(overflow)?;
        rows.checked_mul(cols)
            .and_then(|cells| cells.checked_mul(size_of::<f32>()))
            .ok_or_else(overflow)?;

        if let Some(&(row, col, _)) = triplets.iter().find(|&&(r, c, _)| r >= rows || c >= cols) {
            return Err(DrillError::OutOfShape {
                row,
                col,
                shape: (rows, cols),
            });
        }

        let mut sorted = triplets.to_vec();
        sorted.sort_by_key(|&(r, c, _)| (r, c));

        let mut row_ptr: Vec<usize> = Vec::new();
        row_ptr.try_reserve_exact(ptr_len).map_err(|_| overflow())?;
        row_ptr.resize(ptr_len, 0);
        let mut col_idx: Vec<usize> = Vec::with_capacity(sorted.len());
        let mut values: Vec<f32> = Vec::with_capacity(sorted.len());
        let mut last: Option<(usize, usize)> = None;

        for (r, c, v) in sorted {
            if last == Some((r, c)) {
                if let Some(slot) = values.last_mut() {
                    *slot += v;
                }
                continue;
            }
            col_idx.push(c);
            values.push(v);
            row_ptr[r + 1] += 1;
            last = Some((r, c));
        }

        for r in 0..rows {
            row_ptr[r + 1] += row_ptr[r];
        }

        Ok(Self {
            rows,
            cols,
            row_ptr,
            col_idx,
            values,
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        if row >= self.rows || col >= self.cols {
            return 0.0;
        }
        let (cols, values) = self.row(row);
        cols.binary_search(&col).map_or(0.0, |pos| values[pos])
    }

    /// Column indices and values stored in `row`.
    pub fn row(&self, row: usize) -> (&[usize], &[f32]) {
        let start = self.row_ptr[row];
        let end = self.row_ptr[row + 1];
        (&self.col_idx[start..end], &self.values[start..end])
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().map(|&v| f64::from(v)).sum()
    }

    /// Bytes held by the three CSR arrays.
    pub fn memory_bytes(&self) -> usize {
        self.row_ptr.len() * size_of::<usize>()
            + self.col_idx.len() * size_of::<usize>()
            + self.values.len() * size_of::<f32>()
    }

    /// Bytes a dense `f32` matrix of the same shape would need.
    pub fn dense_memory_bytes(&self) -> usize {
        self.rows * self.cols * size_of::<f32>()
    }

    pub fn to_dense(&self) -> Vec<Vec<f32>> {
        let mut dense = vec![vec![0.0; self.cols]; self.rows];
        for (r, dense_row) in dense.iter_mut().enumerate() {
            let (cols, values) = self.row(r);
            for (&c, &v) in cols.iter().zip(values) {
                dense_row[c] = v;
            }
        }
        dense
    }
}
