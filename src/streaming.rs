//! Bounded-memory CSV processing.
//!
//! Records are pulled in fixed-size chunks so only one chunk is resident at
//! a time, however large the file is.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use log::{debug, info, warn};
use serde::Serialize;

use crate::error::{DrillError, Result};

// =============================================================================
// Chunked reading
// =============================================================================

/// Iterator over a CSV source yielding chunks of at most `chunk_size`
/// records. A `chunk_size` of zero yields nothing.
pub struct ChunkedRecords<R> {
    reader: Reader<R>,
    chunk_size: usize,
    done: bool,
}

impl<R: io::Read> ChunkedRecords<R> {
    pub fn new(reader: Reader<R>, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size,
            done: false,
        }
    }

    /// Reads CSV with a header row. Rows may have differing lengths.
    pub fn from_reader(source: R, chunk_size: usize) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);
        Self::new(reader, chunk_size)
    }

    pub fn headers(&mut self) -> Result<&StringRecord> {
        Ok(self.reader.headers()?)
    }
}

impl<R: io::Read> Iterator for ChunkedRecords<R> {
    type Item = Result<Vec<StringRecord>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.chunk_size == 0 {
            return None;
        }

        let mut chunk = Vec::with_capacity(self.chunk_size);
        let mut record = StringRecord::new();
        while chunk.len() < self.chunk_size {
            match self.reader.read_record(&mut record) {
                Ok(true) => chunk.push(record.clone()),
                Ok(false) => {
                    self.done = true;
                    break;
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err.into()));
                }
            }
        }

        if chunk.is_empty() {
            None
        } else {
            Some(Ok(chunk))
        }
    }
}

// =============================================================================
// Column sum
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnSum {
    pub column: String,
    pub total: f64,
    /// Cells that parsed as numbers and were added.
    pub parsed: usize,
    /// Cells that were empty, missing or not numeric.
    pub skipped: usize,
    pub chunks: usize,
}

/// Sums a named numeric column chunk by chunk.
///
/// Unparseable, empty and missing cells are skipped rather than failing the
/// whole read. A header without `column` is an error.
pub fn column_sum<R: io::Read>(source: R, column: &str, chunk_size: usize) -> Result<ColumnSum> {
    let mut summary = ColumnSum {
        column: column.to_string(),
        ..Default::default()
    };
    if chunk_size == 0 {
        warn!("chunk size 0 for column '{column}', nothing read");
        return Ok(summary);
    }

    let mut chunks = ChunkedRecords::from_reader(source, chunk_size);
    let headers = chunks.headers()?;
    let position = headers.iter().position(|h| h.trim() == column).ok_or_else(|| {
        DrillError::MissingColumn {
            column: column.to_string(),
            header: headers.iter().map(str::to_string).collect(),
        }
    })?;

    for chunk in chunks {
        let chunk = chunk?;
        summary.chunks += 1;
        for record in &chunk {
            match record.get(position).and_then(parse_numeric) {
                Some(value) => {
                    summary.total += value;
                    summary.parsed += 1;
                }
                None => summary.skipped += 1,
            }
        }
        debug!(
            "chunk {}: {} rows, running total {}",
            summary.chunks,
            chunk.len(),
            summary.total
        );
    }

    info!(
        "summed column '{}': {} values, {} skipped, {} chunks",
        column, summary.parsed, summary.skipped, summary.chunks
    );
    Ok(summary)
}

pub fn column_sum_path(path: &Path, column: &str, chunk_size: usize) -> Result<ColumnSum> {
    let file = File::open(path)?;
    column_sum(BufReader::new(file), column, chunk_size)
}

fn parse_numeric(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SALES: &str = "id,amount,region\n\
        1,10.5,north\n\
        2,4,south\n\
        3,oops,east\n\
        4,,west\n\
        5,-2.5,north\n";

    #[test]
    fn test_chunked_records_sizes() {
        let chunks: Vec<_> = ChunkedRecords::from_reader(SALES.as_bytes(), 2)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        let sizes: Vec<usize> = chunks.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn test_chunked_records_zero_chunk() {
        assert_eq!(ChunkedRecords::from_reader(SALES.as_bytes(), 0).count(), 0);
    }

    #[test]
    fn test_column_sum_skips_bad_cells() {
        let summary = column_sum(SALES.as_bytes(), "amount", 2).unwrap();
        assert_eq!(summary.total, 12.0);
        assert_eq!(summary.parsed, 3);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.chunks, 3);
    }

    #[test]
    fn test_column_sum_chunk_size_does_not_change_total() {
        let small = column_sum(SALES.as_bytes(), "amount", 1).unwrap();
        let large = column_sum(SALES.as_bytes(), "amount", 1_000).unwrap();
        assert_eq!(small.total, large.total);
        assert_eq!(large.chunks, 1);
    }

    #[test]
    fn test_column_sum_missing_column() {
        let err = column_sum(SALES.as_bytes(), "price", 10).unwrap_err();
        assert!(matches!(err, DrillError::MissingColumn { ref column, .. } if column == "price"));
    }

    #[test]
    fn test_column_sum_short_rows() {
        let data = "a,b\n1,2\n3\n5,6\n";
        let summary = column_sum(data.as_bytes(), "b", 10).unwrap();
        assert_eq!(summary.total, 8.0);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_column_sum_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SALES.as_bytes()).unwrap();
        let summary = column_sum_path(file.path(), "id", 4).unwrap();
        assert_eq!(summary.total, 15.0);
    }

    #[test]
    fn test_column_sum_path_missing_file() {
        let err = column_sum_path(Path::new("/definitely/not/here.csv"), "id", 4).unwrap_err();
        assert!(matches!(err, DrillError::Io(_)));
    }
}
