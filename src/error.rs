use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the fallible surfaces of the crate.
///
/// The pair-search and window algorithms never fail: "not found" is an
/// empty result. Only file-backed helpers, configuration and the sparse
/// matrix builder return this type.
#[derive(Error, Debug)]
pub enum DrillError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column '{column}' not found in header {header:?}")]
    MissingColumn { column: String, header: Vec<String> },

    #[error("Cannot build a sparse matrix from an empty triplet list")]
    EmptyTriplets,

    #[error("Sparse matrix shape with largest index ({row}, {col}) does not fit in memory")]
    ShapeOverflow { row: usize, col: usize },

    #[error("Entry ({row}, {col}) lies outside a {shape:?} matrix")]
    OutOfShape {
        row: usize,
        col: usize,
        shape: (usize, usize),
    },

    #[error("Failed to read config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Invalid value for config field '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Unknown strategy '{name}' (expected one of: {expected})")]
    UnknownStrategy { name: String, expected: String },
}

impl DrillError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for DrillError {
    fn from(err: toml::de::Error) -> Self {
        DrillError::Config {
            path: PathBuf::new(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;
