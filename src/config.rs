//! Benchmark configuration, read from TOML.
//!
//! ```toml
//! sizes = [1000, 5000]
//! reps = 2
//! seed = 42
//! brute_force_limit = 3000
//! container_size = 20000
//! container_trials = 3
//! sparse_rows = 5000
//! sparse_cols = 2000
//! sparse_density = 0.001
//! ```
//!
//! Every field is optional and falls back to the values above.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{DrillError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Input lengths for the pair-search timings.
    pub sizes: Vec<usize>,
    /// Repetitions averaged per measurement.
    pub reps: u32,
    pub seed: u64,
    /// Brute force is skipped above this input length.
    pub brute_force_limit: usize,
    pub container_size: usize,
    pub container_trials: u32,
    /// Shape of the sparse-vs-dense experiment matrix.
    pub sparse_rows: usize,
    pub sparse_cols: usize,
    /// Fraction of non-zero cells, in `(0, 1]`.
    pub sparse_density: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1_000, 5_000],
            reps: 2,
            seed: 42,
            brute_force_limit: 3_000,
            container_size: 20_000,
            container_trials: 3,
            sparse_rows: 5_000,
            sparse_cols: 2_000,
            sparse_density: 0.001,
        }
    }
}

impl BenchConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BenchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| DrillError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let config = Self::from_toml_str(&content).map_err(|err| match err {
            DrillError::Config { message, .. } => DrillError::Config {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;
        debug!("loaded bench config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(DrillError::invalid_config("sizes", "at least one size is required"));
        }
        if self.sizes.iter().any(|&n| n < 2) {
            return Err(DrillError::invalid_config("sizes", "every size must be at least 2"));
        }
        if self.reps == 0 {
            return Err(DrillError::invalid_config("reps", "must be greater than 0"));
        }
        if self.container_trials == 0 {
            return Err(DrillError::invalid_config(
                "container_trials",
                "must be greater than 0",
            ));
        }
        if self.sparse_rows == 0 || self.sparse_cols == 0 {
            return Err(DrillError::invalid_config(
                "sparse_rows",
                "sparse_rows and sparse_cols must be greater than 0",
            ));
        }
        if !(self.sparse_density > 0.0 && self.sparse_density <= 1.0) {
            return Err(DrillError::invalid_config(
                "sparse_density",
                format!("must be in (0, 1], got {}", self.sparse_density),
            ));
        }
        Ok(())
    }
}
