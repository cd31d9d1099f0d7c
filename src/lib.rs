//! Algorithm drills
//!
//! A small library of introductory algorithm and data-structure exercises,
//! each solved several ways so the complexity trade-offs can be compared
//! side by side.
//!
//! ## Paired-sum search
//! The core of the crate is [`pairs`]: given integers and a target, find
//! positions (or values) that add up to it.
//!
//! ```
//! use algo_drills::pairs::{find_all_index_pairs, PairedSumSolver, Strategy};
//!
//! let nums = [1, 3, 2, 2, 4, 0, 3];
//! let solver = PairedSumSolver::new(&nums);
//! assert!(solver.first_pair(Strategy::Hashing, 4).is_some());
//!
//! let all: Vec<_> = find_all_index_pairs(&nums, 4)
//!     .into_iter()
//!     .map(|p| p.as_tuple())
//!     .collect();
//! assert_eq!(all, vec![(0, 1), (0, 6), (2, 3), (4, 5)]);
//! ```
//!
//! ## Other drills
//! - [`windows`]: sliding-window maximum/minimum, moving average
//! - [`frequency`]: grouping, counting and heap-based top-k
//! - [`sequences`]: dedupe, rotation, sorted insertion, flattening
//! - [`streaming`]: chunked CSV reads with bounded memory
//! - [`sparse`]: CSR matrices built from triplets
//! - [`reference`]: collection complexity cheat sheet
//! - [`bench`]: quick wall-clock comparisons, configured by [`config`]

pub mod bench;
pub mod config;
pub mod error;
pub mod frequency;
pub mod pairs;
pub mod reference;
pub mod sequences;
pub mod sparse;
pub mod streaming;
pub mod windows;

pub use crate::config::BenchConfig;
pub use crate::error::{DrillError, Result};
pub use crate::pairs::{IndexPair, PairedSumSolver, Strategy, Triplet, ValuePair};
