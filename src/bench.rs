//! Wall-clock micro-benchmarks for the drills.
//!
//! These are illustrative timings for the CLI, averaged over a few
//! repetitions. The criterion suites under `benches/` are the rigorous
//! counterpart.

use std::hint::black_box;
use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::config::BenchConfig;
use crate::error::Result;
use crate::pairs::{find_all_index_pairs, Strategy};
use crate::sparse::CsrMatrix;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyTiming {
    pub strategy: Strategy,
    /// Average seconds per call; `None` when the strategy was skipped.
    pub seconds: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwoSumTiming {
    pub n: usize,
    pub target: i64,
    pub strategies: Vec<StrategyTiming>,
    pub all_pairs_seconds: f64,
    pub all_pairs_found: usize,
}

impl TwoSumTiming {
    pub fn seconds_for(&self, strategy: Strategy) -> Option<f64> {
        self.strategies
            .iter()
            .find(|t| t.strategy == strategy)
            .and_then(|t| t.seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerTimings {
    pub n: usize,
    pub trials: u32,
    pub vec_membership_s: f64,
    pub set_membership_s: f64,
    pub vec_push_back_s: f64,
    pub vec_insert_front_s: f64,
}

/// Memory and timing of the same random matrix held sparse and dense.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparseTimings {
    pub rows: usize,
    pub cols: usize,
    pub density: f64,
    pub nnz: usize,
    pub dense_bytes: usize,
    pub sparse_bytes: usize,
    pub dense_build_s: f64,
    pub sparse_build_s: f64,
    pub dense_sum_s: f64,
    pub sparse_sum_s: f64,
    pub dense_sum: f64,
    pub sparse_sum: f64,
}

/// Average seconds per run of `f` over `reps` runs.
pub fn time_avg<F, R>(reps: u32, mut f: F) -> f64
where
    F: FnMut() -> R,
{
    let reps = reps.max(1);
    let start = Instant::now();
    for _ in 0..reps {
        black_box(f());
    }
    start.elapsed().as_secs_f64() / f64::from(reps)
}

/// Runs `f` once, returning its result and the elapsed seconds.
fn timed<F, R>(f: F) -> (R, f64)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let out = black_box(f());
    (out, start.elapsed().as_secs_f64())
}

/// `n` values drawn uniformly from `0..2n`.
pub fn random_input(rng: &mut StdRng, n: usize) -> Vec<i64> {
    let upper = (n as i64 * 2).max(1);
    (0..n).map(|_| rng.gen_range(0..upper)).collect()
}

/// A target guaranteed to have a solution: `nums[n/3] + nums[2n/3]`.
pub fn planted_target(nums: &[i64]) -> Option<i64> {
    let n = nums.len();
    if n < 2 {
        return None;
    }
    Some(nums[n / 3] + nums[2 * n / 3])
}

pub fn bench_two_sum(config: &BenchConfig) -> Vec<TwoSumTiming> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut rows = Vec::with_capacity(config.sizes.len());

    for &n in &config.sizes {
        let nums = random_input(&mut rng, n);
        let Some(target) = planted_target(&nums) else {
            continue;
        };

        let strategies = Strategy::ALL
            .iter()
            .map(|&strategy| {
                let skip = strategy == Strategy::BruteForce && n > config.brute_force_limit;
                let seconds = if skip {
                    debug!("skipping brute force for n={n}");
                    None
                } else {
                    Some(time_avg(config.reps, || strategy.find_first(&nums, target)))
                };
                StrategyTiming { strategy, seconds }
            })
            .collect();

        let mut all_pairs_found = 0;
        let all_pairs_seconds = time_avg(config.reps, || {
            let pairs = find_all_index_pairs(&nums, target);
            all_pairs_found = pairs.len();
            pairs
        });

        info!("two-sum n={n} target={target}: {all_pairs_found} pairs");
        rows.push(TwoSumTiming {
            n,
            target,
            strategies,
            all_pairs_seconds,
            all_pairs_found,
        });
    }
    rows
}

/// Linear membership vs hashed membership, and push at the back vs
/// insert at the front.
pub fn bench_container_ops(n: usize, trials: u32, seed: u64) -> ContainerTimings {
    let mut rng = StdRng::seed_from_u64(seed);
    let base: Vec<usize> = (0..n).collect();
    let lookups: Vec<usize> = (0..n / 5).map(|_| rng.gen_range(0..n.max(1))).collect();

    let vec_membership_s = time_avg(trials, || {
        lookups.iter().filter(|&&x| base.contains(&x)).count()
    });

    let set: FxHashSet<usize> = base.iter().copied().collect();
    let set_membership_s = time_avg(trials, || {
        lookups.iter().filter(|&&x| set.contains(&x)).count()
    });

    let vec_push_back_s = time_avg(trials, || {
        let mut arr = Vec::new();
        for &x in &base {
            arr.push(x);
        }
        arr
    });

    let vec_insert_front_s = time_avg(trials, || {
        let mut arr = Vec::new();
        for &x in &base {
            arr.insert(0, x);
        }
        arr
    });

    ContainerTimings {
        n,
        trials,
        vec_membership_s,
        set_membership_s,
        vec_push_back_s,
        vec_insert_front_s,
    }
}

/// Builds a random `rows x cols` matrix at `density` twice: as CSR from
/// sampled coordinates and as a dense row-major `f32` buffer, then compares
/// their footprint and the cost of summing every entry.
///
/// The two matrices are drawn independently, so their sums are close in
/// expectation but not equal.
pub fn bench_sparse_vs_dense(
    rows: usize,
    cols: usize,
    density: f64,
    seed: u64,
) -> Result<SparseTimings> {
    let mut rng = StdRng::seed_from_u64(seed);
    let density = density.clamp(0.0, 1.0);

    let (sparse, sparse_build_s) = timed(|| {
        let cells = rows.saturating_mul(cols);
        let nnz = ((cells as f64) * density).round() as usize;
        let triplets: Vec<(usize, usize, f32)> = index::sample(&mut rng, cells, nnz.min(cells))
            .into_iter()
            .map(|pos| (pos / cols, pos % cols, rng.gen::<f32>()))
            .collect();
        CsrMatrix::with_shape(rows, cols, &triplets)
    });
    let sparse = sparse?;

    let (dense, dense_build_s) = timed(|| {
        (0..rows * cols)
            .map(|_| {
                if rng.gen::<f64>() < density {
                    rng.gen::<f32>()
                } else {
                    0.0
                }
            })
            .collect::<Vec<f32>>()
    });

    let (dense_sum, dense_sum_s) = timed(|| dense.iter().map(|&v| f64::from(v)).sum::<f64>());
    let (sparse_sum, sparse_sum_s) = timed(|| sparse.sum());

    info!(
        "sparse vs dense {rows}x{cols} @ {density}: {} vs {} bytes",
        sparse.memory_bytes(),
        sparse.dense_memory_bytes()
    );
    Ok(SparseTimings {
        rows,
        cols,
        density,
        nnz: sparse.nnz(),
        dense_bytes: dense.len() * std::mem::size_of::<f32>(),
        sparse_bytes: sparse.memory_bytes(),
        dense_build_s,
        sparse_build_s,
        dense_sum_s,
        sparse_sum_s,
        dense_sum,
        sparse_sum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchConfig {
        BenchConfig {
            sizes: vec![50, 400],
            reps: 1,
            seed: 3,
            brute_force_limit: 100,
            container_size: 200,
            container_trials: 1,
            sparse_rows: 40,
            sparse_cols: 25,
            sparse_density: 0.05,
        }
    }

    #[test]
    fn test_planted_target_has_solution() {
        let mut rng = StdRng::seed_from_u64(11);
        let nums = random_input(&mut rng, 300);
        let target = planted_target(&nums).unwrap();
        for strategy in Strategy::ALL {
            assert!(strategy.find_first(&nums, target).is_some(), "{strategy}");
        }
        assert_eq!(planted_target(&[1]), None);
    }

    #[test]
    fn test_random_input_is_reproducible() {
        let a = random_input(&mut StdRng::seed_from_u64(5), 64);
        let b = random_input(&mut StdRng::seed_from_u64(5), 64);
        assert_eq!(a, b);
        assert!(a.iter().all(|&v| (0..128).contains(&v)));
    }

    #[test]
    fn test_bench_two_sum_rows() {
        let rows = bench_two_sum(&small_config());
        assert_eq!(rows.len(), 2);
        assert!(rows[0].seconds_for(Strategy::BruteForce).is_some());
        assert!(rows[1].seconds_for(Strategy::BruteForce).is_none());
        assert!(rows[1].seconds_for(Strategy::Hashing).is_some());
        assert!(rows.iter().all(|r| r.all_pairs_found >= 1));
    }

    #[test]
    fn test_bench_two_sum_serializes() {
        let rows = bench_two_sum(&small_config());
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[1]["strategies"][0]["strategy"], "brute-force");
        assert!(json[1]["strategies"][0]["seconds"].is_null());
    }

    #[test]
    fn test_bench_container_ops() {
        let timings = bench_container_ops(500, 1, 0);
        assert_eq!(timings.n, 500);
        assert!(timings.vec_membership_s >= 0.0);
        assert!(timings.set_membership_s >= 0.0);
    }

    #[test]
    fn test_bench_sparse_vs_dense() {
        let config = small_config();
        let timings = bench_sparse_vs_dense(
            config.sparse_rows,
            config.sparse_cols,
            config.sparse_density,
            config.seed,
        )
        .unwrap();
        // 40 * 25 cells at 5% density.
        assert_eq!(timings.nnz, 50);
        assert_eq!(timings.dense_bytes, 40 * 25 * 4);
        assert!(timings.sparse_bytes < timings.dense_bytes);
        assert!(timings.sparse_sum > 0.0 && timings.sparse_sum < 50.0);
        assert!(timings.dense_sum >= 0.0);

        let again = bench_sparse_vs_dense(40, 25, 0.05, config.seed).unwrap();
        assert_eq!(again.sparse_sum, timings.sparse_sum);
        assert_eq!(again.dense_sum, timings.dense_sum);
    }

    #[test]
    fn test_bench_sparse_vs_dense_full_density() {
        let timings = bench_sparse_vs_dense(6, 7, 1.0, 1).unwrap();
        assert_eq!(timings.nnz, 42);
        assert!(timings.sparse_bytes > timings.dense_bytes);
    }
}
