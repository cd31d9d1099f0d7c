//! Paired-sum search: find positions (or values) in an integer sequence
//! that add up to a target.
//!
//! Three interchangeable strategies answer "is there a pair, and which one":
//!
//! | Strategy            | Time          | Extra space |
//! |---------------------|---------------|-------------|
//! | brute force         | O(n^2)        | O(1)        |
//! | hashing             | O(n) average  | O(n)        |
//! | sorted two-pointer  | O(n log n)    | O(n)        |
//!
//! They agree on whether a pair exists. When several pairs are valid each
//! strategy may return a different one, so callers must not assume a
//! canonical answer. The enumerations ([`find_all_index_pairs`],
//! [`find_unique_value_pairs`], [`find_all_triplets`]) return every match in
//! a fixed order.
//!
//! Sums are compared in `i128`, so inputs near `i64::MIN`/`i64::MAX` never
//! wrap around into false matches.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use log::trace;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::DrillError;
use crate::frequency::{count_occurrences, group_indices};

// =============================================================================
// Result shapes
// =============================================================================

/// Two distinct positions `first < second` whose values sum to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct IndexPair {
    pub first: usize,
    pub second: usize,
}

impl IndexPair {
    /// Normalizes two distinct indices so the smaller one comes first.
    pub fn ordered(a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b, "a pair never reuses one position");
        if a < b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn as_tuple(self) -> (usize, usize) {
        (self.first, self.second)
    }
}

impl From<IndexPair> for (usize, usize) {
    fn from(pair: IndexPair) -> Self {
        pair.as_tuple()
    }
}

impl fmt::Display for IndexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Two values `low <= high` summing to the target, deduplicated by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ValuePair {
    pub low: i64,
    pub high: i64,
}

impl ValuePair {
    pub fn as_tuple(self) -> (i64, i64) {
        (self.low, self.high)
    }
}

impl fmt::Display for ValuePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

/// Three values `a <= b <= c` summing to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Triplet {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Triplet {
    pub fn as_tuple(self) -> (i64, i64, i64) {
        (self.a, self.b, self.c)
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.c)
    }
}

fn pair_sum_cmp(x: i64, y: i64, target: i64) -> Ordering {
    (i128::from(x) + i128::from(y)).cmp(&i128::from(target))
}

// =============================================================================
// Single-result strategies
// =============================================================================

/// Checks every pair in row-major order and returns the first match.
///
/// Deterministic: the result has the smallest `first`, and for that `first`
/// the smallest `second`.
pub fn find_first_pair_brute_force(nums: &[i64], target: i64) -> Option<IndexPair> {
    for (i, &x) in nums.iter().enumerate() {
        for (offset, &y) in nums[i + 1..].iter().enumerate() {
            if pair_sum_cmp(x, y, target) == Ordering::Equal {
                return Some(IndexPair {
                    first: i,
                    second: i + 1 + offset,
                });
            }
        }
    }
    None
}

/// One left-to-right scan with a value -> earliest index map.
///
/// Returns the match with the smallest `second`. The map is insert-if-absent:
/// when a value recurs, the index of its first occurrence is kept as the
/// complement partner.
pub fn find_first_pair_by_hashing(nums: &[i64], target: i64) -> Option<IndexPair> {
    let mut seen: FxHashMap<i64, usize> = FxHashMap::default();
    seen.reserve(nums.len());

    for (j, &x) in nums.iter().enumerate() {
        // A complement outside i64 cannot be in the input.
        if let Some(&i) = target.checked_sub(x).and_then(|need| seen.get(&need)) {
            return Some(IndexPair { first: i, second: j });
        }
        seen.entry(x).or_insert(j);
    }
    None
}

/// Sorts (value, index) pairs and converges two pointers from both ends.
///
/// The input is copied, never reordered in place.
pub fn find_first_pair_by_sorted_two_pointer(nums: &[i64], target: i64) -> Option<IndexPair> {
    if nums.len() < 2 {
        return None;
    }

    let mut with_idx: Vec<(i64, usize)> = nums.iter().copied().zip(0..).collect();
    with_idx.sort_unstable();

    let mut lo = 0;
    let mut hi = with_idx.len() - 1;
    while lo < hi {
        let (x, i) = with_idx[lo];
        let (y, j) = with_idx[hi];
        match pair_sum_cmp(x, y, target) {
            Ordering::Equal => return Some(IndexPair::ordered(i, j)),
            Ordering::Less => lo += 1,
            Ordering::Greater => hi -= 1,
        }
    }
    None
}

/// Selects one of the single-result pair strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    BruteForce,
    Hashing,
    #[serde(rename = "two-pointer")]
    SortedTwoPointer,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::BruteForce,
        Strategy::Hashing,
        Strategy::SortedTwoPointer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute-force",
            Strategy::Hashing => "hashing",
            Strategy::SortedTwoPointer => "two-pointer",
        }
    }

    pub fn complexity(self) -> &'static str {
        match self {
            Strategy::BruteForce => "O(n^2) time, O(1) space",
            Strategy::Hashing => "O(n) average time, O(n) space",
            Strategy::SortedTwoPointer => "O(n log n) time, O(n) space",
        }
    }

    pub fn find_first(self, nums: &[i64], target: i64) -> Option<IndexPair> {
        match self {
            Strategy::BruteForce => find_first_pair_brute_force(nums, target),
            Strategy::Hashing => find_first_pair_by_hashing(nums, target),
            Strategy::SortedTwoPointer => find_first_pair_by_sorted_two_pointer(nums, target),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brute-force" | "brute_force" | "brute" => Ok(Strategy::BruteForce),
            "hashing" | "hash" => Ok(Strategy::Hashing),
            "two-pointer" | "two_pointer" | "sorted" | "2ptr" => Ok(Strategy::SortedTwoPointer),
            _ => Err(DrillError::UnknownStrategy {
                name: s.to_string(),
                expected: Strategy::ALL.iter().map(|s| s.name()).join(", "),
            }),
        }
    }
}

// =============================================================================
// Enumerations
// =============================================================================

/// Every index pair `(i, j)`, `i < j`, with `nums[i] + nums[j] == target`,
/// sorted ascending and free of duplicates.
///
/// Indices are grouped by value. Each unordered value pair `{v, c}` is
/// expanded exactly once, from its smaller side: `v < c` emits the cross
/// product of both index lists, `v == c` emits every combination inside the
/// one list, and `v > c` is left for when `c` is visited.
///
/// O(n + number of pairs).
pub fn find_all_index_pairs(nums: &[i64], target: i64) -> Vec<IndexPair> {
    let groups = group_indices(nums);
    trace!("all index pairs: {} distinct values, target {target}", groups.len());

    let mut pairs = Vec::new();
    for (&v, v_indices) in &groups {
        let Some(c) = target.checked_sub(v) else {
            continue;
        };
        match v.cmp(&c) {
            Ordering::Less => {
                if let Some(c_indices) = groups.get(&c) {
                    pairs.extend(
                        v_indices
                            .iter()
                            .cartesian_product(c_indices.iter())
                            .map(|(&i, &j)| IndexPair::ordered(i, j)),
                    );
                }
            }
            // Index lists are built in ascending order, so i < j holds here.
            Ordering::Equal => pairs.extend(
                v_indices
                    .iter()
                    .tuple_combinations()
                    .map(|(&i, &j)| IndexPair { first: i, second: j }),
            ),
            Ordering::Greater => {}
        }
    }

    pairs.sort_unstable();
    pairs.dedup();
    pairs
}

/// Distinct value pairs `(x, y)`, `x <= y`, summing to `target`, ascending
/// by `x`. A pair `(x, x)` needs `x` to occur at least twice.
pub fn find_unique_value_pairs(nums: &[i64], target: i64) -> Vec<ValuePair> {
    let counts = count_occurrences(nums.iter().copied());
    let mut values: Vec<i64> = counts.keys().copied().collect();
    values.sort_unstable();

    let mut out = Vec::new();
    if values.is_empty() {
        return out;
    }

    let mut lo = 0;
    let mut hi = values.len() - 1;
    while lo <= hi {
        let (x, y) = (values[lo], values[hi]);
        match pair_sum_cmp(x, y, target) {
            Ordering::Equal => {
                if x < y || counts.get(&x).is_some_and(|&n| n >= 2) {
                    out.push(ValuePair { low: x, high: y });
                }
                lo += 1;
                let Some(next) = hi.checked_sub(1) else { break };
                hi = next;
            }
            Ordering::Less => lo += 1,
            Ordering::Greater => {
                let Some(next) = hi.checked_sub(1) else { break };
                hi = next;
            }
        }
    }
    out
}

/// Unique value triplets summing to `target`, each ordered `a <= b <= c`,
/// listed in ascending order. O(n^2) on a sorted copy of the input.
pub fn find_all_triplets(nums: &[i64], target: i64) -> Vec<Triplet> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();
    let target = i128::from(target);
    let mut out = Vec::new();

    for i in 0..n {
        if i > 0 && sorted[i] == sorted[i - 1] {
            continue;
        }
        let first = sorted[i];
        let mut lo = i + 1;
        let mut hi = n - 1;
        while lo < hi {
            let sum = i128::from(first) + i128::from(sorted[lo]) + i128::from(sorted[hi]);
            match sum.cmp(&target) {
                Ordering::Equal => {
                    out.push(Triplet {
                        a: first,
                        b: sorted[lo],
                        c: sorted[hi],
                    });
                    lo += 1;
                    hi -= 1;
                    while lo < hi && sorted[lo] == sorted[lo - 1] {
                        lo += 1;
                    }
                    while lo < hi && sorted[hi] == sorted[hi + 1] {
                        hi -= 1;
                    }
                }
                Ordering::Less => lo += 1,
                Ordering::Greater => hi -= 1,
            }
        }
    }
    out
}

/// The classic three-sum: triplets adding up to zero.
pub fn find_zero_sum_triplets(nums: &[i64]) -> Vec<Triplet> {
    find_all_triplets(nums, 0)
}

// =============================================================================
// Solver facade
// =============================================================================

/// Paired-sum queries over one borrowed, read-only input sequence.
#[derive(Debug, Clone, Copy)]
pub struct PairedSumSolver<'a> {
    nums: &'a [i64],
}

impl<'a> PairedSumSolver<'a> {
    pub fn new(nums: &'a [i64]) -> Self {
        Self { nums }
    }

    pub fn nums(&self) -> &'a [i64] {
        self.nums
    }

    pub fn first_pair(&self, strategy: Strategy, target: i64) -> Option<IndexPair> {
        strategy.find_first(self.nums, target)
    }

    /// Runs every strategy, in [`Strategy::ALL`] order.
    pub fn first_pair_by_each(&self, target: i64) -> Vec<(Strategy, Option<IndexPair>)> {
        Strategy::ALL
            .iter()
            .map(|&s| (s, s.find_first(self.nums, target)))
            .collect()
    }

    pub fn all_index_pairs(&self, target: i64) -> Vec<IndexPair> {
        find_all_index_pairs(self.nums, target)
    }

    pub fn unique_value_pairs(&self, target: i64) -> Vec<ValuePair> {
        find_unique_value_pairs(self.nums, target)
    }

    pub fn triplets(&self, target: i64) -> Vec<Triplet> {
        find_all_triplets(self.nums, target)
    }
}
