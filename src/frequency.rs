//! Counting, grouping and heap-based top-k selection.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Maps each value to the positions where it occurs, in ascending order.
pub fn group_indices(nums: &[i64]) -> FxHashMap<i64, Vec<usize>> {
    let mut groups: FxHashMap<i64, Vec<usize>> = FxHashMap::default();
    for (i, &v) in nums.iter().enumerate() {
        groups.entry(v).or_default().push(i);
    }
    groups
}

pub fn count_occurrences<T, I>(items: I) -> FxHashMap<T, usize>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: FxHashMap<T, usize> = FxHashMap::default();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// The `k` most frequent items with their counts.
///
/// Ordered by count descending; equal counts are ordered by item ascending
/// so the output does not depend on hash iteration order. Keeps a min-heap
/// of size `k`: O(n log k). `k == 0` yields an empty result.
pub fn top_k_frequent<T, I>(items: I, k: usize) -> Vec<(T, usize)>
where
    T: Eq + Hash + Ord + Clone,
    I: IntoIterator<Item = T>,
{
    if k == 0 {
        return Vec::new();
    }
    let counts = count_occurrences(items);

    // Heap top is the weakest candidate: lowest count, then largest item.
    let mut heap: BinaryHeap<Reverse<(usize, Reverse<&T>)>> = BinaryHeap::with_capacity(k + 1);
    for (item, &count) in &counts {
        heap.push(Reverse((count, Reverse(item))));
        if heap.len() > k {
            heap.pop();
        }
    }

    // Ascending order of Reverse<...> is strongest first.
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse((count, Reverse(item)))| (item.clone(), count))
        .collect()
}

/// The `k` largest items, largest first.
pub fn k_largest<T, I>(items: I, k: usize) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    if k == 0 {
        return Vec::new();
    }
    let mut heap: BinaryHeap<Reverse<T>> = BinaryHeap::with_capacity(k + 1);
    for item in items {
        heap.push(Reverse(item));
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(item)| item)
        .collect()
}

/// The `k` smallest items, smallest first.
pub fn k_smallest<T, I>(items: I, k: usize) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    if k == 0 {
        return Vec::new();
    }
    let mut heap: BinaryHeap<T> = BinaryHeap::with_capacity(k + 1);
    for item in items {
        heap.push(item);
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.into_sorted_vec()
}
