//! Everyday sequence manipulations: order-preserving dedupe, rotation,
//! sorted insertion and flattening.

use std::hash::Hash;

use rustc_hash::FxHashSet;

/// Removes repeats while keeping the first occurrence of each item in place.
pub fn stable_dedupe<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = FxHashSet::default();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Returns a copy of `items` rotated right by `k` (tail moves to the front).
pub fn rotate_right<T: Clone>(items: &[T], k: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let split = items.len() - k % items.len();
    let mut out = Vec::with_capacity(items.len());
    out.extend_from_slice(&items[split..]);
    out.extend_from_slice(&items[..split]);
    out
}

/// Rotates in place with three reversals: O(n) time, O(1) extra space.
pub fn rotate_right_in_place<T>(items: &mut [T], k: usize) {
    let n = items.len();
    if n == 0 {
        return;
    }
    let k = k % n;
    if k == 0 {
        return;
    }
    items.reverse();
    items[..k].reverse();
    items[k..].reverse();
}

/// Builds a sorted vector as values arrive, inserting each after any equal
/// values already present. Each insert is O(n) because of shifting.
pub fn insert_sorted_stream<T, I>(values: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut sorted = Vec::new();
    for value in values {
        let pos = sorted.partition_point(|existing| *existing <= value);
        sorted.insert(pos, value);
    }
    sorted
}

pub fn flatten_one_level<T, I, J>(nested: I) -> Vec<T>
where
    I: IntoIterator<Item = J>,
    J: IntoIterator<Item = T>,
{
    nested.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_dedupe() {
        assert_eq!(stable_dedupe([3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert!(stable_dedupe(Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn test_rotate_right_copy() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(rotate_right(&items, 2), vec![4, 5, 1, 2, 3]);
        assert_eq!(rotate_right(&items, 0), items.to_vec());
        assert_eq!(rotate_right(&items, 7), vec![4, 5, 1, 2, 3]);
        assert!(rotate_right::<i32>(&[], 3).is_empty());
    }

    #[test]
    fn test_rotate_right_in_place() {
        let mut items = vec![1, 2, 3, 4, 5];
        rotate_right_in_place(&mut items, 2);
        assert_eq!(items, vec![4, 5, 1, 2, 3]);

        let mut empty: Vec<i32> = Vec::new();
        rotate_right_in_place(&mut empty, 4);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_rotations_agree_with_std() {
        let base: Vec<i32> = (0..11).collect();
        for k in 0..25 {
            let mut expected = base.clone();
            expected.rotate_right(k % base.len());
            let mut in_place = base.clone();
            rotate_right_in_place(&mut in_place, k);
            assert_eq!(rotate_right(&base, k), expected);
            assert_eq!(in_place, expected);
        }
    }

    #[test]
    fn test_insert_sorted_stream() {
        assert_eq!(insert_sorted_stream([3, 1, 4, 1, 5]), vec![1, 1, 3, 4, 5]);
    }

    #[test]
    fn test_flatten_one_level() {
        let nested = vec![vec![1, 2], vec![3], vec![], vec![4, 5]];
        assert_eq!(flatten_one_level(nested), vec![1, 2, 3, 4, 5]);
    }
}
