use std::collections::{BTreeSet, HashSet};

use algo_drills::pairs::{
    find_all_index_pairs, find_all_triplets, find_first_pair_brute_force, find_unique_value_pairs,
    IndexPair, PairedSumSolver, Strategy as PairStrategy,
};
use proptest::prelude::*;

fn small_ints() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-20i64..20, 0..40)
}

/// Brute-force reference for every valid index pair.
fn reference_pairs(nums: &[i64], target: i64) -> Vec<IndexPair> {
    let mut out = Vec::new();
    for i in 0..nums.len() {
        for j in i + 1..nums.len() {
            if nums[i] + nums[j] == target {
                out.push(IndexPair { first: i, second: j });
            }
        }
    }
    out
}

proptest! {
    #[test]
    fn strategies_agree_on_existence(nums in small_ints(), target in -40i64..40) {
        let expected = find_first_pair_brute_force(&nums, target).is_some();
        for strategy in PairStrategy::ALL {
            prop_assert_eq!(strategy.find_first(&nums, target).is_some(), expected, "{}", strategy);
        }
    }

    #[test]
    fn strategies_agree_on_existence_full_range(nums in prop::collection::vec(any::<i64>(), 0..12), target in any::<i64>()) {
        let expected = find_first_pair_brute_force(&nums, target).is_some();
        for strategy in PairStrategy::ALL {
            prop_assert_eq!(strategy.find_first(&nums, target).is_some(), expected, "{}", strategy);
        }
    }

    #[test]
    fn first_pairs_are_valid_and_in_all_pairs(nums in small_ints(), target in -40i64..40) {
        let all: HashSet<IndexPair> = find_all_index_pairs(&nums, target).into_iter().collect();
        for strategy in PairStrategy::ALL {
            if let Some(pair) = strategy.find_first(&nums, target) {
                prop_assert!(pair.first < pair.second);
                prop_assert_eq!(nums[pair.first] + nums[pair.second], target);
                prop_assert!(all.contains(&pair), "{} returned {}", strategy, pair);
            }
        }
    }

    #[test]
    fn all_pairs_matches_reference(nums in small_ints(), target in -40i64..40) {
        let pairs = find_all_index_pairs(&nums, target);
        prop_assert!(pairs.iter().all(|p| p.first < p.second));
        prop_assert!(pairs.windows(2).all(|w| w[0] < w[1]), "sorted and unique");
        prop_assert_eq!(pairs, reference_pairs(&nums, target));
    }

    #[test]
    fn unique_value_pairs_match_reference(nums in small_ints(), target in -40i64..40) {
        let expected: BTreeSet<(i64, i64)> = reference_pairs(&nums, target)
            .into_iter()
            .map(|p| {
                let (x, y) = (nums[p.first], nums[p.second]);
                (x.min(y), x.max(y))
            })
            .collect();
        let got: Vec<(i64, i64)> = find_unique_value_pairs(&nums, target)
            .into_iter()
            .map(|p| p.as_tuple())
            .collect();
        prop_assert_eq!(got, expected.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn triplets_are_sorted_unique_and_complete(nums in prop::collection::vec(-10i64..10, 0..25), target in -15i64..15) {
        let triplets = find_all_triplets(&nums, target);
        let mut expected = BTreeSet::new();
        for i in 0..nums.len() {
            for j in i + 1..nums.len() {
                for k in j + 1..nums.len() {
                    if nums[i] + nums[j] + nums[k] == target {
                        let mut t = [nums[i], nums[j], nums[k]];
                        t.sort_unstable();
                        expected.insert((t[0], t[1], t[2]));
                    }
                }
            }
        }
        let got: Vec<_> = triplets.iter().map(|t| t.as_tuple()).collect();
        prop_assert!(triplets.iter().all(|t| t.a <= t.b && t.b <= t.c));
        prop_assert_eq!(got, expected.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn solvers_are_idempotent(nums in small_ints(), target in -40i64..40) {
        let solver = PairedSumSolver::new(&nums);
        prop_assert_eq!(solver.first_pair_by_each(target), solver.first_pair_by_each(target));
        prop_assert_eq!(solver.all_index_pairs(target), solver.all_index_pairs(target));
        prop_assert_eq!(solver.unique_value_pairs(target), solver.unique_value_pairs(target));
        prop_assert_eq!(solver.triplets(target), solver.triplets(target));
    }
}

#[test]
fn documented_examples() {
    let pairs: Vec<_> = find_all_index_pairs(&[1, 3, 2, 2, 4, 0, 3], 4)
        .into_iter()
        .map(|p| p.as_tuple())
        .collect();
    assert_eq!(pairs, vec![(0, 1), (0, 6), (2, 3), (4, 5)]);

    let values: Vec<_> = find_unique_value_pairs(&[1, 1, 2, 2, 3, 3], 4)
        .into_iter()
        .map(|p| p.as_tuple())
        .collect();
    assert_eq!(values, vec![(1, 3), (2, 2)]);

    let triplets: HashSet<_> = find_all_triplets(&[-1, 0, 1, 2, -1, -4], 0)
        .into_iter()
        .map(|t| t.as_tuple())
        .collect();
    assert_eq!(triplets, HashSet::from([(-1, -1, 2), (-1, 0, 1)]));
}
