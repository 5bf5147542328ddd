//! Partition reducer
//!
//! Takes every factor combination of one granularity level and produces all
//! combinations one level coarser, by merging exactly one pair of factors.
//!
//! # Algorithm
//! For each combination `c` of length `n` and each index pair `i < j`:
//! 1. Drop `c[i]` and `c[j]`, append `c[i] * c[j]`
//! 2. Sort ascending (canonical form)
//! 3. Insert into a hash set
//!
//! Repeated merges reach every multiset partition of the original letters.
//! Because groups are identified by their key rather than by which physical
//! letters formed them, partitions that differ only in which copy of a
//! repeated letter went where collapse to one combination.
//!
//! The output can grow combinatorially with the number of letters. No cap is
//! applied here; see [`SearchConfig`](super::SearchConfig) for a ceiling.

use super::FactorCombination;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Reduce a level by merging one pair of factors in every possible way
///
/// The result is deduplicated and sorted, so the output order does not depend
/// on hashing.
///
/// # Examples
/// ```
/// use sentence_anagrams::search::{FactorCombination, reduce};
///
/// let level = vec![
///     FactorCombination::from_values([6, 7, 8]),
///     FactorCombination::from_values([11, 12, 13]),
/// ];
/// let next = reduce(&level);
///
/// assert_eq!(next.len(), 6);
/// assert!(next.contains(&FactorCombination::from_values([42, 8])));
/// assert!(next.contains(&FactorCombination::from_values([11, 156])));
/// ```
#[must_use]
pub fn reduce(combinations: &[FactorCombination]) -> Vec<FactorCombination> {
    let mut output = FxHashSet::default();
    for combination in combinations {
        insert_merges(combination, &mut output);
    }
    into_sorted(output)
}

/// Parallel version of [`reduce`]
///
/// Combinations are split across the rayon pool; each worker collects into its
/// own set and the sets are merged before sorting. The result is identical to
/// `reduce`.
#[must_use]
pub fn par_reduce(combinations: &[FactorCombination]) -> Vec<FactorCombination> {
    let output = combinations
        .par_iter()
        .fold(FxHashSet::default, |mut set, combination| {
            insert_merges(combination, &mut set);
            set
        })
        .reduce(FxHashSet::default, |left, right| {
            let (mut larger, smaller) = if left.len() >= right.len() {
                (left, right)
            } else {
                (right, left)
            };
            larger.extend(smaller);
            larger
        });
    into_sorted(output)
}

fn insert_merges(combination: &FactorCombination, output: &mut FxHashSet<FactorCombination>) {
    let n = combination.len();
    for i in 0..n {
        for j in (i + 1)..n {
            output.insert(combination.merge_pair(i, j));
        }
    }
}

fn into_sorted(set: FxHashSet<FactorCombination>) -> Vec<FactorCombination> {
    let mut combinations: Vec<FactorCombination> = set.into_iter().collect();
    combinations.sort_unstable();
    combinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{WordKey, letter_keys};
    use std::collections::HashSet;

    fn combos(values: &[&[u128]]) -> Vec<FactorCombination> {
        values
            .iter()
            .map(|v| FactorCombination::from_values(v.iter().copied()))
            .collect()
    }

    #[test]
    fn reduce_example() {
        let input = combos(&[&[6, 7, 8], &[11, 12, 13]]);
        let output: HashSet<_> = reduce(&input).into_iter().collect();

        let expected: HashSet<_> = combos(&[
            &[42, 8],
            &[48, 7],
            &[6, 56],
            &[132, 13],
            &[143, 12],
            &[11, 156],
        ])
        .into_iter()
        .collect();

        assert_eq!(output, expected);
    }

    #[test]
    fn reduce_has_no_duplicates() {
        let input = combos(&[&[6, 7, 8], &[11, 12, 13]]);
        let output = reduce(&input);
        let unique: HashSet<_> = output.iter().collect();
        assert_eq!(unique.len(), output.len());
    }

    #[test]
    fn reduce_drops_one_factor_and_keeps_product() {
        let input = vec![FactorCombination::new(letter_keys("sentence").unwrap())];
        let product = input[0].product();

        let mut level = input;
        while level[0].len() > 1 {
            let n = level[0].len();
            level = reduce(&level);
            assert!(level.iter().all(|c| c.len() == n - 1));
            assert!(level.iter().all(|c| c.product() == product));
        }
        assert_eq!(level, vec![FactorCombination::new(vec![product])]);
    }

    #[test]
    fn reduce_collapses_repeated_letters() {
        // "aaa": every pair merge gives [2, 4]
        let input = vec![FactorCombination::from_values([2, 2, 2])];
        assert_eq!(reduce(&input), combos(&[&[2, 4]]));
    }

    #[test]
    fn reduce_counts_partitions_of_distinct_letters() {
        // Four distinct letters: S(4,3) = 6, S(4,2) = 7
        let input = vec![FactorCombination::from_values([2, 3, 5, 7])];
        let three = reduce(&input);
        assert_eq!(three.len(), 6);
        let two = reduce(&three);
        assert_eq!(two.len(), 7);
        let one = reduce(&two);
        assert_eq!(one, vec![FactorCombination::new(vec![WordKey::new(210)])]);
    }

    #[test]
    fn reduce_singletons_and_empty() {
        assert!(reduce(&[]).is_empty());
        assert!(reduce(&combos(&[&[42]])).is_empty());
    }

    #[test]
    fn reduce_output_is_sorted() {
        let input = combos(&[&[6, 7, 8], &[11, 12, 13]]);
        let output = reduce(&input);
        assert!(output.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn par_reduce_matches_reduce() {
        let start = vec![FactorCombination::new(letter_keys("parallel").unwrap())];
        let mut sequential = start.clone();
        let mut parallel = start;

        while sequential[0].len() > 1 {
            sequential = reduce(&sequential);
            parallel = par_reduce(&parallel);
            assert_eq!(sequential, parallel);
        }
    }
}
