//! Factor combinations
//!
//! A factor combination splits one word key into group keys whose product is
//! the original key. Each group key stands for a bag of letters, so a
//! combination is one candidate partition of the input into words.

use crate::core::WordKey;
use std::fmt;

/// Sorted multiset of group keys
///
/// Factors are always kept in ascending order. That canonical form makes
/// `[1, 4]` and `[4, 1]` the same combination while `[2, 2]` and `[1, 4]`
/// stay distinct, so `Eq` and `Hash` deduplicate partitions directly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FactorCombination(Vec<WordKey>);

impl FactorCombination {
    /// Create a combination, sorting the factors into canonical order
    ///
    /// # Examples
    /// ```
    /// use sentence_anagrams::search::FactorCombination;
    ///
    /// let a = FactorCombination::from_values([4, 1]);
    /// let b = FactorCombination::from_values([1, 4]);
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn new(mut factors: Vec<WordKey>) -> Self {
        factors.sort_unstable();
        Self(factors)
    }

    /// Create a combination from raw key values
    #[must_use]
    pub fn from_values<I: IntoIterator<Item = u128>>(values: I) -> Self {
        Self::new(values.into_iter().map(WordKey::new).collect())
    }

    /// Get the factors in ascending order
    #[inline]
    #[must_use]
    pub fn factors(&self) -> &[WordKey] {
        &self.0
    }

    /// Number of factors (the granularity level)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the combination has no factors
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Product of all factors
    #[must_use]
    pub fn product(&self) -> WordKey {
        self.0.iter().fold(WordKey::ONE, |acc, &f| acc.merge(f))
    }

    /// Merge the factors at positions `i` and `j` into one
    ///
    /// The result has one factor fewer and the same product.
    ///
    /// # Panics
    /// Panics if `i == j` or either index is out of bounds.
    #[must_use]
    pub fn merge_pair(&self, i: usize, j: usize) -> Self {
        assert!(i != j, "cannot merge a factor with itself");
        let merged = self.0[i].merge(self.0[j]);

        let mut factors = Vec::with_capacity(self.0.len() - 1);
        factors.extend(
            self.0
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, &f)| f),
        );
        factors.push(merged);

        Self::new(factors)
    }
}

impl fmt::Display for FactorCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, factor) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{factor}")?;
        }
        write!(f, "]")
    }
}
