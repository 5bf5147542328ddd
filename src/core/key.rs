//! Order-independent word keys
//!
//! A `WordKey` is the product of the primes assigned to a word's letters. By
//! unique factorisation two letter sequences share a key exactly when they are
//! anagrams of each other.

use std::fmt;

/// Product-of-primes encoding of a letter multiset
///
/// The empty sequence encodes to [`WordKey::ONE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordKey(u128);

impl WordKey {
    /// Key of the empty letter sequence
    pub const ONE: Self = Self(1);

    /// Create a key from a raw value
    #[inline]
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw key value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u128 {
        self.0
    }

    /// Multiply two keys, returning `None` if the product leaves the key range
    #[inline]
    #[must_use]
    pub const fn checked_mul(self, other: Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(product) => Some(Self(product)),
            None => None,
        }
    }

    /// Combine two group keys into the key of their union
    ///
    /// Both keys must be factors of a key that already fits in the range,
    /// which holds for every merge performed while partitioning one input.
    #[inline]
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl fmt::Display for WordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_is_multiplicative_identity() {
        let key = WordKey::new(4026);
        assert_eq!(WordKey::ONE.merge(key), key);
        assert_eq!(key.checked_mul(WordKey::ONE), Some(key));
    }

    #[test]
    fn checked_mul_detects_overflow() {
        let big = WordKey::new(u128::MAX / 2 + 1);
        assert_eq!(big.checked_mul(WordKey::new(2)), None);
        assert_eq!(
            WordKey::new(6).checked_mul(WordKey::new(7)),
            Some(WordKey::new(42))
        );
    }

    #[test]
    fn keys_order_by_value() {
        let mut keys = vec![WordKey::new(13), WordKey::new(2), WordKey::new(7)];
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![WordKey::new(2), WordKey::new(7), WordKey::new(13)]
        );
    }

    #[test]
    fn display_shows_raw_value() {
        assert_eq!(format!("{}", WordKey::new(13_447_687)), "13447687");
    }
}
