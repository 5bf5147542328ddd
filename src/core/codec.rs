//! Letter codec
//!
//! Maps each of the 26 letters to a distinct prime and folds words into
//! [`WordKey`]s. The codec never normalises case: callers lowercase first.

use super::{AnagramError, WordKey};

/// The first 26 primes, indexed by letter (`a` = 2 ... `z` = 101)
pub const PRIMES: [u32; 26] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101,
];

#[inline]
fn prime_of(letter: char) -> Option<u32> {
    if letter.is_ascii_lowercase() {
        Some(PRIMES[(letter as u8 - b'a') as usize])
    } else {
        None
    }
}

/// Prime of the letter found at `position` in some sequence
#[inline]
fn prime_at(letter: char, position: usize) -> Result<u32, AnagramError> {
    prime_of(letter).ok_or(AnagramError::InvalidLetter { letter, position })
}

/// Get the prime assigned to a lowercase letter
///
/// # Errors
/// Returns `AnagramError::InvalidLetter` for anything but `a`-`z`. A lone
/// letter is treated as a one-letter sequence, so the position is always 0.
///
/// # Examples
/// ```
/// use sentence_anagrams::core::letter_to_prime;
///
/// assert_eq!(letter_to_prime('e').unwrap(), 11);
/// assert!(letter_to_prime('E').is_err());
/// ```
pub fn letter_to_prime(letter: char) -> Result<u32, AnagramError> {
    prime_at(letter, 0)
}

/// Encode a letter sequence as its order-independent key
///
/// # Errors
/// - `AnagramError::InvalidLetter` if any character is outside `a`-`z`
/// - `AnagramError::KeyOverflow` if the product does not fit in a key
///
/// Every character is checked even after the product overflows, so an
/// invalid letter is always reported ahead of an overflow.
///
/// # Examples
/// ```
/// use sentence_anagrams::core::key_of;
///
/// let key = key_of("hello").unwrap();
/// assert_eq!(key.value(), 19 * 11 * 37 * 37 * 47);
/// assert_eq!(key, key_of("oellh").unwrap());
/// ```
pub fn key_of(letters: &str) -> Result<WordKey, AnagramError> {
    let product = letters.chars().enumerate().try_fold(
        Some(WordKey::ONE),
        |key, (position, letter)| {
            let prime = prime_at(letter, position)?;
            Ok::<_, AnagramError>(
                key.and_then(|key| key.checked_mul(WordKey::new(u128::from(prime)))),
            )
        },
    )?;

    product.ok_or_else(|| AnagramError::KeyOverflow {
        letters: letters.chars().count(),
    })
}

/// Encode every letter as its own single-letter key
///
/// This is the finest factor combination of a word: one factor per letter.
///
/// # Errors
/// Returns `AnagramError::InvalidLetter` if any character is outside `a`-`z`.
pub fn letter_keys(letters: &str) -> Result<Vec<WordKey>, AnagramError> {
    letters
        .chars()
        .enumerate()
        .map(|(position, letter)| prime_at(letter, position).map(|p| WordKey::new(u128::from(p))))
        .collect()
}
