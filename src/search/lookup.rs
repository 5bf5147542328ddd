//! Batched key lookup
//!
//! A batch resolves only if every key resolves: a partition with a single
//! unknown group is not a sentence, so partial results are discarded.

use crate::core::{AnagramError, WordKey, key_of};
use crate::dictionary::DictionaryIndex;

/// Look up every key, in order
///
/// Returns one anagram class per key, or `None` as soon as any key is absent.
///
/// # Examples
/// ```
/// use sentence_anagrams::core::key_of;
/// use sentence_anagrams::dictionary::DictionaryIndex;
/// use sentence_anagrams::search::search_keys;
///
/// let index = DictionaryIndex::build(["a", "bear", "bare"]).unwrap();
/// let keys = [key_of("a").unwrap(), key_of("aber").unwrap()];
///
/// let slots = search_keys(&keys, &index).unwrap();
/// assert_eq!(slots[1], ["bear", "bare"]);
///
/// let missing = [key_of("a").unwrap(), key_of("zz").unwrap()];
/// assert!(search_keys(&missing, &index).is_none());
/// ```
#[must_use]
pub fn search_keys<'a>(
    keys: &[WordKey],
    index: &'a DictionaryIndex,
) -> Option<Vec<&'a [String]>> {
    let mut slots = Vec::with_capacity(keys.len());
    for &key in keys {
        slots.push(index.lookup(key)?);
    }
    Some(slots)
}

/// Look up every letter string, in order
///
/// Each string is encoded with the letter codec first; strings must already
/// be lowercase.
///
/// # Errors
/// Returns `AnagramError::InvalidLetter` if any string is malformed. This is
/// checked for the whole batch before any lookup, so it is never masked by a
/// missing key.
///
/// # Examples
/// ```
/// use sentence_anagrams::dictionary::DictionaryIndex;
/// use sentence_anagrams::search::search_strings;
///
/// let index = DictionaryIndex::build(["a", "bear", "bare", "ate", "eta", "tea", "me"]).unwrap();
/// let slots = search_strings(&["a", "aber", "aet", "em"], &index).unwrap().unwrap();
/// assert_eq!(slots[2], ["ate", "eta", "tea"]);
/// ```
pub fn search_strings<'a, S: AsRef<str>>(
    strings: &[S],
    index: &'a DictionaryIndex,
) -> Result<Option<Vec<&'a [String]>>, AnagramError> {
    let keys = strings
        .iter()
        .map(|s| key_of(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(search_keys(&keys, index))
}
