//! Dictionary index keyed by word key
//!
//! Groups a word list into anagram classes. Built once, read-only afterwards,
//! and safe to share across threads by reference.

use crate::core::{AnagramError, WordKey, key_of};
use rustc_hash::FxHashMap;
use tracing::{info, warn};

/// Map from [`WordKey`] to the words sharing that key
///
/// Words inside a class keep the order in which they were first seen.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    classes: FxHashMap<WordKey, Vec<String>>,
    word_count: usize,
}

impl DictionaryIndex {
    /// Build an index from a word list
    ///
    /// Each entry is trimmed and ASCII-lowercased before encoding. Blank
    /// entries are skipped. Repeated words are stored once. Words whose key
    /// does not fit in a [`WordKey`] are skipped with a warning: no query
    /// short enough to encode can contain them.
    ///
    /// # Errors
    /// Returns `AnagramError::InvalidEntry` carrying the 1-based line number if
    /// any entry contains a character outside `a`-`z`. The whole build is
    /// aborted; no partial index is returned.
    ///
    /// # Examples
    /// ```
    /// use sentence_anagrams::core::key_of;
    /// use sentence_anagrams::dictionary::DictionaryIndex;
    ///
    /// let index = DictionaryIndex::build(["bear", "Bare", "tea"]).unwrap();
    /// let class = index.lookup(key_of("aber").unwrap()).unwrap();
    /// assert_eq!(class, ["bear", "bare"]);
    /// ```
    pub fn build<I, S>(words: I) -> Result<Self, AnagramError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        let mut too_long = 0usize;

        for (i, raw) in words.into_iter().enumerate() {
            let word = raw.as_ref().trim().to_ascii_lowercase();
            if word.is_empty() {
                continue;
            }

            let key = match key_of(&word) {
                Ok(key) => key,
                Err(AnagramError::KeyOverflow { letters }) => {
                    warn!(
                        line = i + 1,
                        word = %word,
                        letters,
                        "skipping word too long to encode"
                    );
                    too_long += 1;
                    continue;
                }
                Err(source) => {
                    return Err(AnagramError::InvalidEntry {
                        line: i + 1,
                        source: Box::new(source),
                    });
                }
            };

            let class = index.classes.entry(key).or_default();
            if !class.contains(&word) {
                class.push(word);
                index.word_count += 1;
            }
        }

        info!(
            classes = index.classes.len(),
            words = index.word_count,
            too_long,
            "dictionary index built"
        );

        Ok(index)
    }

    /// Get the anagram class stored under `key`
    ///
    /// Returns `None` when no dictionary word has this key.
    #[inline]
    #[must_use]
    pub fn lookup(&self, key: WordKey) -> Option<&[String]> {
        self.classes.get(&key).map(Vec::as_slice)
    }

    /// Find every dictionary word that is an anagram of `word`
    ///
    /// The input is ASCII-lowercased first.
    ///
    /// # Errors
    /// Returns `AnagramError::InvalidLetter` if `word` contains a character
    /// outside `a`-`z`.
    ///
    /// # Examples
    /// ```
    /// use sentence_anagrams::dictionary::DictionaryIndex;
    ///
    /// let index = DictionaryIndex::build(["bear", "bare", "tea"]).unwrap();
    /// assert_eq!(index.word_anagrams("ABER").unwrap().unwrap(), ["bear", "bare"]);
    /// assert!(index.word_anagrams("xyz").unwrap().is_none());
    /// ```
    pub fn word_anagrams(&self, word: &str) -> Result<Option<&[String]>, AnagramError> {
        let key = key_of(&word.to_ascii_lowercase())?;
        Ok(self.lookup(key))
    }

    /// Number of anagram classes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Number of distinct words across all classes
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Check if the index holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over every word in the index, class by class
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.classes.values().flatten().map(String::as_str)
    }
}
