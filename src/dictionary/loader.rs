//! Word list loading utilities
//!
//! Builds a [`DictionaryIndex`] from a file or from the embedded word list.

use super::{DictionaryIndex, WORDS};
use crate::core::AnagramError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a dictionary from a file with one word per line
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if any non-blank line
/// contains a character outside `a`-`z` (the error names the line).
///
/// # Examples
/// ```no_run
/// use sentence_anagrams::dictionary::loader::load_from_file;
///
/// let index = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", index.word_count());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<DictionaryIndex> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading word list");

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    DictionaryIndex::build(content.lines())
        .with_context(|| format!("failed to index word list {}", path.display()))
}

/// Build a dictionary from a string slice
///
/// # Errors
///
/// Returns `AnagramError::InvalidEntry` if any entry is not a plain word.
///
/// # Examples
/// ```
/// use sentence_anagrams::dictionary::loader::index_from_slice;
///
/// let index = index_from_slice(&["bear", "bare", "tea"]).unwrap();
/// assert_eq!(index.word_count(), 3);
/// ```
pub fn index_from_slice(slice: &[&str]) -> Result<DictionaryIndex, AnagramError> {
    DictionaryIndex::build(slice)
}

/// Build a dictionary from the embedded word list
///
/// # Errors
///
/// Returns `AnagramError::InvalidEntry` if the embedded list contains an
/// entry that is not a plain word.
pub fn embedded_index() -> Result<DictionaryIndex, AnagramError> {
    index_from_slice(WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key_of;
    use std::io::Write;

    #[test]
    fn index_from_slice_builds_classes() {
        let index = index_from_slice(&["listen", "silent", "enlist", "tea"]).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(
            index.lookup(key_of("tinsel").unwrap()).unwrap(),
            ["listen", "silent", "enlist"]
        );
    }

    #[test]
    fn index_from_slice_empty() {
        let input: &[&str] = &[];
        let index = index_from_slice(input).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn embedded_index_contains_every_word() {
        let index = embedded_index().unwrap();
        assert_eq!(index.word_count(), WORDS.len());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!(
            "sentence_anagrams_loader_{}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "Bear\nbare\n\ntea").unwrap();
        drop(file);

        let index = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(index.word_count(), 3);
        assert_eq!(index.lookup(key_of("aber").unwrap()).unwrap(), ["bear", "bare"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file("definitely/not/a/real/word/list.txt");
        assert!(result.is_err());
    }
}
