//! Descramble command
//!
//! Looks up single-word anagrams of an input and, when the input is short
//! enough, runs the sentence search on it.

use crate::core::AnagramError;
use crate::dictionary::DictionaryIndex;
use crate::search::{SearchConfig, SearchStats, Sentence, SentenceSearch};
use tracing::debug;

/// Configuration for descrambling an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescrambleConfig {
    pub search: SearchConfig,
    /// Inputs with more letters than this only get the single-word lookup
    pub max_letters: Option<usize>,
}

impl Default for DescrambleConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            max_letters: Some(12),
        }
    }
}

impl DescrambleConfig {
    #[must_use]
    pub const fn new(search: SearchConfig, max_letters: Option<usize>) -> Self {
        Self {
            search,
            max_letters,
        }
    }
}

/// Result of descrambling an input
#[derive(Debug, Clone)]
pub struct DescrambleResult<'a> {
    /// Lowercased input
    pub input: String,
    /// Dictionary words using every letter (empty if none)
    pub words: &'a [String],
    /// Sentences, finest grouping first
    pub sentences: Vec<Sentence<'a>>,
    /// Set when the input was too long for the sentence search
    pub sentences_skipped: bool,
    pub stats: SearchStats,
}

impl DescrambleResult<'_> {
    /// Check if neither words nor sentences were found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.sentences.is_empty()
    }
}

/// Find the single-word anagrams of `input`
///
/// # Errors
///
/// Returns `AnagramError::InvalidLetter` if the input contains anything but
/// letters.
pub fn find_words<'a>(
    input: &str,
    index: &'a DictionaryIndex,
) -> Result<&'a [String], AnagramError> {
    Ok(index.word_anagrams(input)?.unwrap_or_default())
}

/// Descramble `input` into words and sentences
///
/// # Errors
///
/// Returns an error if:
/// - The input contains anything but letters
/// - The input is too long to encode
/// - The search exceeds the configured combination ceiling
pub fn descramble<'a>(
    input: &str,
    config: &DescrambleConfig,
    index: &'a DictionaryIndex,
) -> Result<DescrambleResult<'a>, AnagramError> {
    let input = input.trim().to_ascii_lowercase();
    let letters = input.chars().count();

    if let Some(max) = config.max_letters
        && letters > max
    {
        debug!(letters, max, "input too long for sentence search");
        let words = find_words(&input, index)?;
        return Ok(DescrambleResult {
            input,
            words,
            sentences: Vec::new(),
            sentences_skipped: true,
            stats: SearchStats {
                letters,
                ..SearchStats::default()
            },
        });
    }

    let outcome = SentenceSearch::new(index, config.search).run(&input)?;

    Ok(DescrambleResult {
        input: outcome.input,
        words: outcome.whole_word.unwrap_or_default(),
        sentences: outcome.sentences,
        sentences_skipped: false,
        stats: outcome.stats,
    })
}
