//! Sentence search
//!
//! Walks the granularity levels of an input from one factor per letter down to
//! two factors, looking every combination up in the dictionary and reducing to
//! the next level. The whole-input case (one factor) is answered by a single
//! key lookup instead.

use super::{FactorCombination, SearchConfig, par_reduce, reduce, search_keys};
use crate::core::{AnagramError, key_of, letter_keys};
use crate::dictionary::DictionaryIndex;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// One way to split the input into dictionary words
///
/// Each slot lists every word matching one group of letters. Slots follow the
/// ascending order of the group keys in `combination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    combination: FactorCombination,
    slots: Vec<&'a [String]>,
}

impl<'a> Sentence<'a> {
    /// The anagram class of each word slot
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[&'a [String]] {
        &self.slots
    }

    /// The factor combination this sentence resolves
    #[inline]
    #[must_use]
    pub const fn combination(&self) -> &FactorCombination {
        &self.combination
    }

    /// Number of words in the sentence
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of concrete word sequences this sentence stands for
    ///
    /// The product of the slot sizes, ignoring word order.
    #[must_use]
    pub fn variants(&self) -> usize {
        self.slots.iter().map(|slot| slot.len()).product()
    }

    /// Check if any slot's class equals `words`, ignoring order
    #[must_use]
    pub fn has_slot(&self, words: &[&str]) -> bool {
        self.slots.iter().any(|slot| {
            slot.len() == words.len() && words.iter().all(|w| slot.iter().any(|s| s == w))
        })
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Letters in the normalised input
    pub letters: usize,
    /// Granularity levels whose combinations were looked up
    pub levels_visited: usize,
    /// Reduction steps performed
    pub reductions: usize,
    /// Factor combinations looked up across all levels
    pub combinations_examined: usize,
    /// Size of the largest level
    pub peak_level_size: usize,
    /// Wall-clock time of the search
    pub elapsed: Duration,
}

/// Everything a search found for one input
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    /// Lowercased input
    pub input: String,
    /// Single words using every letter, if any
    pub whole_word: Option<&'a [String]>,
    /// Multi-word sentences, finest grouping first
    pub sentences: Vec<Sentence<'a>>,
    pub stats: SearchStats,
}

/// Sentence search bound to one dictionary
pub struct SentenceSearch<'a> {
    index: &'a DictionaryIndex,
    config: SearchConfig,
}

impl<'a> SentenceSearch<'a> {
    /// Create a search over `index` with the given options
    #[must_use]
    pub const fn new(index: &'a DictionaryIndex, config: SearchConfig) -> Self {
        Self { index, config }
    }

    /// Get the active configuration
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find every sentence anagram of `input`
    ///
    /// The input is ASCII-lowercased and validated before any partition work.
    /// Levels run from one factor per letter down to two factors; inputs of
    /// fewer than three letters perform no reduction.
    ///
    /// # Errors
    /// - `AnagramError::InvalidLetter` if the input contains a non-letter
    /// - `AnagramError::KeyOverflow` if the input is too long to encode
    /// - `AnagramError::SearchLimitExceeded` if a level exceeds the ceiling
    pub fn run(&self, input: &str) -> Result<SearchOutcome<'a>, AnagramError> {
        let start = Instant::now();
        let letters = input.to_ascii_lowercase();

        let whole_key = key_of(&letters)?;
        let whole_word = self.index.lookup(whole_key);

        let mut n = letters.chars().count();
        let mut stats = SearchStats {
            letters: n,
            ..SearchStats::default()
        };
        let mut sentences = Vec::new();

        let mut level = if n > 1 {
            vec![FactorCombination::new(letter_keys(&letters)?)]
        } else {
            Vec::new()
        };

        while n > 1 {
            if let Some(limit) = self.config.max_combinations
                && level.len() > limit
            {
                warn!(
                    level = n,
                    combinations = level.len(),
                    limit,
                    "combination ceiling reached"
                );
                return Err(AnagramError::SearchLimitExceeded {
                    level: n,
                    combinations: level.len(),
                    limit,
                });
            }

            let found = self.lookup_level(&level);
            debug!(
                level = n,
                combinations = level.len(),
                sentences = found.len(),
                "searched level"
            );

            stats.levels_visited += 1;
            stats.combinations_examined += level.len();
            stats.peak_level_size = stats.peak_level_size.max(level.len());
            sentences.extend(found);

            if n > 2 {
                level = if self.config.parallel {
                    par_reduce(&level)
                } else {
                    reduce(&level)
                };
                stats.reductions += 1;
            }
            n -= 1;
        }

        stats.elapsed = start.elapsed();
        info!(
            input = %letters,
            sentences = sentences.len(),
            combinations = stats.combinations_examined,
            elapsed_ms = stats.elapsed.as_millis(),
            "sentence search finished"
        );

        Ok(SearchOutcome {
            input: letters,
            whole_word,
            sentences,
            stats,
        })
    }

    /// Resolve every combination of one level, keeping level order
    fn lookup_level(&self, level: &[FactorCombination]) -> Vec<Sentence<'a>> {
        let index = self.index;
        let resolve = |combination: &FactorCombination| {
            search_keys(combination.factors(), index).map(|slots| Sentence {
                combination: combination.clone(),
                slots,
            })
        };

        if self.config.parallel {
            level.par_iter().filter_map(resolve).collect()
        } else {
            level.iter().filter_map(resolve).collect()
        }
    }
}

/// Find every sentence anagram of `input` with the default configuration
///
/// # Errors
/// Returns `AnagramError::InvalidLetter` if the input contains a character
/// outside `a`-`z` (case-insensitive), before any partition work starts.
///
/// # Examples
/// ```
/// use sentence_anagrams::dictionary::DictionaryIndex;
/// use sentence_anagrams::search::sentence_anagrams;
///
/// let index = DictionaryIndex::build(["a", "bear", "bare", "ate", "eta", "tea", "me"]).unwrap();
/// let sentences = sentence_anagrams("aaberaetem", &index).unwrap();
///
/// assert!(sentences.iter().any(|s| {
///     s.word_count() == 4 && s.has_slot(&["bear", "bare"]) && s.has_slot(&["me"])
/// }));
/// ```
pub fn sentence_anagrams<'a>(
    input: &str,
    index: &'a DictionaryIndex,
) -> Result<Vec<Sentence<'a>>, AnagramError> {
    SentenceSearch::new(index, SearchConfig::default())
        .run(input)
        .map(|outcome| outcome.sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DictionaryIndex {
        DictionaryIndex::build(["a", "bear", "bare", "ate", "eta", "tea", "me"]).unwrap()
    }

    #[test]
    fn finds_four_word_sentence() {
        let index = sample();
        let sentences = sentence_anagrams("aaberaetem", &index).unwrap();

        assert_eq!(sentences.len(), 1);
        let sentence = &sentences[0];
        assert_eq!(sentence.word_count(), 4);
        assert!(sentence.has_slot(&["a"]));
        assert!(sentence.has_slot(&["bear", "bare"]));
        assert!(sentence.has_slot(&["ate", "eta", "tea"]));
        assert!(sentence.has_slot(&["me"]));
        assert_eq!(sentence.variants(), 6);
    }

    #[test]
    fn slots_follow_factor_order() {
        let index = sample();
        let sentences = sentence_anagrams("aaberaetem", &index).unwrap();
        let slots = sentences[0].slots();

        assert_eq!(slots[0], ["a"]);
        assert_eq!(slots[1], ["me"]);
        assert_eq!(slots[2], ["ate", "eta", "tea"]);
        assert_eq!(slots[3], ["bear", "bare"]);
    }

    #[test]
    fn input_is_case_insensitive() {
        let index = sample();
        let lower = sentence_anagrams("teame", &index).unwrap();
        let upper = sentence_anagrams("TeAmE", &index).unwrap();
        assert_eq!(lower, upper);
        assert!(!lower.is_empty());
    }

    #[test]
    fn finer_groupings_come_first() {
        let index = DictionaryIndex::build(["a", "at", "tea", "eat", "t", "e"]).unwrap();
        let sentences = sentence_anagrams("teaa", &index).unwrap();

        assert!(
            sentences
                .windows(2)
                .all(|pair| pair[0].word_count() >= pair[1].word_count())
        );
        assert_eq!(sentences.first().map(Sentence::word_count), Some(4));
        assert_eq!(sentences.last().map(Sentence::word_count), Some(2));
    }

    #[test]
    fn repeated_letters_are_not_reported_twice() {
        let index = DictionaryIndex::build(["a", "aa"]).unwrap();
        let sentences = sentence_anagrams("aaa", &index).unwrap();

        // [a, a, a] and [a, aa] only
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn invalid_letter_fails_before_search() {
        let index = sample();
        let result = SentenceSearch::new(&index, SearchConfig::default()).run("hello!");
        assert_eq!(
            result.map(|o| o.sentences.len()),
            Err(AnagramError::InvalidLetter {
                letter: '!',
                position: 5
            })
        );
    }

    #[test]
    fn non_ascii_input_is_not_folded_to_letters() {
        let index = DictionaryIndex::build(["ok", "o", "k"]).unwrap();
        let search = SentenceSearch::new(&index, SearchConfig::default());

        assert_eq!(
            search.run("o\u{212A}").map(|o| o.sentences.len()),
            Err(AnagramError::InvalidLetter {
                letter: '\u{212A}',
                position: 1
            })
        );
        assert_eq!(search.run("OK").unwrap().whole_word.unwrap(), ["ok"]);
    }

    #[test]
    fn single_letter_does_no_partition_work() {
        let index = sample();
        let outcome = SentenceSearch::new(&index, SearchConfig::default())
            .run("a")
            .unwrap();

        assert_eq!(outcome.stats.levels_visited, 0);
        assert_eq!(outcome.stats.reductions, 0);
        assert!(outcome.sentences.is_empty());
        assert_eq!(outcome.whole_word.unwrap(), ["a"]);
    }

    #[test]
    fn two_letters_check_letters_only() {
        let index = DictionaryIndex::build(["a", "m", "am", "ma"]).unwrap();
        let outcome = SentenceSearch::new(&index, SearchConfig::default())
            .run("ma")
            .unwrap();

        assert_eq!(outcome.stats.levels_visited, 1);
        assert_eq!(outcome.stats.reductions, 0);
        assert_eq!(outcome.sentences.len(), 1);
        assert_eq!(outcome.sentences[0].word_count(), 2);
        assert_eq!(outcome.whole_word.unwrap(), ["am", "ma"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let index = sample();
        let outcome = SentenceSearch::new(&index, SearchConfig::default())
            .run("")
            .unwrap();
        assert!(outcome.sentences.is_empty());
        assert!(outcome.whole_word.is_none());
        assert_eq!(outcome.stats.levels_visited, 0);
    }

    #[test]
    fn stats_track_levels() {
        let index = sample();
        let outcome = SentenceSearch::new(&index, SearchConfig::sequential())
            .run("team")
            .unwrap();

        // Levels 4, 3 and 2; reductions into 3 and 2
        assert_eq!(outcome.stats.letters, 4);
        assert_eq!(outcome.stats.levels_visited, 3);
        assert_eq!(outcome.stats.reductions, 2);
        // 1 + S(4,3) + S(4,2)
        assert_eq!(outcome.stats.combinations_examined, 1 + 6 + 7);
        assert_eq!(outcome.stats.peak_level_size, 7);
    }

    #[test]
    fn ceiling_stops_search() {
        let index = sample();
        let config = SearchConfig::sequential().with_max_combinations(Some(5));
        let result = SentenceSearch::new(&index, config).run("team");

        assert!(matches!(
            result,
            Err(AnagramError::SearchLimitExceeded {
                level: 3,
                combinations: 6,
                limit: 5
            })
        ));
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let index = sample();
        let parallel = SentenceSearch::new(&index, SearchConfig::default())
            .run("aaberaetem")
            .unwrap();
        let sequential = SentenceSearch::new(&index, SearchConfig::sequential())
            .run("aaberaetem")
            .unwrap();

        assert_eq!(parallel.sentences, sequential.sentences);
        assert_eq!(
            parallel.stats.combinations_examined,
            sequential.stats.combinations_examined
        );
    }
}
