//! Sentence anagram search
//!
//! The combinatorial core: factor combinations, batched lookups, the
//! partition reducer and the level-by-level sentence search that drives them.

mod combination;
mod config;
mod lookup;
mod reducer;
mod sentence;

pub use combination::FactorCombination;
pub use config::SearchConfig;
pub use lookup::{search_keys, search_strings};
pub use reducer::{par_reduce, reduce};
pub use sentence::{SearchOutcome, SearchStats, Sentence, SentenceSearch, sentence_anagrams};
