//! Sentence Anagrams
//!
//! Finds single-word and multi-word anagrams of a scrambled string by encoding
//! words as products of letter primes and partitioning those products.
//!
//! # Quick Start
//!
//! ```rust
//! use sentence_anagrams::dictionary::DictionaryIndex;
//! use sentence_anagrams::search::sentence_anagrams;
//!
//! let index = DictionaryIndex::build(["a", "bear", "bare", "tea", "me"]).unwrap();
//!
//! // Single words using every letter
//! assert_eq!(index.word_anagrams("aber").unwrap().unwrap(), ["bear", "bare"]);
//!
//! // Sentences using every letter
//! for sentence in sentence_anagrams("teamabear", &index).unwrap() {
//!     println!("{} words", sentence.word_count());
//! }
//! ```

// Core domain types
pub mod core;

// Dictionary index and word lists
pub mod dictionary;

// Partitioning search
pub mod search;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
