//! Dictionary of anagram classes
//!
//! Provides the key-to-words index plus an embedded word list compiled into
//! the binary for zero-cost access.

mod embedded;
mod index;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use index::DictionaryIndex;
