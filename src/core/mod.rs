//! Core domain types for anagram keys
//!
//! This module contains the letter codec and the key type it produces.
//! Everything here is pure and has clear mathematical properties.

mod codec;
mod error;
mod key;

pub use codec::{PRIMES, key_of, letter_keys, letter_to_prime};
pub use error::AnagramError;
pub use key::WordKey;
