//! Error type shared by the codec, dictionary and search modules

use thiserror::Error;

/// Errors produced while encoding letters, building a dictionary or searching
///
/// A missing dictionary entry is not an error: lookups return `Option` and the
/// batched lookups collapse to `None` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnagramError {
    /// A character outside `a`-`z` reached the letter codec
    #[error("invalid letter {letter:?} at position {position}: only letters a-z are allowed")]
    InvalidLetter { letter: char, position: usize },

    /// A dictionary line could not be encoded
    #[error("dictionary line {line}: {source}")]
    InvalidEntry {
        line: usize,
        #[source]
        source: Box<AnagramError>,
    },

    /// The prime product of the letters does not fit in a `WordKey`
    #[error("word key overflow: {letters} letters exceed the key range")]
    KeyOverflow { letters: usize },

    /// A search level grew past the configured combination ceiling
    #[error(
        "search stopped at level {level}: {combinations} factor combinations exceed the limit of {limit}"
    )]
    SearchLimitExceeded {
        level: usize,
        combinations: usize,
        limit: usize,
    },
}

impl AnagramError {
    /// Whether this error was caused by a character outside `a`-`z`
    ///
    /// Looks through `InvalidEntry` to the underlying cause.
    #[must_use]
    pub fn is_invalid_letter(&self) -> bool {
        match self {
            Self::InvalidLetter { .. } => true,
            Self::InvalidEntry { source, .. } => source.is_invalid_letter(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_letter_message_names_letter_and_position() {
        let err = AnagramError::InvalidLetter {
            letter: '!',
            position: 5,
        };
        assert_eq!(
            err.to_string(),
            "invalid letter '!' at position 5: only letters a-z are allowed"
        );
    }

    #[test]
    fn invalid_entry_wraps_invalid_letter() {
        let err = AnagramError::InvalidEntry {
            line: 3,
            source: Box::new(AnagramError::InvalidLetter {
                letter: '-',
                position: 2,
            }),
        };
        assert!(err.is_invalid_letter());
        assert!(err.to_string().starts_with("dictionary line 3:"));
    }

    #[test]
    fn other_errors_are_not_invalid_letter() {
        assert!(!AnagramError::KeyOverflow { letters: 40 }.is_invalid_letter());
        assert!(
            !AnagramError::SearchLimitExceeded {
                level: 4,
                combinations: 10,
                limit: 5
            }
            .is_invalid_letter()
        );
    }
}
