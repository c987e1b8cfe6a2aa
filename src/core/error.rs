//! Errors for malformed engine input
//!
//! Every variant is a caller contract violation. The engine never guesses the
//! caller's intent; it reports the bad value and leaves recovery to the UI.

use super::word::WordError;
use std::fmt;

/// Invalid argument passed to the engine or its value types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Empty, multi-character or non-alphabetic letter
    InvalidLetter(String),
    /// Position outside the five slots of a word
    InvalidPosition(usize),
    /// Guess that is not a five-letter word
    InvalidWord(WordError),
    /// Mark string that does not hold exactly five marks
    InvalidMarks(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(text) => {
                write!(f, "'{text}' is not a single alphabetic letter")
            }
            Self::InvalidPosition(position) => {
                write!(f, "Position {position} is out of range")
            }
            Self::InvalidWord(err) => write!(f, "Invalid word: {err}"),
            Self::InvalidMarks(marks) => {
                write!(f, "Marks '{marks}' must hold exactly 5 of x/i/c")
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WordError> for EngineError {
    fn from(err: WordError) -> Self {
        Self::InvalidWord(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            EngineError::InvalidLetter("ab".to_string()).to_string(),
            "'ab' is not a single alphabetic letter"
        );
        assert_eq!(
            EngineError::InvalidPosition(7).to_string(),
            "Position 7 is out of range"
        );
        assert_eq!(
            EngineError::from(WordError::InvalidLength(3)).to_string(),
            "Invalid word: Word must be exactly 5 letters, got 3"
        );
    }

    #[test]
    fn word_error_is_source() {
        use std::error::Error;

        let err = EngineError::from(WordError::InvalidCharacters);
        assert!(err.source().is_some());
        assert!(EngineError::InvalidPosition(9).source().is_none());
    }
}
