//! Five-letter word representation
//!
//! A Word keeps its upper-case text alongside the parsed letters so filtering
//! never re-decodes UTF-8.

use super::letter::{Letter, Position, WORD_LENGTH};
use rustc_hash::FxHashMap;
use std::fmt;

/// A 5-letter word, upper-cased at construction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [Letter; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Length is counted in characters, so words with Å, Æ or Ø are fine.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_possibilities::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("bøger").is_ok());
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_uppercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        let letters: Vec<Letter> = text
            .chars()
            .map(Letter::new)
            .collect::<Result<_, _>>()
            .map_err(|_| WordError::InvalidCharacters)?;

        let letters: [Letter; WORD_LENGTH] = letters
            .try_into()
            .map_err(|rest: Vec<Letter>| WordError::InvalidLength(rest.len()))?;

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: Position) -> Letter {
        self.letters[position.index()]
    }

    /// Check if the word contains a letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used when computing marks for words with duplicate letters.
    pub(crate) fn letter_counts(&self) -> FxHashMap<Letter, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }

    /// Iterate over the word's characters
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().map(|letter| letter.as_char())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.chars().collect::<String>(), "CRANE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_danish() {
        let word = Word::new("søløv").unwrap();
        assert_eq!(word.text(), "SØLØV");
        assert_eq!(word.letter_at(Position::new(1).unwrap()), letter('Ø'));
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        let at = |i| word.letter_at(Position::new(i).unwrap()).as_char();
        assert_eq!(at(0), 'C');
        assert_eq!(at(1), 'R');
        assert_eq!(at(4), 'E');
    }

    #[test]
    fn word_contains() {
        let word = Word::new("crane").unwrap();
        assert!(word.contains(letter('C')));
        assert!(word.contains(letter('E')));
        assert!(!word.contains(letter('Z')));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&letter('S')), Some(&1));
        assert_eq!(counts.get(&letter('E')), Some(&2));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display() {
        let word = Word::new("slate").unwrap();
        assert_eq!(format!("{word}"), "SLATE");
    }
}
