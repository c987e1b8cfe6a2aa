//! Letters and positions
//!
//! `Letter` is a single upper-case alphabetic character. Danish Å, Æ and Ø are
//! ordinary letters here, never decomposed. `Position` is one of the five
//! slots of a word.

use super::EngineError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A single upper-case alphabetic character
///
/// Ordered by alphabet rather than code point, so Æ, Ø and Å follow Z in
/// Danish order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(char);

impl Letter {
    /// Create a letter, normalizing to upper case
    ///
    /// # Errors
    /// Returns `EngineError::InvalidLetter` for non-alphabetic characters and
    /// for characters whose upper-case form is more than one character.
    ///
    /// # Examples
    /// ```
    /// use wordle_possibilities::core::Letter;
    ///
    /// assert_eq!(Letter::new('ø').unwrap().as_char(), 'Ø');
    /// assert!(Letter::new('3').is_err());
    /// ```
    pub fn new(ch: char) -> Result<Self, EngineError> {
        if !ch.is_alphabetic() {
            return Err(EngineError::InvalidLetter(ch.to_string()));
        }

        let mut upper = ch.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(letter), None) => Ok(Self(letter)),
            _ => Err(EngineError::InvalidLetter(ch.to_string())),
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    // Letters never include '[', '\\' or ']', so these keys are free
    const fn alphabet_key(self) -> u32 {
        match self.0 {
            'Æ' => 'Z' as u32 + 1,
            'Ø' => 'Z' as u32 + 2,
            'Å' => 'Z' as u32 + 3,
            ch => ch as u32,
        }
    }
}

impl Ord for Letter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.alphabet_key().cmp(&other.alphabet_key())
    }
}

impl PartialOrd for Letter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Letter {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => Err(EngineError::InvalidLetter(s.to_string())),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A slot index within a word (0-4)
///
/// Displayed 1-based, the way players count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(usize);

impl Position {
    /// All five positions in order
    pub const ALL: [Self; WORD_LENGTH] = [Self(0), Self(1), Self(2), Self(3), Self(4)];

    /// Create a position from a 0-based index
    ///
    /// # Errors
    /// Returns `EngineError::InvalidPosition` if `index >= 5`.
    pub fn new(index: usize) -> Result<Self, EngineError> {
        if index < WORD_LENGTH {
            Ok(Self(index))
        } else {
            Err(EngineError::InvalidPosition(index))
        }
    }

    /// Create a position from a 1-based slot number as typed by a player
    ///
    /// # Errors
    /// Returns `EngineError::InvalidPosition` unless `slot` is 1-5.
    pub fn from_slot(slot: usize) -> Result<Self, EngineError> {
        match slot.checked_sub(1) {
            Some(index) if index < WORD_LENGTH => Ok(Self(index)),
            _ => Err(EngineError::InvalidPosition(slot)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}
