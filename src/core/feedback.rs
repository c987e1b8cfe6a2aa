//! Per-letter feedback marks
//!
//! A guess is answered with one mark per slot:
//! - `x` = letter absent
//! - `i` = letter present, wrong position
//! - `c` = letter correct at this position
//!
//! Any other character in a mark string is accepted and ignored for that slot.

use super::letter::{Position, WORD_LENGTH};
use super::{EngineError, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Parse a mark character (case-insensitive)
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'x' => Some(Self::Absent),
            'i' => Some(Self::Present),
            'c' => Some(Self::Correct),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Absent => 'x',
            Self::Present => 'i',
            Self::Correct => 'c',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// The five marks answering one guess
///
/// Slots holding an unrecognized mark character are `None` and produce no
/// constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marks([Option<Mark>; WORD_LENGTH]);

impl Marks {
    /// All letters correct
    pub const SOLVED: Self = Self([Some(Mark::Correct); WORD_LENGTH]);

    /// Parse a mark string such as `"xicxi"` or `"x i c x i"`
    ///
    /// Whitespace is skipped; the remaining characters must number exactly 5.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidMarks` if there are not exactly 5 marks.
    ///
    /// # Examples
    /// ```
    /// use wordle_possibilities::core::{Mark, Marks, Position};
    ///
    /// let marks = Marks::parse("x i c x i").unwrap();
    /// assert_eq!(marks.get(Position::new(2).unwrap()), Some(Mark::Correct));
    /// assert!(Marks::parse("xic").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, EngineError> {
        let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();

        let chars: [char; WORD_LENGTH] = chars
            .try_into()
            .map_err(|_| EngineError::InvalidMarks(text.to_string()))?;

        Ok(Self(chars.map(Mark::from_char)))
    }

    /// Compute the marks the puzzle gives when `guess` is played against `answer`
    ///
    /// Follows the real game's duplicate-letter rules.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches correct and remove them from the pool
    /// 2. Second pass: mark present-but-misplaced letters from what remains
    /// 3. Everything else is absent
    ///
    /// # Examples
    /// ```
    /// use wordle_possibilities::core::{Marks, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// assert_eq!(Marks::calculate(&guess, &answer).to_string(), "xxcxc");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Some(Mark::Absent); WORD_LENGTH];
        let mut answer_available = answer.letter_counts();

        for position in Position::ALL {
            let letter = guess.letter_at(position);
            if letter == answer.letter_at(position) {
                result[position.index()] = Some(Mark::Correct);
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for position in Position::ALL {
            if result[position.index()] == Some(Mark::Correct) {
                continue;
            }
            let letter = guess.letter_at(position);
            if let Some(count) = answer_available.get_mut(&letter)
                && *count > 0
            {
                result[position.index()] = Some(Mark::Present);
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, position: Position) -> Option<Mark> {
        self.0[position.index()]
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Render as emoji squares; ignored slots show as `?`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|mark| mark.map_or('?', Mark::to_emoji))
            .collect()
    }
}

impl FromStr for Marks {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Marks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.map_or('.', Mark::as_char))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        Marks::calculate(&guess, &answer).to_string()
    }

    #[test]
    fn mark_from_char_case_insensitive() {
        assert_eq!(Mark::from_char('x'), Some(Mark::Absent));
        assert_eq!(Mark::from_char('I'), Some(Mark::Present));
        assert_eq!(Mark::from_char('C'), Some(Mark::Correct));
        assert_eq!(Mark::from_char('g'), None);
    }

    #[test]
    fn parse_skips_whitespace() {
        let marks = Marks::parse(" x i c x i ").unwrap();
        assert_eq!(marks.to_string(), "xicxi");
    }

    #[test]
    fn parse_unknown_marks_are_ignored() {
        let marks = Marks::parse("x?c-i").unwrap();
        assert_eq!(marks.get(Position::new(1).unwrap()), None);
        assert_eq!(marks.get(Position::new(3).unwrap()), None);
        assert_eq!(marks.to_string(), "x.c.i");
    }

    #[test]
    fn parse_wrong_count_rejected() {
        assert!(matches!(
            Marks::parse("xicx"),
            Err(EngineError::InvalidMarks(_))
        ));
        assert!(Marks::parse("xicxix").is_err());
        assert!(Marks::parse("").is_err());
    }

    #[test]
    fn calculate_all_absent() {
        assert_eq!(calc("abcde", "fghij"), "xxxxx");
    }

    #[test]
    fn calculate_solved() {
        for word in ["crane", "slate", "aaaaa", "bøger"] {
            let w = Word::new(word).unwrap();
            assert!(Marks::calculate(&w, &w).is_solved());
        }
    }

    #[test]
    fn calculate_duplicate_letters_yellow() {
        // SPEED vs ERASE: S present, both E present, P and D absent
        assert_eq!(calc("speed", "erase"), "ixiix");
    }

    #[test]
    fn calculate_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: second O is exact, first O is misplaced
        assert_eq!(calc("robot", "floor"), "iixcx");
    }

    #[test]
    fn calculate_surplus_duplicate_is_absent() {
        // Only one E in CRANE; the exact one wins, the other is absent
        assert_eq!(calc("geese", "crane"), "xxxxc");
    }

    #[test]
    fn emoji_rendering() {
        let marks = Marks::parse("xic.x").unwrap();
        assert_eq!(marks.to_emoji(), "⬜🟨🟩?⬜");
    }
}
