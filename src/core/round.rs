//! Guess rounds and the engine operations they translate into

use super::feedback::{Mark, Marks};
use super::letter::{Letter, Position};
use super::{EngineError, Word};
use std::fmt;
use std::str::FromStr;

/// A single narrowing step understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Letter is absent from the word
    Exclude(Letter),
    /// Letter is in the word, but not at this position
    Include(Letter, Position),
    /// Letter is at this position
    Place(Letter, Position),
}

impl Operation {
    /// Application order within a batch: excludes, then includes, then places
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Exclude(_) => 0,
            Self::Include(..) => 1,
            Self::Place(..) => 2,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exclude(letter) => write!(f, "exclude {letter}"),
            Self::Include(letter, position) => write!(f, "include {letter} not at {position}"),
            Self::Place(letter, position) => write!(f, "place {letter} at {position}"),
        }
    }
}

/// How an absent mark is read when the same letter is marked present or
/// correct elsewhere in the guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Every absent mark excludes the letter everywhere
    Blanket,
    /// An absent mark on a letter confirmed elsewhere in the same guess only
    /// rules out that slot
    #[default]
    OccurrenceAware,
}

impl DuplicatePolicy {
    /// Parse a policy name: "occurrence" or "blanket"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "occurrence" | "occurrence-aware" => Some(Self::OccurrenceAware),
            "blanket" => Some(Self::Blanket),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blanket => "blanket",
            Self::OccurrenceAware => "occurrence",
        }
    }
}

/// One guess together with the marks it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    guess: Word,
    marks: Marks,
}

impl Round {
    #[must_use]
    pub const fn new(guess: Word, marks: Marks) -> Self {
        Self { guess, marks }
    }

    /// Parse a guess and a mark string
    ///
    /// # Errors
    /// Returns `EngineError` if the guess is not a five-letter word or the
    /// marks are malformed.
    pub fn parse(guess: &str, marks: &str) -> Result<Self, EngineError> {
        Ok(Self::new(Word::new(guess.trim())?, Marks::parse(marks)?))
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn marks(&self) -> &Marks {
        &self.marks
    }

    /// Translate the round into engine operations, in slot order
    ///
    /// # Examples
    /// ```
    /// use wordle_possibilities::core::{DuplicatePolicy, Operation, Round};
    ///
    /// let round = Round::parse("crane", "xicxi").unwrap();
    /// let ops = round.operations(DuplicatePolicy::Blanket);
    /// assert_eq!(ops.len(), 5);
    /// assert!(matches!(ops[0], Operation::Exclude(_)));
    /// ```
    #[must_use]
    pub fn operations(&self, policy: DuplicatePolicy) -> Vec<Operation> {
        Position::ALL
            .iter()
            .filter_map(|&position| {
                let letter = self.guess.letter_at(position);
                let op = match self.marks.get(position)? {
                    Mark::Absent
                        if policy == DuplicatePolicy::OccurrenceAware
                            && self.confirmed_elsewhere(letter, position) =>
                    {
                        Operation::Include(letter, position)
                    }
                    Mark::Absent => Operation::Exclude(letter),
                    Mark::Present => Operation::Include(letter, position),
                    Mark::Correct => Operation::Place(letter, position),
                };
                Some(op)
            })
            .collect()
    }

    fn confirmed_elsewhere(&self, letter: Letter, position: Position) -> bool {
        Position::ALL.iter().any(|&other| {
            other != position
                && self.guess.letter_at(other) == letter
                && matches!(
                    self.marks.get(other),
                    Some(Mark::Present | Mark::Correct)
                )
        })
    }
}

impl FromStr for Round {
    type Err = EngineError;

    /// Parse `"GUESS:MARKS"` or `"GUESS MARKS"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (guess, marks) = s
            .split_once(':')
            .or_else(|| s.split_once(char::is_whitespace))
            .ok_or_else(|| EngineError::InvalidMarks(String::new()))?;
        Self::parse(guess, marks)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.guess, self.marks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn pos(index: usize) -> Position {
        Position::new(index).unwrap()
    }

    #[test]
    fn operation_rank_order() {
        let exclude = Operation::Exclude(letter('A'));
        let include = Operation::Include(letter('A'), pos(0));
        let place = Operation::Place(letter('A'), pos(0));
        assert!(exclude.rank() < include.rank());
        assert!(include.rank() < place.rank());
    }

    #[test]
    fn crane_round_operations() {
        let round = Round::parse("CRANE", "x i c x i").unwrap();
        let ops = round.operations(DuplicatePolicy::OccurrenceAware);
        assert_eq!(
            ops,
            vec![
                Operation::Exclude(letter('C')),
                Operation::Include(letter('R'), pos(1)),
                Operation::Place(letter('A'), pos(2)),
                Operation::Exclude(letter('N')),
                Operation::Include(letter('E'), pos(4)),
            ]
        );
    }

    #[test]
    fn ignored_marks_produce_no_operation() {
        let round = Round::parse("crane", "x?c??").unwrap();
        assert_eq!(round.operations(DuplicatePolicy::Blanket).len(), 2);
    }

    #[test]
    fn blanket_policy_excludes_duplicate() {
        // Second E absent, first E correct
        let round = Round::parse("EERIE", "cxxxx").unwrap();
        let ops = round.operations(DuplicatePolicy::Blanket);
        assert_eq!(ops[0], Operation::Place(letter('E'), pos(0)));
        assert_eq!(ops[1], Operation::Exclude(letter('E')));
        assert_eq!(ops[4], Operation::Exclude(letter('E')));
    }

    #[test]
    fn occurrence_policy_keeps_duplicate_present() {
        let round = Round::parse("EERIE", "cxxxx").unwrap();
        let ops = round.operations(DuplicatePolicy::OccurrenceAware);
        assert_eq!(ops[0], Operation::Place(letter('E'), pos(0)));
        assert_eq!(ops[1], Operation::Include(letter('E'), pos(1)));
        assert_eq!(ops[2], Operation::Exclude(letter('R')));
        assert_eq!(ops[4], Operation::Include(letter('E'), pos(4)));
    }

    #[test]
    fn parse_from_str_forms() {
        let a: Round = "crane:xicxi".parse().unwrap();
        let b: Round = "CRANE xicxi".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "CRANE:xicxi");
        assert!("crane".parse::<Round>().is_err());
        assert!(matches!(
            "cran:xicxi".parse::<Round>(),
            Err(EngineError::InvalidWord(_))
        ));
    }

    #[test]
    fn policy_names() {
        assert_eq!(
            DuplicatePolicy::from_name("blanket"),
            Some(DuplicatePolicy::Blanket)
        );
        assert_eq!(
            DuplicatePolicy::from_name("Occurrence"),
            Some(DuplicatePolicy::OccurrenceAware)
        );
        assert_eq!(DuplicatePolicy::from_name("other"), None);
        assert_eq!(DuplicatePolicy::default().name(), "occurrence");
    }
}
