//! The possibility engine
//!
//! Owns the live candidate list and the constraints observed so far. Every
//! mutation replaces the candidate list with a filtered copy, so the list only
//! ever shrinks.

use super::constraints::Constraints;
use super::ranking::{RankedGuess, rank};
use crate::core::{DuplicatePolicy, Letter, Operation, Position, Round, Word};
use crate::language::{FrequencyTable, Language};
use log::debug;
use rustc_hash::FxHashSet;
use std::mem;

/// Number of suggestions shown when the caller does not ask for a count
pub const DEFAULT_TOP_GUESSES: usize = 10;

/// Candidate words plus the constraints that narrowed them
///
/// # Examples
/// ```
/// use wordle_possibilities::core::{Letter, Position, Word};
/// use wordle_possibilities::language::FrequencyTable;
/// use wordle_possibilities::solver::Possibilities;
///
/// let words = ["crane", "slate", "train"].map(|w| Word::new(w).unwrap());
/// let mut possibilities = Possibilities::new(words, FrequencyTable::default());
///
/// possibilities.exclude_letter(Letter::new('s').unwrap());
/// assert_eq!(possibilities.count(), 2);
///
/// possibilities.place_letter(Letter::new('c').unwrap(), Position::new(0).unwrap());
/// assert_eq!(possibilities.candidates()[0].text(), "CRANE");
/// ```
#[derive(Debug, Clone)]
pub struct Possibilities {
    candidates: Vec<Word>,
    constraints: Constraints,
    frequencies: FrequencyTable,
}

impl Possibilities {
    /// Start a session from a word list and a frequency table
    ///
    /// Duplicate words are dropped, keeping the first occurrence.
    pub fn new<I: IntoIterator<Item = Word>>(words: I, frequencies: FrequencyTable) -> Self {
        let mut seen = FxHashSet::default();
        let candidates: Vec<Word> = words
            .into_iter()
            .filter(|word| seen.insert(word.text().to_string()))
            .collect();
        debug!("session started with {} candidates", candidates.len());

        Self {
            candidates,
            constraints: Constraints::new(),
            frequencies,
        }
    }

    /// Start a session with a language's embedded words and weights
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        Self::new(language.words(), language.frequencies())
    }

    /// Mark a letter as absent and drop every word containing it
    pub fn exclude_letter(&mut self, letter: Letter) {
        self.constraints.exclude(letter);
        self.narrow(&Operation::Exclude(letter), |word| !word.contains(letter));
    }

    /// Mark a letter as present but not at `position`
    ///
    /// Drops words lacking the letter and words having it exactly there.
    pub fn include_letter(&mut self, letter: Letter, position: Position) {
        self.constraints.include(letter, position);
        self.narrow(&Operation::Include(letter, position), |word| {
            word.contains(letter) && word.letter_at(position) != letter
        });
    }

    /// Mark a letter as correct at `position`, overwriting any earlier value
    pub fn place_letter(&mut self, letter: Letter, position: Position) {
        self.constraints.place(letter, position);
        self.narrow(&Operation::Place(letter, position), |word| {
            word.letter_at(position) == letter
        });
    }

    /// Apply a single operation
    pub fn apply(&mut self, operation: Operation) {
        match operation {
            Operation::Exclude(letter) => self.exclude_letter(letter),
            Operation::Include(letter, position) => self.include_letter(letter, position),
            Operation::Place(letter, position) => self.place_letter(letter, position),
        }
    }

    /// Apply one round's worth of operations
    ///
    /// Excludes always go first, then includes, then places, whatever order
    /// the batch arrives in. Relative order inside each group is kept.
    pub fn update<I: IntoIterator<Item = Operation>>(&mut self, batch: I) {
        let mut operations: Vec<Operation> = batch.into_iter().collect();
        operations.sort_by_key(|op| op.rank());
        for operation in operations {
            self.apply(operation);
        }
    }

    /// Translate a guess and its marks into operations and apply them
    pub fn apply_round(&mut self, round: &Round, policy: DuplicatePolicy) {
        debug!("applying round {round} ({})", policy.name());
        self.update(round.operations(policy));
    }

    /// The `n` best-scoring candidates, best first
    ///
    /// Ties keep candidate-list order. Does not change any state.
    #[must_use]
    pub fn top_guesses(&self, n: usize) -> Vec<RankedGuess> {
        rank(&self.candidates, &self.frequencies, n)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.candidates.len()
    }

    /// True once a letter has been placed in every slot
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.constraints.is_complete()
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub const fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    #[must_use]
    pub fn excluded_summary(&self) -> String {
        self.constraints.excluded_summary()
    }

    #[must_use]
    pub fn unplaced_summary(&self) -> String {
        self.constraints.unplaced_summary()
    }

    #[must_use]
    pub fn placed_summary(&self) -> String {
        self.constraints.placed_summary()
    }

    fn narrow<F: Fn(&Word) -> bool>(&mut self, operation: &Operation, keep: F) {
        let before = self.candidates.len();
        self.candidates = mem::take(&mut self.candidates)
            .into_iter()
            .filter(|word| keep(word))
            .collect();
        debug!(
            "{operation}: {before} -> {} candidates",
            self.candidates.len()
        );
    }
}
