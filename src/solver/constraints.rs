//! Accumulated letter constraints
//!
//! Three kinds of knowledge, each applied as its own filter stage:
//! 1. `excluded` letters reject any word containing them
//! 2. `unplaced` letters reject words that have them at that slot
//! 3. `placed` letters select only words that have them at that slot
//!
//! Contradictory input is not detected; it simply filters everything out.

use crate::core::{Letter, Position, WORD_LENGTH, Word};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    excluded: Vec<Letter>,
    unplaced: [BTreeSet<Letter>; WORD_LENGTH],
    placed: [Option<Letter>; WORD_LENGTH],
}

impl Constraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an absent letter. Returns false if it was already recorded.
    pub fn exclude(&mut self, letter: Letter) -> bool {
        if self.excluded.contains(&letter) {
            return false;
        }
        self.excluded.push(letter);
        true
    }

    /// Record a present letter that is not at `position`
    pub fn include(&mut self, letter: Letter, position: Position) -> bool {
        self.unplaced[position.index()].insert(letter)
    }

    /// Record the letter at `position`, returning any letter it replaced
    pub fn place(&mut self, letter: Letter, position: Position) -> Option<Letter> {
        self.placed[position.index()].replace(letter)
    }

    /// Excluded letters in the order they were reported
    #[must_use]
    pub fn excluded(&self) -> &[Letter] {
        &self.excluded
    }

    #[must_use]
    pub fn unplaced(&self, position: Position) -> &BTreeSet<Letter> {
        &self.unplaced[position.index()]
    }

    #[must_use]
    pub const fn placed(&self, position: Position) -> Option<Letter> {
        self.placed[position.index()]
    }

    /// True once every slot has a placed letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.placed.iter().all(Option::is_some)
    }

    /// True if any slot has a placed letter
    #[must_use]
    pub fn has_placed(&self) -> bool {
        self.placed.iter().any(Option::is_some)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
            && self.unplaced.iter().all(BTreeSet::is_empty)
            && self.placed.iter().all(Option::is_none)
    }

    /// Stage 1: reject words containing an excluded letter
    #[must_use]
    pub fn avoids_excluded(&self, word: &Word) -> bool {
        !self.excluded.iter().any(|&letter| word.contains(letter))
    }

    /// Stage 2: reject words with an unplaced letter at its forbidden slot,
    /// or missing it entirely
    #[must_use]
    pub fn respects_unplaced(&self, word: &Word) -> bool {
        Position::ALL.iter().all(|&position| {
            self.unplaced(position)
                .iter()
                .all(|&letter| word.contains(letter) && word.letter_at(position) != letter)
        })
    }

    /// Stage 3: select words matching every placed letter
    #[must_use]
    pub fn matches_placed(&self, word: &Word) -> bool {
        Position::ALL.iter().all(|&position| {
            self.placed(position)
                .is_none_or(|letter| word.letter_at(position) == letter)
        })
    }

    /// Full three-stage check
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.avoids_excluded(word) && self.respects_unplaced(word) && self.matches_placed(word)
    }

    /// Sorted, unique excluded letters, e.g. `"C, N, S"`
    #[must_use]
    pub fn excluded_summary(&self) -> String {
        join_letters(self.excluded.iter().copied().collect::<BTreeSet<_>>())
    }

    /// Unplaced letters per slot, e.g. `"2: R; 5: E"`
    ///
    /// Slots are 1-based and empty slots are left out.
    #[must_use]
    pub fn unplaced_summary(&self) -> String {
        Position::ALL
            .iter()
            .filter(|&&position| !self.unplaced(position).is_empty())
            .map(|&position| {
                format!(
                    "{position}: {}",
                    join_letters(self.unplaced(position).iter().copied())
                )
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Placed letters by slot with `-` for unknown, e.g. `"- - A - -"`
    #[must_use]
    pub fn placed_summary(&self) -> String {
        self.placed
            .iter()
            .map(|slot| slot.map_or('-', Letter::as_char).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn join_letters<I: IntoIterator<Item = Letter>>(letters: I) -> String {
    letters
        .into_iter()
        .map(|letter| letter.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
