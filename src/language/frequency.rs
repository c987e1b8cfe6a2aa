//! Letter frequency tables
//!
//! Weights are relative occurrence percentages. Scoring sums the weights of a
//! word's distinct letters, so repeated letters add nothing.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// English letter weights
pub const ENGLISH_FREQUENCIES: &[(char, f64)] = &[
    ('E', 56.88), ('A', 43.31), ('R', 38.64), ('I', 38.45), ('O', 36.51), ('T', 35.43),
    ('N', 33.92), ('S', 29.23), ('L', 27.98), ('C', 23.13), ('U', 18.51), ('D', 17.25),
    ('P', 16.14), ('M', 15.30), ('H', 15.30), ('G', 12.50), ('B', 10.50), ('F', 9.24),
    ('Y', 9.06), ('W', 6.57), ('K', 5.61), ('V', 5.13), ('X', 1.48), ('Z', 1.39),
    ('J', 1.00), ('Q', 1.00),
];

/// Danish letter weights, including Å, Æ and Ø
pub const DANISH_FREQUENCIES: &[(char, f64)] = &[
    ('E', 16.70), ('R', 7.61), ('N', 7.55), ('D', 7.24), ('T', 7.03), ('A', 6.01),
    ('S', 5.67), ('I', 5.55), ('L', 4.85), ('G', 4.56), ('O', 4.14), ('M', 3.40),
    ('K', 3.07), ('V', 2.88), ('F', 2.27), ('H', 1.88), ('U', 1.85), ('B', 1.41),
    ('P', 1.33), ('J', 1.11), ('Å', 1.03), ('Æ', 0.93), ('Ø', 0.84), ('Y', 0.72),
    ('C', 0.29), ('W', 0.02), ('X', 0.02), ('Z', 0.02), ('Q', 0.01),
];

/// Immutable mapping from letter to weight
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrequencyTable {
    weights: FxHashMap<char, f64>,
}

impl FrequencyTable {
    /// Build a table from `(letter, weight)` pairs
    ///
    /// Letters are upper-cased; negative weights are clamped to zero.
    #[must_use]
    pub fn from_pairs(pairs: &[(char, f64)]) -> Self {
        let weights = pairs
            .iter()
            .map(|&(letter, weight)| (normalize(letter), weight.max(0.0)))
            .collect();
        Self { weights }
    }

    /// Weight of a letter, 0 if the table does not know it
    #[must_use]
    pub fn weight(&self, letter: char) -> f64 {
        self.weights.get(&normalize(letter)).copied().unwrap_or(0.0)
    }

    /// Sum of weights over the distinct letters of `letters`
    ///
    /// Total over any input: unknown letters contribute 0. Weights are summed
    /// in sorted letter order so anagrams always score identically.
    ///
    /// # Examples
    /// ```
    /// use wordle_possibilities::language::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_pairs(&[('E', 5.0), ('A', 3.0), ('R', 2.0)]);
    /// assert_eq!(table.score("ERA".chars()), 10.0);
    /// assert_eq!(table.score("EEE".chars()), 5.0);
    /// ```
    pub fn score<I: IntoIterator<Item = char>>(&self, letters: I) -> f64 {
        let mut distinct: Vec<char> = letters.into_iter().map(normalize).collect();
        distinct.sort_unstable();
        distinct.dedup();
        distinct.into_iter().map(|letter| self.weight(letter)).sum()
    }

    /// Score of a candidate word
    #[must_use]
    pub fn score_word(&self, word: &Word) -> f64 {
        self.score(word.chars())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

fn normalize(letter: char) -> char {
    letter.to_uppercase().next().unwrap_or(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> FrequencyTable {
        FrequencyTable::from_pairs(&[('E', 5.0), ('A', 3.0), ('R', 2.0)])
    }

    #[test]
    fn anagrams_score_equal() {
        let table = small_table();
        assert!((table.score("ERA".chars()) - 10.0).abs() < f64::EPSILON);
        assert!((table.score("ARE".chars()) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn duplicate_letters_counted_once() {
        let table = small_table();
        assert!((table.score("EERAE".chars()) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_letters_weigh_zero() {
        let table = small_table();
        assert!(table.weight('Z').abs() < f64::EPSILON);
        assert!((table.score("ZZE".chars()) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lowercase_input_normalized() {
        let table = small_table();
        assert!((table.weight('e') - 5.0).abs() < f64::EPSILON);
        assert!((table.score("era".chars()) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn builtin_tables_complete() {
        let english = FrequencyTable::from_pairs(ENGLISH_FREQUENCIES);
        let danish = FrequencyTable::from_pairs(DANISH_FREQUENCIES);
        assert_eq!(english.len(), 26);
        assert_eq!(danish.len(), 29);
        assert!(danish.weight('Ø') > 0.0);
        assert!(english.weight('Ø').abs() < f64::EPSILON);
    }

    #[test]
    fn score_word_matches_score() {
        let table = FrequencyTable::from_pairs(ENGLISH_FREQUENCIES);
        let word = Word::new("crane").unwrap();
        let expected = 23.13 + 38.64 + 43.31 + 33.92 + 56.88;
        assert!((table.score_word(&word) - expected).abs() < 1e-9);
    }

    #[test]
    fn negative_weights_clamped() {
        let table = FrequencyTable::from_pairs(&[('A', -1.0)]);
        assert!(table.weight('A').abs() < f64::EPSILON);
    }
}
