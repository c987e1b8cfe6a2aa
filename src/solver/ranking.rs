//! Frequency-weighted ranking of candidates

use crate::core::Word;
use crate::language::FrequencyTable;
use rayon::prelude::*;
use std::fmt;

/// A suggested guess with its display score
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGuess {
    pub word: Word,
    /// Score rounded to 2 decimal places
    pub score: f64,
}

impl fmt::Display for RankedGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" (Score: {:.2})", self.word, self.score)
    }
}

/// Rank candidates by distinct-letter frequency score and keep the top `n`
///
/// Scores are computed in parallel but collected in candidate order, and the
/// sort is stable, so equal scores keep their original order.
#[must_use]
pub fn rank(candidates: &[Word], frequencies: &FrequencyTable, n: usize) -> Vec<RankedGuess> {
    let mut scored: Vec<(&Word, f64)> = candidates
        .par_iter()
        .map(|word| (word, frequencies.score_word(word)))
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .take(n)
        .map(|(word, score)| RankedGuess {
            word: word.clone(),
            score: round_score(score),
        })
        .collect()
}

fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
