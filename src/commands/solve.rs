//! Solve command
//!
//! Plays one game against a known answer: always guess the top-ranked
//! candidate, feed back the marks the puzzle would give, repeat.

use crate::core::{DuplicatePolicy, Marks, Round, Word};
use crate::solver::Possibilities;
use anyhow::{Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_turns: usize,
    pub policy: DuplicatePolicy,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            max_turns: 10,
            policy: DuplicatePolicy::default(),
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    /// The answer was filtered out, or nothing was left to guess
    AnswerLost,
    TurnLimit,
}

/// A single turn in the solving process
#[derive(Debug, Clone)]
pub struct SolveStep {
    pub guess: String,
    pub marks: Marks,
    pub score: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub steps: Vec<SolveStep>,
    pub outcome: Outcome,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    #[must_use]
    pub fn turns(&self) -> usize {
        self.steps.len()
    }
}

/// Solve a target word starting from `session`
///
/// # Errors
///
/// Returns an error if the target is not a valid word or is not among the
/// session's candidates.
pub fn solve_word(config: SolveConfig, session: &Possibilities) -> Result<SolveResult> {
    let target = Word::new(&config.target)?;
    if !session.candidates().contains(&target) {
        bail!("'{}' is not in the word list", target);
    }

    Ok(play_game(&target, session.clone(), config.policy, config.max_turns))
}

/// Play a game to the end; `target` must be a candidate of `session`
#[must_use]
pub fn play_game(
    target: &Word,
    mut session: Possibilities,
    policy: DuplicatePolicy,
    max_turns: usize,
) -> SolveResult {
    let mut steps = Vec::new();

    for _ in 0..max_turns {
        let Some(best) = session.top_guesses(1).into_iter().next() else {
            return finish(target, steps, Outcome::AnswerLost);
        };

        let marks = Marks::calculate(&best.word, target);
        let candidates_before = session.count();
        session.apply_round(&Round::new(best.word.clone(), marks), policy);

        steps.push(SolveStep {
            guess: best.word.text().to_string(),
            marks,
            score: best.score,
            candidates_before,
            candidates_after: session.count(),
        });

        if marks.is_solved() {
            return finish(target, steps, Outcome::Solved);
        }
        if !session.candidates().contains(target) {
            return finish(target, steps, Outcome::AnswerLost);
        }
    }

    finish(target, steps, Outcome::TurnLimit)
}

fn finish(target: &Word, steps: Vec<SolveStep>, outcome: Outcome) -> SolveResult {
    SolveResult {
        target: target.text().to_string(),
        steps,
        outcome,
    }
}
