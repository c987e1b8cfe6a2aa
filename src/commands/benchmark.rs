//! Benchmark command
//!
//! Self-plays the frequency heuristic against many answers and collects
//! statistics.

use super::solve::{Outcome, play_game};
use crate::core::{DuplicatePolicy, Word};
use crate::solver::Possibilities;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub lost: Vec<String>,
    pub turn_limited: Vec<String>,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Solved games by number of turns
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct answers at random
pub fn sample_targets<R: Rng + ?Sized>(words: &[Word], count: usize, rng: &mut R) -> Vec<Word> {
    words.choose_multiple(rng, count).cloned().collect()
}

/// Play one game per target, each from a fresh copy of `session`
pub fn run_benchmark(
    session: &Possibilities,
    targets: &[Word],
    policy: DuplicatePolicy,
    max_turns: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved = 0;
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_seen = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut lost = Vec::new();
    let mut turn_limited = Vec::new();

    for target in targets {
        pb.set_message(target.text().to_string());
        let result = play_game(target, session.clone(), policy, max_turns);

        match result.outcome {
            Outcome::Solved => {
                let turns = result.turns();
                solved += 1;
                total_turns += turns;
                min_turns = min_turns.min(turns);
                max_seen = max_seen.max(turns);
                *distribution.entry(turns).or_insert(0) += 1;
            }
            Outcome::AnswerLost => lost.push(result.target),
            Outcome::TurnLimit => turn_limited.push(result.target),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let average_turns = if solved > 0 {
        total_turns as f64 / solved as f64
    } else {
        0.0
    };
    let words_per_second = if duration.as_secs_f64() > 0.0 {
        targets.len() as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    BenchmarkResult {
        total_words: targets.len(),
        solved,
        lost,
        turn_limited,
        average_turns,
        min_turns: if solved > 0 { min_turns } else { 0 },
        max_turns: max_seen,
        distribution,
        duration,
        words_per_second,
    }
}
