//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod suggest;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use simple::run_simple;
pub use solve::{Outcome, SolveConfig, SolveResult, SolveStep, play_game, solve_word};
pub use suggest::{Suggestion, suggest};
