//! Candidate narrowing and ranking
//!
//! `Possibilities` is the engine: it filters the word list as feedback
//! arrives and ranks what is left by letter frequency.

mod constraints;
mod engine;
mod ranking;

pub use constraints::Constraints;
pub use engine::{DEFAULT_TOP_GUESSES, Possibilities};
pub use ranking::{RankedGuess, rank};
