//! Wordle Possibilities
//!
//! A Wordle helper: feed it the marks each guess earned and it narrows the
//! word list, then ranks what is left by how common its letters are. Ships
//! English and Danish word lists and frequency tables.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_possibilities::core::{DuplicatePolicy, Round};
//! use wordle_possibilities::language::Language;
//! use wordle_possibilities::solver::Possibilities;
//!
//! let mut session = Possibilities::for_language(Language::English);
//! let round = Round::parse("crane", "xicxi").unwrap();
//! session.apply_round(&round, DuplicatePolicy::default());
//!
//! for guess in session.top_guesses(5) {
//!     println!("{guess}");
//! }
//! ```

// Core domain types
pub mod core;

// Candidate filtering and ranking
pub mod solver;

// Languages and letter frequencies
pub mod language;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
