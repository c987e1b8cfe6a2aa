//! Core domain types
//!
//! Letters, positions, words and feedback. Everything here is plain data with
//! validation at construction.

mod error;
mod feedback;
mod letter;
mod round;
mod word;

pub use error::EngineError;
pub use feedback::{Mark, Marks};
pub use letter::{Letter, Position, WORD_LENGTH};
pub use round::{DuplicatePolicy, Operation, Round};
pub use word::{Word, WordError};
