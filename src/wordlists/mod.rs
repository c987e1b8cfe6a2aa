//! Word lists for the supported languages
//!
//! Provides embedded word lists compiled into the binary, plus a loader for
//! whitespace-separated word files.

mod embedded;
pub mod loader;

pub use embedded::{DANISH, DANISH_COUNT, ENGLISH, ENGLISH_COUNT};
