//! Word list loading utilities
//!
//! Word sources are whitespace-separated text. Tokens are upper-cased; those
//! that are not five letters are skipped.

use crate::core::Word;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_possibilities::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/danish.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Split text on whitespace and keep the tokens that are valid words
///
/// # Examples
/// ```
/// use wordle_possibilities::wordlists::loader::parse_words;
///
/// let words = parse_words("crane slate\nbøger  x");
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[2].text(), "BØGER");
/// ```
#[must_use]
pub fn parse_words(text: &str) -> Vec<Word> {
    text.split_whitespace()
        .filter_map(|token| match Word::new(token) {
            Ok(word) => Some(word),
            Err(err) => {
                debug!("skipping '{token}': {err}");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_possibilities::wordlists::loader::words_from_slice;
/// use wordle_possibilities::wordlists::ENGLISH;
///
/// let words = words_from_slice(ENGLISH);
/// assert_eq!(words.len(), ENGLISH.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn parse_words_splits_on_any_whitespace() {
        let words = parse_words("  crane\tslate\n\ntrain  ");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE", "TRAIN"]);
    }

    #[test]
    fn parse_words_keeps_duplicates_in_order() {
        // Deduplication is the engine's job
        let words = parse_words("crane CRANE slate");
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join("wordle_possibilities_loader_test.txt");
        fs::write(&path, "æbler bøger huset 12345").unwrap();

        let words = load_from_file(&path).unwrap();
        let _ = fs::remove_file(&path);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["ÆBLER", "BØGER", "HUSET"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/nonexistent/wordle_possibilities/words.txt").is_err());
    }
}
