//! Supported puzzle languages
//!
//! A language fixes both the word list and the frequency table for a session.

mod frequency;

pub use frequency::{DANISH_FREQUENCIES, ENGLISH_FREQUENCIES, FrequencyTable};

use crate::core::Word;
use crate::wordlists::{DANISH, ENGLISH, loader::words_from_slice};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Danish,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::English, Self::Danish];

    /// Parse a language name
    ///
    /// Accepts "english"/"en" and "danish"/"dansk"/"da".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "english" | "en" => Some(Self::English),
            "danish" | "dansk" | "da" => Some(Self::Danish),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Danish => "Danish",
        }
    }

    #[must_use]
    pub fn frequencies(self) -> FrequencyTable {
        match self {
            Self::English => FrequencyTable::from_pairs(ENGLISH_FREQUENCIES),
            Self::Danish => FrequencyTable::from_pairs(DANISH_FREQUENCIES),
        }
    }

    /// Embedded word list compiled into the binary
    #[must_use]
    pub const fn embedded_words(self) -> &'static [&'static str] {
        match self {
            Self::English => ENGLISH,
            Self::Danish => DANISH,
        }
    }

    #[must_use]
    pub fn words(self) -> Vec<Word> {
        words_from_slice(self.embedded_words())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
