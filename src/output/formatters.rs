//! Formatting utilities for terminal output

use crate::core::{Mark, Marks, Position, Word};
use colored::Colorize;

/// Guess letters tinted by their marks, the way the puzzle shows them
#[must_use]
pub fn colored_guess(word: &Word, marks: &Marks) -> String {
    Position::ALL
        .iter()
        .map(|&position| {
            let letter = word.letter_at(position).to_string();
            match marks.get(position) {
                Some(Mark::Correct) => letter.black().on_green().to_string(),
                Some(Mark::Present) => letter.black().on_yellow().to_string(),
                Some(Mark::Absent) => letter.white().on_bright_black().to_string(),
                None => letter,
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Values are clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Up to `limit` candidate words joined by spaces, with a count of the rest
#[must_use]
pub fn candidate_preview(words: &[Word], limit: usize) -> String {
    let mut preview = words
        .iter()
        .take(limit)
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(" ");
    if words.len() > limit {
        preview.push_str(&format!(" (+{} more)", words.len() - limit));
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn preview_truncates() {
        let words = words_from_slice(&["crane", "slate", "train"]);
        assert_eq!(candidate_preview(&words, 5), "CRANE SLATE TRAIN");
        assert_eq!(candidate_preview(&words, 2), "CRANE SLATE (+1 more)");
        assert_eq!(candidate_preview(&[], 2), "");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        let marks: Marks = "xicc.".parse().unwrap();
        assert_eq!(colored_guess(&word, &marks), "CRANE");
    }
}
