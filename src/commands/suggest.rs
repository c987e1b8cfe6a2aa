//! Suggest command
//!
//! One-shot: replay the rounds played so far and report what is left.

use crate::core::{DuplicatePolicy, Round};
use crate::solver::{Possibilities, RankedGuess};

/// Snapshot of a session, ready for display
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub count: usize,
    pub guesses: Vec<RankedGuess>,
    pub excluded: String,
    pub unplaced: String,
    pub placed: String,
    pub solved: bool,
}

impl Suggestion {
    /// Capture counts, summaries and the `top` best guesses
    #[must_use]
    pub fn from_session(session: &Possibilities, top: usize) -> Self {
        Self {
            count: session.count(),
            guesses: session.top_guesses(top),
            excluded: session.excluded_summary(),
            unplaced: session.unplaced_summary(),
            placed: session.placed_summary(),
            solved: session.is_solved(),
        }
    }
}

/// Apply `rounds` in order to `session` and summarize the result
#[must_use]
pub fn suggest(
    mut session: Possibilities,
    rounds: &[Round],
    policy: DuplicatePolicy,
    top: usize,
) -> Suggestion {
    for round in rounds {
        session.apply_round(round, policy);
    }
    Suggestion::from_session(&session, top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{ENGLISH_FREQUENCIES, FrequencyTable};
    use crate::wordlists::loader::words_from_slice;

    fn session() -> Possibilities {
        Possibilities::new(
            words_from_slice(&["crane", "slate", "train", "brain", "grain", "irate", "robot"]),
            FrequencyTable::from_pairs(ENGLISH_FREQUENCIES),
        )
    }

    #[test]
    fn no_rounds_reports_everything() {
        let suggestion = suggest(session(), &[], DuplicatePolicy::default(), 3);
        assert_eq!(suggestion.count, 7);
        assert_eq!(suggestion.guesses.len(), 3);
        assert_eq!(suggestion.guesses[0].word.text(), "IRATE");
        assert!(suggestion.excluded.is_empty());
        assert_eq!(suggestion.placed, "- - - - -");
        assert!(!suggestion.solved);
    }

    #[test]
    fn rounds_applied_in_order() {
        let rounds: Vec<Round> = ["slate:xxcxx", "brain:xcccc"]
            .iter()
            .map(|text| text.parse().unwrap())
            .collect();

        let after_first = suggest(session(), &rounds[..1], DuplicatePolicy::default(), 10);
        let texts: Vec<&str> = after_first.guesses.iter().map(|g| g.word.text()).collect();
        assert_eq!(texts, ["GRAIN", "BRAIN"]);

        let suggestion = suggest(session(), &rounds, DuplicatePolicy::default(), 10);
        assert_eq!(suggestion.count, 1);
        assert_eq!(suggestion.guesses[0].word.text(), "GRAIN");
        assert_eq!(suggestion.excluded, "B, E, L, S, T");
    }

    #[test]
    fn summaries_reflect_marks() {
        let rounds = [Round::parse("brain", "x i c c c").unwrap()];
        let suggestion = suggest(session(), &rounds, DuplicatePolicy::default(), 10);

        assert_eq!(suggestion.excluded, "B");
        assert_eq!(suggestion.unplaced, "2: R");
        assert_eq!(suggestion.placed, "- - A I N");
        assert_eq!(suggestion.count, 0);
    }

    #[test]
    fn solved_after_all_correct() {
        let rounds = [Round::parse("grain", "ccccc").unwrap()];
        let suggestion = suggest(session(), &rounds, DuplicatePolicy::default(), 10);

        assert!(suggestion.solved);
        assert_eq!(suggestion.count, 1);
        assert_eq!(suggestion.guesses[0].word.text(), "GRAIN");
    }
}
