//! Simple interactive CLI mode
//!
//! Menu-driven console prompt without TUI. Reads from any `BufRead` and
//! writes to any `Write`, so a whole session can be scripted.

use crate::core::{DuplicatePolicy, Letter, Position, Round};
use crate::solver::{DEFAULT_TOP_GUESSES, Possibilities};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the simple interactive CLI mode until the user exits, input ends, or
/// the session is solved or emptied
///
/// Returns the final session.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Bad letters,
/// positions and marks are reported and the menu is shown again.
pub fn run_simple<R: BufRead, W: Write>(
    mut session: Possibilities,
    policy: DuplicatePolicy,
    input: &mut R,
    out: &mut W,
) -> Result<Possibilities> {
    writeln!(out, "{}", "Wordle Possibilities - Simple Mode".bright_cyan().bold())?;
    writeln!(out, "Duplicate letters: {}\n", policy.name())?;

    loop {
        print_state(&session, out)?;

        if session.count() == 0 {
            writeln!(out, "{}", "No candidates remain - check your feedback.".red())?;
            return Ok(session);
        }
        if session.is_solved() {
            writeln!(
                out,
                "{} {}",
                "Solved:".bright_green().bold(),
                session.placed_summary()
            )?;
            return Ok(session);
        }

        writeln!(out, "1: Add Excluded Letters")?;
        writeln!(out, "2: Add Included Letter")?;
        writeln!(out, "3: Add Guess With Marks")?;
        writeln!(out, "9: Exit")?;

        let Some(choice) = prompt(input, out, None)? else {
            break;
        };

        let more = match choice.to_lowercase().as_str() {
            "1" => add_excluded_letters(&mut session, input, out)?,
            "2" => add_included_letter(&mut session, input, out)?,
            "3" => add_round(&mut session, policy, input, out)?,
            "9" | "q" | "quit" | "exit" => false,
            other => {
                writeln!(out, "Unknown option '{other}'\n")?;
                true
            }
        };
        if !more {
            break;
        }
    }

    writeln!(out, "Bye!")?;
    Ok(session)
}

fn print_state<W: Write>(session: &Possibilities, out: &mut W) -> Result<()> {
    writeln!(out, "{}", "Top Guesses:".bold())?;
    for guess in session.top_guesses(DEFAULT_TOP_GUESSES) {
        writeln!(out, " - {guess}")?;
    }
    writeln!(out)?;

    let excluded = session.excluded_summary();
    if !excluded.is_empty() {
        writeln!(out, "Excluded: {excluded}")?;
    }
    let unplaced = session.unplaced_summary();
    if !unplaced.is_empty() {
        writeln!(out, "Included, but unplaced: {unplaced}")?;
    }
    if session.constraints().has_placed() {
        writeln!(out, "Placed: {}", session.placed_summary())?;
    }

    writeln!(out, "Current Possibilities: {}\n", session.count())?;
    Ok(())
}

/// `Ok(false)` means input ended mid-action
fn add_excluded_letters<R: BufRead, W: Write>(
    session: &mut Possibilities,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    let Some(text) = prompt(input, out, Some("What letters? (no delimiter)"))? else {
        return Ok(false);
    };

    for ch in text.chars().filter(|ch| !ch.is_whitespace()) {
        match Letter::new(ch) {
            Ok(letter) => session.exclude_letter(letter),
            Err(err) => writeln!(out, "{}", err.to_string().red())?,
        }
    }
    writeln!(out)?;
    Ok(true)
}

fn add_included_letter<R: BufRead, W: Write>(
    session: &mut Possibilities,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    let Some(letter) = prompt(input, out, Some("What letter?"))? else {
        return Ok(false);
    };
    let Some(slot) = prompt(input, out, Some("What position? (1-5)"))? else {
        return Ok(false);
    };
    let Some(correct) = prompt(input, out, Some("Was the position correct? (y/n)"))? else {
        return Ok(false);
    };

    let letter = match letter.parse::<Letter>() {
        Ok(letter) => letter,
        Err(err) => {
            writeln!(out, "{}\n", err.to_string().red())?;
            return Ok(true);
        }
    };
    // Non-numbers fall through as slot 0, which is rejected
    let position = match Position::from_slot(slot.parse().unwrap_or(0)) {
        Ok(position) => position,
        Err(err) => {
            writeln!(out, "{}\n", err.to_string().red())?;
            return Ok(true);
        }
    };

    match correct.to_lowercase().as_str() {
        "y" | "yes" => session.place_letter(letter, position),
        "n" | "no" => session.include_letter(letter, position),
        other => writeln!(out, "{}", format!("Expected y or n, got '{other}'").red())?,
    }
    writeln!(out)?;
    Ok(true)
}

fn add_round<R: BufRead, W: Write>(
    session: &mut Possibilities,
    policy: DuplicatePolicy,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    let Some(guess) = prompt(input, out, Some("What was the guess?"))? else {
        return Ok(false);
    };
    let Some(marks) = prompt(input, out, Some("Marks? (x = absent, i = elsewhere, c = correct)"))?
    else {
        return Ok(false);
    };

    match Round::parse(&guess, &marks) {
        Ok(round) => session.apply_round(&round, policy),
        Err(err) => writeln!(out, "{}", err.to_string().red())?,
    }
    writeln!(out)?;
    Ok(true)
}

/// Show an optional question, then read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: Option<&str>,
) -> Result<Option<String>> {
    if let Some(question) = question {
        writeln!(out, "{question}")?;
    }
    write!(out, "> ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::language::{ENGLISH_FREQUENCIES, FrequencyTable};
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn session() -> Possibilities {
        Possibilities::new(
            words_from_slice(&["crane", "slate", "train", "brain", "grain", "irate"]),
            FrequencyTable::from_pairs(ENGLISH_FREQUENCIES),
        )
    }

    fn run(script: &str) -> (Possibilities, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let session =
            run_simple(session(), DuplicatePolicy::default(), &mut input, &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    fn texts(session: &Possibilities) -> Vec<&str> {
        session.candidates().iter().map(Word::text).collect()
    }

    #[test]
    fn exit_leaves_session_untouched() {
        let (session, output) = run("9\n");
        assert_eq!(session.count(), 6);
        assert!(output.contains("Current Possibilities: 6"));
        assert!(output.contains("Bye!"));
    }

    #[test]
    fn end_of_input_exits() {
        let (session, _) = run("");
        assert_eq!(session.count(), 6);
    }

    #[test]
    fn exclude_letters_without_delimiter() {
        let (session, output) = run("1\nsc\n9\n");
        assert_eq!(texts(&session), ["TRAIN", "BRAIN", "GRAIN", "IRATE"]);
        assert!(output.contains("Excluded: C, S"));
        assert!(!output.contains("Placed:"));
    }

    #[test]
    fn placed_line_shown_once_a_letter_is_placed() {
        let (_, output) = run("2\nt\n1\nn\n9\n");
        assert!(!output.contains("Placed:"));

        let (_, output) = run("2\ng\n1\ny\n9\n");
        assert!(output.contains("Placed: G - - - -"));
    }

    #[test]
    fn include_and_place_single_letters() {
        // B is somewhere but not first: BRAIN has it first, nothing else has it
        let (session, _) = run("2\nb\n1\nn\n9\n");
        assert_eq!(session.count(), 0);

        // Not second keeps BRAIN
        let (session, _) = run("2\nb\n2\nn\n9\n");
        assert_eq!(texts(&session), ["BRAIN"]);

        // G is first
        let (session, _) = run("2\ng\n1\ny\n9\n");
        assert_eq!(texts(&session), ["GRAIN"]);
    }

    #[test]
    fn unplaced_letter_filters() {
        let (session, output) = run("2\nt\n1\nn\n9\n");
        assert_eq!(texts(&session), ["SLATE", "IRATE"]);
        assert!(output.contains("Included, but unplaced: 1: T"));
    }

    #[test]
    fn guess_with_marks_round() {
        let (session, _) = run("3\nbrain\nx c c c c\n9\n");
        assert_eq!(texts(&session), ["TRAIN", "GRAIN"]);
    }

    #[test]
    fn bad_input_reported_and_ignored() {
        let (session, output) = run("2\n7\n1\ny\n2\nt\n6\nn\n3\ncrane\nxx\n7\n9\n");
        assert_eq!(session.count(), 6);
        assert!(output.contains("is not a single alphabetic letter"));
        assert!(output.contains("Position 6 is out of range"));
        assert!(output.contains("must hold exactly 5"));
        assert!(output.contains("Unknown option '7'"));
    }

    #[test]
    fn solved_state_announced() {
        let (session, output) = run("3\ngrain\nccccc\n");
        assert!(session.is_solved());
        assert!(output.contains("G R A I N"));
        assert!(!output.contains("Bye!"));
    }

    #[test]
    fn empty_state_announced() {
        let (session, output) = run("1\naeiou\n");
        assert_eq!(session.count(), 0);
        assert!(output.contains("No candidates remain - check your feedback."));
    }
}
