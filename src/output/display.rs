//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{BenchmarkResult, Outcome, SolveResult, Suggestion};
use crate::core::Word;
use colored::Colorize;

/// Print summaries, count and ranked guesses for a session
pub fn print_suggestion(suggestion: &Suggestion) {
    println!("\n{}", "─".repeat(60).cyan());

    if !suggestion.excluded.is_empty() {
        println!("Excluded:  {}", suggestion.excluded.bright_black());
    }
    if !suggestion.unplaced.is_empty() {
        println!("Unplaced:  {}", suggestion.unplaced.yellow());
    }
    println!("Placed:    {}", suggestion.placed.green().bold());
    println!(
        "Current Possibilities: {}",
        suggestion.count.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if suggestion.count == 0 {
        println!("{}", "No candidates remain - check your feedback.".red().bold());
        return;
    }
    if suggestion.solved {
        println!("{}", "✅ Every letter is placed!".green().bold());
    }

    println!("\n{}", "Top Guesses:".bright_cyan().bold());
    for guess in &suggestion.guesses {
        println!(" - {guess}");
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let guess = Word::new(&step.guess).map_or_else(
            |_| step.guess.clone(),
            |word| colored_guess(&word, &step.marks),
        );
        println!("\nTurn {}: {} {}", i + 1, guess, step.marks.to_emoji());

        if verbose {
            println!("  Score:      {:.2}", step.score);
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    match result.outcome {
        Outcome::Solved => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.turns()).green().bold()
        ),
        Outcome::AnswerLost => println!(
            "{}",
            format!("❌ Lost the answer after {} guesses", result.turns())
                .red()
                .bold()
        ),
        Outcome::TurnLimit => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.turns())
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        result.solved.to_string().green().bold()
    );
    println!(
        "   Answer lost:      {}",
        result.lost.len().to_string().red()
    );
    println!(
        "   Turn limit hit:   {}",
        result.turn_limited.len().to_string().yellow()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_turns).bright_yellow().bold()
    );
    println!("   Best case:        {}", result.min_turns.to_string().green());
    println!("   Worst case:       {}", result.max_turns.to_string().yellow());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words > 0 && !result.distribution.is_empty() {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        let total = result.total_words as f64;
        for turns in 1..=result.max_turns {
            let count = result.distribution.get(&turns).copied().unwrap_or(0);
            let pct = count as f64 / total * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {turns:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    let failures: Vec<&String> = result.lost.iter().chain(&result.turn_limited).collect();
    if !failures.is_empty() {
        println!("\n{}", "Unsolved:".red().bold());
        for word in failures.iter().take(20) {
            println!("   {word}");
        }
        if failures.len() > 20 {
            println!("   ... and {} more", failures.len() - 20);
        }
    }
}
