//! Wordle Possibilities - CLI
//!
//! Narrows Wordle candidates from feedback and suggests guesses by letter
//! frequency, with TUI and console modes.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::{Path, PathBuf};
use wordle_possibilities::{
    commands::{
        SolveConfig, run_benchmark, run_simple, sample_targets, solve_word, suggest,
    },
    core::{DuplicatePolicy, Round},
    language::Language,
    output::{print_benchmark_result, print_solve_result, print_suggestion},
    solver::{DEFAULT_TOP_GUESSES, Possibilities},
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_possibilities",
    about = "Narrow Wordle candidates from feedback and rank them by letter frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language: english (default) or danish
    #[arg(short, long, global = true, default_value = "english")]
    language: String,

    /// Load a whitespace-separated word file instead of the embedded list.
    /// The embedded lists are small samples; point this at a full dictionary
    /// for real games
    #[arg(short, long, global = true)]
    wordlist: Option<PathBuf>,

    /// How an absent mark on a repeated letter is read: occurrence (default) or blanket
    #[arg(long, global = true, default_value = "occurrence")]
    duplicates: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Menu-driven console mode
    Simple,

    /// Apply rounds played so far and print the best guesses
    Suggest {
        /// A played round as GUESS:MARKS, e.g. crane:xicxi (repeatable)
        #[arg(short, long = "round")]
        rounds: Vec<String>,

        /// Number of guesses to show
        #[arg(short, long, default_value_t = DEFAULT_TOP_GUESSES)]
        top: usize,
    },

    /// Self-play against a known answer
    Solve {
        /// The answer to play against
        word: String,

        /// Show scores and candidate counts per turn
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses
        #[arg(long, default_value = "10")]
        max_turns: usize,
    },

    /// Self-play against many answers and report statistics
    Benchmark {
        /// Number of random answers to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Play every word in the list instead of a sample
        #[arg(long)]
        all: bool,

        /// Give up after this many guesses
        #[arg(long, default_value = "10")]
        max_turns: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let language = Language::from_name(&cli.language)
        .ok_or_else(|| anyhow!("Unknown language '{}' (use english or danish)", cli.language))?;
    let policy = DuplicatePolicy::from_name(&cli.duplicates).ok_or_else(|| {
        anyhow!(
            "Unknown duplicate policy '{}' (use occurrence or blanket)",
            cli.duplicates
        )
    })?;
    let session = load_session(language, cli.wordlist.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(session, policy),
        Commands::Simple => {
            let stdin = io::stdin();
            run_simple(session, policy, &mut stdin.lock(), &mut io::stdout())?;
            Ok(())
        }
        Commands::Suggest { rounds, top } => run_suggest_command(session, &rounds, policy, top),
        Commands::Solve {
            word,
            verbose,
            max_turns,
        } => {
            let config = SolveConfig {
                target: word,
                max_turns,
                policy,
            };
            let result = solve_word(config, &session)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark {
            count,
            all,
            max_turns,
        } => {
            run_benchmark_command(&session, count, all, policy, max_turns);
            Ok(())
        }
    }
}

/// Build the starting session from the embedded list or a word file
fn load_session(language: Language, wordlist: Option<&Path>) -> Result<Possibilities> {
    let session = match wordlist {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list {}", path.display()))?;
            Possibilities::new(words, language.frequencies())
        }
        None => Possibilities::for_language(language),
    };
    info!(
        "{} session with {} candidates",
        language,
        session.count()
    );
    Ok(session)
}

fn run_suggest_command(
    session: Possibilities,
    rounds: &[String],
    policy: DuplicatePolicy,
    top: usize,
) -> Result<()> {
    let rounds = rounds
        .iter()
        .map(|text| {
            text.parse::<Round>()
                .with_context(|| format!("Invalid round '{text}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    let suggestion = suggest(session, &rounds, policy, top);
    print_suggestion(&suggestion);
    Ok(())
}

fn run_benchmark_command(
    session: &Possibilities,
    count: usize,
    all: bool,
    policy: DuplicatePolicy,
    max_turns: usize,
) {
    let targets = if all {
        session.candidates().to_vec()
    } else {
        sample_targets(session.candidates(), count, &mut rand::rng())
    };

    println!(
        "Running benchmark on {} words ({} duplicates)...",
        targets.len(),
        policy.name()
    );
    let result = run_benchmark(session, &targets, policy, max_turns, true);
    print_benchmark_result(&result);
}

fn run_play_command(session: Possibilities, policy: DuplicatePolicy) -> Result<()> {
    use wordle_possibilities::interactive::{App, run_tui};

    run_tui(App::new(session, policy))
}
