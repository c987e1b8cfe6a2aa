//! TUI application state and logic

use crate::core::{DuplicatePolicy, Round};
use crate::solver::{DEFAULT_TOP_GUESSES, Possibilities, RankedGuess};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept for the message panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub possibilities: Possibilities,
    /// Fresh session restored by a new game
    pub initial: Possibilities,
    pub policy: DuplicatePolicy,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    /// Engine clones taken before each round
    pub undo_stack: Vec<Possibilities>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Entry,
    Solved,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub round: Round,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Possibilities, policy: DuplicatePolicy) -> Self {
        Self {
            possibilities: session.clone(),
            initial: session,
            policy,
            input_mode: InputMode::Entry,
            input_buffer: String::new(),
            history: Vec::new(),
            messages: vec![
                Message {
                    text: "Type a guess and its marks, e.g. 'crane xicxi', then Enter."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Marks: x = absent, i = elsewhere, c = correct".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            undo_stack: Vec::new(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn top_guesses(&self) -> Vec<RankedGuess> {
        self.possibilities.top_guesses(DEFAULT_TOP_GUESSES)
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.possibilities.count()
    }

    /// Parse the input buffer as a round and apply it
    pub fn submit_input(&mut self) {
        let input = self.input_buffer.trim().to_string();
        if input.is_empty() {
            return;
        }

        let round: Round = match input.parse() {
            Ok(round) => round,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        let candidates_before = self.possibilities.count();
        self.undo_stack.push(self.possibilities.clone());
        self.possibilities.apply_round(&round, self.policy);
        let candidates_after = self.possibilities.count();

        self.history.push(HistoryEntry {
            round,
            candidates_before,
            candidates_after,
        });
        self.input_buffer.clear();

        if candidates_after == 0 {
            self.add_message(
                "No candidates remain - check your feedback. Ctrl-U to undo.",
                MessageStyle::Error,
            );
        } else if self.possibilities.is_solved() {
            self.input_mode = InputMode::Solved;
            self.add_message(
                &format!(
                    "Solved in {} rounds: {}",
                    self.history.len(),
                    self.possibilities.placed_summary()
                ),
                MessageStyle::Success,
            );
            self.add_message("Ctrl-N for a new game, Esc to quit.", MessageStyle::Info);
        } else {
            self.add_message(
                &format!("{candidates_before} → {candidates_after} candidates"),
                MessageStyle::Info,
            );
        }
    }

    /// Restore the engine as it was before the last round
    pub fn undo_last(&mut self) {
        if let Some(previous) = self.undo_stack.pop() {
            self.possibilities = previous;
            self.history.pop();
            self.input_mode = InputMode::Entry;
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn new_game(&mut self) {
        self.possibilities = self.initial.clone();
        self.history.clear();
        self.undo_stack.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Entry;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// React to a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => self.undo_last(),
            KeyCode::Char('n') if ctrl => self.new_game(),
            _ if self.input_mode == InputMode::Solved => {}
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only key presses; releases would double every character on Windows
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
