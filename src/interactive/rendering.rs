//! TUI rendering with ratatui
//!
//! Panels for suggestions, constraints, candidates, history and messages.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Mark, Position};
use crate::output::formatters::candidate_preview;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed by name in the candidate panel
const CANDIDATE_PREVIEW: usize = 60;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_guesses(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "WORDLE POSSIBILITIES | duplicates: {}",
        app.policy.name()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(rounded("").style(Style::default().fg(Color::Cyan)));
    f.render_widget(header, area);
}

fn render_guesses(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .top_guesses()
        .iter()
        .enumerate()
        .map(|(i, guess)| {
            let style = if i == 0 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:2}. ", i + 1)),
                Span::styled(guess.word.text().to_string(), style),
                Span::styled(
                    format!("  {:>7.2}", guess.score),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = if items.is_empty() {
        List::new(vec![
            ListItem::new("No candidates remain").style(Style::default().fg(Color::Red)),
        ])
    } else {
        List::new(items)
    };
    f.render_widget(list.block(rounded(" Top Guesses ")), area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Constraints
            Constraint::Length(3),      // Search space gauge
            Constraint::Percentage(40), // Candidates
            Constraint::Min(4),         // History and messages
        ])
        .split(area);

    render_constraints(f, app, chunks[0]);
    render_search_space(f, app, chunks[1]);
    render_candidates(f, app, chunks[2]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);
    render_history(f, app, bottom[0]);
    render_messages(f, app, bottom[1]);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.possibilities;
    let or_none = |text: String| if text.is_empty() { "-".to_string() } else { text };

    let content = vec![
        Line::from(vec![
            Span::raw("Excluded: "),
            Span::styled(
                or_none(session.excluded_summary()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::raw("Unplaced: "),
            Span::styled(
                or_none(session.unplaced_summary()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw("Placed:   "),
            Span::styled(
                session.placed_summary(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(rounded(" Constraints "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_search_space(f: &mut Frame, app: &App, area: Rect) {
    let total = app.initial.count();
    let current = app.candidates_count();
    let eliminated_pct = if total > 0 {
        ((total - current) * 100 / total) as u16
    } else {
        0
    };

    let gauge = Gauge::default()
        .block(rounded(" Search Space "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(eliminated_pct.min(100))
        .label(format!("{current} of {total} candidates remain"));
    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let words = app.possibilities.candidates();
    let title = format!(" Candidates ({}) ", words.len());

    let paragraph = Paragraph::new(candidate_preview(words, CANDIDATE_PREVIEW))
        .block(rounded(&title))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            let guess = entry.round.guess();
            let marks = entry.round.marks();
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            spans.extend(Position::ALL.iter().map(|&position| {
                let bg = match marks.get(position) {
                    Some(Mark::Correct) => Color::Green,
                    Some(Mark::Present) => Color::Yellow,
                    Some(Mark::Absent) => Color::DarkGray,
                    None => Color::Reset,
                };
                Span::styled(
                    guess.letter_at(position).to_string(),
                    Style::default().fg(Color::Black).bg(bg),
                )
            }));
            spans.push(Span::raw(format!(
                " {} → {}",
                entry.candidates_before, entry.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    f.render_widget(List::new(items).block(rounded(" History ")), area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    f.render_widget(List::new(messages).block(rounded(" Messages ")), area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Solved => (" Solved! | Ctrl-N new game ", "", Color::Green),
        InputMode::Entry => (
            " Guess and marks (x absent, i elsewhere, c correct) ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = if app.candidates_count() == 0 {
        "Ctrl-U: Undo | Ctrl-N: New Game | Esc: Quit"
    } else {
        "Enter: Apply | Ctrl-U: Undo | Ctrl-N: New Game | Esc: Quit"
    };
    let status = Paragraph::new(format!(
        "Rounds: {} | Candidates: {} | {help}",
        app.history.len(),
        app.candidates_count()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
