//! TUI rendering with ratatui
//!
//! Board, keyboard and leaderboard panels for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{MAX_GUESSES, Mark, WORD_LENGTH};
use crate::output::formatters::{KEY_DEFAULT_RGB, format_clock, mark_rgb, medal, time_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S, R>(f: &mut Frame, app: &App<S, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Board and side panel
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn render_header<S, R>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let config = app.game.config();
    let mut spans = vec![Span::styled(
        "SPEEDLE",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if config.hard_mode {
        let remaining = app.game.remaining();
        let color = if remaining <= 10 { Color::Red } else { Color::Yellow };
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!(
                "Time: {} {}",
                format_clock(remaining),
                time_bar(remaining, config.time_limit, 20)
            ),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// One styled tile per letter slot
fn tile(letter: char, background: Option<Color>) -> Span<'static> {
    let style = match background {
        Some(color) => Style::default()
            .fg(Color::White)
            .bg(color)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::White).bg(Color::DarkGray),
    };
    Span::styled(format!(" {letter} "), style)
}

fn render_board<S, R>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let state = app.game.state();
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for row in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        if let Some(attempt) = state.attempts().get(row) {
            for (letter, mark) in attempt.letters() {
                spans.push(tile(letter, Some(rgb(mark_rgb(mark)))));
                spans.push(Span::raw(" "));
            }
        } else if row == state.guess_count() && state.is_active() {
            let mut typed = state.input().chars();
            for _ in 0..WORD_LENGTH {
                spans.push(tile(typed.next().unwrap_or('_'), None));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LENGTH {
                spans.push(tile(' ', None));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<S, R>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_leaderboard(f, app, chunks[1]);
}

fn render_messages<S, R>(f: &mut Frame, app: &App<S, R>, area: Rect) {
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

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_leaderboard<S, R>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let entries = app.game.leaderboard().top_entries();
    let lines: Vec<Line> = if entries.is_empty() {
        vec![Line::from("No scores yet!")]
    } else {
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Line::from(vec![
                    Span::raw(format!("{} {}. ", medal(i + 1), i + 1)),
                    Span::styled(
                        entry.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" - {}", format_clock(entry.seconds)),
                        Style::default().fg(Color::Cyan),
                    ),
                ])
            })
            .collect()
    };

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Fastest Times ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(panel, area);
}

fn render_keyboard<S, R>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let hints = app.game.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|key| {
                    let background = match hints.get(key) {
                        Some(mark) => rgb(mark_rgb(mark)),
                        None => rgb(KEY_DEFAULT_RGB),
                    };
                    let foreground = if hints.get(key).is_some_and(|m| m != Mark::Absent) {
                        Color::White
                    } else {
                        Color::Black
                    };
                    [
                        Span::styled(
                            format!(" {key} "),
                            Style::default().fg(foreground).bg(background),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_input<S, R>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Playing => (
            " Type your guess | Enter to submit ",
            app.game.state().input(),
            Color::Yellow,
        ),
        InputMode::NameEntry => (
            " 🏆 Leaderboard! Enter your name | Esc to skip ",
            app.name_input.as_str(),
            Color::Green,
        ),
        InputMode::RoundOver => (" Round over | Enter for a new word ", "", Color::Cyan),
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

fn render_status<S, R>(f: &mut Frame, app: &App<S, R>, area: Rect) {
    let mode = if app.game.config().hard_mode {
        "Hard"
    } else {
        "Standard"
    };
    let help_text = match app.input_mode {
        InputMode::Playing => "Esc: Quit | Ctrl-N: New Word | Enter: Submit",
        InputMode::NameEntry => "Enter: Save | Esc: Skip",
        InputMode::RoundOver => "q: Quit | Enter: New Word",
    };

    let status = Paragraph::new(format!(
        "Mode: {mode} | Guess {}/{MAX_GUESSES} | {help_text}",
        app.game.state().guess_count()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
