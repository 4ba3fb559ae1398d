//! TUI application state and logic

use crate::game::{GameController, GameError, GameEvent, Outcome, TickClock};
use crate::output::formatters::{format_clock, medal};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;

const MAX_MESSAGES: usize = 5;
const MAX_NAME_LENGTH: usize = 16;

/// Application state
pub struct App<S, R = StdRng> {
    pub game: GameController<S, R>,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub name_input: String,
    pub should_quit: bool,
    clock: TickClock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    /// Typing a name for the leaderboard after a fast win
    NameEntry,
    RoundOver,
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

impl<S: WordSource, R: Rng> App<S, R> {
    #[must_use]
    pub fn new(game: GameController<S, R>) -> Self {
        let mut app = Self {
            game,
            messages: Vec::new(),
            input_mode: InputMode::Playing,
            name_input: String::new(),
            should_quit: false,
            clock: TickClock::new(Instant::now()),
        };
        app.add_message("Welcome! Type a 5-letter word and press Enter.", MessageStyle::Info);
        if app.game.config().hard_mode {
            app.add_message(
                &format!(
                    "Hard mode: you have {} on the clock.",
                    format_clock(app.game.config().time_limit)
                ),
                MessageStyle::Info,
            );
        }
        app
    }

    /// Measure countdown ticks from `now`
    ///
    /// The controller starts its countdown on construction; the driver calls
    /// this once it is ready to deliver ticks.
    pub fn start_clock(&mut self, now: Instant) {
        self.clock.restart(now);
    }

    /// Deliver every countdown tick that became due by `now`
    pub fn on_time(&mut self, now: Instant) {
        for _ in 0..self.clock.due(now) {
            let events = self.game.tick();
            self.apply_events(events);
        }
    }

    /// Handle one key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new round cannot select a target word.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if key.code == KeyCode::Char('c') && ctrl {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if ctrl => self.new_round()?,
                // Other Ctrl chords are shortcuts, never letters
                KeyCode::Char(_) if ctrl => {}
                KeyCode::Char(c) => {
                    let events = self.game.type_letter(c);
                    self.apply_events(events);
                }
                KeyCode::Backspace => {
                    let events = self.game.backspace();
                    self.apply_events(events);
                }
                KeyCode::Enter => {
                    let events = self.game.submit();
                    self.apply_events(events);
                }
                _ => {}
            },
            InputMode::NameEntry => match key.code {
                KeyCode::Esc => {
                    self.game.skip_score();
                    self.name_input.clear();
                    self.input_mode = InputMode::RoundOver;
                    self.add_message("Score discarded", MessageStyle::Info);
                }
                KeyCode::Char(c) if !ctrl => {
                    if self.name_input.chars().count() < MAX_NAME_LENGTH && !c.is_control() {
                        self.name_input.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.name_input.pop();
                }
                KeyCode::Enter => self.submit_name(),
                _ => {}
            },
            InputMode::RoundOver => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char('n') => self.new_round()?,
                _ => {}
            },
        }
        Ok(())
    }

    /// Start a fresh round
    ///
    /// # Errors
    ///
    /// Returns an error if the word list cannot be read or has no valid word.
    pub fn new_round(&mut self) -> Result<()> {
        let events = self.game.reset()?;
        self.clock.restart(Instant::now());
        self.messages.clear();
        self.name_input.clear();
        self.input_mode = InputMode::Playing;
        self.apply_events(events);
        Ok(())
    }

    fn submit_name(&mut self) {
        match self.game.submit_name(&self.name_input) {
            Ok(GameEvent::LeaderboardUpdated { rank, .. }) => {
                match rank {
                    Some(rank) => self.add_message(
                        &format!("{} You placed #{rank}!", medal(rank)),
                        MessageStyle::Success,
                    ),
                    None => self.add_message("Not fast enough for the podium", MessageStyle::Info),
                }
                self.name_input.clear();
                self.input_mode = InputMode::RoundOver;
                self.add_message("Press Enter for a new word or 'q' to quit.", MessageStyle::Info);
            }
            Ok(_) => {}
            Err(GameError::InvalidLeaderboardName) => {
                self.add_message("Please enter a name", MessageStyle::Error);
            }
            Err(e) => {
                debug!("Name entry without a pending score: {e}");
                self.input_mode = InputMode::RoundOver;
            }
        }
    }

    fn apply_events(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::RoundStarted { time_limit, .. } => {
                    let text = match time_limit {
                        Some(limit) => format!("New round! {} on the clock.", format_clock(limit)),
                        None => "New round! Good luck.".to_string(),
                    };
                    self.add_message(&text, MessageStyle::Info);
                }
                GameEvent::InvalidSubmission => {
                    self.add_message("Not enough letters", MessageStyle::Error);
                }
                GameEvent::RoundOver(summary) => {
                    self.input_mode = InputMode::RoundOver;
                    let word = summary.target.text();
                    match summary.outcome {
                        Outcome::Won => {
                            let celebration = match summary.guesses {
                                1 => "🎯 HOLE IN ONE!",
                                2 => "🔥 MAGNIFICENT!",
                                3 => "✨ SPLENDID!",
                                4 => "👏 GREAT JOB!",
                                5 => "🎉 NICE WORK!",
                                _ => "😅 PHEW!",
                            };
                            self.add_message(
                                &format!("{celebration} The word was {word}"),
                                MessageStyle::Success,
                            );
                        }
                        Outcome::Lost => self.add_message(
                            &format!("Out of attempts! The word was {word}"),
                            MessageStyle::Error,
                        ),
                        Outcome::TimedOut => self.add_message(
                            &format!("⏰ Time's up! The word was {word}"),
                            MessageStyle::Error,
                        ),
                    }
                    self.add_message(
                        "Press Enter for a new word or 'q' to quit.",
                        MessageStyle::Info,
                    );
                }
                GameEvent::LeaderboardEligible { elapsed } => {
                    self.input_mode = InputMode::NameEntry;
                    self.add_message(
                        &format!(
                            "Solved in {}! Type your name and press Enter (Esc to skip).",
                            format_clock(elapsed)
                        ),
                        MessageStyle::Success,
                    );
                }
                GameEvent::InputChanged(_)
                | GameEvent::GuessEvaluated { .. }
                | GameEvent::TimerUpdate(_)
                | GameEvent::LeaderboardUpdated { .. } => {}
            }
        }
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource, R: Rng>(app: App<S, R>) -> Result<()> {
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

fn run_app<B, S, R>(terminal: &mut Terminal<B>, mut app: App<S, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordSource,
    R: Rng,
{
    app.start_clock(Instant::now());
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Wake up for the next countdown tick even without key presses
        if event::poll(app.clock.until_next(Instant::now()))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key)?;
        }
        app.on_time(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
