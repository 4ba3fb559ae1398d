//! Simple line mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::core::{MAX_GUESSES, WORD_LENGTH};
use crate::game::{GameController, GameEvent, Phase, TickClock};
use crate::output::formatters::{format_clock, time_bar};
use crate::output::{write_attempt, write_leaderboard, write_round_over};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Run the line-mode game until the player quits or input ends
///
/// In hard mode the countdown advances by the wall time spent between lines;
/// a guess typed after the clock ran out is discarded.
///
/// # Errors
///
/// Returns an error on I/O failure or when a new round cannot pick a word.
pub fn run_simple<S, R, I, O>(game: &mut GameController<S, R>, mut input: I, out: &mut O) -> Result<()>
where
    S: WordSource,
    R: Rng,
    I: BufRead,
    O: Write,
{
    write_banner(out, game.config().hard_mode)?;
    let mut clock = TickClock::new(Instant::now());

    loop {
        if game.phase().is_terminal() {
            if !ask_play_again(&mut input, out)? {
                break;
            }
            let events = game.reset()?;
            clock.restart(Instant::now());
            render(out, game, &events)?;
            continue;
        }

        write_prompt(out, game)?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let mut events: Vec<GameEvent> = Vec::new();
        for _ in 0..clock.due(Instant::now()) {
            events.extend(game.tick());
        }

        if game.phase() != Phase::TimedOut {
            match line.to_lowercase().as_str() {
                "quit" | "exit" | "q" => break,
                "new" | "n" => {
                    events.extend(game.reset()?);
                    clock.restart(Instant::now());
                }
                guess => events.extend(enter_guess(game, guess)),
            }
        }

        render(out, game, &events)?;

        if game.pending_score().is_some() {
            prompt_name(game, &mut input, out)?;
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn enter_guess<S: WordSource, R: Rng>(game: &mut GameController<S, R>, guess: &str) -> Vec<GameEvent> {
    while !game.state().input().is_empty() {
        game.backspace();
    }
    if guess.chars().count() > WORD_LENGTH {
        return vec![GameEvent::InvalidSubmission];
    }

    let mut events = Vec::new();
    for letter in guess.chars() {
        events.extend(game.type_letter(letter));
    }
    events.extend(game.submit());
    events
}

fn render<S, R, W: Write>(
    out: &mut W,
    game: &GameController<S, R>,
    events: &[GameEvent],
) -> io::Result<()> {
    for event in events {
        match event {
            GameEvent::RoundStarted { time_limit, .. } => {
                writeln!(out, "\n🔄 {}", "New round started!".bright_cyan())?;
                if let Some(limit) = time_limit {
                    writeln!(out, "   You have {} on the clock.", format_clock(*limit))?;
                }
            }
            GameEvent::GuessEvaluated { row, attempt } => write_attempt(out, *row, attempt)?,
            GameEvent::InvalidSubmission => {
                writeln!(
                    out,
                    "{}",
                    format!("❌ Not a valid guess! Enter {WORD_LENGTH} letters.").red()
                )?;
            }
            GameEvent::RoundOver(summary) => {
                write_round_over(out, summary, game.state().attempts())?;
            }
            GameEvent::LeaderboardEligible { elapsed } => {
                writeln!(
                    out,
                    "⚡ Solved in {}, that's leaderboard material!",
                    format_clock(*elapsed).bright_cyan()
                )?;
            }
            GameEvent::InputChanged(_)
            | GameEvent::TimerUpdate(_)
            | GameEvent::LeaderboardUpdated { .. } => {}
        }
    }
    Ok(())
}

fn prompt_name<S, R, I, W>(game: &mut GameController<S, R>, input: &mut I, out: &mut W) -> Result<()>
where
    S: WordSource,
    R: Rng,
    I: BufRead,
    W: Write,
{
    write!(out, "Enter your name for the leaderboard: ")?;
    out.flush()?;
    let name = read_line(input)?.unwrap_or_default();

    match game.submit_name(&name) {
        Ok(GameEvent::LeaderboardUpdated { rank, entries }) => {
            if let Some(rank) = rank {
                writeln!(out, "🏅 You placed #{rank}!")?;
            }
            write_leaderboard(out, &entries)?;
        }
        Ok(_) => {}
        Err(e) => {
            writeln!(out, "Score not recorded: {e}")?;
            game.skip_score();
        }
    }
    Ok(())
}

fn write_banner<W: Write>(out: &mut W, hard_mode: bool) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║                   SPEEDLE                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {WORD_LENGTH}-letter word in {MAX_GUESSES} tries."
    )?;
    writeln!(out, "  🟩 right letter, right spot")?;
    writeln!(out, "  🟨 right letter, wrong spot")?;
    writeln!(out, "  ⬜ not in the word")?;
    if hard_mode {
        writeln!(out, "\n{}", "Hard mode: beat the clock to make the leaderboard!".yellow())?;
    }
    writeln!(out, "\nCommands: 'quit' to exit, 'new' for a new word\n")
}

fn write_prompt<S, R, W: Write>(out: &mut W, game: &GameController<S, R>) -> io::Result<()> {
    let turn = game.state().guess_count() + 1;
    if game.config().hard_mode {
        let remaining = game.remaining();
        write!(
            out,
            "[{} {}] ",
            time_bar(remaining, game.config().time_limit, 10).cyan(),
            format_clock(remaining)
        )?;
    }
    write!(out, "Guess {turn}/{MAX_GUESSES}: ")?;
    out.flush()
}

fn ask_play_again<I: BufRead, W: Write>(input: &mut I, out: &mut W) -> io::Result<bool> {
    write!(out, "Play again? (yes/no): ")?;
    out.flush()?;
    Ok(matches!(
        read_line(input)?.map(|line| line.to_lowercase()).as_deref(),
        Some("yes" | "y")
    ))
}

/// Next trimmed line, `None` at end of input
fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use std::io::Cursor;

    fn run(words: Vec<&'static str>, script: &str) -> (GameController<Vec<&'static str>>, String) {
        colored::control::set_override(false);
        let mut game = GameController::new(words, GameConfig::standard().with_seed(3)).unwrap();
        let mut out = Vec::new();
        run_simple(&mut game, Cursor::new(script.to_string()), &mut out).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_then_decline() {
        let (game, out) = run(vec!["crane"], "slate\ncrane\nno\n");
        assert!(out.contains("You won!"));
        assert!(out.contains("CRANE"));
        assert!(out.contains("Thanks for playing"));
        assert_eq!(game.phase(), Phase::Won);
    }

    #[test]
    fn invalid_guesses_do_not_count() {
        let (game, out) = run(vec!["crane"], "cra\ncranes\ncr4ne\nquit\n");
        assert_eq!(out.matches("Not a valid guess").count(), 3);
        assert_eq!(game.state().guess_count(), 0);
    }

    #[test]
    fn lowercase_and_padded_guesses_accepted() {
        let (game, _) = run(vec!["crane"], "  Slate \nquit\n");
        assert_eq!(game.state().guess_count(), 1);
        assert_eq!(game.state().attempts()[0].guess().text(), "SLATE");
    }

    #[test]
    fn loss_then_play_again() {
        let script = "slate\n".repeat(MAX_GUESSES) + "yes\nquit\n";
        let (game, out) = run(vec!["crane"], &script);
        assert!(out.contains("Out of attempts!"));
        assert!(out.contains("New round started!"));
        assert_eq!(game.phase(), Phase::AwaitingInput);
        assert_eq!(game.state().guess_count(), 0);
    }

    #[test]
    fn new_command_resets_round() {
        let (game, out) = run(vec!["crane"], "slate\nnew\nquit\n");
        assert!(out.contains("New round started!"));
        assert_eq!(game.state().guess_count(), 0);
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (game, out) = run(vec!["crane"], "");
        assert!(out.contains("SPEEDLE"));
        assert!(out.contains("Thanks for playing"));
        assert_eq!(game.phase(), Phase::AwaitingInput);
    }
}
