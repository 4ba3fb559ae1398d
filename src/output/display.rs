//! Display functions for game results

use super::formatters::{format_clock, mark_rgb, medal, share_grid};
use crate::commands::ScoreResult;
use crate::core::{Attempt, Mark};
use crate::game::{LeaderboardEntry, Outcome, RoundSummary};
use colored::Colorize;
use std::io::{self, Write};

/// Write a guess as coloured letter tiles followed by its emoji row
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_attempt<W: Write>(out: &mut W, row: usize, attempt: &Attempt) -> io::Result<()> {
    write!(out, "  {} ", format!("{}.", row + 1).bright_black())?;
    for (letter, mark) in attempt.letters() {
        let (r, g, b) = mark_rgb(mark);
        write!(
            out,
            "{}",
            format!(" {letter} ").white().bold().on_truecolor(r, g, b)
        )?;
    }
    writeln!(out, "  {}", attempt.feedback().to_emoji())
}

/// Write the end-of-round banner
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_round_over<W: Write>(
    out: &mut W,
    summary: &RoundSummary,
    attempts: &[Attempt],
) -> io::Result<()> {
    let word = summary.target.text().bright_yellow().bold();

    writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
    match summary.outcome {
        Outcome::Won => writeln!(out, "  {} The word was: {word}", "🎉 You won!".green().bold())?,
        Outcome::Lost => writeln!(
            out,
            "  {} The word was: {word}",
            "Out of attempts!".red().bold()
        )?,
        Outcome::TimedOut => {
            writeln!(out, "  {} The word was: {word}", "⏰ Time's up!".red().bold())?;
        }
    }

    if let Some(elapsed) = summary.elapsed
        && summary.outcome == Outcome::Won
    {
        writeln!(out, "  Time: {}", format_clock(elapsed).bright_cyan())?;
    }

    if !attempts.is_empty() {
        let guesses = if summary.guesses == 1 { "guess" } else { "guesses" };
        writeln!(out, "\n  {} {guesses}:", summary.guesses)?;
        for line in share_grid(attempts).lines() {
            writeln!(out, "  {line}")?;
        }
    }
    writeln!(out, "{}", "═".repeat(50).bright_cyan())
}

/// Write the fastest-times table
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_leaderboard<W: Write>(out: &mut W, entries: &[LeaderboardEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "🏆 No scores yet!");
    }

    writeln!(out, "{}", "🏆 FASTEST TIMES 🏆".bright_yellow().bold())?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "{} {}. {} - {}",
            medal(i + 1),
            i + 1,
            entry.name,
            format_clock(entry.seconds)
        )?;
    }
    Ok(())
}

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().bright_white().bold(),
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let mut stdout = io::stdout();
    // Stdout write failures are not actionable here
    let _ = write_attempt(&mut stdout, 0, &result.attempt);

    let correct = result.attempt.feedback().count(Mark::Correct);
    let present = result.attempt.feedback().count(Mark::Present);
    println!("\n  {correct} correct, {present} present");
    if result.attempt.feedback().is_perfect() {
        println!("{}", "✅ Perfect match!".green().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn plain<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn attempt_shows_letters_and_emoji() {
        let attempt = Attempt::new(Word::new("slate").unwrap(), &Word::new("crane").unwrap());
        let text = plain(|out| write_attempt(out, 1, &attempt));
        assert!(text.contains("2."));
        assert!(text.contains(" S  L  A  T  E "));
        assert!(text.contains("⬜⬜🟩⬜🟩"));
    }

    #[test]
    fn round_over_mentions_word_and_time() {
        let target = Word::new("crane").unwrap();
        let attempts = vec![Attempt::new(target.clone(), &target)];
        let summary = RoundSummary {
            outcome: Outcome::Won,
            target,
            guesses: 1,
            elapsed: Some(75),
        };
        let text = plain(|out| write_round_over(out, &summary, &attempts));
        assert!(text.contains("You won!"));
        assert!(text.contains("CRANE"));
        assert!(text.contains("1:15"));
        assert!(text.contains("1 guess:"));
    }

    #[test]
    fn timeout_banner() {
        let summary = RoundSummary {
            outcome: Outcome::TimedOut,
            target: Word::new("pilot").unwrap(),
            guesses: 0,
            elapsed: Some(120),
        };
        let text = plain(|out| write_round_over(out, &summary, &[]));
        assert!(text.contains("Time's up!"));
        assert!(text.contains("PILOT"));
        assert!(!text.contains("2:00"));
    }

    #[test]
    fn leaderboard_table() {
        assert!(plain(|out| write_leaderboard(out, &[])).contains("No scores yet"));

        let entries = vec![
            LeaderboardEntry {
                name: "ada".into(),
                seconds: 42,
            },
            LeaderboardEntry {
                name: "grace".into(),
                seconds: 61,
            },
        ];
        let text = plain(|out| write_leaderboard(out, &entries));
        assert!(text.contains("🥇 1. ada - 0:42"));
        assert!(text.contains("🥈 2. grace - 1:01"));
    }
}
