//! Formatting utilities for terminal output

use crate::core::{Attempt, Mark};

/// Tile colours, as RGB
pub const CORRECT_RGB: (u8, u8, u8) = (108, 169, 101);
pub const PRESENT_RGB: (u8, u8, u8) = (200, 182, 83);
pub const ABSENT_RGB: (u8, u8, u8) = (120, 124, 127);
pub const KEY_DEFAULT_RGB: (u8, u8, u8) = (211, 214, 218);

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

#[must_use]
pub const fn mark_rgb(mark: Mark) -> (u8, u8, u8) {
    match mark {
        Mark::Correct => CORRECT_RGB,
        Mark::Present => PRESENT_RGB,
        Mark::Absent => ABSENT_RGB,
    }
}

/// Format seconds as `m:ss`
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Medal for a 1-based leaderboard rank
#[must_use]
pub fn medal(rank: usize) -> &'static str {
    rank.checked_sub(1)
        .and_then(|i| MEDALS.get(i))
        .copied()
        .unwrap_or("  ")
}

/// Emoji grid of a round, one row per attempt
#[must_use]
pub fn share_grid(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(|attempt| attempt.feedback().to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the countdown is left
#[must_use]
pub fn time_bar(remaining: u32, time_limit: u32, width: usize) -> String {
    create_progress_bar(f64::from(remaining), f64::from(time_limit), width)
}
