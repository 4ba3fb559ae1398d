//! Terminal output formatting
//!
//! Display utilities for line mode, the score command and the TUI palette.

pub mod display;
pub mod formatters;

pub use display::{print_score_result, write_attempt, write_leaderboard, write_round_over};
