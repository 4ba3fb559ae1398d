//! Speedle
//!
//! A timed five-letter word guessing game with a ratatui TUI, a line mode and
//! a hard mode where fast wins earn a place on the leaderboard.
//!
//! # Quick Start
//!
//! ```rust
//! use speedle::core::{Mark, Word, evaluate};
//!
//! let guess = Word::new("slate").unwrap();
//! let target = Word::new("crane").unwrap();
//!
//! let feedback = evaluate(&guess, &target);
//! assert_eq!(feedback.mark(2), Mark::Correct);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Round state, countdown and leaderboard
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
