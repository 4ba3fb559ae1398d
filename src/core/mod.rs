//! Core domain types for Speedle
//!
//! This module contains the word, feedback and keyboard types with no knowledge
//! of rounds, timers or presentation. All types here are pure and testable.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Attempt, Feedback, Mark, evaluate};
pub use keyboard::KeyboardHints;
pub use word::{Word, WordError};

/// Number of letters in every target word and guess
pub const WORD_LENGTH: usize = 5;

/// Number of guesses allowed per round
pub const MAX_GUESSES: usize = 6;
