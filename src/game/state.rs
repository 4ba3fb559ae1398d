//! Round state
//!
//! Holds the target, submitted attempts and in-progress input for one round.
//! Every mutator quietly ignores calls that break its preconditions: stray key
//! presses after a round ends are expected, not exceptional.

use crate::core::{Attempt, MAX_GUESSES, WORD_LENGTH, Word};

/// Mutable state of a single round
#[derive(Debug, Clone)]
pub struct GameState {
    target: Word,
    attempts: Vec<Attempt>,
    input: String,
    active: bool,
}

impl GameState {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            attempts: Vec::with_capacity(MAX_GUESSES),
            input: String::with_capacity(WORD_LENGTH),
            active: true,
        }
    }

    /// Append a letter to the input buffer
    ///
    /// Only ASCII letters are accepted; they are stored uppercase. Returns
    /// whether the buffer changed.
    pub fn append_letter(&mut self, letter: char) -> bool {
        if !self.active || self.input.len() >= WORD_LENGTH || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.input.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last letter. Returns whether the buffer changed.
    pub fn backspace(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.input.pop().is_some()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.active && self.input.len() == WORD_LENGTH
    }

    /// Store an evaluated attempt and clear the input buffer
    pub fn record_guess(&mut self, attempt: Attempt) {
        if !self.active || self.is_exhausted() {
            return;
        }
        self.attempts.push(attempt);
        self.input.clear();
    }

    #[must_use]
    pub fn is_win(&self, guess: &Word) -> bool {
        *guess == self.target
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.attempts.len() == MAX_GUESSES
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    /// Start over with a new target
    pub fn reset(&mut self, target: Word) {
        self.target = target;
        self.attempts.clear();
        self.input.clear();
        self.active = true;
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}
