//! Keyboard hints
//!
//! Tracks the strongest mark each letter has received during a round so the
//! on-screen keyboard can be coloured.

use super::{Attempt, Mark};
use rustc_hash::FxHashMap;

/// Best-known mark per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    marks: FxHashMap<char, Mark>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an evaluated guess into the hints
    ///
    /// A key only ever moves up: unknown -> absent/present -> correct.
    pub fn record(&mut self, attempt: &Attempt) {
        for (letter, mark) in attempt.letters() {
            self.marks
                .entry(letter)
                .and_modify(|best| *best = (*best).max(mark))
                .or_insert(mark);
        }
    }

    /// Mark for a key, `None` if the letter has not been guessed yet
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Mark> {
        self.marks.get(&letter.to_ascii_uppercase()).copied()
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
