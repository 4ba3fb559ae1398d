//! Word sources for target selection
//!
//! A [`WordSource`] hands the controller its candidate target words each time
//! a round starts. The default source is the list compiled into the binary.

mod embedded;
pub mod loader;

use std::io;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::FileWords;

/// Supplier of candidate target words
///
/// Asked once per round, so a source may return a different set each time.
/// Words are expected to be 5 letters; case does not matter. The controller
/// skips anything else.
pub trait WordSource {
    /// Current candidate words
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the backing list cannot be read.
    fn candidates(&self) -> io::Result<Vec<String>>;
}

/// The built-in word list
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWords;

impl WordSource for EmbeddedWords {
    fn candidates(&self) -> io::Result<Vec<String>> {
        Ok(WORDS.iter().map(|&w| w.to_string()).collect())
    }
}

impl WordSource for Vec<String> {
    fn candidates(&self) -> io::Result<Vec<String>> {
        Ok(self.clone())
    }
}

impl WordSource for Vec<&str> {
    fn candidates(&self) -> io::Result<Vec<String>> {
        Ok(self.iter().map(|&w| w.to_string()).collect())
    }
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn candidates(&self) -> io::Result<Vec<String>> {
        (**self).candidates()
    }
}
