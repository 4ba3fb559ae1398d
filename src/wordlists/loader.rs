//! Word list loading utilities
//!
//! Reads newline-delimited word lists from disk.

use super::WordSource;
use crate::core::WORD_LENGTH;
use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Load candidate words from a file
///
/// Lines are trimmed; blank lines, `#` comments and lines of the wrong length
/// are skipped. Letters are returned as written; the controller uppercases.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use speedle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Extract candidate words from list text
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| line.chars().count() == WORD_LENGTH)
        .map(str::to_string)
        .collect()
}

/// A word list file, re-read every round
///
/// Edits to the file take effect on the next reset. A file that has become
/// unreadable fails the reset with `GameError::WordList`.
#[derive(Debug, Clone)]
pub struct FileWords {
    path: PathBuf,
}

impl FileWords {
    /// Open a word list, checking that it is readable now
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        fs::metadata(&path)?;
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWords {
    fn candidates(&self) -> io::Result<Vec<String>> {
        load_from_file(&self.path).inspect_err(|e| {
            warn!("Error reading {}: {e}", self.path.display());
        })
    }
}
