use crate::core::WordError;
use std::io;
use thiserror::Error;

/// Failures surfaced by the game layer
///
/// An invalid submission is not an error: it is reported as
/// `GameEvent::InvalidSubmission` and the round continues.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("no eligible target words available")]
    EmptyWordSource,

    #[error("leaderboard name must not be empty")]
    InvalidLeaderboardName,

    #[error("no leaderboard score is waiting for a name")]
    NoPendingScore,

    #[error("failed to read word list: {0}")]
    WordList(#[from] io::Error),

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
}
