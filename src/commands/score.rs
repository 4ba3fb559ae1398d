//! Score a single guess
//!
//! Evaluates a guess against a known target without playing a round.

use crate::core::{Attempt, Word};
use crate::game::GameError;

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub attempt: Attempt,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns `GameError::InvalidWord` if either word is not 5 ASCII letters.
///
/// # Examples
/// ```
/// use speedle::commands::score_guess;
///
/// let result = score_guess("lolly", "allow").unwrap();
/// assert_eq!(result.attempt.feedback().to_string(), "YYG--");
/// ```
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreResult, GameError> {
    let guess = Word::new(guess.trim())?;
    let target = Word::new(target.trim())?;
    let attempt = Attempt::new(guess.clone(), &target);

    Ok(ScoreResult {
        guess,
        target,
        attempt,
    })
}
