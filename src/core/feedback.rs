//! Per-letter feedback calculation and representation
//!
//! Each guessed letter receives one mark:
//! - `Absent`: letter not in the target (or all its occurrences are used up)
//! - `Present`: letter in the target, wrong position
//! - `Correct`: letter in the correct position

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter
///
/// Ordered by strength so hints can keep the best mark seen for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Emoji square used in shareable results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// ASCII symbol: `G` for correct, `Y` for present, `-` for absent
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'X' | 'x' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback marks for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All correct (the guess is the target)
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Mark at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark(&self, position: usize) -> Mark {
        self.0[position]
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert to an emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'X'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use speedle::core::Feedback;
    ///
    /// let a = Feedback::parse("GY-GY").unwrap();
    /// let b = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut chars = s.chars();

        for slot in &mut marks {
            *slot = Mark::from_symbol(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(marks))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

/// Evaluate `guess` against `target`
///
/// Implements the duplicate-aware rules: a letter is credited (correct or
/// present) at most as many times as it occurs in the target.
///
/// # Algorithm
/// 1. First pass: mark exact matches correct and remove them from the pool
/// 2. Second pass: mark remaining letters present while the pool still holds them
///
/// # Examples
/// ```
/// use speedle::core::{evaluate, Feedback, Word};
///
/// let guess = Word::new("lolly").unwrap();
/// let target = Word::new("allow").unwrap();
///
/// assert_eq!(evaluate(&guess, &target), Feedback::parse("YYG--").unwrap());
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Feedback {
    let mut marks = [Mark::Absent; WORD_LENGTH];
    let mut available = target.char_counts();

    for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            marks[i] = Mark::Correct;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, &letter) in guess.chars().iter().enumerate() {
        if marks[i] == Mark::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&letter)
            && *count > 0
        {
            marks[i] = Mark::Present;
            *count -= 1;
        }
    }

    Feedback(marks)
}

/// A submitted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: Word,
    feedback: Feedback,
}

impl Attempt {
    /// Evaluate `guess` against `target` and keep the result
    #[must_use]
    pub fn new(guess: Word, target: &Word) -> Self {
        let feedback = evaluate(&guess, target);
        Self { guess, feedback }
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Letters paired with their marks, in guess order
    pub fn letters(&self) -> impl Iterator<Item = (char, Mark)> + '_ {
        self.guess
            .chars()
            .iter()
            .map(|&b| char::from(b))
            .zip(self.feedback.marks().iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(guess: &str, target: &str) -> Feedback {
        evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn all_absent() {
        let feedback = eval("abcde", "fghij");
        assert_eq!(feedback.count(Mark::Absent), 5);
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn all_correct() {
        assert!(eval("crane", "crane").is_perfect());
    }

    #[test]
    fn duplicate_letters_limited_by_target_count() {
        // ALLOW holds A:1 L:2 O:1 W:1
        use Mark::{Absent, Correct, Present};
        assert_eq!(
            eval("lolly", "allow").marks(),
            &[Present, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn duplicate_letters_both_credited_when_target_has_two() {
        use Mark::{Absent, Present};
        assert_eq!(
            eval("speed", "erase").marks(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn correct_consumes_before_present() {
        // ROBOT vs FLOOR: the second O is correct, the first O takes the remaining one
        use Mark::{Absent, Correct, Present};
        assert_eq!(
            eval("robot", "floor").marks(),
            &[Present, Present, Absent, Correct, Absent]
        );
        // BOBBY vs ABBEY: only one B left for the present pass
        assert_eq!(
            eval("bobby", "abbey").marks(),
            &[Present, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn credited_letters_never_exceed_target_counts() {
        let words = ["allow", "lolly", "speed", "erase", "eerie", "geese", "llama", "sassy"];
        for guess in words {
            for target in words {
                let g = Word::new(guess).unwrap();
                let t = Word::new(target).unwrap();
                let feedback = evaluate(&g, &t);
                for letter in b'A'..=b'Z' {
                    let credited = g
                        .chars()
                        .iter()
                        .zip(feedback.marks())
                        .filter(|&(&c, &m)| c == letter && m != Mark::Absent)
                        .count();
                    let in_target = t.chars().iter().filter(|&&c| c == letter).count();
                    assert!(credited <= in_target, "{guess} vs {target}: {}", letter as char);
                }
            }
        }
    }

    #[test]
    fn parse_and_display() {
        let feedback = Feedback::parse("gyx_-").unwrap();
        assert_eq!(feedback.to_string(), "GY---");
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜⬜⬜");
        assert!(Feedback::parse("GYGGYG").is_none());
        assert!(Feedback::parse("GYG").is_none());
        assert!(Feedback::parse("GQGGY").is_none());
        assert!(Feedback::parse("").is_none());
    }

    #[test]
    fn attempt_pairs_letters_with_marks() {
        let attempt = Attempt::new(Word::new("crane").unwrap(), &Word::new("slate").unwrap());
        let pairs: Vec<_> = attempt.letters().collect();
        assert_eq!(pairs[0], ('C', Mark::Absent));
        assert_eq!(pairs[2], ('A', Mark::Correct));
        assert_eq!(pairs[4], ('E', Mark::Correct));
    }
}
