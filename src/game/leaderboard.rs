//! Fastest-time leaderboard
//!
//! Keeps the best three hard-mode wins for the lifetime of the process.

/// Number of entries retained
pub const LEADERBOARD_CAPACITY: usize = 3;

/// A recorded win
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub seconds: u32,
}

/// Ranked, capacity-bounded store of fastest wins
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a win
    ///
    /// The name is trimmed; blank names are rejected. Entries are kept fastest
    /// first and equal times stay in insertion order. Returns the 1-based rank
    /// of the new entry, or `None` when it was rejected or did not make the
    /// board.
    ///
    /// # Examples
    /// ```
    /// use speedle::game::Leaderboard;
    ///
    /// let mut board = Leaderboard::new();
    /// assert_eq!(board.add_score("  ada ", 42), Some(1));
    /// assert_eq!(board.add_score("   ", 10), None);
    /// assert_eq!(board.top_entries()[0].name, "ada");
    /// ```
    pub fn add_score(&mut self, name: &str, seconds: u32) -> Option<usize> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        self.entries.push(LeaderboardEntry {
            name: name.to_string(),
            seconds,
        });

        // Stable sort: an equal time ranks after the existing ones, so the new
        // entry's rank is the count of entries at or below its time
        self.entries.sort_by_key(|entry| entry.seconds);
        let rank = self
            .entries
            .iter()
            .filter(|entry| entry.seconds <= seconds)
            .count();

        self.entries.truncate(LEADERBOARD_CAPACITY);
        (rank <= LEADERBOARD_CAPACITY).then_some(rank)
    }

    /// Current ranking, fastest first (0 to 3 entries)
    #[must_use]
    pub fn top_entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
