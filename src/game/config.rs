//! Round configuration

/// Countdown length for hard mode, in seconds
pub const DEFAULT_TIME_LIMIT: u32 = 120;

/// Settings fixed for the lifetime of a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Timed mode with a countdown and leaderboard
    pub hard_mode: bool,
    /// Countdown length in seconds (hard mode only)
    pub time_limit: u32,
    /// Seed for target word selection; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Untimed play
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            hard_mode: false,
            time_limit: DEFAULT_TIME_LIMIT,
            seed: None,
        }
    }

    /// Timed play with the given countdown
    #[must_use]
    pub const fn hard(time_limit: u32) -> Self {
        Self {
            hard_mode: true,
            time_limit,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_mode() {
        let config = GameConfig::default();
        assert!(!config.hard_mode);
        assert_eq!(config.time_limit, DEFAULT_TIME_LIMIT);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn hard_mode_with_seed() {
        let config = GameConfig::hard(90).with_seed(7);
        assert!(config.hard_mode);
        assert_eq!(config.time_limit, 90);
        assert_eq!(config.seed, Some(7));
    }
}
