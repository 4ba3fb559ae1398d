//! Round lifecycle
//!
//! Everything that changes while a game is played: the round state, the
//! hard-mode countdown, the leaderboard and the controller tying them together.

mod clock;
mod config;
mod controller;
mod error;
mod leaderboard;
mod state;
mod timer;

pub use clock::TickClock;
pub use config::{DEFAULT_TIME_LIMIT, GameConfig};
pub use controller::{
    GameController, GameEvent, Input, Outcome, Phase, RoundSummary, qualifies_for_leaderboard,
};
pub use error::GameError;
pub use leaderboard::{LEADERBOARD_CAPACITY, Leaderboard, LeaderboardEntry};
pub use state::GameState;
pub use timer::{CountdownTimer, TimerEvent, TimerState};
