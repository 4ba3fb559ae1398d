//! Round orchestration
//!
//! The controller owns the round state, countdown and leaderboard and reacts
//! to one [`Input`] at a time. It never draws anything: every reaction is
//! reported as a list of [`GameEvent`]s for the presentation layer.

use super::{
    CountdownTimer, GameConfig, GameError, GameState, Leaderboard, LeaderboardEntry, TimerEvent,
};
use crate::core::{Attempt, KeyboardHints, Word};
use crate::wordlists::WordSource;
use log::{debug, info, warn};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where the round currently is
///
/// `Evaluating` and `Continuing` are passed through within a single submit;
/// callers only ever observe `AwaitingInput` or one of the terminal phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    Evaluating,
    Continuing,
    Won,
    Lost,
    TimedOut,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::TimedOut)
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    TimedOut,
}

impl From<Outcome> for Phase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => Self::Won,
            Outcome::Lost => Self::Lost,
            Outcome::TimedOut => Self::TimedOut,
        }
    }
}

/// External stimulus delivered to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Backspace,
    Submit,
    /// One second of wall time has passed
    Tick,
    Reset,
}

/// Result of a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub outcome: Outcome,
    pub target: Word,
    pub guesses: usize,
    /// Seconds used, hard mode only
    pub elapsed: Option<u32>,
}

/// Notification for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted {
        hard_mode: bool,
        time_limit: Option<u32>,
    },
    /// The input buffer changed; carries its new contents
    InputChanged(String),
    /// Submit pressed without a full word
    InvalidSubmission,
    GuessEvaluated {
        row: usize,
        attempt: Attempt,
    },
    TimerUpdate(u32),
    RoundOver(RoundSummary),
    /// A hard-mode win fast enough for the leaderboard; answer with
    /// [`GameController::submit_name`]
    LeaderboardEligible {
        elapsed: u32,
    },
    LeaderboardUpdated {
        rank: Option<usize>,
        entries: Vec<LeaderboardEntry>,
    },
}

/// Whether a hard-mode win may be entered on the leaderboard
///
/// A win taking the full time limit does not qualify, and neither does one
/// recorded before the first tick.
#[must_use]
pub const fn qualifies_for_leaderboard(elapsed: u32, time_limit: u32) -> bool {
    elapsed > 0 && elapsed < time_limit
}

/// Game state machine driven by input events
pub struct GameController<S, R = StdRng> {
    source: S,
    rng: R,
    config: GameConfig,
    state: GameState,
    phase: Phase,
    timer: CountdownTimer,
    leaderboard: Leaderboard,
    keyboard: KeyboardHints,
    pending_score: Option<u32>,
}

impl<S: WordSource> GameController<S> {
    /// Create a controller and start the first round
    ///
    /// Word selection is seeded from `config.seed` when set, otherwise from
    /// the OS.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordSource` if the source has no usable word,
    /// or `GameError::WordList` if it cannot be read.
    ///
    /// # Examples
    /// ```
    /// use speedle::game::{GameConfig, GameController, GameEvent, Input, Outcome};
    ///
    /// let mut game = GameController::new(vec!["crane"], GameConfig::standard()).unwrap();
    /// for c in "crane".chars() {
    ///     game.handle(Input::Letter(c)).unwrap();
    /// }
    /// let events = game.handle(Input::Submit).unwrap();
    /// assert!(matches!(
    ///     events.last(),
    ///     Some(GameEvent::RoundOver(summary)) if summary.outcome == Outcome::Won
    /// ));
    /// ```
    pub fn new(source: S, config: GameConfig) -> Result<Self, GameError> {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::with_rng(source, config, rng)
    }
}

impl<S: WordSource, R: Rng> GameController<S, R> {
    /// Create a controller with an explicit random number generator
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordSource` if the source has no usable word,
    /// or `GameError::WordList` if it cannot be read.
    pub fn with_rng(source: S, config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        let target = select_target(&source, &mut rng)?;

        let mut controller = Self {
            source,
            rng,
            config,
            state: GameState::new(target.clone()),
            phase: Phase::AwaitingInput,
            timer: CountdownTimer::new(),
            leaderboard: Leaderboard::new(),
            keyboard: KeyboardHints::new(),
            pending_score: None,
        };
        // Start-up events are observable through the accessors
        controller.begin_round(target);
        Ok(controller)
    }

    /// Process a single input
    ///
    /// # Errors
    ///
    /// Only `Input::Reset` can fail, as [`GameController::reset`] does.
    pub fn handle(&mut self, input: Input) -> Result<Vec<GameEvent>, GameError> {
        let events = match input {
            Input::Letter(letter) => self.type_letter(letter),
            Input::Backspace => self.backspace(),
            Input::Submit => self.submit(),
            Input::Tick => self.tick(),
            Input::Reset => return self.reset(),
        };
        Ok(events)
    }

    pub fn type_letter(&mut self, letter: char) -> Vec<GameEvent> {
        if self.phase != Phase::AwaitingInput || !self.state.append_letter(letter) {
            return Vec::new();
        }
        vec![GameEvent::InputChanged(self.state.input().to_string())]
    }

    pub fn backspace(&mut self) -> Vec<GameEvent> {
        if self.phase != Phase::AwaitingInput || !self.state.backspace() {
            return Vec::new();
        }
        vec![GameEvent::InputChanged(self.state.input().to_string())]
    }

    /// Evaluate the input buffer as a guess
    ///
    /// The result, and any win or loss it causes, is decided here and now.
    pub fn submit(&mut self) -> Vec<GameEvent> {
        if self.phase != Phase::AwaitingInput {
            return Vec::new();
        }
        if !self.state.can_submit() {
            debug!("Rejected submission of {:?}", self.state.input());
            return vec![GameEvent::InvalidSubmission];
        }
        let Ok(guess) = Word::new(self.state.input()) else {
            return vec![GameEvent::InvalidSubmission];
        };

        self.set_phase(Phase::Evaluating);
        let attempt = Attempt::new(guess, self.state.target());
        let won = self.state.is_win(attempt.guess());

        self.keyboard.record(&attempt);
        self.state.record_guess(attempt.clone());
        let row = self.state.guess_count() - 1;
        debug!("Guess {} {} -> {}", row + 1, attempt.guess(), attempt.feedback());

        let mut events = vec![GameEvent::GuessEvaluated { row, attempt }];

        if won {
            self.finish(Outcome::Won, &mut events);
        } else if self.state.is_exhausted() {
            self.finish(Outcome::Lost, &mut events);
        } else {
            self.set_phase(Phase::Continuing);
            self.set_phase(Phase::AwaitingInput);
        }
        events
    }

    /// Advance the countdown by one second
    ///
    /// Ignored outside hard mode and once the round is over.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != Phase::AwaitingInput {
            return events;
        }
        let timer_events = self.timer.tick();
        self.route_timer(timer_events, &mut events);
        events
    }

    /// Start a new round with a freshly selected target
    ///
    /// The leaderboard survives; everything else is reinitialized.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordSource` if the source has no usable word,
    /// or `GameError::WordList` if it cannot be read.
    /// The current round is left as it was.
    pub fn reset(&mut self) -> Result<Vec<GameEvent>, GameError> {
        let target = select_target(&self.source, &mut self.rng)?;
        Ok(self.begin_round(target))
    }

    /// Enter the pending hard-mode score under `name`
    ///
    /// # Errors
    ///
    /// - `GameError::NoPendingScore` without a qualifying win to record
    /// - `GameError::InvalidLeaderboardName` for a blank name; the score stays
    ///   pending so the caller may ask again
    pub fn submit_name(&mut self, name: &str) -> Result<GameEvent, GameError> {
        let elapsed = self.pending_score.ok_or(GameError::NoPendingScore)?;
        if name.trim().is_empty() {
            return Err(GameError::InvalidLeaderboardName);
        }

        self.pending_score = None;
        let rank = self.leaderboard.add_score(name, elapsed);
        info!("Leaderboard: {} in {elapsed}s, rank {rank:?}", name.trim());

        Ok(GameEvent::LeaderboardUpdated {
            rank,
            entries: self.leaderboard.top_entries().to_vec(),
        })
    }

    /// Give up on the pending score without recording it
    pub fn skip_score(&mut self) {
        self.pending_score = None;
    }

    fn begin_round(&mut self, target: Word) -> Vec<GameEvent> {
        debug!("The word is: {target}");
        self.state.reset(target);
        self.keyboard.clear();
        self.pending_score = None;
        self.set_phase(Phase::AwaitingInput);

        let hard_mode = self.config.hard_mode;
        let mut events = vec![GameEvent::RoundStarted {
            hard_mode,
            time_limit: hard_mode.then_some(self.config.time_limit),
        }];

        if hard_mode {
            self.timer.reset();
            let timer_events = self.timer.start(self.config.time_limit);
            self.route_timer(timer_events, &mut events);
        }
        events
    }

    fn route_timer(&mut self, timer_events: Vec<TimerEvent>, events: &mut Vec<GameEvent>) {
        for event in timer_events {
            match event {
                TimerEvent::Update(remaining) => events.push(GameEvent::TimerUpdate(remaining)),
                TimerEvent::Expired => self.on_timer_expired(events),
            }
        }
    }

    fn on_timer_expired(&mut self, events: &mut Vec<GameEvent>) {
        if self.config.hard_mode && self.phase == Phase::AwaitingInput {
            self.finish(Outcome::TimedOut, events);
        }
    }

    fn finish(&mut self, outcome: Outcome, events: &mut Vec<GameEvent>) {
        self.set_phase(outcome.into());
        self.state.end();
        self.timer.stop();

        let elapsed = self
            .config
            .hard_mode
            .then(|| self.config.time_limit.saturating_sub(self.timer.remaining()));

        info!(
            "Round over: {outcome:?}, word {}, {} guesses, elapsed {elapsed:?}",
            self.state.target(),
            self.state.guess_count()
        );

        events.push(GameEvent::RoundOver(RoundSummary {
            outcome,
            target: self.state.target().clone(),
            guesses: self.state.guess_count(),
            elapsed,
        }));

        if outcome == Outcome::Won
            && let Some(elapsed) = elapsed
            && qualifies_for_leaderboard(elapsed, self.config.time_limit)
        {
            self.pending_score = Some(elapsed);
            events.push(GameEvent::LeaderboardEligible { elapsed });
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!("Phase {:?} -> {phase:?}", self.phase);
        }
        self.phase = phase;
    }
}

impl<S, R> GameController<S, R> {
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardHints {
        &self.keyboard
    }

    #[must_use]
    pub const fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seconds left on the countdown (0 outside hard mode)
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.timer.remaining()
    }

    /// Elapsed time awaiting a leaderboard name, if any
    #[must_use]
    pub const fn pending_score(&self) -> Option<u32> {
        self.pending_score
    }

    /// Mutable access to the word source, e.g. to swap word lists between rounds
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

/// Pick a uniformly random valid candidate, uppercased
///
/// A source that cannot be read fails with `GameError::WordList`.
fn select_target<S, R>(source: &S, rng: &mut R) -> Result<Word, GameError>
where
    S: WordSource + ?Sized,
    R: Rng + ?Sized,
{
    let candidates: Vec<Word> = source
        .candidates()?
        .into_iter()
        .filter_map(|candidate| match Word::new(candidate.trim()) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("Skipping candidate {candidate:?}: {e}");
                None
            }
        })
        .collect();

    candidates
        .choose(rng)
        .cloned()
        .ok_or(GameError::EmptyWordSource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_GUESSES, Mark};

    type Game = GameController<Vec<&'static str>>;

    fn game(words: Vec<&'static str>, config: GameConfig) -> Game {
        GameController::new(words, config.with_seed(7)).unwrap()
    }

    fn play(game: &mut Game, word: &str) -> Vec<GameEvent> {
        play_any(game, word)
    }

    fn play_any<S: WordSource>(game: &mut GameController<S>, word: &str) -> Vec<GameEvent> {
        for letter in word.chars() {
            game.type_letter(letter);
        }
        game.submit()
    }

    fn ticks(game: &mut Game, count: usize) -> Vec<GameEvent> {
        (0..count).flat_map(|_| game.tick()).collect()
    }

    fn round_over(events: &[GameEvent]) -> Option<&RoundSummary> {
        events.iter().find_map(|event| match event {
            GameEvent::RoundOver(summary) => Some(summary),
            _ => None,
        })
    }

    #[test]
    fn empty_source_fails_initialization() {
        let result = GameController::new(Vec::<&str>::new(), GameConfig::standard());
        assert!(matches!(result, Err(GameError::EmptyWordSource)));
    }

    #[test]
    fn malformed_candidates_are_skipped() {
        let result = GameController::new(vec!["toolong", "abc", "cr4ne"], GameConfig::standard());
        assert!(matches!(result, Err(GameError::EmptyWordSource)));

        let g = game(vec!["toolong", " pilot "], GameConfig::standard());
        assert_eq!(g.state().target().text(), "PILOT");
    }

    #[test]
    fn target_is_uppercased_and_from_candidates() {
        let words = vec!["crane", "slate", "pilot", "ocean"];
        for seed in 0..20 {
            let g = GameController::new(words.clone(), GameConfig::standard().with_seed(seed))
                .unwrap();
            let target = g.state().target().text().to_lowercase();
            assert!(words.contains(&target.as_str()));
        }
    }

    #[test]
    fn typing_reports_buffer() {
        let mut g = game(vec!["crane"], GameConfig::standard());
        assert_eq!(g.type_letter('s'), vec![GameEvent::InputChanged("S".into())]);
        assert!(g.type_letter('1').is_empty());
        assert_eq!(g.backspace(), vec![GameEvent::InputChanged(String::new())]);
        assert!(g.backspace().is_empty());
        assert_eq!(g.phase(), Phase::AwaitingInput);
    }

    #[test]
    fn short_submission_is_invalid() {
        let mut g = game(vec!["crane"], GameConfig::standard());
        assert_eq!(play(&mut g, "cra"), vec![GameEvent::InvalidSubmission]);
        assert_eq!(g.phase(), Phase::AwaitingInput);
        assert_eq!(g.state().guess_count(), 0);
        assert_eq!(g.state().input(), "CRA");
    }

    #[test]
    fn wrong_guess_continues() {
        let mut g = game(vec!["crane"], GameConfig::standard());
        let events = play(&mut g, "trace");

        assert_eq!(events.len(), 1);
        let GameEvent::GuessEvaluated { row, attempt } = &events[0] else {
            panic!("expected an evaluated guess, got {events:?}");
        };
        assert_eq!(*row, 0);
        assert_eq!(attempt.feedback().mark(0), Mark::Absent);
        assert_eq!(g.phase(), Phase::AwaitingInput);
        assert_eq!(g.state().input(), "");
        assert_eq!(g.keyboard().get('R'), Some(Mark::Correct));
    }

    #[test]
    fn standard_win() {
        let mut g = game(vec!["crane"], GameConfig::standard());
        play(&mut g, "slate");
        let events = play(&mut g, "crane");

        let summary = round_over(&events).unwrap();
        assert_eq!(summary.outcome, Outcome::Won);
        assert_eq!(summary.guesses, 2);
        assert_eq!(summary.elapsed, None);
        assert_eq!(g.phase(), Phase::Won);
        assert!(!g.state().is_active());
        assert!(!events.iter().any(|e| matches!(e, GameEvent::LeaderboardEligible { .. })));
        assert_eq!(g.pending_score(), None);
    }

    #[test]
    fn six_misses_lose_and_freeze_the_round() {
        let mut g = game(vec!["crane"], GameConfig::standard());
        let mut last = Vec::new();
        for _ in 0..MAX_GUESSES {
            last = play(&mut g, "slate");
        }

        assert_eq!(round_over(&last).unwrap().outcome, Outcome::Lost);
        assert_eq!(g.phase(), Phase::Lost);

        assert!(g.type_letter('a').is_empty());
        assert!(g.backspace().is_empty());
        assert!(g.submit().is_empty());
        assert!(g.tick().is_empty());
        assert_eq!(g.state().guess_count(), MAX_GUESSES);
        assert_eq!(g.state().input(), "");
    }

    #[test]
    fn hard_mode_starts_countdown() {
        let g = game(vec!["crane"], GameConfig::hard(120));
        assert_eq!(g.remaining(), 120);
    }

    #[test]
    fn hard_mode_win_offers_leaderboard() {
        let mut g = game(vec!["crane"], GameConfig::hard(120));
        assert_eq!(ticks(&mut g, 3), vec![
            GameEvent::TimerUpdate(119),
            GameEvent::TimerUpdate(118),
            GameEvent::TimerUpdate(117),
        ]);

        let events = play(&mut g, "crane");
        assert_eq!(round_over(&events).unwrap().elapsed, Some(3));
        assert_eq!(
            events.last(),
            Some(&GameEvent::LeaderboardEligible { elapsed: 3 })
        );
        assert_eq!(g.pending_score(), Some(3));

        assert!(matches!(
            g.submit_name("   "),
            Err(GameError::InvalidLeaderboardName)
        ));
        assert_eq!(g.pending_score(), Some(3));
        assert!(g.leaderboard().is_empty());

        let update = g.submit_name(" ada ").unwrap();
        assert_eq!(
            update,
            GameEvent::LeaderboardUpdated {
                rank: Some(1),
                entries: vec![LeaderboardEntry {
                    name: "ada".into(),
                    seconds: 3
                }],
            }
        );
        assert!(matches!(
            g.submit_name("ada"),
            Err(GameError::NoPendingScore)
        ));
    }

    #[test]
    fn win_stops_the_countdown() {
        let mut g = game(vec!["crane"], GameConfig::hard(10));
        ticks(&mut g, 2);
        play(&mut g, "crane");

        assert!(ticks(&mut g, 20).is_empty());
        assert_eq!(g.remaining(), 8);
        assert_eq!(g.phase(), Phase::Won);
    }

    #[test]
    fn instant_win_is_not_eligible() {
        let mut g = game(vec!["crane"], GameConfig::hard(120));
        let events = play(&mut g, "crane");

        assert_eq!(round_over(&events).unwrap().elapsed, Some(0));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::LeaderboardEligible { .. })));
        assert!(matches!(
            g.submit_name("ada"),
            Err(GameError::NoPendingScore)
        ));
    }

    #[test]
    fn leaderboard_threshold_excludes_full_duration() {
        assert!(!qualifies_for_leaderboard(0, 120));
        assert!(qualifies_for_leaderboard(1, 120));
        assert!(qualifies_for_leaderboard(119, 120));
        assert!(!qualifies_for_leaderboard(120, 120));
    }

    #[test]
    fn countdown_expiry_times_out() {
        let mut g = game(vec!["crane"], GameConfig::hard(3));
        play(&mut g, "slate");
        let events = ticks(&mut g, 3);

        assert_eq!(events[..3], [
            GameEvent::TimerUpdate(2),
            GameEvent::TimerUpdate(1),
            GameEvent::TimerUpdate(0),
        ]);
        let summary = round_over(&events).unwrap();
        assert_eq!(summary.outcome, Outcome::TimedOut);
        assert_eq!(summary.elapsed, Some(3));
        assert_eq!(summary.guesses, 1);
        assert_eq!(events.len(), 4);

        assert_eq!(g.phase(), Phase::TimedOut);
        assert!(play(&mut g, "crane").is_empty());
        assert!(g.tick().is_empty());
    }

    #[test]
    fn standard_mode_ignores_ticks() {
        let mut g = game(vec!["crane"], GameConfig::standard());
        assert!(ticks(&mut g, 500).is_empty());
        assert_eq!(g.phase(), Phase::AwaitingInput);
    }

    #[test]
    fn reset_after_loss_starts_clean() {
        let mut g = game(vec!["crane"], GameConfig::standard());
        for _ in 0..MAX_GUESSES {
            play(&mut g, "slate");
        }
        g.source_mut().clear();
        g.source_mut().push("pilot");

        let events = g.reset().unwrap();
        assert_eq!(events, vec![GameEvent::RoundStarted {
            hard_mode: false,
            time_limit: None
        }]);
        assert_eq!(g.phase(), Phase::AwaitingInput);
        assert_eq!(g.state().target().text(), "PILOT");
        assert_eq!(g.state().guess_count(), 0);
        assert_eq!(g.state().input(), "");
        assert!(g.keyboard().is_empty());
    }

    #[test]
    fn reset_restarts_hard_mode_timer() {
        let mut g = game(vec!["crane"], GameConfig::hard(5));
        ticks(&mut g, 5);
        assert_eq!(g.phase(), Phase::TimedOut);

        let events = g.handle(Input::Reset).unwrap();
        assert_eq!(events, vec![
            GameEvent::RoundStarted {
                hard_mode: true,
                time_limit: Some(5)
            },
            GameEvent::TimerUpdate(5),
        ]);
        assert_eq!(g.remaining(), 5);
        assert_eq!(g.tick(), vec![GameEvent::TimerUpdate(4)]);
    }

    #[test]
    fn reset_mid_round_discards_progress() {
        let mut g = game(vec!["crane"], GameConfig::standard());
        play(&mut g, "slate");
        g.type_letter('x');

        g.handle(Input::Reset).unwrap();
        assert_eq!(g.state().guess_count(), 0);
        assert_eq!(g.state().input(), "");
    }

    #[test]
    fn failed_reset_leaves_round_untouched() {
        let mut g = game(vec!["crane"], GameConfig::standard());
        play(&mut g, "slate");
        g.source_mut().clear();

        assert!(matches!(g.reset(), Err(GameError::EmptyWordSource)));
        assert_eq!(g.phase(), Phase::AwaitingInput);
        assert_eq!(g.state().guess_count(), 1);
        assert_eq!(g.state().target().text(), "CRANE");
    }

    /// Serves its words until switched off, then fails like a vanished file
    struct Flaky {
        words: Vec<&'static str>,
        readable: bool,
    }

    impl WordSource for Flaky {
        fn candidates(&self) -> std::io::Result<Vec<String>> {
            if self.readable {
                self.words.candidates()
            } else {
                Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
            }
        }
    }

    #[test]
    fn unreadable_source_is_a_word_list_error() {
        let unreadable = Flaky {
            words: vec!["crane"],
            readable: false,
        };
        assert!(matches!(
            GameController::new(unreadable, GameConfig::standard()),
            Err(GameError::WordList(_))
        ));

        let source = Flaky {
            words: vec!["crane"],
            readable: true,
        };
        let mut g = GameController::new(source, GameConfig::standard().with_seed(7)).unwrap();
        play_any(&mut g, "slate");
        g.source_mut().readable = false;

        let err = g.reset().unwrap_err();
        assert!(matches!(err, GameError::WordList(_)));
        assert_eq!(err.to_string(), "failed to read word list: gone");
        assert_eq!(g.state().guess_count(), 1);
        assert_eq!(g.state().target().text(), "CRANE");
    }

    #[test]
    fn reset_drops_pending_score() {
        let mut g = game(vec!["crane"], GameConfig::hard(60));
        ticks(&mut g, 1);
        play(&mut g, "crane");
        assert!(g.pending_score().is_some());

        g.reset().unwrap();
        assert_eq!(g.pending_score(), None);
    }

    #[test]
    fn leaderboard_survives_rounds() {
        let mut g = game(vec!["crane"], GameConfig::hard(60));
        for (name, secs) in [("a", 30), ("b", 10), ("c", 20), ("d", 5)] {
            ticks(&mut g, secs);
            play(&mut g, "crane");
            g.submit_name(name).unwrap();
            g.reset().unwrap();
        }

        let times: Vec<u32> = g.leaderboard().top_entries().iter().map(|e| e.seconds).collect();
        assert_eq!(times, vec![5, 10, 20]);
    }

    #[test]
    fn handle_dispatches_inputs() {
        let mut g = game(vec!["crane"], GameConfig::standard());
        for letter in "CRANE".chars() {
            g.handle(Input::Letter(letter)).unwrap();
        }
        g.handle(Input::Backspace).unwrap();
        g.handle(Input::Letter('E')).unwrap();
        let events = g.handle(Input::Submit).unwrap();
        assert_eq!(round_over(&events).unwrap().outcome, Outcome::Won);
    }
}
