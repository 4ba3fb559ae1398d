//! Countdown timer for hard mode
//!
//! The timer does not measure time itself. Something outside calls `tick()`
//! once per elapsed second (see [`super::TickClock`]); the timer turns those
//! ticks into update and expiry notifications.

/// Lifecycle of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Expired,
    Stopped,
}

/// Notification emitted by the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Seconds remaining after a start or tick
    Update(u32),
    /// The countdown reached zero; emitted exactly once
    Expired,
}

/// Countdown state machine: Idle -> Running -> {Expired, Stopped}
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    remaining: u32,
    state: TimerState,
}

impl CountdownTimer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            remaining: 0,
            state: TimerState::Idle,
        }
    }

    /// Begin counting down from `seconds`
    ///
    /// Only valid from `Idle`; otherwise nothing happens. Emits the starting
    /// value immediately. A zero-length countdown expires on the spot.
    ///
    /// # Examples
    /// ```
    /// use speedle::game::{CountdownTimer, TimerEvent};
    ///
    /// let mut timer = CountdownTimer::new();
    /// assert_eq!(timer.start(2), vec![TimerEvent::Update(2)]);
    /// assert_eq!(timer.tick(), vec![TimerEvent::Update(1)]);
    /// assert_eq!(timer.tick(), vec![TimerEvent::Update(0), TimerEvent::Expired]);
    /// assert!(timer.tick().is_empty());
    /// ```
    pub fn start(&mut self, seconds: u32) -> Vec<TimerEvent> {
        if self.state != TimerState::Idle {
            return Vec::new();
        }

        self.remaining = seconds;
        self.state = TimerState::Running;

        let mut events = vec![TimerEvent::Update(seconds)];
        if seconds == 0 {
            self.state = TimerState::Expired;
            events.push(TimerEvent::Expired);
        }
        events
    }

    /// Advance by one second
    ///
    /// The tick that reaches zero emits the zero update followed by the expiry.
    pub fn tick(&mut self) -> Vec<TimerEvent> {
        if self.state != TimerState::Running {
            return Vec::new();
        }

        self.remaining = self.remaining.saturating_sub(1);
        let mut events = vec![TimerEvent::Update(self.remaining)];

        if self.remaining == 0 {
            self.state = TimerState::Expired;
            events.push(TimerEvent::Expired);
        }
        events
    }

    /// Halt a running countdown. Idempotent.
    pub fn stop(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Stopped;
        }
    }

    /// Return to `Idle` so the timer can be started again
    pub fn reset(&mut self) {
        self.remaining = 0;
        self.state = TimerState::Idle;
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}
