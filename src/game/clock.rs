//! Wall-clock tick source
//!
//! Converts elapsed real time into whole-second ticks for the countdown. The
//! drivers poll it between input events and deliver one `Input::Tick` per tick.

use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_secs(1);

/// Emits one tick per elapsed second since the last restart
#[derive(Debug, Clone)]
pub struct TickClock {
    next: Instant,
}

impl TickClock {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self { next: now + TICK }
    }

    /// Number of ticks that became due by `now`
    ///
    /// Ticks are never dropped: after a stall every missed second is reported.
    pub fn due(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now >= self.next {
            ticks += 1;
            self.next += TICK;
        }
        ticks
    }

    /// Time left until the next tick, for poll timeouts
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Realign to `now`, e.g. when a new round starts
    pub fn restart(&mut self, now: Instant) {
        self.next = now + TICK;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_due_before_first_second() {
        let start = Instant::now();
        let mut clock = TickClock::new(start);
        assert_eq!(clock.due(start), 0);
        assert_eq!(clock.due(start + Duration::from_millis(999)), 0);
    }

    #[test]
    fn one_tick_per_second() {
        let start = Instant::now();
        let mut clock = TickClock::new(start);
        assert_eq!(clock.due(start + Duration::from_millis(1000)), 1);
        assert_eq!(clock.due(start + Duration::from_millis(1500)), 0);
        assert_eq!(clock.due(start + Duration::from_millis(2000)), 1);
    }

    #[test]
    fn stalls_report_every_missed_second() {
        let start = Instant::now();
        let mut clock = TickClock::new(start);
        assert_eq!(clock.due(start + Duration::from_millis(3500)), 3);
        assert_eq!(
            clock.until_next(start + Duration::from_millis(3500)),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn restart_realigns() {
        let start = Instant::now();
        let mut clock = TickClock::new(start);
        let later = start + Duration::from_millis(2500);
        clock.restart(later);
        assert_eq!(clock.due(later + Duration::from_millis(999)), 0);
        assert_eq!(clock.due(later + Duration::from_secs(1)), 1);
    }
}
