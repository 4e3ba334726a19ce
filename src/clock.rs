use std::time::{Duration, Instant};

/// Returns the wall-clock time between two ticks at `ticks_per_second`.
#[must_use]
pub fn tick_interval(ticks_per_second: u32) -> Duration {
    Duration::from_secs(1) / ticks_per_second.max(1)
}

/// Tick pacing for the driver loop.
///
/// Owns the instant of the last tick, the pause flag and the stop flag. The
/// engine never sees wall-clock time; the driver asks this context whether a
/// tick is due.
#[derive(Debug, Clone, Copy)]
pub struct ClockContext {
    last_tick: Instant,
    paused: bool,
    stopped: bool,
}

impl ClockContext {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            last_tick: now,
            paused: false,
            stopped: false,
        }
    }

    /// Returns true when the next tick should run at `now`.
    #[must_use]
    pub fn is_due(&self, ticks_per_second: u32, now: Instant) -> bool {
        self.is_running() && now.saturating_duration_since(self.last_tick) >= tick_interval(ticks_per_second)
    }

    /// Returns how long the driver may block on input before the next tick.
    ///
    /// While paused or stopped no tick is coming, so the driver idles for one
    /// full interval per poll.
    #[must_use]
    pub fn time_until_next_tick(&self, ticks_per_second: u32, now: Instant) -> Duration {
        if !self.is_running() {
            return tick_interval(ticks_per_second);
        }

        tick_interval(ticks_per_second).saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Records that a tick ran at `now`.
    pub fn mark_tick(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// Flips the pause flag. Resuming restarts the interval from `now` so the
    /// first tick after a pause is not immediate.
    pub fn toggle_pause(&mut self, now: Instant) {
        self.paused = !self.paused;
        if !self.paused {
            self.last_tick = now;
        }
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stops issuing ticks for good. Used once the game has ended.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn is_running(&self) -> bool {
        !self.paused && !self.stopped
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{tick_interval, ClockContext};

    #[test]
    fn interval_follows_tick_rate() {
        assert_eq!(tick_interval(10), Duration::from_millis(100));
        assert_eq!(tick_interval(5), Duration::from_millis(200));
        assert_eq!(tick_interval(0), Duration::from_secs(1));
    }

    #[test]
    fn tick_becomes_due_after_one_interval() {
        let start = Instant::now();
        let mut clock = ClockContext::new(start);

        assert!(!clock.is_due(10, start + Duration::from_millis(99)));
        assert!(clock.is_due(10, start + Duration::from_millis(100)));
        assert_eq!(
            clock.time_until_next_tick(10, start + Duration::from_millis(40)),
            Duration::from_millis(60)
        );

        clock.mark_tick(start + Duration::from_millis(100));
        assert!(!clock.is_due(10, start + Duration::from_millis(150)));
    }

    #[test]
    fn speed_change_applies_to_next_interval() {
        let start = Instant::now();
        let clock = ClockContext::new(start);
        let later = start + Duration::from_millis(50);

        assert!(!clock.is_due(10, later));
        assert!(clock.is_due(20, later));
    }

    #[test]
    fn paused_clock_never_ticks() {
        let start = Instant::now();
        let mut clock = ClockContext::new(start);

        clock.toggle_pause(start);
        assert!(clock.is_paused());
        assert!(!clock.is_due(10, start + Duration::from_secs(5)));

        let resumed = start + Duration::from_secs(5);
        clock.toggle_pause(resumed);
        assert!(!clock.is_paused());
        assert!(!clock.is_due(10, resumed + Duration::from_millis(50)));
        assert!(clock.is_due(10, resumed + Duration::from_millis(100)));
    }

    #[test]
    fn stopped_clock_idles_instead_of_spinning() {
        let start = Instant::now();
        let mut clock = ClockContext::new(start);

        clock.mark_tick(start);
        clock.stop();
        assert!(clock.is_stopped());

        for later in [250, 1_000, 60_000] {
            let now = start + Duration::from_millis(later);
            assert!(!clock.is_due(10, now));
            assert_eq!(clock.time_until_next_tick(10, now), Duration::from_millis(100));
        }
    }
}
