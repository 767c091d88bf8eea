use std::time::{Duration, Instant};

/// Monotonic time source. Reported as time since an arbitrary fixed
/// origin; only differences are meaningful.
pub trait Clock {
    fn now(&self) -> Duration;
}

pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> MonotonicClock {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Tracks elapsed time since the last reset and delta time between
/// frames. The two anchors are independent: `start_time` only moves on
/// `reset`, `last_time` moves on every delta query.
pub struct TimeManager<C: Clock = MonotonicClock> {
    clock: C,
    start_time: Duration,
    last_time: Duration,
}

impl TimeManager<MonotonicClock> {
    pub fn new() -> TimeManager<MonotonicClock> {
        TimeManager::with_clock(MonotonicClock::new())
    }
}

impl Default for TimeManager<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimeManager<C> {
    pub fn with_clock(clock: C) -> TimeManager<C> {
        let now = clock.now();
        TimeManager {
            clock,
            start_time: now,
            last_time: now,
        }
    }

    /// Rebases both anchors to the current time.
    pub fn reset(&mut self) {
        let now = self.clock.now();
        self.start_time = now;
        self.last_time = now;
    }

    /// Seconds since the last reset.
    pub fn elapsed_seconds(&self) -> f64 {
        (self.clock.now() - self.start_time).as_secs_f64()
    }

    /// Seconds since the previous delta query (or the last reset for the
    /// first call). Advances the delta anchor.
    pub fn delta_seconds(&mut self) -> f64 {
        let now = self.clock.now();
        let delta = now - self.last_time;
        self.last_time = now;
        delta.as_secs_f64()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::Clock;

    /// Manually-driven clock. Clones share the same underlying time, so
    /// a test can keep one handle and give another to a `TimeManager`.
    #[derive(Clone, Default)]
    pub struct ManualClock {
        now: Rc<Cell<Duration>>,
    }

    impl ManualClock {
        pub fn at_millis(millis: u64) -> ManualClock {
            let clock = ManualClock::default();
            clock.set_millis(millis);
            clock
        }

        pub fn set_millis(&self, millis: u64) {
            self.now.set(Duration::from_millis(millis));
        }

        pub fn advance_millis(&self, millis: u64) {
            self.now.set(self.now.get() + Duration::from_millis(millis));
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Duration {
            self.now.get()
        }
    }
}
