//! Monotonic time sources
//!
//! The root window measures elapsed real time through a [`Clock`] so hosts
//! can drive it from their own frame timing and tests can drive it by hand.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic clock reporting time since an arbitrary fixed epoch
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`]
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// A clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
