//! Time sources

use std::time::Instant;

/// Monotonic time in fractional seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall-clock time since construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
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
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Simulated time that moves only when told to (headless runs, tests)
#[derive(Debug, Clone, Copy)]
pub struct SteppedClock {
    now: f64,
    step: f64,
}

impl SteppedClock {
    pub fn new(step: f64) -> Self {
        Self { now: 0.0, step }
    }

    /// Move forward one step
    pub fn advance(&mut self) {
        self.now += self.step;
    }
}

impl Clock for SteppedClock {
    fn now(&self) -> f64 {
        self.now
    }
}
