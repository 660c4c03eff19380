//! Elapsed run time

use serde::{Deserialize, Serialize};

/// Run timer: counts only while running, holds its value once stopped
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stopwatch {
    elapsed: f64,
    started_at: Option<f64>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now - self.elapsed);
        }
    }

    /// Refresh the elapsed time (call each tick while running)
    pub fn update(&mut self, now: f64) {
        if let Some(start) = self.started_at {
            self.elapsed = (now - start).max(0.0);
        }
    }

    /// Freeze the elapsed time at `now`
    pub fn stop(&mut self, now: f64) {
        self.update(now);
        self.started_at = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Seconds as of the last update
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

/// Format seconds as `MM:SS.cc`
pub fn format_elapsed(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let minutes = (seconds / 60.0) as u64;
    let secs = (seconds % 60.0) as u64;
    let centis = ((seconds % 1.0) * 100.0) as u64;
    format!("{minutes:02}:{secs:02}.{centis:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_only_while_running() {
        let mut watch = Stopwatch::new();
        watch.update(5.0);
        assert_eq!(watch.elapsed(), 0.0);

        watch.start(10.0);
        watch.update(12.5);
        assert_eq!(watch.elapsed(), 2.5);

        watch.stop(13.0);
        watch.update(100.0);
        assert_eq!(watch.elapsed(), 3.0);
        assert!(!watch.is_running());
    }

    #[test]
    fn test_reset() {
        let mut watch = Stopwatch::new();
        watch.start(1.0);
        watch.stop(4.0);
        watch.reset();
        assert_eq!(watch, Stopwatch::new());
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0.0), "00:00.00");
        assert_eq!(format_elapsed(75.5), "01:15.50");
        assert_eq!(format_elapsed(-3.0), "00:00.00");
    }
}
