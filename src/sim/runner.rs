//! The runner: the token that advances on its own and that the player redirects

use serde::{Deserialize, Serialize};

use super::grid::{Direction, GridPosition};
use crate::consts::*;

/// Cadence bounds for a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CadenceTuning {
    /// Seconds between advances when a run starts
    pub initial: f64,
    /// Cadence never drops below this
    pub floor: f64,
}

impl Default for CadenceTuning {
    fn default() -> Self {
        Self {
            initial: INITIAL_CADENCE,
            floor: CADENCE_FLOOR,
        }
    }
}

/// Speed up after a successful turn.
///
/// Coarse steps while the runner is slow, fine steps near the floor, so early
/// turns feel the speed-up and late turns only nudge it.
pub fn accelerate(cadence: f64, floor: f64) -> f64 {
    let cadence = quantize(cadence);
    let step = if cadence > COARSE_TIER {
        COARSE_STEP
    } else if cadence > MEDIUM_TIER {
        MEDIUM_STEP
    } else {
        FINE_STEP
    };
    quantize(cadence - step).max(floor)
}

/// Snap to whole microseconds so repeated subtraction lands exactly on the tiers
fn quantize(seconds: f64) -> f64 {
    (seconds * 1e6).round() / 1e6
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runner {
    pub position: GridPosition,
    pub direction: Direction,
    /// Seconds between automatic one-cell advances
    pub cadence: f64,
    pub tuning: CadenceTuning,
    /// Where every run begins
    pub start: GridPosition,
    last_advance: f64,
}

impl Runner {
    pub fn new(start: GridPosition, tuning: CadenceTuning, now: f64) -> Self {
        Self {
            position: start,
            direction: Direction::Down,
            cadence: tuning.initial,
            tuning,
            start,
            last_advance: now,
        }
    }

    /// Timestamp of the last advance (or reset)
    pub fn last_advance(&self) -> f64 {
        self.last_advance
    }

    /// Advance one cell if a full cadence has passed since the last advance.
    ///
    /// Never steps more than once per call, however late it is called.
    pub fn update(&mut self, now: f64) -> bool {
        if now - self.last_advance < self.cadence {
            return false;
        }
        self.position += self.direction.offset();
        self.last_advance = now;
        true
    }

    /// Turn after a successful match, and speed up
    pub fn change_direction(&mut self, direction: Direction) {
        if !direction.is_cardinal() {
            return;
        }
        self.direction = direction;
        self.cadence = accelerate(self.cadence, self.tuning.floor);
    }

    /// Back to the starting cell, heading down, at the initial cadence
    pub fn reset(&mut self, now: f64) {
        self.position = self.start;
        self.direction = Direction::Down;
        self.cadence = self.tuning.initial;
        self.last_advance = now;
    }
}
