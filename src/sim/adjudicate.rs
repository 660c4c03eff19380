//! Match adjudication: did the player press the right key at the right cell?

use std::fmt;

use serde::{Deserialize, Serialize};

use super::grid::{Direction, GridPosition};
use super::target::Target;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Failure {
    /// Pressed a direction other than the target's
    WrongDirection,
    /// Pressed the target's direction, but away from the target cell
    MissedDirection,
    /// The runner walked off the board
    OutOfBounds,
}

impl Failure {
    /// Human-readable reason for the end screen
    pub fn reason(&self) -> &'static str {
        match self {
            Failure::WrongDirection => "Wrong Direction!",
            Failure::MissedDirection => "Missed Direction!",
            Failure::OutOfBounds => "Out of Bounds!",
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch(Failure),
}

/// Judge a key press. Pure: the caller applies the consequences.
pub fn adjudicate(pressed: Direction, runner_position: GridPosition, target: &Target) -> Verdict {
    if pressed != target.direction {
        Verdict::Mismatch(Failure::WrongDirection)
    } else if runner_position != target.cell {
        Verdict::Mismatch(Failure::MissedDirection)
    } else {
        Verdict::Match
    }
}
