//! Keyboard input resolution
//!
//! The simulation only ever sees one direction per key-down; when several
//! direction keys are held at once they are resolved here in a fixed order.

use crate::sim::Direction;

/// Which direction keys are currently down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Record a key-down or key-up for `direction`
    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
            Direction::None => {}
        }
    }

    /// Single direction to report, by priority Up, Down, Left, Right
    pub fn resolve(&self) -> Direction {
        if self.up {
            Direction::Up
        } else if self.down {
            Direction::Down
        } else if self.left {
            Direction::Left
        } else if self.right {
            Direction::Right
        } else {
            Direction::None
        }
    }
}

/// Arrow keys and WASD, by key name
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}
