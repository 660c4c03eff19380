//! Board geometry: cells, directions and bounds

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::MIN_BOARD_SIZE;
use crate::error::{ConfigError, Result};

/// A board cell as (column, row). Row 0 is the top edge.
///
/// Positions are signed so that a runner stepping off the board is
/// representable; that step ends the run rather than being clamped.
pub type GridPosition = IVec2;

/// One of the four cardinal directions, or the "no input yet" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The four directions a runner or target may carry
    pub const CARDINALS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit displacement of one runner step
    #[inline]
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
            Direction::None => IVec2::ZERO,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_cardinal(self) -> bool {
        self != Direction::None
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::None => "None",
        }
    }
}

/// Square N×N playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: i32,
}

impl Board {
    /// Create a board with `size` cells per side.
    ///
    /// Returns `Err(ConfigError::BoardTooSmall)` below [`MIN_BOARD_SIZE`],
    /// since smaller boards leave no room for the opening target.
    pub fn new(size: u32) -> Result<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall(size));
        }
        Ok(Self { size: size as i32 })
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Largest valid coordinate on either axis (N-1)
    #[inline]
    pub fn max_index(&self) -> i32 {
        self.size - 1
    }

    /// Whether `pos` lies on the board
    #[inline]
    pub fn contains(&self, pos: GridPosition) -> bool {
        (0..self.size).contains(&pos.x) && (0..self.size).contains(&pos.y)
    }
}
