//! Target selection
//!
//! A target is the (direction, cell) pair the player has to hit next. It is
//! always placed on the lane the runner is currently travelling, somewhere
//! ahead of it, and its direction always leads back into the board.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{Board, Direction, GridPosition};
use crate::consts::OPENING_MARGIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Direction the player must press
    pub direction: Direction,
    /// Cell the runner must be on when it is pressed
    pub cell: GridPosition,
}

/// The line of cells a target is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    /// Fixed column; the target's row varies and its direction is Left/Right
    Column(i32),
    /// Fixed row; the target's column varies and its direction is Up/Down
    Row(i32),
}

/// Place a target on `lane`, at a uniformly random coordinate in `span`.
///
/// `span` is clamped to the board. An empty span falls back to the nearest
/// in-bounds coordinate so the cell is always on the board.
pub fn place_target<R: Rng + ?Sized>(
    lane: Lane,
    span: RangeInclusive<i32>,
    board: &Board,
    rng: &mut R,
) -> Target {
    let max = board.max_index();
    let lo = (*span.start()).max(0);
    let hi = (*span.end()).min(max);
    let along = if lo <= hi {
        rng.random_range(lo..=hi)
    } else {
        lo.min(max)
    };

    match lane {
        Lane::Column(col) => Target {
            direction: inward(col, max, Direction::Left, Direction::Right, rng),
            cell: GridPosition::new(col, along),
        },
        Lane::Row(row) => Target {
            direction: inward(row, max, Direction::Up, Direction::Down, rng),
            cell: GridPosition::new(along, row),
        },
    }
}

/// Pick a direction along the axis of `coord` that does not leave the board
fn inward<R: Rng + ?Sized>(
    coord: i32,
    max: i32,
    decreasing: Direction,
    increasing: Direction,
    rng: &mut R,
) -> Direction {
    if coord <= 0 {
        increasing
    } else if coord >= max {
        decreasing
    } else if rng.random_bool(0.5) {
        decreasing
    } else {
        increasing
    }
}

/// The lane and the cells still ahead of a runner leaving `pivot` towards `heading`
pub fn lane_ahead(
    heading: Direction,
    pivot: GridPosition,
    board: &Board,
) -> Option<(Lane, RangeInclusive<i32>)> {
    let max = board.max_index();
    match heading {
        Direction::Up => Some((Lane::Column(pivot.x), 0..=pivot.y - 1)),
        Direction::Down => Some((Lane::Column(pivot.x), pivot.y + 1..=max)),
        Direction::Left => Some((Lane::Row(pivot.y), 0..=pivot.x - 1)),
        Direction::Right => Some((Lane::Row(pivot.y), pivot.x + 1..=max)),
        Direction::None => None,
    }
}

/// Next target after the player turned the runner towards `heading` at `pivot`
pub fn select_next<R: Rng + ?Sized>(
    heading: Direction,
    pivot: GridPosition,
    board: &Board,
    rng: &mut R,
) -> Option<Target> {
    let (lane, span) = lane_ahead(heading, pivot, board)?;
    let target = place_target(lane, span, board, rng);
    log::debug!(
        "Target {} at ({}, {}) after turning {} at ({}, {})",
        target.direction.as_str(),
        target.cell.x,
        target.cell.y,
        heading.as_str(),
        pivot.x,
        pivot.y
    );
    Some(target)
}

/// First target of a run: down the starting column, clear of the start cell
pub fn opening_target<R: Rng + ?Sized>(start: GridPosition, board: &Board, rng: &mut R) -> Target {
    place_target(
        Lane::Column(start.x),
        start.y + OPENING_MARGIN..=board.max_index(),
        board,
        rng,
    )
}
