//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of presentation:
//! - Time comes in as a timestamp argument
//! - Randomness comes from the seeded RNG in `GameState`
//! - No rendering or platform dependencies

pub mod adjudicate;
pub mod grid;
pub mod runner;
pub mod state;
pub mod stopwatch;
pub mod target;
pub mod tick;

pub use adjudicate::{Failure, Verdict, adjudicate};
pub use grid::{Board, Direction, GridPosition};
pub use runner::{CadenceTuning, Runner, accelerate};
pub use state::{GamePhase, GameState, Snapshot};
pub use stopwatch::{Stopwatch, format_elapsed};
pub use target::{Lane, Target, lane_ahead, opening_target, place_target, select_next};
pub use tick::{InputEvent, TickInput, tick};
