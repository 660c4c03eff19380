//! Quick Direct - A grid reaction game
//!
//! Core modules:
//! - `sim`: Simulation core (runner, target selection, adjudication, phases)
//! - `platform`: Clock and input abstraction
//! - `settings`: Configuration and difficulty presets
//! - `error`: Configuration errors

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Default board edge length (cells per row and column)
    pub const BOARD_SIZE: u32 = 8;
    /// Smallest board that leaves room for an opening target
    pub const MIN_BOARD_SIZE: u32 = 3;

    /// Seconds between runner advances at the start of a run
    pub const INITIAL_CADENCE: f64 = 1.0;
    /// Fastest the runner is ever allowed to go
    pub const CADENCE_FLOOR: f64 = 0.035;

    /// Cadence above this drops in coarse steps
    pub const COARSE_TIER: f64 = 0.7;
    /// Cadence above this (and at or below `COARSE_TIER`) drops in medium steps
    pub const MEDIUM_TIER: f64 = 0.4;
    pub const COARSE_STEP: f64 = 0.2;
    pub const MEDIUM_STEP: f64 = 0.1;
    pub const FINE_STEP: f64 = 0.01;

    /// Rows skipped past the runner's start before the opening target may appear
    pub const OPENING_MARGIN: i32 = 2;

    /// Presentation frame rate the simulation is ticked at
    pub const FRAME_RATE: u32 = 60;
}
