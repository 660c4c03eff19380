use thiserror::Error;

use crate::consts::MIN_BOARD_SIZE;

/// Errors raised while building a game from configuration.
///
/// The simulation itself never fails; everything that can go wrong during a
/// run is a [`Failure`](crate::sim::Failure).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Board size {0} is too small (minimum {min})", min = MIN_BOARD_SIZE)]
    BoardTooSmall(u32),

    #[error("Invalid cadence: floor {floor} must be positive and no larger than initial {initial}")]
    InvalidCadence { initial: f64, floor: f64 },

    #[error("Frame rate must be positive")]
    ZeroFrameRate,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
