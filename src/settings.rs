//! Game settings and preferences
//!
//! Loaded from a JSON file named by `QUICK_DIRECT_SETTINGS`; anything missing
//! from the file keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};
use crate::sim::CadenceTuning;

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Relaxed,
    #[default]
    Normal,
    Frantic,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Relaxed => "Relaxed",
            Difficulty::Normal => "Normal",
            Difficulty::Frantic => "Frantic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relaxed" | "easy" => Some(Difficulty::Relaxed),
            "normal" => Some(Difficulty::Normal),
            "frantic" | "hard" => Some(Difficulty::Frantic),
            _ => None,
        }
    }

    /// Seconds between runner advances at the start of a run
    pub fn initial_cadence(&self) -> f64 {
        match self {
            Difficulty::Relaxed => 1.5,
            Difficulty::Normal => INITIAL_CADENCE,
            Difficulty::Frantic => 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,

    // === Board ===
    /// Cells per side
    pub board_size: u32,

    // === Runner ===
    /// Overrides the preset's starting cadence
    pub initial_cadence: Option<f64>,
    /// Fastest allowed cadence
    pub cadence_floor: f64,

    // === Run ===
    /// Fixed seed for reproducible targets (random if unset)
    pub seed: Option<u64>,
    /// Simulation ticks per second
    pub frame_rate: u32,

    // === Demo ===
    /// Seconds the autopilot plays before letting the runner go
    pub demo_seconds: f64,
    /// Pace the demo against the wall clock instead of running flat out
    pub realtime: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            board_size: BOARD_SIZE,
            initial_cadence: None,
            cadence_floor: CADENCE_FLOOR,
            seed: None,
            frame_rate: FRAME_RATE,
            demo_seconds: 30.0,
            realtime: false,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const ENV_VAR: &'static str = "QUICK_DIRECT_SETTINGS";

    /// Create settings from a difficulty preset
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// Effective cadence bounds (explicit override beats the preset)
    pub fn cadence_tuning(&self) -> CadenceTuning {
        CadenceTuning {
            initial: self
                .initial_cadence
                .unwrap_or_else(|| self.difficulty.initial_cadence()),
            floor: self.cadence_floor,
        }
    }

    /// Seconds per simulation tick
    pub fn tick_interval(&self) -> f64 {
        1.0 / self.frame_rate.max(1) as f64
    }

    pub fn validate(&self) -> Result<()> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }
        let tuning = self.cadence_tuning();
        if !(tuning.floor > 0.0 && tuning.floor <= tuning.initial) {
            return Err(ConfigError::InvalidCadence {
                initial: tuning.initial,
                floor: tuning.floor,
            });
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }

    /// Read and validate a JSON settings file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from the file named by [`Self::ENV_VAR`], or use defaults
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {path}");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {path}: {e}");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.cadence_tuning(), CadenceTuning::default());
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("FRANTIC"), Some(Difficulty::Frantic));
        assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Relaxed));
        assert_eq!(Difficulty::from_str("nightmare"), None);
        assert_eq!(Difficulty::Normal.as_str(), "Normal");
    }

    #[test]
    fn test_override_beats_preset() {
        let mut settings = Settings::from_difficulty(Difficulty::Relaxed);
        assert_eq!(settings.cadence_tuning().initial, 1.5);
        settings.initial_cadence = Some(0.9);
        assert_eq!(settings.cadence_tuning().initial, 0.9);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let small = Settings {
            board_size: 2,
            ..Settings::default()
        };
        assert!(matches!(small.validate(), Err(ConfigError::BoardTooSmall(2))));

        let floor_above_start = Settings {
            cadence_floor: 2.0,
            ..Settings::default()
        };
        assert!(matches!(
            floor_above_start.validate(),
            Err(ConfigError::InvalidCadence { .. })
        ));

        let frozen = Settings {
            frame_rate: 0,
            ..Settings::default()
        };
        assert!(matches!(frozen.validate(), Err(ConfigError::ZeroFrameRate)));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "board_size": 12, "difficulty": "Frantic" }"#).unwrap();
        assert_eq!(settings.board_size, 12);
        assert_eq!(settings.difficulty, Difficulty::Frantic);
        assert_eq!(settings.frame_rate, FRAME_RATE);
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("quick_direct_{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(77),
            board_size: 6,
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
