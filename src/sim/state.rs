//! Game state and the phase state machine
//!
//! One owned `GameState` holds everything a run needs; the loop controller
//! advances it through [`tick`](super::tick::tick).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::adjudicate::{Failure, Verdict, adjudicate};
use super::grid::{Board, Direction, GridPosition};
use super::runner::{CadenceTuning, Runner};
use super::stopwatch::{Stopwatch, format_elapsed};
use super::target::{Target, opening_target, select_next};
use crate::error::Result;
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start action
    Initial,
    /// A run is in progress
    Playing,
    /// Run over; waiting for replay
    Ended,
}

/// Read-only view for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub runner_position: GridPosition,
    pub runner_direction: Direction,
    pub target: Option<Target>,
    pub score: u32,
    pub elapsed: f64,
    /// `MM:SS.cc`
    pub elapsed_display: String,
    pub failure: Option<Failure>,
    pub reason: Option<String>,
    /// Simulation ticks since the game was created
    pub time_ticks: u64,
}

#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub board: Board,
    pub phase: GamePhase,
    pub runner: Runner,
    /// Set when the first run starts
    pub target: Option<Target>,
    /// Successful direction changes this run
    pub score: u32,
    pub stopwatch: Stopwatch,
    /// Why the last run ended
    pub failure: Option<Failure>,
    /// A direction key is down and has already been acted on
    key_held: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a game waiting in [`GamePhase::Initial`]
    pub fn new(seed: u64, board: Board, tuning: CadenceTuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            board,
            phase: GamePhase::Initial,
            runner: Runner::new(GridPosition::ZERO, tuning, 0.0),
            target: None,
            score: 0,
            stopwatch: Stopwatch::new(),
            failure: None,
            key_held: false,
            time_ticks: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let board = Board::new(settings.board_size)?;
        let seed = settings.seed.unwrap_or_else(rand::random);
        Ok(Self::new(seed, board, settings.cadence_tuning()))
    }

    pub fn key_held(&self) -> bool {
        self.key_held
    }

    /// INITIAL → PLAYING
    pub fn start(&mut self, now: f64) {
        if self.phase == GamePhase::Initial {
            self.enter_playing(now);
        }
    }

    /// ENDED → PLAYING, with everything reset
    pub fn replay(&mut self, now: f64) {
        if self.phase == GamePhase::Ended {
            self.enter_playing(now);
        }
    }

    fn enter_playing(&mut self, now: f64) {
        self.runner.reset(now);
        self.target = Some(opening_target(self.runner.start, &self.board, &mut self.rng));
        self.score = 0;
        self.stopwatch.reset();
        self.stopwatch.start(now);
        self.failure = None;
        self.key_held = false;
        self.phase = GamePhase::Playing;
        log::info!("Run started on a {0}x{0} board", self.board.size());
    }

    /// Handle a direction key going down. Held keys only count once.
    pub fn press(&mut self, pressed: Direction, now: f64) {
        if self.phase != GamePhase::Playing || self.key_held || !pressed.is_cardinal() {
            return;
        }
        self.key_held = true;

        let Some(target) = self.target else {
            return;
        };
        match adjudicate(pressed, self.runner.position, &target) {
            Verdict::Match => {
                // Target first: it needs the cell the runner turns at
                if let Some(next) = select_next(pressed, target.cell, &self.board, &mut self.rng) {
                    self.target = Some(next);
                }
                self.runner.change_direction(pressed);
                self.score += 1;
                log::debug!(
                    "Turned {} (score {}, cadence {:.3}s)",
                    pressed.as_str(),
                    self.score,
                    self.runner.cadence
                );
            }
            Verdict::Mismatch(failure) => self.end_run(failure, now),
        }
    }

    /// Any key released: the next key-down counts again
    pub fn release(&mut self) {
        self.key_held = false;
    }

    /// Per-tick movement and timekeeping while playing
    pub fn advance(&mut self, now: f64) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.stopwatch.update(now);
        if self.runner.update(now) && !self.board.contains(self.runner.position) {
            self.end_run(Failure::OutOfBounds, now);
        }
    }

    fn end_run(&mut self, failure: Failure, now: f64) {
        self.stopwatch.stop(now);
        self.failure = Some(failure);
        self.phase = GamePhase::Ended;
        log::info!(
            "Run ended: {} after {} direction changes in {}",
            failure,
            self.score,
            format_elapsed(self.stopwatch.elapsed())
        );
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            runner_position: self.runner.position,
            runner_direction: self.runner.direction,
            target: self.target,
            score: self.score,
            elapsed: self.stopwatch.elapsed(),
            elapsed_display: format_elapsed(self.stopwatch.elapsed()),
            failure: self.failure,
            reason: self.failure.map(|f| f.reason().to_string()),
            time_ticks: self.time_ticks,
        }
    }

    /// End screen text; empty unless the run has ended
    pub fn summary_lines(&self) -> Vec<String> {
        let Some(failure) = self.failure.filter(|_| self.phase == GamePhase::Ended) else {
            return Vec::new();
        };
        vec![
            failure.reason().to_string(),
            format!("Direction Changes: {}", self.score),
            format!("Running Time: {}", format_elapsed(self.stopwatch.elapsed())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CADENCE_FLOOR;

    fn playing(size: u32) -> GameState {
        let mut state = GameState::new(1234, Board::new(size).unwrap(), CadenceTuning::default());
        state.start(0.0);
        state
    }

    #[test]
    fn test_new_state_is_initial() {
        let state = GameState::new(1, Board::new(5).unwrap(), CadenceTuning::default());
        assert_eq!(state.phase, GamePhase::Initial);
        assert!(state.target.is_none());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_start_places_opening_target() {
        let state = playing(5);
        assert_eq!(state.phase, GamePhase::Playing);
        let target = state.target.unwrap();
        assert_eq!(target.cell.x, 0);
        assert!((2..=4).contains(&target.cell.y));
        assert_eq!(target.direction, Direction::Right);
        assert!(state.stopwatch.is_running());
    }

    #[test]
    fn test_matching_down_at_origin() {
        let mut state = playing(5);
        state.target = Some(Target {
            direction: Direction::Down,
            cell: GridPosition::ZERO,
        });

        state.press(Direction::Down, 0.1);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 1);
        assert_eq!(state.runner.direction, Direction::Down);
        assert!(state.runner.cadence < 1.0);

        let next = state.target.unwrap();
        assert_eq!(next.cell.x, 0);
        assert!((1..=4).contains(&next.cell.y));
        assert_eq!(next.direction, Direction::Right);
    }

    #[test]
    fn test_wrong_direction_ends_run() {
        let mut state = playing(5);
        state.target = Some(Target {
            direction: Direction::Down,
            cell: GridPosition::ZERO,
        });

        state.advance(0.5);
        state.press(Direction::Right, 0.5);

        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(state.failure, Some(Failure::WrongDirection));

        // Elapsed time no longer moves
        state.advance(9.0);
        assert_eq!(state.stopwatch.elapsed(), 0.5);
    }

    #[test]
    fn test_right_key_on_wrong_cell_is_missed() {
        let mut state = playing(5);
        let target = state.target.unwrap();
        assert_eq!(target.direction, Direction::Right);
        assert_ne!(state.runner.position, target.cell);

        state.press(Direction::Right, 0.2);
        assert_eq!(state.failure, Some(Failure::MissedDirection));
    }

    #[test]
    fn test_out_of_bounds_without_input() {
        let mut state = playing(5);
        state.runner.position = GridPosition::new(4, 0);
        state.runner.direction = Direction::Right;

        state.advance(0.5);
        assert_eq!(state.phase, GamePhase::Playing);

        state.advance(1.0);
        assert_eq!(state.runner.position, GridPosition::new(5, 0));
        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(state.failure, Some(Failure::OutOfBounds));
    }

    #[test]
    fn test_held_key_counts_once() {
        let mut state = playing(5);
        let target = state.target.unwrap();
        state.runner.position = target.cell;

        state.press(target.direction, 0.1);
        assert_eq!(state.score, 1);

        // Still held: a repeat is neither a match nor a mismatch
        state.press(Direction::Up, 0.2);
        assert_eq!(state.phase, GamePhase::Playing);

        state.release();
        state.press(Direction::Up, 0.3);
        assert_eq!(state.phase, GamePhase::Ended);
    }

    #[test]
    fn test_sentinel_press_is_ignored() {
        let mut state = playing(5);
        state.press(Direction::None, 0.1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.key_held());
    }

    #[test]
    fn test_replay_matches_fresh_start() {
        let mut state = playing(6);
        state.runner.position = GridPosition::new(3, 3);
        state.score = 7;
        state.runner.change_direction(Direction::Left);
        state.press(Direction::Up, 4.0);
        assert_eq!(state.phase, GamePhase::Ended);

        state.replay(10.0);

        let mut fresh = GameState::new(99, Board::new(6).unwrap(), CadenceTuning::default());
        fresh.start(10.0);

        assert_eq!(state.phase, fresh.phase);
        assert_eq!(state.runner, fresh.runner);
        assert_eq!(state.score, 0);
        assert_eq!(state.stopwatch, fresh.stopwatch);
        assert_eq!(state.failure, None);
        assert!(!state.key_held());

        let target = state.target.unwrap();
        assert_eq!(target.cell.x, 0);
        assert!((2..=5).contains(&target.cell.y));
        assert_eq!(target.direction, Direction::Right);
    }

    #[test]
    fn test_replay_only_from_ended() {
        let mut state = GameState::new(5, Board::new(5).unwrap(), CadenceTuning::default());
        state.replay(1.0);
        assert_eq!(state.phase, GamePhase::Initial);

        state.start(1.0);
        state.start(2.0);
        assert_eq!(state.runner.last_advance(), 1.0);
    }

    #[test]
    fn test_cadence_bottoms_out_over_a_long_run() {
        let mut state = playing(8);
        for i in 0..200u64 {
            let target = state.target.unwrap();
            state.runner.position = target.cell;
            state.press(target.direction, i as f64);
            state.release();
            assert_eq!(state.phase, GamePhase::Playing);
        }
        assert_eq!(state.score, 200);
        assert_eq!(state.runner.cadence, CADENCE_FLOOR);
    }

    #[test]
    fn test_summary_lines() {
        let mut state = playing(5);
        assert!(state.summary_lines().is_empty());

        state.score = 3;
        state.press(Direction::Left, 75.5);
        assert_eq!(
            state.summary_lines(),
            vec![
                "Wrong Direction!".to_string(),
                "Direction Changes: 3".to_string(),
                "Running Time: 01:15.50".to_string(),
            ]
        );

        let snapshot = state.snapshot();
        assert_eq!(snapshot.reason.as_deref(), Some("Wrong Direction!"));
        assert_eq!(snapshot.elapsed_display, "01:15.50");
    }
}
