//! Per-frame simulation tick
//!
//! Core game loop step: consume this frame's actions and key events, then
//! move the runner.

use std::ops::ControlFlow;

use super::grid::Direction;
use super::state::{GamePhase, GameState};

/// A discrete input event from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A direction key went down (already priority-resolved)
    KeyDown(Direction),
    /// A key was released
    KeyUp,
    /// Window closed / exit requested
    Quit,
}

/// Inputs for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start button (consumed in `Initial`)
    pub start: bool,
    /// Play-again button (consumed in `Ended`)
    pub replay: bool,
    /// Key events in arrival order
    pub events: Vec<InputEvent>,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game by one frame at time `now` (seconds).
///
/// Returns `Break` when a quit event arrived; the state is left untouched.
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) -> ControlFlow<()> {
    if input.events.contains(&InputEvent::Quit) {
        log::info!("Quit requested");
        return ControlFlow::Break(());
    }

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }
    let input = &input;

    state.time_ticks += 1;

    match state.phase {
        GamePhase::Initial if input.start => state.start(now),
        GamePhase::Ended if input.replay => state.replay(now),
        _ => {}
    }

    if state.phase == GamePhase::Playing {
        for event in &input.events {
            match *event {
                InputEvent::KeyDown(direction) => state.press(direction, now),
                InputEvent::KeyUp => state.release(),
                InputEvent::Quit => {}
            }
            if state.phase != GamePhase::Playing {
                break;
            }
        }
    }

    state.advance(now);
    ControlFlow::Continue(())
}

/// Demo player: starts a run and taps the target direction on the target cell
fn autopilot(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::Initial => input.start = true,
        GamePhase::Playing => {
            let Some(target) = state.target else {
                return;
            };
            if state.runner.position == target.cell && !state.key_held() {
                input.events.push(InputEvent::KeyDown(target.direction));
                input.events.push(InputEvent::KeyUp);
            }
        }
        GamePhase::Ended => {}
    }
}
