//! Quick Direct entry point
//!
//! Runs a headless demo: the autopilot plays for a while, then lets go so the
//! run ends, and the final snapshot is printed as JSON.

use std::ops::ControlFlow;
use std::time::Duration;

use quick_direct::Settings;
use quick_direct::platform::{Clock, MonotonicClock, SteppedClock};
use quick_direct::sim::{GamePhase, GameState, TickInput, tick};

/// Give up on a run that somehow never ends (simulated seconds past the demo)
const GRACE_SECONDS: f64 = 120.0;

fn main() {
    env_logger::init();
    log::info!("Quick Direct (native) starting...");

    let settings = Settings::load();
    let mut state = match GameState::from_settings(&settings) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid settings: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Seed {}, {} difficulty, {}x{} board",
        state.seed,
        settings.difficulty.as_str(),
        settings.board_size,
        settings.board_size
    );

    if settings.realtime {
        let mut clock = MonotonicClock::new();
        run_demo(&mut state, &settings, &mut clock, |_, dt| {
            std::thread::sleep(Duration::from_secs_f64(dt))
        });
    } else {
        let mut clock = SteppedClock::new(settings.tick_interval());
        run_demo(&mut state, &settings, &mut clock, |clock, _| clock.advance());
    }

    for line in state.summary_lines() {
        println!("{line}");
    }
    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
}

/// Tick until the run ends: autopilot for `demo_seconds`, hands off afterwards
fn run_demo<C: Clock>(
    state: &mut GameState,
    settings: &Settings,
    clock: &mut C,
    mut wait: impl FnMut(&mut C, f64),
) {
    let dt = settings.tick_interval();
    let deadline = settings.demo_seconds + GRACE_SECONDS;

    loop {
        let t = clock.now();
        let input = TickInput {
            start: true,
            idle_mode: t < settings.demo_seconds,
            ..Default::default()
        };
        if let ControlFlow::Break(()) = tick(state, &input, t) {
            break;
        }
        if state.phase == GamePhase::Ended {
            break;
        }
        if t >= deadline {
            log::warn!("Demo still running after {deadline:.0}s, stopping");
            break;
        }
        wait(clock, dt);
    }
}
