//! Sky Hopper entry point
//!
//! Headless demo driver: runs the simulation under the autopilot for a few
//! runs and logs the outcome. A renderer would consume
//! `GameState::snapshot` each tick instead of the log line here.

use std::time::{SystemTime, UNIX_EPOCH};

use sky_hopper::platform::TickLoop;
use sky_hopper::sim::{GamePhase, GameState, TickInput, tick};
use sky_hopper::tuning::Tuning;

/// Demo length: a handful of runs at a few hundred ticks each
const DEMO_TICKS: u32 = 2400;
/// Faster than real time; the sim only cares about tick count
const DEMO_TICK_HZ: u32 = 240;

fn main() {
    env_logger::init();

    let tuning = Tuning::default();
    if let Err(err) = tuning.validate() {
        log::error!("bad tuning: {err}");
        return;
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("Sky Hopper demo starting (seed {seed})");

    let mut state = GameState::new(tuning, seed);
    let tick_loop = TickLoop::new(DEMO_TICK_HZ);
    let handle = tick_loop.handle();
    let mut ticks = 0u32;

    tick_loop.run(|| {
        let input = TickInput {
            restart: state.phase == GamePhase::GameOver,
            idle_mode: true,
            ..TickInput::default()
        };
        let was_playing = state.phase == GamePhase::Playing;
        tick(&mut state, &input);

        if was_playing && state.phase == GamePhase::GameOver {
            log::info!(
                "run over: score {}, high score {}",
                state.score,
                state.high_score
            );
        }

        ticks += 1;
        if ticks >= DEMO_TICKS {
            handle.cancel();
        }
    });

    let snapshot = state.snapshot();
    log::info!(
        "demo finished after {ticks} ticks, high score {}",
        snapshot.high_score
    );
}
