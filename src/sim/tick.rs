//! Per-tick world update and phase transitions
//!
//! One call to [`tick`] is one discrete simulation step, nominally aligned to
//! one rendered frame. Only the Playing phase advances the world; Start and
//! GameOver freeze it and wait for input.

use super::collision::check_collision;
use super::pipe::Pipe;
use super::state::{GamePhase, GameState};
use crate::tuning::Tuning;

/// Input captured by the host since the previous tick (deterministic)
///
/// Booleans, so repeated events before a tick coalesce into one action.
/// The host clears one-shot flags after each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Primary action: starts a run from the Start screen, flaps while Playing
    pub primary: bool,
    /// Restart after a crash; only meaningful in GameOver
    pub restart: bool,
    /// Demo mode: the sim flaps for itself toward the next gap
    pub idle_mode: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    let mut input = *input;
    if input.idle_mode {
        apply_idle_pilot(state, &mut input);
    }

    match state.phase {
        GamePhase::Start => {
            if input.primary {
                state.reset_world();
                state.phase = GamePhase::Playing;
                log::info!("run started (seed {})", state.seed);
            }
        }
        GamePhase::GameOver => {
            if input.restart {
                state.reset_world();
                state.phase = GamePhase::Playing;
                log::debug!("restarted, high score {}", state.high_score);
            }
        }
        GamePhase::Playing => {
            // The first input only starts the run; a flap here is a fresh
            // input event arriving while already Playing.
            if input.primary {
                state.bird.flap(&state.tuning);
            }

            step_world(state);

            // Collision reflects the post-update world state
            if check_collision(&state.bird, &state.pipes, &state.tuning) {
                state.phase = GamePhase::GameOver;
                log::info!(
                    "crashed at tick {} with score {} (high {})",
                    state.tick_count,
                    state.score,
                    state.high_score
                );
            }
        }
    }
}

/// Spawn, scroll, cull, score, then integrate the bird.
fn step_world(state: &mut GameState) {
    let GameState {
        ref tuning,
        ref mut rng,
        ref mut pipes,
        ref mut bird,
        ref mut score,
        ref mut high_score,
        ref mut tick_count,
        ..
    } = *state;

    if tick_count.is_multiple_of(tuning.spawn_interval_ticks) {
        pipes.push(Pipe::spawn(tuning, rng));
    }

    for pipe in pipes.iter_mut() {
        pipe.advance(tuning);
    }

    pipes.retain(|pipe| !pipe.is_offscreen(tuning));

    // Every pipe whose trailing edge crossed the bird this tick is credited
    // independently; no cap on score gained per tick.
    for pipe in pipes.iter_mut() {
        if pipe.has_passed(bird.x, tuning) {
            pipe.passed = true;
            *score += 1;
            *high_score = (*high_score).max(*score);
        }
    }

    *tick_count += 1;

    bird.integrate(tuning);
}

/// Demo autopilot: steer the bird toward the next gap center.
///
/// Starts a run from the Start screen and, while Playing, flaps whenever the
/// bird is sinking below a setpoint a little under the target gap center.
fn apply_idle_pilot(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::Start => input.primary = true,
        GamePhase::Playing => {
            let target = next_gap_center(&state.pipes, state.bird.x, &state.tuning);
            let setpoint = target + state.tuning.pipe_gap * 0.25;
            if state.bird.velocity > 0.0 && state.bird.y > setpoint {
                input.primary = true;
            }
        }
        GamePhase::GameOver => {}
    }
}

fn next_gap_center(pipes: &[Pipe], bird_x: f32, tuning: &Tuning) -> f32 {
    pipes
        .iter()
        .find(|p| p.x + tuning.pipe_width >= bird_x)
        .map(|p| p.gap_y)
        .unwrap_or_else(|| tuning.playable_height() / 2.0)
}
