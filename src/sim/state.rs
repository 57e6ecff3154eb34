//! Game state and the render snapshot contract
//!
//! The whole world is one explicit [`GameState`] value owned by the host and
//! passed into [`super::tick::tick`] each frame; there is no ambient global.
//! Everything in it is deterministic and serializable.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pipe::Pipe;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first input; world frozen
    Start,
    /// Active gameplay, the only phase in which ticks advance the world
    Playing,
    /// Run ended by a collision; world frozen until restart
    GameOver,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gap-placement RNG; advances only when a pipe spawns
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub bird: Bird,
    /// Active pipes in spawn order, oldest (leftmost) first
    pub pipes: Vec<Pipe>,
    pub score: u32,
    /// Best score this process lifetime; survives restarts
    pub high_score: u32,
    /// Ticks elapsed in the current run, drives spawn timing
    pub tick_count: u64,
    pub tuning: Tuning,
}

impl GameState {
    /// Create a new game in the Start phase with the given seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        debug_assert!(tuning.validate().is_ok(), "invalid tuning");
        let bird = Bird::new(&tuning);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            bird,
            pipes: Vec::new(),
            score: 0,
            high_score: 0,
            tick_count: 0,
            tuning,
        }
    }

    /// Reset for a fresh run: bird re-centered, pipes cleared, score zeroed.
    ///
    /// The high score and the RNG stream survive, so a full session replays
    /// deterministically from the original seed.
    pub fn reset_world(&mut self) {
        self.bird = Bird::new(&self.tuning);
        self.pipes.clear();
        self.score = 0;
        self.tick_count = 0;
    }

    /// Read-only snapshot for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            bird: BirdView {
                pos: Vec2::new(self.bird.x, self.bird.y),
                tilt_degrees: self.bird.tilt_degrees(),
            },
            pipes: self
                .pipes
                .iter()
                .map(|p| PipeView {
                    x: p.x,
                    gap_y: p.gap_y,
                    gap: self.tuning.pipe_gap,
                    width: self.tuning.pipe_width,
                })
                .collect(),
        }
    }
}

/// Bird as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirdView {
    pub pos: Vec2,
    /// Nose tilt derived from velocity; clamped, degrees
    pub tilt_degrees: f32,
}

/// One pipe as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeView {
    pub x: f32,
    pub gap_y: f32,
    pub gap: f32,
    pub width: f32,
}

/// Read-only per-frame view of the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub bird: BirdView,
    pub pipes: Vec<PipeView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_frozen_and_empty() {
        let state = GameState::new(Tuning::default(), 1);
        assert_eq!(state.phase, GamePhase::Start);
        assert!(state.pipes.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 0);
        assert_eq!(state.bird.y, 300.0);
    }

    #[test]
    fn reset_preserves_high_score() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.score = 5;
        state.high_score = 5;
        state.bird.y = 480.0;
        state.tick_count = 999;

        state.reset_world();
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 5);
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.bird.y, 300.0);
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.pipes.push(Pipe {
            x: 240.0,
            gap_y: 220.0,
            passed: false,
        });
        state.score = 3;
        state.high_score = 7;

        let snap = state.snapshot();
        assert_eq!(snap.score, 3);
        assert_eq!(snap.high_score, 7);
        assert_eq!(snap.bird.pos, Vec2::new(100.0, 300.0));
        assert_eq!(snap.pipes.len(), 1);
        assert_eq!(snap.pipes[0].x, 240.0);
        assert_eq!(snap.pipes[0].gap, state.tuning.pipe_gap);
    }
}
