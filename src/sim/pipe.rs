//! Scrolling pipe obstacles
//!
//! A pipe is a pair of solid segments separated by a passable gap. The gap
//! center is drawn once at spawn from a range that keeps both segments at a
//! strictly positive height, so every pipe is passable by construction.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// X of the leading (left) edge, decreasing each tick
    pub x: f32,
    /// Vertical midpoint of the gap, fixed at spawn
    pub gap_y: f32,
    /// Set once, when the bird is credited for passing this pipe
    pub passed: bool,
}

impl Pipe {
    /// Spawn at the right edge of the world with a freshly randomized gap.
    ///
    /// The gap center is uniform in `[gap_margin, playable - gap_margin)`.
    pub fn spawn(tuning: &Tuning, rng: &mut Pcg32) -> Self {
        let min_y = tuning.gap_margin;
        let max_y = tuning.playable_height() - tuning.gap_margin;
        Self {
            x: tuning.world_width,
            gap_y: rng.random_range(min_y..max_y),
            passed: false,
        }
    }

    /// Scroll left one tick
    pub fn advance(&mut self, tuning: &Tuning) {
        self.x -= tuning.pipe_speed;
    }

    /// True once the trailing edge has left the world
    pub fn is_offscreen(&self, tuning: &Tuning) -> bool {
        self.x + tuning.pipe_width < 0.0
    }

    /// True exactly once: when not yet marked passed and the trailing edge
    /// has crossed the bird's x. The caller marks `passed` after scoring.
    pub fn has_passed(&self, bird_x: f32, tuning: &Tuning) -> bool {
        !self.passed && self.x + tuning.pipe_width < bird_x
    }

    /// Solid segment above the gap
    pub fn top_bounds(&self, tuning: &Tuning) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, 0.0),
            Vec2::new(self.x + tuning.pipe_width, self.gap_y - tuning.pipe_gap / 2.0),
        )
    }

    /// Solid segment below the gap, down to the ground
    pub fn bottom_bounds(&self, tuning: &Tuning) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.gap_y + tuning.pipe_gap / 2.0),
            Vec2::new(self.x + tuning.pipe_width, tuning.playable_height()),
        )
    }
}
