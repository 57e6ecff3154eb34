//! Collision detection for the flap-and-dodge world
//!
//! Everything here is a pure function over axis-aligned boxes: the bird
//! against the ground line, the ceiling, and the solid segments of each pipe.
//! Overlap is strict on all four half-plane comparisons, so boxes that merely
//! share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pipe::Pipe;
use crate::tuning::Tuning;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from opposite corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square box centered at `center` with the given side length
    pub fn centered(center: Vec2, side: f32) -> Self {
        let half = Vec2::splat(side / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap test; touching edges do not count
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Check whether the bird collides with the world bounds or any pipe.
///
/// Must be evaluated after the bird's integration and after pipe
/// advancement/removal in the same tick, so the result reflects the
/// post-update world state.
pub fn check_collision(bird: &Bird, pipes: &[Pipe], tuning: &Tuning) -> bool {
    let bounds = bird.bounds();

    // Ground: resting exactly on the line counts as a crash
    if bounds.max.y >= tuning.ground_y() {
        return true;
    }

    // Ceiling
    if bounds.min.y < 0.0 {
        return true;
    }

    pipes.iter().any(|pipe| {
        bounds.intersects(&pipe.top_bounds(tuning)) || bounds.intersects(&pipe.bottom_bounds(tuning))
    })
}
