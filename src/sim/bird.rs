//! The player-controlled bird
//!
//! Vertical motion only: gravity accumulates into velocity each tick, a flap
//! overrides velocity with a fixed upward impulse. The bird never clamps its
//! own position; leaving the playable range is detected by the collision
//! check, not prevented here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Horizontal position, constant for the bird's lifetime
    pub x: f32,
    pub y: f32,
    /// Vertical velocity, positive = downward
    pub velocity: f32,
    /// Collision box side length (visual diameter)
    pub size: f32,
}

impl Bird {
    /// Spawn at the vertical center of the world, at rest
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.bird_x,
            y: tuning.world_height / 2.0,
            velocity: 0.0,
            size: tuning.bird_size,
        }
    }

    /// Advance one tick under gravity
    pub fn integrate(&mut self, tuning: &Tuning) {
        self.velocity += tuning.gravity;
        self.y += self.velocity;
    }

    /// Set velocity to the flap impulse, unconditionally.
    ///
    /// There is no cooldown and no accumulation; rapid repeated flaps just
    /// keep resetting velocity to the same upward value.
    pub fn flap(&mut self, tuning: &Tuning) {
        self.velocity = tuning.flap_impulse;
    }

    /// Collision box centered on the bird
    pub fn bounds(&self) -> Aabb {
        Aabb::centered(Vec2::new(self.x, self.y), self.size)
    }

    /// Visual tilt in degrees, derived from velocity (presentation hint)
    pub fn tilt_degrees(&self) -> f32 {
        (self.velocity * consts::TILT_PER_VELOCITY)
            .clamp(consts::TILT_MIN_DEGREES, consts::TILT_MAX_DEGREES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_fall_matches_closed_form() {
        let t = Tuning::default();
        let mut bird = Bird::new(&t);
        let y0 = bird.y;

        for n in 1..=100u32 {
            bird.integrate(&t);
            // After n ticks from rest: v = n*g, y = y0 + g * n(n+1)/2
            let n_f = n as f32;
            let expected_v = n_f * t.gravity;
            let expected_y = y0 + t.gravity * n_f * (n_f + 1.0) / 2.0;
            assert!((bird.velocity - expected_v).abs() < 1e-3, "tick {n}");
            assert!((bird.y - expected_y).abs() < 1e-2, "tick {n}");
        }
    }

    #[test]
    fn flap_overrides_velocity() {
        let t = Tuning::default();
        let mut bird = Bird::new(&t);
        bird.velocity = 12.0;

        bird.flap(&t);
        assert_eq!(bird.velocity, t.flap_impulse);

        // Flapping again does not stack
        bird.flap(&t);
        bird.flap(&t);
        assert_eq!(bird.velocity, t.flap_impulse);
    }

    #[test]
    fn x_stays_fixed_through_motion() {
        let t = Tuning::default();
        let mut bird = Bird::new(&t);
        let x = bird.x;
        for _ in 0..50 {
            bird.integrate(&t);
        }
        bird.flap(&t);
        bird.integrate(&t);
        assert_eq!(bird.x, x);
    }

    #[test]
    fn bounds_centered_on_position() {
        let t = Tuning::default();
        let bird = Bird::new(&t);
        let b = bird.bounds();
        assert_eq!(b.min.x, bird.x - bird.size / 2.0);
        assert_eq!(b.max.x, bird.x + bird.size / 2.0);
        assert_eq!(b.min.y, bird.y - bird.size / 2.0);
        assert_eq!(b.max.y, bird.y + bird.size / 2.0);
    }

    #[test]
    fn tilt_is_clamped() {
        let t = Tuning::default();
        let mut bird = Bird::new(&t);

        bird.velocity = 0.0;
        assert_eq!(bird.tilt_degrees(), 0.0);

        // Fresh flap pins the nose up
        bird.velocity = t.flap_impulse;
        assert_eq!(bird.tilt_degrees(), -27.0);

        bird.velocity = -100.0;
        assert_eq!(bird.tilt_degrees(), -30.0);

        bird.velocity = 100.0;
        assert_eq!(bird.tilt_degrees(), 90.0);
    }
}
