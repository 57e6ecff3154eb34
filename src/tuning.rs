//! Data-driven game balance
//!
//! All gameplay constants live in a single [`Tuning`] value, fixed at startup
//! and never mutated at runtime. Tests inject their own values (huge spawn
//! intervals, tight gaps) instead of patching globals.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts;

/// A rejected tuning value
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// World too small for the configured ground thickness
    NoPlayableArea,
    /// Gap margin leaves a pipe segment with non-positive height
    GapMarginTooSmall,
    /// Gap margins overlap; no room to place a gap center
    GapMarginTooLarge,
    /// A size or speed that must be positive is not
    NonPositive(&'static str),
    /// Flap impulse must point upward (negative velocity)
    ImpulseNotUpward,
    /// Spawn interval of zero would spawn a pipe every tick forever
    ZeroSpawnInterval,
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::NoPlayableArea => write!(f, "ground height consumes the whole world"),
            TuningError::GapMarginTooSmall => {
                write!(f, "gap margin must exceed half the gap height")
            }
            TuningError::GapMarginTooLarge => {
                write!(f, "gap margins leave no room for a gap center")
            }
            TuningError::NonPositive(name) => write!(f, "{name} must be positive"),
            TuningError::ImpulseNotUpward => write!(f, "flap impulse must be negative (upward)"),
            TuningError::ZeroSpawnInterval => write!(f, "spawn interval must be at least 1 tick"),
        }
    }
}

impl std::error::Error for TuningError {}

/// Gameplay constants, fixed at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub world_width: f32,
    pub world_height: f32,
    pub ground_height: f32,
    pub bird_size: f32,
    pub bird_x: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Velocity set by a flap (negative = upward)
    pub flap_impulse: f32,
    pub pipe_speed: f32,
    pub pipe_gap: f32,
    pub pipe_width: f32,
    pub spawn_interval_ticks: u64,
    /// Minimum distance from the gap center to the playable-area edges
    pub gap_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: consts::WORLD_WIDTH,
            world_height: consts::WORLD_HEIGHT,
            ground_height: consts::GROUND_HEIGHT,
            bird_size: consts::BIRD_SIZE,
            bird_x: consts::BIRD_X,
            gravity: consts::GRAVITY,
            flap_impulse: consts::FLAP_IMPULSE,
            pipe_speed: consts::PIPE_SPEED,
            pipe_gap: consts::PIPE_GAP,
            pipe_width: consts::PIPE_WIDTH,
            spawn_interval_ticks: consts::PIPE_SPAWN_INTERVAL_TICKS,
            gap_margin: consts::GAP_MARGIN,
        }
    }
}

impl Tuning {
    /// Height of the playable area (above the ground)
    #[inline]
    pub fn playable_height(&self) -> f32 {
        self.world_height - self.ground_height
    }

    /// Y coordinate of the ground top line
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.world_height - self.ground_height
    }

    /// Reject constant combinations that would break simulation invariants.
    ///
    /// A valid tuning guarantees every spawned pipe has two segments of
    /// strictly positive height, so every run is solvable.
    pub fn validate(&self) -> Result<(), TuningError> {
        for (name, value) in [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("ground_height", self.ground_height),
            ("bird_size", self.bird_size),
            ("gravity", self.gravity),
            ("pipe_speed", self.pipe_speed),
            ("pipe_gap", self.pipe_gap),
            ("pipe_width", self.pipe_width),
            ("gap_margin", self.gap_margin),
        ] {
            if value <= 0.0 {
                return Err(TuningError::NonPositive(name));
            }
        }
        if self.playable_height() <= 0.0 {
            return Err(TuningError::NoPlayableArea);
        }
        if self.flap_impulse >= 0.0 {
            return Err(TuningError::ImpulseNotUpward);
        }
        if self.spawn_interval_ticks == 0 {
            return Err(TuningError::ZeroSpawnInterval);
        }
        // Gap centers are drawn from [margin, playable - margin); both bounds
        // must leave the near segment with positive height, and the range
        // itself must be non-empty.
        if self.gap_margin <= self.pipe_gap / 2.0 {
            return Err(TuningError::GapMarginTooSmall);
        }
        if self.gap_margin * 2.0 >= self.playable_height() {
            return Err(TuningError::GapMarginTooLarge);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn default_gap_bounds_leave_room() {
        let t = Tuning::default();
        assert_eq!(t.gap_margin, 150.0);
        assert_eq!(t.playable_height() - t.gap_margin, 350.0);
    }

    #[test]
    fn rejects_margin_inside_gap() {
        let t = Tuning {
            gap_margin: 80.0, // exactly half the 160 gap
            ..Tuning::default()
        };
        assert_eq!(t.validate(), Err(TuningError::GapMarginTooSmall));
    }

    #[test]
    fn rejects_overlapping_margins() {
        let t = Tuning {
            gap_margin: 250.0,
            ..Tuning::default()
        };
        assert_eq!(t.validate(), Err(TuningError::GapMarginTooLarge));
    }

    #[test]
    fn rejects_downward_impulse() {
        let t = Tuning {
            flap_impulse: 9.0,
            ..Tuning::default()
        };
        assert_eq!(t.validate(), Err(TuningError::ImpulseNotUpward));
    }

    #[test]
    fn rejects_zero_spawn_interval() {
        let t = Tuning {
            spawn_interval_ticks: 0,
            ..Tuning::default()
        };
        assert_eq!(t.validate(), Err(TuningError::ZeroSpawnInterval));
    }
}
