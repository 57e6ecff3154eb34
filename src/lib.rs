//! Sky Hopper - a side-scrolling flap-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `platform`: Host tick-loop abstraction with cancellation
//! - `tuning`: Data-driven game balance, fixed at startup
//!
//! Rendering and UI chrome live outside this crate; they consume the
//! read-only snapshot exposed by [`sim::GameState::snapshot`].

pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Nominal tick rate (one tick per rendered frame)
    pub const TICK_HZ: u32 = 60;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    pub const GROUND_HEIGHT: f32 = 100.0;

    /// Bird defaults
    pub const BIRD_SIZE: f32 = 34.0;
    pub const BIRD_X: f32 = 100.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a flap (negative = upward)
    pub const FLAP_IMPULSE: f32 = -9.0;

    /// Pipe defaults
    pub const PIPE_SPEED: f32 = 2.5;
    pub const PIPE_GAP: f32 = 160.0;
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_SPAWN_INTERVAL_TICKS: u64 = 90;
    /// Minimum distance from the gap center to the playable-area edges,
    /// keeping both pipe segments at a positive height
    pub const GAP_MARGIN: f32 = 150.0;

    /// Visual tilt derived from vertical velocity
    pub const TILT_PER_VELOCITY: f32 = 3.0;
    pub const TILT_MIN_DEGREES: f32 = -30.0;
    pub const TILT_MAX_DEGREES: f32 = 90.0;
}
