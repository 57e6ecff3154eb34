//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only, one per rendered frame
//! - Seeded RNG only
//! - Stable obstacle order (spawn order, oldest first)
//! - No rendering or platform dependencies

pub mod bird;
pub mod collision;
pub mod pipe;
pub mod state;
pub mod tick;

pub use bird::Bird;
pub use collision::{Aabb, check_collision};
pub use pipe::Pipe;
pub use state::{BirdView, GamePhase, GameState, PipeView, Snapshot};
pub use tick::{TickInput, tick};
