//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (row-major brick scan)
//! - No rendering, input or platform dependencies

pub mod clock;
pub mod collision;
pub mod engine;
pub mod state;
pub mod tick;

pub use clock::FixedStep;
pub use collision::{Rect, WallHits, paddle_catch, wall_hits};
pub use engine::Engine;
pub use state::{Ball, Brick, BrickGrid, GameEvent, GamePhase, GameState};
pub use tick::tick;
