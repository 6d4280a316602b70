//! Breakout - a single-screen brick breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, collisions, scoring, game over)
//! - `settings`: Construction-time engine parameters
//! - `input`: Paddle/restart commands and key mapping
//! - `autopilot`: Demo controller that plays from a snapshot
//!
//! Rendering and input listeners live outside this crate. They push
//! [`input::Command`]s into an [`sim::Engine`] and read back a
//! [`sim::GameState`] snapshot once per frame.

pub mod autopilot;
pub mod input;
pub mod settings;
pub mod sim;

pub use input::{Command, Direction};
pub use settings::EngineConfig;
pub use sim::{Engine, GamePhase, GameState};

/// Default game configuration constants
pub mod consts {
    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Brick grid
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_WIDTH: f32 = 50.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Points per destroyed brick
    pub const BRICK_REWARD: u64 = 10;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Contact line the ball is tested against (20px above the field bottom)
    pub const PADDLE_Y: f32 = 580.0;
    /// Horizontal displacement per move command
    pub const PADDLE_STEP: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = 300.0;
    pub const BALL_START_Y: f32 = 400.0;
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = -2.0;

    /// Fixed simulation timestep (100 Hz)
    pub const TICK_INTERVAL: f32 = 0.01;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Default largest frame delta fed into the accumulator
    pub const MAX_FRAME_DT: f32 = 0.1;
}
