//! Engine configuration
//!
//! Every dimension, speed and reward the simulation uses is fixed when the
//! engine is constructed. Configs can be loaded from JSON; missing fields
//! fall back to the defaults in [`crate::consts`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, ensure};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Fixed parameters supplied at engine construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Bricks ===
    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    /// Score added per destroyed brick
    pub brick_reward: u64,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Vertical contact line used for the catch test
    pub paddle_y: f32,
    /// Displacement per move command
    pub paddle_step: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_start: Vec2,
    pub ball_velocity: Vec2,

    // === Timing ===
    /// Seconds per tick
    pub tick_interval: f32,
    /// Cap on ticks run per `Engine::run_for` call
    pub max_substeps: u32,
    /// Longest frame delta (seconds) `Engine::run_for` credits in one call
    pub max_frame_dt: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_reward: BRICK_REWARD,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_y: PADDLE_Y,
            paddle_step: PADDLE_STEP,

            ball_radius: BALL_RADIUS,
            ball_start: Vec2::new(BALL_START_X, BALL_START_Y),
            ball_velocity: Vec2::new(BALL_START_DX, BALL_START_DY),

            tick_interval: TICK_INTERVAL,
            max_substeps: MAX_SUBSTEPS,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl EngineConfig {
    /// Rightmost legal paddle offset
    pub fn paddle_max_x(&self) -> f32 {
        (self.field_width - self.paddle_width).max(0.0)
    }

    /// Paddle offset that centers it in the field
    pub fn paddle_center_x(&self) -> f32 {
        self.paddle_max_x() / 2.0
    }

    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("invalid engine config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        log::info!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize engine config")
    }

    /// Reject configs the simulation cannot meaningfully run
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_step", self.paddle_step),
            ("ball_radius", self.ball_radius),
            ("tick_interval", self.tick_interval),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (name, value) in lengths {
            ensure!(
                value.is_finite() && value > 0.0,
                "{name} must be a positive number, got {value}"
            );
        }

        ensure!(self.brick_rows > 0, "brick_rows must be > 0");
        ensure!(self.brick_cols > 0, "brick_cols must be > 0");
        ensure!(self.max_substeps > 0, "max_substeps must be > 0");
        ensure!(
            self.paddle_width <= self.field_width,
            "paddle_width {} exceeds field_width {}",
            self.paddle_width,
            self.field_width
        );
        ensure!(
            self.paddle_y.is_finite() && self.paddle_y <= self.field_height,
            "paddle_y {} must lie within the field",
            self.paddle_y
        );

        if !self.ball_start.is_finite() || !self.ball_velocity.is_finite() {
            return Err(anyhow!("ball start position and velocity must be finite"));
        }
        let r = self.ball_radius;
        ensure!(
            self.ball_start.x >= r
                && self.ball_start.x <= self.field_width - r
                && self.ball_start.y >= r
                && self.ball_start.y <= self.field_height - r,
            "ball_start {:?} is outside the field",
            self.ball_start
        );
        ensure!(
            self.ball_velocity.x != 0.0 && self.ball_velocity.y != 0.0,
            "ball_velocity must be non-zero on both axes"
        );

        Ok(())
    }
}
