//! Game state and core simulation types
//!
//! Everything a renderer needs for one frame lives in [`GameState`]. The
//! engine replaces the whole value on every tick.

use anyhow::{Result, ensure};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::settings::EngineConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    #[default]
    Running,
    /// Ball left through the bottom; frozen until restart
    GameOver,
}

/// Something that happened during a tick (for sound/effects, never read back by the sim)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    PaddleBounce,
    BrickDestroyed { row: usize, col: usize },
    GameOver,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the configured serve position and velocity
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            pos: config.ball_start,
            vel: config.ball_velocity,
            radius: config.ball_radius,
        }
    }

    /// Position one tick ahead, before any reflection
    pub fn candidate(&self) -> Vec2 {
        self.pos + self.vel
    }
}

/// A single brick. Only `destroyed` ever changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub destroyed: bool,
}

impl Brick {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            destroyed: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// True when a live brick strictly contains `point`
    pub fn is_hit_by(&self, point: Vec2) -> bool {
        !self.destroyed && self.rect().contains_strict(point)
    }
}

/// Fixed R x C grid of bricks, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBrickGrid")]
pub struct BrickGrid {
    rows: usize,
    cols: usize,
    bricks: Vec<Brick>,
}

/// Unchecked wire form of [`BrickGrid`]
#[derive(Deserialize)]
struct RawBrickGrid {
    rows: usize,
    cols: usize,
    bricks: Vec<Brick>,
}

impl TryFrom<RawBrickGrid> for BrickGrid {
    type Error = anyhow::Error;

    fn try_from(raw: RawBrickGrid) -> Result<Self> {
        let grid = Self {
            rows: raw.rows,
            cols: raw.cols,
            bricks: raw.bricks,
        };
        grid.validate()?;
        Ok(grid)
    }
}

impl BrickGrid {
    /// Build a full, undamaged grid anchored at the field origin
    pub fn new(config: &EngineConfig) -> Self {
        let size = Vec2::new(config.brick_width, config.brick_height);
        let mut bricks = Vec::with_capacity(config.brick_rows * config.brick_cols);
        for row in 0..config.brick_rows {
            for col in 0..config.brick_cols {
                let pos = Vec2::new(col as f32 * size.x, row as f32 * size.y);
                bricks.push(Brick::new(pos, size));
            }
        }
        Self {
            rows: config.brick_rows,
            cols: config.brick_cols,
            bricks,
        }
    }

    /// Grid from explicit bricks (row-major, `rows * cols` long)
    #[cfg(test)]
    pub(crate) fn from_bricks(rows: usize, cols: usize, bricks: Vec<Brick>) -> Self {
        assert_eq!(bricks.len(), rows * cols);
        Self { rows, cols, bricks }
    }

    /// Non-empty and exactly `rows * cols` bricks
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.rows > 0 && self.cols > 0,
            "brick grid must have at least one row and column, got {}x{}",
            self.rows,
            self.cols
        );
        ensure!(
            self.bricks.len() == self.rows * self.cols,
            "brick grid {}x{} holds {} bricks",
            self.rows,
            self.cols,
            self.bricks.len()
        );
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.bricks.get(row * self.cols + col)
    }

    /// Bricks in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    /// Live bricks remaining
    pub fn remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.destroyed).count()
    }

    /// Index of the first live brick (row-major) strictly containing `point`
    pub fn first_hit(&self, point: Vec2) -> Option<usize> {
        self.bricks.iter().position(|b| b.is_hit_by(point))
    }

    /// (row, col) for a flat index
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// Mark a brick destroyed. Destroyed bricks stay destroyed.
    pub(crate) fn destroy(&mut self, index: usize) {
        if let Some(brick) = self.bricks.get_mut(index) {
            brick.destroyed = true;
        }
    }
}

/// Complete game snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub bricks: BrickGrid,
    /// Paddle left edge, always within `[0, field_width - paddle_width]`
    pub paddle_x: f32,
    pub ball: Ball,
    pub score: u64,
    pub phase: GamePhase,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    /// Events from the most recent tick that ran
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh game: full grid, centered paddle, ball at its serve position
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            bricks: BrickGrid::new(config),
            paddle_x: config.paddle_center_x(),
            ball: Ball::new(config),
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Serialize for presentation layers that consume JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
