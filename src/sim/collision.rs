//! Collision tests for the rectangular field
//!
//! The ball is a circle only for the walls (its radius shrinks the playable
//! area). Paddle and brick tests use the ball center as a point. Every test
//! takes the candidate position so reflections land one tick early.

use glam::Vec2;

use crate::settings::EngineConfig;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Open-interval containment on both axes
    pub fn contains_strict(&self, point: Vec2) -> bool {
        point.x > self.min.x && point.x < self.max.x && point.y > self.min.y && point.y < self.max.y
    }
}

/// Which boundaries the candidate position crosses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub side: bool,
    pub top: bool,
    pub bottom: bool,
}

/// Check the candidate position against the field boundaries
pub fn wall_hits(candidate: Vec2, radius: f32, config: &EngineConfig) -> WallHits {
    WallHits {
        side: candidate.x < radius || candidate.x > config.field_width - radius,
        top: candidate.y < radius,
        bottom: candidate.y > config.field_height - radius,
    }
}

/// Paddle catch: candidate y past the contact line while the *current* x is
/// strictly inside the paddle span
pub fn paddle_catch(
    current_x: f32,
    candidate_y: f32,
    radius: f32,
    paddle_x: f32,
    config: &EngineConfig,
) -> bool {
    candidate_y > config.paddle_y - radius
        && current_x > paddle_x
        && current_x < paddle_x + config.paddle_width
}
