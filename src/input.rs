//! Player commands
//!
//! The input layer translates key events into [`Command`]s. Movement is one
//! fixed step per command, not a held-key velocity.

use serde::{Deserialize, Serialize};

/// Paddle movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Sign applied to the paddle step
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Commands accepted by the engine, applied at tick boundaries when queued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    MovePaddle { direction: Direction },
    Restart,
}

impl Command {
    /// Map a DOM-style key name to a command
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Command::MovePaddle {
                direction: Direction::Left,
            }),
            "ArrowRight" => Some(Command::MovePaddle {
                direction: Direction::Right,
            }),
            "r" | "R" => Some(Command::Restart),
            _ => None,
        }
    }
}
