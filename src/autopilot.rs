//! Demo autopilot
//!
//! Chases the ball with discrete paddle commands, one per tick, the same way
//! a player tapping the arrow keys would.

use crate::input::{Command, Direction};
use crate::settings::EngineConfig;
use crate::sim::{GamePhase, GameState};

/// Pick a paddle command for this tick, or `None` to hold still
pub fn next_command(state: &GameState, config: &EngineConfig) -> Option<Command> {
    if state.phase == GamePhase::GameOver {
        return None;
    }

    // Aim at where the ball will be next tick
    let target = state.ball.candidate().x;
    let center = state.paddle_x + config.paddle_width / 2.0;
    let deadzone = config.paddle_step / 2.0;

    let direction = if target < center - deadzone {
        Direction::Left
    } else if target > center + deadzone {
        Direction::Right
    } else {
        return None;
    };
    Some(Command::MovePaddle { direction })
}
