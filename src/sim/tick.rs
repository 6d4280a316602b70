//! Fixed timestep simulation tick
//!
//! `tick` is a pure function: it reads the previous snapshot and returns the
//! next one. All reflections are decided against the candidate position
//! before the ball moves.

use glam::Vec2;

use super::collision::{paddle_catch, wall_hits};
use super::state::{GameEvent, GamePhase, GameState};
use crate::settings::EngineConfig;

/// Advance the game by one tick
pub fn tick(state: &GameState, config: &EngineConfig) -> GameState {
    // Frozen until restart
    if state.phase == GamePhase::GameOver {
        return state.clone();
    }

    let mut next = state.clone();
    next.events.clear();
    next.time_ticks += 1;

    let ball = state.ball;
    let candidate = ball.candidate();

    // Each flag flips its axis at most once, however many surfaces agree
    let mut flip_x = false;
    let mut flip_y = false;

    let walls = wall_hits(candidate, ball.radius, config);
    if walls.side {
        flip_x = true;
    }
    if walls.top {
        flip_y = true;
    }
    if walls.side || walls.top {
        next.events.push(GameEvent::WallBounce);
    }

    if paddle_catch(ball.pos.x, candidate.y, ball.radius, state.paddle_x, config) {
        flip_y = true;
        next.events.push(GameEvent::PaddleBounce);
    }

    // First live brick in row-major order wins; at most one per tick
    if let Some(index) = next.bricks.first_hit(candidate) {
        let (row, col) = next.bricks.cell(index);
        next.bricks.destroy(index);
        next.score += config.brick_reward;
        flip_y = true;
        next.events.push(GameEvent::BrickDestroyed { row, col });
        log::debug!(
            "Brick ({}, {}) destroyed at tick {}, score {}",
            row,
            col,
            next.time_ticks,
            next.score
        );
    }

    // Ball fell past the paddle: keep its last valid position
    if walls.bottom {
        next.phase = GamePhase::GameOver;
        next.events.push(GameEvent::GameOver);
        log::info!(
            "Game over at tick {} with score {} ({} bricks left)",
            next.time_ticks,
            next.score,
            next.bricks.remaining()
        );
        return next;
    }

    let vel = Vec2::new(
        if flip_x { -ball.vel.x } else { ball.vel.x },
        if flip_y { -ball.vel.y } else { ball.vel.y },
    );
    next.ball.vel = vel;
    next.ball.pos = ball.pos + vel;

    next
}
