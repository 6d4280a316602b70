//! Engine-level invariants exercised through the public API.

use breakout::sim::{Engine, GameEvent, GamePhase, GameState};
use breakout::{Command, Direction, EngineConfig, autopilot};
use glam::Vec2;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Left,
    Right,
    Advance,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Left), Just(Op::Right), Just(Op::Advance)]
}

fn apply(engine: &mut Engine, op: Op) {
    match op {
        Op::Left => engine.move_paddle(Direction::Left),
        Op::Right => engine.move_paddle(Direction::Right),
        Op::Advance => engine.advance(),
    }
}

fn velocity_component() -> impl Strategy<Value = f32> {
    prop_oneof![-6i32..=-1, 1i32..=6].prop_map(|v| v as f32)
}

/// Engine with the ball dropped somewhere inside the field
fn engine_with_ball(x: f32, y: f32, dx: f32, dy: f32) -> Engine {
    let config = EngineConfig::default();
    let mut state = GameState::new(&config);
    state.ball.pos = Vec2::new(x, y);
    state.ball.vel = Vec2::new(dx, dy);
    Engine::with_state(config, state).expect("ball placed inside the field")
}

fn destroyed_flags(state: &GameState) -> Vec<bool> {
    state.bricks.iter().map(|b| b.destroyed).collect()
}

proptest! {
    #[test]
    fn paddle_stays_in_field(ops in prop::collection::vec(op(), 0..300)) {
        let mut engine = Engine::default();
        let max_x = engine.config().field_width - engine.config().paddle_width;
        for op in ops {
            apply(&mut engine, op);
            let x = engine.snapshot().paddle_x;
            prop_assert!((0.0..=max_x).contains(&x), "paddle_x {} out of range", x);
        }
    }

    #[test]
    fn bricks_and_score_only_move_forward(
        x in 20i32..580,
        y in 20i32..500,
        dx in velocity_component(),
        dy in velocity_component(),
        ops in prop::collection::vec(op(), 0..400),
    ) {
        let mut engine = engine_with_ball(x as f32, y as f32, dx, dy);
        let reward = engine.config().brick_reward;

        for op in ops {
            let before = engine.snapshot().clone();
            apply(&mut engine, op);
            let after = engine.snapshot();

            let was = destroyed_flags(&before);
            let now = destroyed_flags(after);
            let mut newly = 0u64;
            for (old, new) in was.iter().zip(&now) {
                prop_assert!(!(*old && !*new), "a destroyed brick came back");
                if !*old && *new {
                    newly += 1;
                }
            }
            prop_assert!(newly <= 1, "more than one brick destroyed in a tick");
            prop_assert_eq!(after.score, before.score + newly * reward);
        }
    }

    #[test]
    fn game_over_freezes_state(
        x in 20i32..580,
        dx in velocity_component(),
        extra in 1usize..50,
    ) {
        // Paddle parked in the far corner so the ball falls past it
        let mut engine = engine_with_ball(x as f32, 585.0, dx, 6.0);
        for _ in 0..30 {
            engine.move_paddle(if x < 300 { Direction::Right } else { Direction::Left });
        }
        engine.advance();
        prop_assert_eq!(engine.phase(), GamePhase::GameOver);

        let frozen = engine.snapshot().clone();
        for _ in 0..extra {
            engine.advance();
            engine.move_paddle(Direction::Left);
        }
        prop_assert_eq!(engine.snapshot(), &frozen);
    }

    #[test]
    fn restart_returns_initial_snapshot(ops in prop::collection::vec(op(), 0..500)) {
        let mut engine = Engine::default();
        let initial = engine.snapshot().clone();
        for op in ops {
            apply(&mut engine, op);
        }
        engine.restart();
        prop_assert_eq!(engine.snapshot(), &initial);
    }
}

#[test]
fn first_tick_without_input() {
    let mut engine = Engine::default();
    assert_eq!(engine.snapshot().paddle_x, 250.0);

    engine.advance();
    let state = engine.snapshot();
    assert_eq!(state.ball.pos, Vec2::new(302.0, 398.0));
    assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
    assert_eq!(state.score, 0);
    assert!(state.events.is_empty());
}

#[test]
fn ball_missing_paddle_ends_game_in_place() {
    let mut engine = engine_with_ball(50.0, 589.0, 2.0, 2.0);
    let before = engine.snapshot().ball;

    engine.advance();
    let state = engine.snapshot();
    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.ball, before);
    assert!(state.events.contains(&GameEvent::GameOver));
}

#[test]
fn key_events_drive_the_paddle() {
    let mut engine = Engine::default();
    for key in ["ArrowLeft", "ArrowLeft", "Space", "ArrowRight"] {
        if let Some(command) = Command::from_key(key) {
            engine.queue_command(command);
        }
    }
    engine.advance();
    assert_eq!(engine.snapshot().paddle_x, 230.0);
}

/// Ticks until the game ends, or `None` if it is still running after `limit`
fn ticks_until_game_over(engine: &mut Engine, limit: u64, steer: bool) -> Option<u64> {
    for _ in 0..limit {
        if steer {
            if let Some(command) = autopilot::next_command(engine.snapshot(), engine.config()) {
                engine.queue_command(command);
            }
        }
        engine.advance();
        if engine.phase() == GamePhase::GameOver {
            return Some(engine.snapshot().time_ticks);
        }
    }
    None
}

#[test]
fn autopilot_keeps_the_ball_alive() {
    let mut idle = Engine::default();
    let idle_end = ticks_until_game_over(&mut idle, 20_000, false)
        .expect("an unsteered ball should eventually fall past the paddle");

    let mut engine = Engine::default();
    assert_eq!(ticks_until_game_over(&mut engine, 20_000, true), None);
    assert!(engine.snapshot().time_ticks > idle_end);

    let state = engine.snapshot();
    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.time_ticks, 20_000);
    assert!(state.score > 0);
    assert_eq!(
        state.score,
        (state.bricks.rows() * state.bricks.cols() - state.bricks.remaining()) as u64
            * engine.config().brick_reward
    );
}

#[test]
fn resumed_snapshot_is_checked_against_config() {
    let config = EngineConfig::default();
    let mut state = GameState::new(&config);
    state.paddle_x = 900.0;
    let engine =
        Engine::with_state(config.clone(), state).expect("paddle is clamped, not rejected");
    assert_eq!(engine.snapshot().paddle_x, 500.0);

    let mut json: serde_json::Value =
        serde_json::from_str(&GameState::new(&config).to_json().unwrap()).unwrap();
    json["bricks"]["cols"] = 0.into();
    assert!(serde_json::from_value::<GameState>(json).is_err());
}
