//! Simulation engine
//!
//! `Engine` owns the config and the current snapshot. Commands either apply
//! immediately or wait in a queue until the next tick boundary; a tick never
//! sees the paddle move underneath it.

use std::collections::VecDeque;

use anyhow::{Result, ensure};

use super::clock::FixedStep;
use super::state::{GamePhase, GameState};
use super::tick::tick;
use crate::input::{Command, Direction};
use crate::settings::EngineConfig;

/// The simulation engine. Owns all game state.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    state: GameState,
    command_queue: VecDeque<Command>,
    clock: FixedStep,
}

impl Engine {
    /// Create an engine with a fresh game
    pub fn new(config: EngineConfig) -> Self {
        let state = GameState::new(&config);
        log::info!(
            "Engine created: {}x{} field, {}x{} bricks",
            config.field_width,
            config.field_height,
            config.brick_rows,
            config.brick_cols
        );
        Self::from_parts(config, state)
    }

    /// Resume from an existing snapshot (e.g. one deserialized by a front end).
    ///
    /// The grid must match the configured layout and the ball must be finite.
    /// An out-of-range paddle is clamped back into the field.
    pub fn with_state(config: EngineConfig, mut state: GameState) -> Result<Self> {
        state.bricks.validate()?;
        ensure!(
            state.bricks.rows() == config.brick_rows && state.bricks.cols() == config.brick_cols,
            "snapshot grid is {}x{}, config expects {}x{}",
            state.bricks.rows(),
            state.bricks.cols(),
            config.brick_rows,
            config.brick_cols
        );
        ensure!(
            state.ball.pos.is_finite() && state.ball.vel.is_finite(),
            "snapshot ball is not finite: pos {}, vel {}",
            state.ball.pos,
            state.ball.vel
        );
        ensure!(
            state.paddle_x.is_finite(),
            "snapshot paddle_x is not finite: {}",
            state.paddle_x
        );

        let clamped = state.paddle_x.clamp(0.0, config.paddle_max_x());
        if clamped != state.paddle_x {
            log::warn!("Snapshot paddle_x {} clamped to {}", state.paddle_x, clamped);
            state.paddle_x = clamped;
        }
        Ok(Self::from_parts(config, state))
    }

    fn from_parts(config: EngineConfig, state: GameState) -> Self {
        let clock = FixedStep::new(
            config.tick_interval,
            config.max_substeps,
            config.max_frame_dt,
        );
        Self {
            config,
            state,
            command_queue: VecDeque::new(),
            clock,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current fully-settled snapshot
    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Back to the initial snapshot. Pending commands are dropped.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config);
        self.command_queue.clear();
        self.clock.reset();
    }

    /// Restart command
    pub fn restart(&mut self) {
        log::info!("Game restarted (previous score {})", self.state.score);
        self.reset();
    }

    /// Shift the paddle one step, clamped to the field. Ignored after game over.
    pub fn move_paddle(&mut self, direction: Direction) {
        if self.state.phase == GamePhase::GameOver {
            return;
        }
        let target = self.state.paddle_x + direction.sign() * self.config.paddle_step;
        self.state.paddle_x = target.clamp(0.0, self.config.paddle_max_x());
        log::trace!("Paddle {:?} -> {}", direction, self.state.paddle_x);
    }

    /// Apply a command immediately
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MovePaddle { direction } => self.move_paddle(direction),
            Command::Restart => self.restart(),
        }
    }

    /// Queue a command for processing at the next tick boundary
    pub fn queue_command(&mut self, command: Command) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.command_queue.extend(commands);
    }

    /// Commands still waiting for a tick boundary
    pub fn pending_commands(&self) -> usize {
        self.command_queue.len()
    }

    /// Drain queued commands, then run one tick
    pub fn advance(&mut self) {
        self.process_commands();
        self.state = tick(&self.state, &self.config);
    }

    /// Run as many ticks as `elapsed` seconds allow (bounded per call).
    /// Returns the number of ticks run.
    pub fn run_for(&mut self, elapsed: f32) -> u32 {
        let due = self.clock.advance(elapsed);
        let mut ran = 0;
        while ran < due {
            // A queued restart still gets its tick
            if self.state.phase == GamePhase::GameOver && self.command_queue.is_empty() {
                self.clock.reset();
                break;
            }
            self.advance();
            ran += 1;
        }
        ran
    }

    fn process_commands(&mut self) {
        // Commands queued behind a restart still apply to the new game
        for command in std::mem::take(&mut self.command_queue) {
            self.apply(command);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
