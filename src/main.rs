//! Breakout headless runner
//!
//! Drives the simulation without a renderer. Useful for checking configs and
//! watching the engine through its logs (`RUST_LOG=debug`).

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};
use clap::Parser;

use breakout::sim::{Engine, GameEvent, GamePhase};
use breakout::{EngineConfig, autopilot};

#[derive(Debug, Parser)]
#[command(name = "breakout", about = "Run the Breakout simulation headless")]
struct Args {
    /// JSON engine config (defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum ticks to simulate
    #[arg(long, default_value_t = 10_000)]
    ticks: u64,

    /// Pace ticks against the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Leave the paddle where it starts
    #[arg(long)]
    no_autopilot: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.ticks > 0, "--ticks must be > 0");

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    log::info!("Breakout (headless) starting...");

    let mut engine = Engine::new(config);
    if args.realtime {
        run_realtime(&mut engine, &args);
    } else {
        run_flat_out(&mut engine, &args);
    }

    let state = engine.snapshot();
    let phase = match state.phase {
        GamePhase::Running => "running",
        GamePhase::GameOver => "game over",
    };
    println!(
        "ticks: {}  score: {}  bricks left: {}/{}  phase: {}",
        state.time_ticks,
        state.score,
        state.bricks.remaining(),
        state.bricks.rows() * state.bricks.cols(),
        phase
    );
    if args.json {
        println!("{}", state.to_json().context("failed to serialize snapshot")?);
    }
    Ok(())
}

fn steer(engine: &mut Engine, args: &Args) {
    // One pending move at a time; a frame may run zero ticks
    if args.no_autopilot || engine.pending_commands() > 0 {
        return;
    }
    if let Some(command) = autopilot::next_command(engine.snapshot(), engine.config()) {
        engine.queue_command(command);
    }
}

fn log_events(engine: &Engine) {
    for event in &engine.snapshot().events {
        if let GameEvent::BrickDestroyed { row, col } = event {
            log::debug!("Tick {}: brick ({row}, {col})", engine.snapshot().time_ticks);
        }
    }
}

fn run_flat_out(engine: &mut Engine, args: &Args) {
    while engine.snapshot().time_ticks < args.ticks && engine.phase() == GamePhase::Running {
        steer(engine, args);
        engine.advance();
        log_events(engine);
    }
}

fn run_realtime(engine: &mut Engine, args: &Args) {
    let frame = Duration::from_secs_f32(engine.config().tick_interval);
    let mut last = Instant::now();
    while engine.snapshot().time_ticks < args.ticks && engine.phase() == GamePhase::Running {
        thread::sleep(frame);
        let now = Instant::now();
        let elapsed = now.duration_since(last).as_secs_f32();
        last = now;

        steer(engine, args);
        let ran = engine.run_for(elapsed);
        if ran > 1 {
            log::trace!("Caught up {ran} ticks");
        }
        log_events(engine);
    }
}
