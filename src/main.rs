//! Headless chain reaction runner
//!
//! Drives the sketch at a steady 60 Hz without a window, recording each frame
//! into a draw list, and reports how the rounds went.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use chainreaction::consts::FRAME_DT_MS;
use chainreaction::math::Vec2;
use chainreaction::renderer::DrawList;
use chainreaction::sim::Cascade;
use chainreaction::{Settings, Sketch};

#[derive(Parser, Debug)]
#[command(name = "chainreaction", version)]
struct Cli {
    /// RNG seed (overrides the settings file; random when neither sets one).
    #[arg(long)]
    seed: Option<u64>,

    /// Number of 60 Hz frames to run.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Settings JSON. Missing or broken files fall back to defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Click at `X,Y` on the first frame.
    #[arg(long, value_parser = parse_point)]
    click: Option<Vec2>,

    /// Override the absorption cascade policy (same-step or next-step).
    #[arg(long)]
    cascade: Option<Cascade>,

    /// Never start a new round once the arena is empty.
    #[arg(long)]
    no_restart: bool,

    /// Print the final state as JSON.
    #[arg(long)]
    dump: bool,
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse::<f32>().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y = y.trim().parse::<f32>().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok(Vec2::new(x, y))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    if let Some(cascade) = cli.cascade {
        settings.sim.cascade = cascade;
    }
    if cli.no_restart {
        settings.auto_restart = false;
    }
    let seed = cli.seed.or(settings.seed).unwrap_or_else(rand::random);

    let mut sketch = Sketch::new(&settings, seed);
    if let Some(at) = cli.click {
        sketch.pointer_down(at.x, at.y);
    }

    let mut canvas = DrawList::default();
    let mut circles = 0;
    for _ in 0..cli.frames {
        sketch.update(FRAME_DT_MS);
        canvas.clear_cmds();
        sketch.draw(&mut canvas);
        circles += canvas.circles().count();
    }

    let state = &sketch.state;
    log::info!(
        "Ran {} steps: round {}, {} balls and {} explosions left, {} absorbed this round, {} circles drawn",
        sketch.steps,
        state.round,
        state.balls.len(),
        state.explosions.len(),
        state.absorbed,
        circles
    );

    if cli.dump {
        let json = state.to_json().context("serialize final state")?;
        println!("{json}");
    }
    Ok(())
}
