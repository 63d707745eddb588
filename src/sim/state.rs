//! Chain reaction state and entity types
//!
//! Everything needed to reproduce a run lives here and is serializable.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::math::Vec2;

/// 8-bit RGBA colour, as handed to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Half-transparent orange used for every explosion
    pub const EXPLOSION: Self = Self::new(255, 140, 0, 128);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalized `[r, g, b, a]` for GPU vertex colours.
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// How explosions spawned during absorption take part in the same step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cascade {
    /// A new explosion is checked against the remaining balls later in the
    /// same step, so a tight cluster can go off in a single frame.
    #[default]
    SameStep,
    /// Only explosions that existed when absorption started are checked; new
    /// ones join from the next step on.
    NextStep,
}

impl Cascade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cascade::SameStep => "same-step",
            Cascade::NextStep => "next-step",
        }
    }
}

impl std::str::FromStr for Cascade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "same-step" | "same" => Ok(Cascade::SameStep),
            "next-step" | "next" => Ok(Cascade::NextStep),
            other => Err(format!("unknown cascade policy '{other}' (expected same-step or next-step)")),
        }
    }
}

/// Tunables for one simulation. Distances are in canvas units, `dt` in
/// milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    pub arena_width: f32,
    pub arena_height: f32,
    pub ball_count: usize,
    pub ball_radius: f32,
    /// Explosions are removed once their radius exceeds this
    pub explosion_max_radius: f32,
    /// Balls travel `dt / speed_divisor` per step
    pub speed_divisor: f32,
    /// Explosions grow `dt / growth_divisor` per step
    pub growth_divisor: f32,
    pub cascade: Cascade,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            ball_count: BALL_COUNT,
            ball_radius: BALL_RADIUS,
            explosion_max_radius: EXPLOSION_MAX_RADIUS,
            speed_divisor: SPEED_DIVISOR,
            growth_divisor: GROWTH_DIVISOR,
            cascade: Cascade::default(),
        }
    }
}

/// A bouncing ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Unit direction of travel
    pub dir: Vec2,
    pub color: Rgba,
}

impl Ball {
    pub fn new(pos: Vec2, dir: Vec2, color: Rgba) -> Self {
        Self { pos, dir, color }
    }

    /// A ball at a random whole-unit position at least two radii from every
    /// wall, heading in a random direction.
    pub fn random<R: Rng>(rng: &mut R, params: &SimParams) -> Self {
        let r = params.ball_radius;
        let pos = Vec2::new(
            irand(rng, params.arena_width - r * 4.0) + r * 2.0,
            irand(rng, params.arena_height - r * 4.0) + r * 2.0,
        );
        let dir = Vec2::new(rng.random::<f32>() - 0.5, rng.random::<f32>() - 0.5).normalized();
        // You can be unlucky and get a completely black ball
        let color = Rgba::new(
            irand(rng, 255.0) as u8,
            irand(rng, 255.0) as u8,
            irand(rng, 255.0) as u8,
            BALL_ALPHA,
        );
        Self::new(pos, dir, color)
    }
}

/// An expanding explosion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub pos: Vec2,
    pub radius: f32,
}

impl Explosion {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, radius: 0.0 }
    }

    /// Squared center distance below which a ball of `ball_radius` touches it
    #[inline]
    pub fn reach_squared(&self, ball_radius: f32) -> f32 {
        let reach = self.radius + ball_radius;
        reach * reach
    }
}

/// Whole number in `[0, max)`, as an `f32`.
fn irand<R: Rng>(rng: &mut R, max: f32) -> f32 {
    (rng.random::<f32>() * max).floor()
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainReaction {
    pub params: SimParams,
    pub rng_state: RngState,
    /// Number of restarts so far
    pub round: u32,
    /// Balls absorbed during the current round
    pub absorbed: u32,
    /// Steps taken since the state was created
    pub time_ticks: u64,
    pub balls: Vec<Ball>,
    pub explosions: Vec<Explosion>,
}

impl ChainReaction {
    /// Create a state with a freshly randomized population
    pub fn new(params: SimParams, seed: u64) -> Self {
        let mut state = Self::empty(params, seed);
        state.populate();
        state
    }

    /// Create a state with no balls and no explosions
    pub fn empty(params: SimParams, seed: u64) -> Self {
        Self {
            params,
            rng_state: RngState::new(seed),
            round: 0,
            absorbed: 0,
            time_ticks: 0,
            balls: Vec::new(),
            explosions: Vec::new(),
        }
    }

    /// Replace the balls with `params.ball_count` random ones drawn from the
    /// current RNG stream
    pub fn populate(&mut self) {
        let mut rng = self.rng_state.to_rng();
        let params = self.params;
        self.balls = (0..params.ball_count)
            .map(|_| Ball::random(&mut rng, &params))
            .collect();
    }

    /// Start another round on the next RNG stream
    pub fn restart(&mut self) {
        self.rng_state.stream = self.rng_state.stream.wrapping_add(1);
        self.round += 1;
        log::info!(
            "Round {} finished ({} absorbed), starting round {}",
            self.round - 1,
            self.absorbed,
            self.round
        );
        self.absorbed = 0;
        self.explosions.clear();
        self.populate();
    }

    /// Spawn an explosion at `at`, but only while no other explosion is
    /// active. Returns whether it was admitted.
    pub fn trigger(&mut self, at: Vec2) -> bool {
        if !self.explosions.is_empty() {
            log::debug!("Ignoring trigger at ({}), {} explosions active", at, self.explosions.len());
            return false;
        }
        log::debug!("Explosion triggered at ({})", at);
        self.explosions.push(Explosion::new(at));
        true
    }

    /// Nothing left to simulate
    pub fn is_finished(&self) -> bool {
        self.balls.is_empty() && self.explosions.is_empty()
    }

    /// Snapshot as JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
