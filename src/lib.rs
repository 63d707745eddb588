//! Chain Reaction - small vector/matrix math plus a click-to-explode sketch
//!
//! Core modules:
//! - `math`: `Vec2`/`Vec3`/`Vec4`, `Mat3`/`Mat4` and scalar helpers
//! - `sim`: Deterministic simulation (balls, explosions, absorption)
//! - `renderer`: Canvas and GL upload seams, vertex generation
//! - `sketch`: Frame driver with a fixed timestep accumulator
//! - `settings`: JSON-backed configuration

pub mod math;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod sketch;

pub use math::{Mat3, Mat4, Vec2, Vec3, Vec4};
pub use settings::{Settings, SettingsError, SettingsResult};
pub use sim::{ChainReaction, SimParams};
pub use sketch::Sketch;

/// Sketch configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz)
    pub const FRAME_DT_MS: f32 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame gap fed to the accumulator, e.g. after a stalled tab
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 300.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_COUNT: usize = 30;
    pub const BALL_ALPHA: u8 = 128;
    /// Balls travel `dt / SPEED_DIVISOR` units per step
    pub const SPEED_DIVISOR: f32 = 5.0;

    /// Explosion defaults
    pub const EXPLOSION_MAX_RADIUS: f32 = 30.0;
    /// Explosions grow `dt / GROWTH_DIVISOR` units per step
    pub const GROWTH_DIVISOR: f32 = 20.0;
}
