//! Deterministic simulation module
//!
//! All chain reaction logic lives here. This module must be pure and
//! deterministic:
//! - Caller-supplied `dt` only, no clocks
//! - Seeded RNG only
//! - Stable iteration order (insertion order of balls and explosions)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{absorb, bounce_off_walls, reflect_off};
pub use state::{Ball, Cascade, ChainReaction, Explosion, Rgba, RngState, SimParams};
pub use tick::{StepEvents, TickInput, step, tick};
