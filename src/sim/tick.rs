//! Fixed timestep simulation step
//!
//! Advances the chain reaction deterministically. `dt` is in milliseconds.

use super::collision::{absorb, bounce_off_walls};
use super::state::ChainReaction;
use crate::math::Vec2;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer click in arena coordinates (one-shot)
    pub click: Option<Vec2>,
    /// Start a new round as soon as everything is gone
    pub auto_restart: bool,
}

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// Balls that bounced off a wall
    pub bounces: usize,
    /// Explosions that grew past the maximum radius and were removed
    pub expired: usize,
    /// Balls absorbed (each one spawned a new explosion)
    pub absorbed: usize,
    /// The click was turned into an explosion
    pub admitted: bool,
    /// A new round was started
    pub restarted: bool,
}

/// Advance the simulation by `dt` milliseconds
///
/// Order matters: move, bounce, grow,
/// expire, then absorb.
pub fn step(state: &mut ChainReaction, dt: f32) -> StepEvents {
    let params = state.params;
    let mut events = StepEvents::default();

    let travel = dt / params.speed_divisor;
    for ball in &mut state.balls {
        ball.pos += ball.dir * travel;
    }

    for ball in &mut state.balls {
        if bounce_off_walls(ball, &params) {
            events.bounces += 1;
        }
    }

    let growth = dt / params.growth_divisor;
    for ex in &mut state.explosions {
        ex.radius += growth;
    }

    let before = state.explosions.len();
    state
        .explosions
        .retain(|ex| ex.radius <= params.explosion_max_radius);
    events.expired = before - state.explosions.len();

    events.absorbed = absorb(
        &mut state.balls,
        &mut state.explosions,
        params.ball_radius,
        params.cascade,
    );
    if events.absorbed > 0 {
        state.absorbed += events.absorbed as u32;
        log::debug!(
            "tick {}: absorbed {} ({} balls left, {} explosions)",
            state.time_ticks,
            events.absorbed,
            state.balls.len(),
            state.explosions.len()
        );
    }

    state.time_ticks += 1;
    events
}

/// One frame of the sketch: handle the click, step, then restart if the
/// round is over and the host asked for it
pub fn tick(state: &mut ChainReaction, input: &TickInput, dt: f32) -> StepEvents {
    let admitted = match input.click {
        Some(at) => state.trigger(at),
        None => false,
    };

    let mut events = step(state, dt);
    events.admitted = admitted;

    if input.auto_restart && state.is_finished() {
        state.restart();
        events.restarted = true;
    }
    events
}
