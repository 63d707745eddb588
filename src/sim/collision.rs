//! Wall bounces and explosion absorption
//!
//! Every ball has the same radius, so wall collision is done on the center
//! point against the arena inset by one radius.

use super::state::{Ball, Cascade, Explosion, SimParams};
use crate::math::Vec2;

/// Reflect `dir` about the inward `normal` if it is heading into the wall.
///
/// Returns whether the direction changed. A ball already moving away is left
/// alone so it cannot get stuck flipping back and forth on the edge.
#[inline]
pub fn reflect_off(dir: &mut Vec2, normal: Vec2) -> bool {
    if dir.dot(normal) < 0.0 {
        dir.reflect(normal);
        true
    } else {
        false
    }
}

/// Bounce a ball off the inset arena walls, clamping it back onto the inset
/// box. Returns whether any wall was hit.
pub fn bounce_off_walls(ball: &mut Ball, params: &SimParams) -> bool {
    let r = params.ball_radius;
    let max_x = params.arena_width - r;
    let max_y = params.arena_height - r;
    let mut hit = false;

    if ball.pos.x < r {
        hit |= reflect_off(&mut ball.dir, Vec2::new(1.0, 0.0));
        ball.pos.x = r;
    } else if ball.pos.x > max_x {
        hit |= reflect_off(&mut ball.dir, Vec2::new(-1.0, 0.0));
        ball.pos.x = max_x;
    }

    if ball.pos.y < r {
        hit |= reflect_off(&mut ball.dir, Vec2::new(0.0, 1.0));
        ball.pos.y = r;
    } else if ball.pos.y > max_y {
        hit |= reflect_off(&mut ball.dir, Vec2::new(0.0, -1.0));
        ball.pos.y = max_y;
    }

    hit
}

/// Turn every ball touching an explosion into a new explosion.
///
/// Explosions are visited in order and each one checks all balls that are
/// still alive, so one ball is absorbed at most once. New explosions are
/// appended to `explosions`; with [`Cascade::SameStep`] they are visited later
/// in this same pass. Absorbed balls are marked first and compacted at the
/// end, keeping the survivors in order.
///
/// Returns the number of balls absorbed.
pub fn absorb(
    balls: &mut Vec<Ball>,
    explosions: &mut Vec<Explosion>,
    ball_radius: f32,
    cascade: Cascade,
) -> usize {
    let mut alive = vec![true; balls.len()];
    let mut absorbed = 0;

    // O(explosions * balls), fine at this scale
    let frozen = (cascade == Cascade::NextStep).then_some(explosions.len());
    let mut i = 0;
    while i < frozen.unwrap_or(explosions.len()) {
        let ex = explosions[i];
        let reach2 = ex.reach_squared(ball_radius);
        for (ball, live) in balls.iter().zip(alive.iter_mut()) {
            if *live && ball.pos.dist_squared(ex.pos) < reach2 {
                *live = false;
                explosions.push(Explosion::new(ball.pos));
                absorbed += 1;
            }
        }
        i += 1;
    }

    if absorbed > 0 {
        let mut flags = alive.into_iter();
        balls.retain(|_| flags.next().unwrap_or(true));
    }
    absorbed
}
