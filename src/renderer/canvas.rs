//! 2D canvas seam
//!
//! The host owns the real canvas; the sketch only needs to clear it and fill
//! circles.

use crate::math::Vec2;
use crate::sim::{ChainReaction, Rgba};

/// Minimal immediate-mode canvas
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// One recorded canvas call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    Clear(Rgba),
    Circle { center: Vec2, radius: f32, color: Rgba },
}

/// Canvas that just records what was drawn
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn clear_cmds(&mut self) {
        self.cmds.clear();
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.cmds.iter().filter_map(|cmd| match *cmd {
            DrawCmd::Circle { center, radius, color } => Some((center, radius, color)),
            DrawCmd::Clear(_) => None,
        })
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Rgba) {
        self.cmds.push(DrawCmd::Clear(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.cmds.push(DrawCmd::Circle { center, radius, color });
    }
}

/// Paint one frame: black background, balls, then explosions on top
pub fn draw<C: Canvas + ?Sized>(state: &ChainReaction, canvas: &mut C) {
    canvas.clear(Rgba::BLACK);

    let r = state.params.ball_radius;
    for ball in &state.balls {
        canvas.fill_circle(ball.pos, r, ball.color);
    }

    for ex in &state.explosions {
        canvas.fill_circle(ex.pos, ex.radius, Rgba::EXPLOSION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Ball, SimParams};

    #[test]
    fn test_draw_order() {
        let mut state = ChainReaction::empty(SimParams::default(), 1);
        let color = Rgba::new(10, 20, 30, 128);
        state.balls.push(Ball::new(Vec2::new(20.0, 30.0), Vec2::X, color));
        state.trigger(Vec2::new(100.0, 100.0));
        state.explosions[0].radius = 12.5;

        let mut list = DrawList::default();
        draw(&state, &mut list);
        assert_eq!(
            list.cmds,
            vec![
                DrawCmd::Clear(Rgba::BLACK),
                DrawCmd::Circle { center: Vec2::new(20.0, 30.0), radius: 7.0, color },
                DrawCmd::Circle {
                    center: Vec2::new(100.0, 100.0),
                    radius: 12.5,
                    color: Rgba::EXPLOSION,
                },
            ]
        );
        assert_eq!(list.circles().count(), 2);

        list.clear_cmds();
        assert!(list.cmds.is_empty());
    }
}
