//! Frame driver
//!
//! Turns variable frame gaps from the host into fixed simulation steps and
//! queues pointer input until the next step picks it up.

use crate::consts::{FRAME_DT_MS, MAX_FRAME_MS, MAX_SUBSTEPS};
use crate::math::Vec2;
use crate::renderer::{Canvas, draw};
use crate::settings::Settings;
use crate::sim::{ChainReaction, TickInput, tick};

/// A running sketch: state plus pending input and timing
pub struct Sketch {
    pub state: ChainReaction,
    input: TickInput,
    accumulator: f32,
    /// Simulation steps taken so far
    pub steps: u64,
}

impl Sketch {
    pub fn new(settings: &Settings, seed: u64) -> Self {
        log::info!(
            "Starting sketch: seed {seed}, {} balls in {}x{}",
            settings.sim.ball_count,
            settings.sim.arena_width,
            settings.sim.arena_height
        );
        Self {
            state: ChainReaction::new(settings.sim, seed),
            input: TickInput {
                click: None,
                auto_restart: settings.auto_restart,
            },
            accumulator: 0.0,
            steps: 0,
        }
    }

    /// Queue a click in arena coordinates for the next step. The first click
    /// since the last step wins.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if self.input.click.is_none() {
            self.input.click = Some(Vec2::new(x, y));
        }
    }

    /// Advance by `elapsed_ms` of wall time. Returns the number of steps run.
    pub fn update(&mut self, elapsed_ms: f32) -> u32 {
        if elapsed_ms.is_nan() {
            log::warn!("Ignoring NaN frame time");
            return 0;
        }
        let elapsed = elapsed_ms.clamp(0.0, MAX_FRAME_MS);
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= FRAME_DT_MS && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, FRAME_DT_MS);
            self.accumulator -= FRAME_DT_MS;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.click = None;
        }
        self.steps += u64::from(substeps);
        substeps
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        draw(&self.state, canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCmd, DrawList};

    fn sketch() -> Sketch {
        Sketch::new(&Settings::default(), 5)
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut s = sketch();
        assert_eq!(s.update(10.0), 0);
        assert_eq!(s.update(10.0), 1);
        assert_eq!(s.steps, 1);
        assert_eq!(s.state.time_ticks, 1);
    }

    #[test]
    fn test_long_gap_is_clamped() {
        let mut s = sketch();
        // 100 ms is six whole frames; the rest is dropped
        assert_eq!(s.update(5_000.0), 6);
        assert_eq!(s.update(-3.0), 0);
    }

    #[test]
    fn test_click_is_one_shot() {
        let mut s = sketch();
        s.pointer_down(200.0, 150.0);
        assert!(s.state.explosions.is_empty());
        s.update(FRAME_DT_MS * 2.0 + 0.5);
        // One trigger only, even though two steps ran
        assert!(!s.state.explosions.is_empty());
        assert_eq!(s.state.explosions[0].pos, Vec2::new(200.0, 150.0));
        assert!(s.input.click.is_none());
    }

    #[test]
    fn test_draw_emits_frame() {
        let s = sketch();
        let mut list = DrawList::default();
        s.draw(&mut list);
        assert!(matches!(list.cmds[0], DrawCmd::Clear(_)));
        assert_eq!(list.cmds.len(), 1 + s.state.balls.len());
    }

    #[test]
    fn test_first_queued_click_wins() {
        let mut s = sketch();
        s.pointer_down(10.0, 10.0);
        s.pointer_down(300.0, 200.0);
        s.update(FRAME_DT_MS + 0.1);
        assert_eq!(s.state.explosions[0].pos, Vec2::new(10.0, 10.0));
        assert!(
            s.state.explosions.iter().all(|ex| ex.pos != Vec2::new(300.0, 200.0)),
            "second click must not be admitted"
        );
    }

    #[test]
    fn test_nan_frame_does_not_stall() {
        let mut s = sketch();
        assert_eq!(s.update(f32::NAN), 0);
        assert_eq!(s.update(FRAME_DT_MS * 3.0), 3);
        assert_eq!(s.update(f32::INFINITY), 6);
    }

    #[test]
    fn test_draw_through_trait_object() {
        let s = sketch();
        let mut list = DrawList::default();
        let canvas: &mut dyn Canvas = &mut list;
        s.draw(canvas);
        assert_eq!(list.cmds.len(), 1 + s.state.balls.len());
    }
}
