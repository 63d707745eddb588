//! Vertex generation for GPU hosts
//!
//! Circles are tessellated into triangle lists so a host can draw a whole
//! frame with one buffer upload.

use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};

use crate::math::Vec2;
use crate::sim::{ChainReaction, Rgba};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Byte stride between vertices
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    /// Byte offset of `color` (attribute 1); `position` is attribute 0 at 0
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 2]>();

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Segments used for every circle in [`frame_vertices`]
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Triangle list for a filled circle: one triangle per segment from the
/// center to the edge
pub fn circle_fan(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Every ball and explosion of the frame, in draw order
pub fn frame_vertices(state: &ChainReaction) -> Vec<Vertex> {
    let per_circle = (CIRCLE_SEGMENTS * 3) as usize;
    let mut vertices =
        Vec::with_capacity((state.balls.len() + state.explosions.len()) * per_circle);

    let r = state.params.ball_radius;
    for ball in &state.balls {
        vertices.extend(circle_fan(ball.pos, r, ball.color.to_f32(), CIRCLE_SEGMENTS));
    }
    let explosion = Rgba::EXPLOSION.to_f32();
    for ex in &state.explosions {
        vertices.extend(circle_fan(ex.pos, ex.radius, explosion, CIRCLE_SEGMENTS));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimParams;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::COLOR_OFFSET, 8);
        let v = [Vertex::new(1.0, 2.0, [0.1, 0.2, 0.3, 0.4])];
        let floats: &[f32] = bytemuck::cast_slice(&v);
        assert_eq!(floats, &[1.0, 2.0, 0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_circle_fan_stays_on_radius() {
        let center = Vec2::new(10.0, -5.0);
        let verts = circle_fan(center, 3.0, [1.0; 4], 8);
        assert_eq!(verts.len(), 24);
        for tri in verts.chunks(3) {
            assert_eq!(tri[0].position, [10.0, -5.0]);
            for v in &tri[1..] {
                let d = Vec2::new(v.position[0], v.position[1]).dist(center);
                assert!((d - 3.0).abs() < 1e-5);
            }
        }
        // Closed: last edge ends where the first began
        let first = verts[1].position;
        let last = verts[23].position;
        assert!((first[0] - last[0]).abs() < 1e-5 && (first[1] - last[1]).abs() < 1e-5);
    }

    #[test]
    fn test_frame_vertices_counts() {
        let mut state = ChainReaction::new(SimParams::default(), 11);
        state.trigger(Vec2::new(50.0, 50.0));
        let verts = frame_vertices(&state);
        assert_eq!(verts.len(), (state.balls.len() + 1) * (CIRCLE_SEGMENTS * 3) as usize);
        assert_eq!(verts.last().map(|v| v.color), Some(Rgba::EXPLOSION.to_f32()));
    }
}
