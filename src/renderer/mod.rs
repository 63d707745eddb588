//! Rendering seams
//!
//! The host provides the actual canvas or GL context; this module turns the
//! simulation state into draw calls, vertices and matrix uploads.

pub mod canvas;
pub mod gl;
pub mod vertex;

pub use canvas::{Canvas, DrawCmd, DrawList, draw};
pub use gl::{GlContext, GlContextExt};
pub use vertex::{Vertex, circle_fan, frame_vertices};
