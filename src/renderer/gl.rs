//! OpenGL upload seam
//!
//! `GlContext` is the handful of raw entry points the host's GL binding has
//! to provide. `GlContextExt` layers the array and matrix conveniences on top
//! for every implementor.

use crate::math::{Mat3, Mat4};

/// Raw GL calls used by the sketch
pub trait GlContext {
    fn vertex_attrib_1f(&mut self, index: u32, x: f32);
    fn vertex_attrib_2f(&mut self, index: u32, x: f32, y: f32);
    fn vertex_attrib_3f(&mut self, index: u32, x: f32, y: f32, z: f32);
    fn vertex_attrib_4f(&mut self, index: u32, x: f32, y: f32, z: f32, w: f32);

    /// `data` is column-major, as GL expects with `transpose == false`
    fn uniform_matrix3fv(&mut self, location: i32, transpose: bool, data: &[f32; 9]);
    fn uniform_matrix4fv(&mut self, location: i32, transpose: bool, data: &[f32; 16]);
}

/// Convenience calls built on [`GlContext`]
pub trait GlContextExt: GlContext {
    fn vertex_attrib_1fv(&mut self, index: u32, v: &[f32; 1]) {
        self.vertex_attrib_1f(index, v[0]);
    }

    fn vertex_attrib_2fv(&mut self, index: u32, v: &[f32; 2]) {
        self.vertex_attrib_2f(index, v[0], v[1]);
    }

    fn vertex_attrib_3fv(&mut self, index: u32, v: &[f32; 3]) {
        self.vertex_attrib_3f(index, v[0], v[1], v[2]);
    }

    fn vertex_attrib_4fv(&mut self, index: u32, v: &[f32; 4]) {
        self.vertex_attrib_4f(index, v[0], v[1], v[2], v[3]);
    }

    fn uniform_mat3(&mut self, location: i32, m: &Mat3) {
        self.uniform_matrix3fv(location, false, &m.to_f32_array());
    }

    fn uniform_mat4(&mut self, location: i32, m: &Mat4) {
        self.uniform_matrix4fv(location, false, &m.to_f32_array());
    }
}

impl<T: GlContext + ?Sized> GlContextExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[derive(Debug, PartialEq)]
    enum Call {
        Attrib(u32, Vec<f32>),
        Mat3(i32, bool, [f32; 9]),
        Mat4(i32, bool, [f32; 16]),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl GlContext for Recorder {
        fn vertex_attrib_1f(&mut self, index: u32, x: f32) {
            self.calls.push(Call::Attrib(index, vec![x]));
        }
        fn vertex_attrib_2f(&mut self, index: u32, x: f32, y: f32) {
            self.calls.push(Call::Attrib(index, vec![x, y]));
        }
        fn vertex_attrib_3f(&mut self, index: u32, x: f32, y: f32, z: f32) {
            self.calls.push(Call::Attrib(index, vec![x, y, z]));
        }
        fn vertex_attrib_4f(&mut self, index: u32, x: f32, y: f32, z: f32, w: f32) {
            self.calls.push(Call::Attrib(index, vec![x, y, z, w]));
        }
        fn uniform_matrix3fv(&mut self, location: i32, transpose: bool, data: &[f32; 9]) {
            self.calls.push(Call::Mat3(location, transpose, *data));
        }
        fn uniform_matrix4fv(&mut self, location: i32, transpose: bool, data: &[f32; 16]) {
            self.calls.push(Call::Mat4(location, transpose, *data));
        }
    }

    #[test]
    fn test_attrib_arrays_forward() {
        let mut gl = Recorder::default();
        gl.vertex_attrib_1fv(0, &[1.0]);
        gl.vertex_attrib_2fv(1, &[1.0, 2.0]);
        gl.vertex_attrib_3fv(2, &Vec3::new(1.0, 2.0, 3.0).to_array());
        gl.vertex_attrib_4fv(3, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            gl.calls,
            vec![
                Call::Attrib(0, vec![1.0]),
                Call::Attrib(1, vec![1.0, 2.0]),
                Call::Attrib(2, vec![1.0, 2.0, 3.0]),
                Call::Attrib(3, vec![1.0, 2.0, 3.0, 4.0]),
            ]
        );
    }

    #[test]
    fn test_matrix_upload_is_column_major() {
        let mut gl = Recorder::default();
        let m = Mat4::new().translated(1.0, 2.0, 3.0);
        gl.uniform_mat4(7, &m);
        gl.uniform_mat3(8, &Mat3::new());

        let Call::Mat4(loc, transpose, data) = &gl.calls[0] else {
            panic!("expected a mat4 upload, got {:?}", gl.calls[0]);
        };
        assert_eq!((*loc, *transpose), (7, false));
        assert_eq!(&data[12..], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(
            gl.calls[1],
            Call::Mat3(8, false, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
        );
    }
}
