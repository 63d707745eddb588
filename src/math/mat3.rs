//! 3x3 matrix: 2D affine/projective transforms and normal matrices

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::{Mat4, Vec2, Vec3};

/// Row-major 3x3 matrix, elements named `a{row}{col}`.
///
/// Same conventions as [`Mat4`]: builders post-multiply the receiver and
/// [`Mat3::to_f32_array`] emits column-major data.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat3 {
    pub a11: f32,
    pub a12: f32,
    pub a13: f32,
    pub a21: f32,
    pub a22: f32,
    pub a23: f32,
    pub a31: f32,
    pub a32: f32,
    pub a33: f32,
}

type Rows = [[f32; 3]; 3];

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    pub const IDENTITY: Self = Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    #[inline]
    pub const fn new() -> Self {
        Self::IDENTITY
    }

    pub const fn from_rows(r: Rows) -> Self {
        Self {
            a11: r[0][0],
            a12: r[0][1],
            a13: r[0][2],
            a21: r[1][0],
            a22: r[1][1],
            a23: r[1][2],
            a31: r[2][0],
            a32: r[2][1],
            a33: r[2][2],
        }
    }

    /// Upper-left 3x3 of a `Mat4`.
    pub fn from_mat4(m: &Mat4) -> Self {
        Self::from_rows([
            [m.a11, m.a12, m.a13],
            [m.a21, m.a22, m.a23],
            [m.a31, m.a32, m.a33],
        ])
    }

    /// Inverse of [`Mat3::to_f32_array`].
    pub fn from_f32_array(cols: [f32; 9]) -> Self {
        let mut m: Mat3 = bytemuck::cast(cols);
        m.transpose();
        m
    }

    #[inline]
    pub fn rows(&self) -> Rows {
        bytemuck::cast(*self)
    }

    pub fn set_rows(&mut self, r: Rows) -> &mut Self {
        *self = Self::from_rows(r);
        self
    }

    pub fn reset(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// `self = a × b`
    pub fn mul2(&mut self, a: Mat3, b: Mat3) -> &mut Self {
        let a = a.rows();
        let b = b.rows();
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        self.set_rows(out)
    }

    /// `self = self × b`
    pub fn mul(&mut self, b: Mat3) -> &mut Self {
        let a = *self;
        self.mul2(a, b)
    }

    pub fn mulled(&self, b: Mat3) -> Mat3 {
        let mut m = Mat3::new();
        m.mul2(*self, b);
        m
    }

    /// `self = a × self`
    pub fn premul(&mut self, a: Mat3) -> &mut Self {
        let b = *self;
        self.mul2(a, b)
    }

    /// Rotate counter-clockwise in the plane by `theta` radians.
    pub fn rotate(&mut self, theta: f32) -> &mut Self {
        let (s, c) = theta.sin_cos();
        self.mul(Mat3::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]))
    }

    pub fn translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.mul(Mat3::from_rows([[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]]))
    }

    pub fn scale(&mut self, sx: f32, sy: f32) -> &mut Self {
        self.mul(Mat3::from_rows([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]]))
    }

    pub fn rotated(&self, theta: f32) -> Mat3 {
        let mut m = *self;
        m.rotate(theta);
        m
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Mat3 {
        let mut m = *self;
        m.translate(dx, dy);
        m
    }

    pub fn scaled(&self, sx: f32, sy: f32) -> Mat3 {
        let mut m = *self;
        m.scale(sx, sy);
        m
    }

    pub fn determinant(&self) -> f32 {
        self.a11 * (self.a22 * self.a33 - self.a23 * self.a32)
            + self.a12 * (self.a23 * self.a31 - self.a21 * self.a33)
            + self.a13 * (self.a21 * self.a32 - self.a22 * self.a31)
    }

    /// Invert via the adjugate. Singular input yields Inf/NaN.
    pub fn invert(&mut self) -> &mut Self {
        let Mat3 {
            a11,
            a12,
            a13,
            a21,
            a22,
            a23,
            a31,
            a32,
            a33,
        } = *self;

        let c11 = a22 * a33 - a23 * a32;
        let c12 = a23 * a31 - a21 * a33;
        let c13 = a21 * a32 - a22 * a31;
        let inv = 1.0 / (a11 * c11 + a12 * c12 + a13 * c13);

        self.set_rows([
            [c11 * inv, (a13 * a32 - a12 * a33) * inv, (a12 * a23 - a13 * a22) * inv],
            [c12 * inv, (a11 * a33 - a13 * a31) * inv, (a13 * a21 - a11 * a23) * inv],
            [c13 * inv, (a12 * a31 - a11 * a32) * inv, (a11 * a22 - a12 * a21) * inv],
        ])
    }

    pub fn inverted(&self) -> Mat3 {
        let mut m = *self;
        m.invert();
        m
    }

    pub fn transpose(&mut self) -> &mut Self {
        std::mem::swap(&mut self.a12, &mut self.a21);
        std::mem::swap(&mut self.a13, &mut self.a31);
        std::mem::swap(&mut self.a23, &mut self.a32);
        self
    }

    pub fn transposed(&self) -> Mat3 {
        let mut m = *self;
        m.transpose();
        m
    }

    /// Transform a 2D point (implicit `w = 1`), no divide.
    pub fn mul_vec2(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.a11 * v.x + self.a12 * v.y + self.a13,
            self.a21 * v.x + self.a22 * v.y + self.a23,
        )
    }

    /// Transform a 2D point and divide by the resulting `w`.
    pub fn mul_vec2p(&self, v: Vec2) -> Vec2 {
        let w = self.a31 * v.x + self.a32 * v.y + self.a33;
        self.mul_vec2(v) / w
    }

    pub fn mul_vec3(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.a11 * v.x + self.a12 * v.y + self.a13 * v.z,
            self.a21 * v.x + self.a22 * v.y + self.a23 * v.z,
            self.a31 * v.x + self.a32 * v.y + self.a33 * v.z,
        )
    }

    /// Column-major elements for `glUniformMatrix3fv`.
    pub fn to_f32_array(&self) -> [f32; 9] {
        bytemuck::cast(self.transposed())
    }

    pub fn to_bytes(&self) -> [u8; 36] {
        bytemuck::cast(self.to_f32_array())
    }
}

impl std::ops::Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        self.mulled(rhs)
    }
}

impl std::ops::Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.mul_vec3(rhs)
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}, {}, {}", r[0], r[1], r[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_close(a: Mat3, b: Mat3) {
        for (x, y) in a.to_f32_array().iter().zip(b.to_f32_array().iter()) {
            assert!((x - y).abs() < EPS, "{a}\nvs\n{b}");
        }
    }

    #[test]
    fn test_identity_serializes_column_major() {
        assert_eq!(Mat3::new().to_f32_array(), [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        let m = Mat3::from_rows([[11.0, 12.0, 13.0], [21.0, 22.0, 23.0], [31.0, 32.0, 33.0]]);
        assert_eq!(
            m.to_f32_array(),
            [11.0, 21.0, 31.0, 12.0, 22.0, 32.0, 13.0, 23.0, 33.0]
        );
        assert_eq!(Mat3::from_f32_array(m.to_f32_array()), m);
    }

    #[test]
    fn test_affine_2d() {
        let mut m = Mat3::new();
        m.translate(100.0, 50.0).rotate(std::f32::consts::FRAC_PI_2).scale(2.0, 2.0);
        let p = m.mul_vec2(Vec2::new(1.0, 0.0));
        assert!((p.x - 100.0).abs() < EPS);
        assert!((p.y - 52.0).abs() < EPS);
    }

    #[test]
    fn test_invert_round_trip() {
        let mut m = Mat3::new();
        m.translate(3.0, -4.0).rotate(0.4).scale(1.5, 0.25);
        assert_close(m * m.inverted(), Mat3::IDENTITY);
        assert_close(m.inverted().inverted(), m);
        assert!((m.determinant() - 0.375).abs() < EPS);
    }

    #[test]
    fn test_invert_matches_glam() {
        let m = Mat3::from_rows([[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]]);
        let g = glam::Mat3::from_cols_array(&m.to_f32_array()).inverse();
        assert_close(m.inverted(), Mat3::from_f32_array(g.to_cols_array()));
    }

    #[test]
    fn test_singular_invert_propagates() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]]);
        assert!(m.inverted().to_f32_array().iter().any(|v| !v.is_finite()));
    }

    #[test]
    fn test_from_mat4_normal_matrix() {
        let mut mv = Mat4::new();
        mv.translate(5.0, 6.0, 7.0).scale(2.0, 2.0, 2.0);
        let mut normal = Mat3::from_mat4(&mv.inverted());
        normal.transpose();
        // Uniform scale: normals only shrink, translation is dropped
        let n = normal.mul_vec3(Vec3::Y);
        assert!((n.y - 0.5).abs() < EPS && n.x.abs() < EPS && n.z.abs() < EPS);
    }

    #[test]
    fn test_projective_divide() {
        let m = Mat3::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 2.0]]);
        assert_eq!(m.mul_vec2p(Vec2::new(4.0, 6.0)), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_to_bytes_length_and_order() {
        let m = Mat3::new().translated(5.0, -2.0);
        let bytes = m.to_bytes();
        assert_eq!(bytes.len(), 36);
        let cols: [f32; 9] = bytemuck::cast(bytes);
        assert_eq!(cols, m.to_f32_array());
        assert_eq!((cols[6], cols[7]), (5.0, -2.0));
    }
}
