//! 4x4 transform matrix
//!
//! Elements are named `a{row}{col}` and stored row-major. Every builder
//! (`rotate`, `translate`, `look_at`, `perspective`, ...) post-multiplies the
//! receiver, so a model-view matrix reads in the order the transforms are
//! applied to the camera:
//!
//! ```
//! use chainreaction::math::Mat4;
//!
//! let mut mv = Mat4::new();
//! mv.translate(0.0, 0.0, -4.0).rotate(0.3, 0.0, 1.0, 0.0);
//! ```
//!
//! GL wants column-major data, which is what [`Mat4::to_f32_array`] returns.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::scalar::PI;
use super::{Vec3, Vec4};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat4 {
    pub a11: f32,
    pub a12: f32,
    pub a13: f32,
    pub a14: f32,
    pub a21: f32,
    pub a22: f32,
    pub a23: f32,
    pub a24: f32,
    pub a31: f32,
    pub a32: f32,
    pub a33: f32,
    pub a34: f32,
    pub a41: f32,
    pub a42: f32,
    pub a43: f32,
    pub a44: f32,
}

type Rows = [[f32; 4]; 4];

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// A new identity matrix.
    #[inline]
    pub const fn new() -> Self {
        Self::IDENTITY
    }

    pub const fn from_rows(r: Rows) -> Self {
        Self {
            a11: r[0][0],
            a12: r[0][1],
            a13: r[0][2],
            a14: r[0][3],
            a21: r[1][0],
            a22: r[1][1],
            a23: r[1][2],
            a24: r[1][3],
            a31: r[2][0],
            a32: r[2][1],
            a33: r[2][2],
            a34: r[2][3],
            a41: r[3][0],
            a42: r[3][1],
            a43: r[3][2],
            a44: r[3][3],
        }
    }

    /// Inverse of [`Mat4::to_f32_array`].
    pub fn from_f32_array(cols: [f32; 16]) -> Self {
        let mut m: Mat4 = bytemuck::cast(cols);
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

    /// Back to identity.
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// `self = a × b`
    pub fn mul2(&mut self, a: Mat4, b: Mat4) -> &mut Self {
        let a = a.rows();
        let b = b.rows();
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j] + a[i][3] * b[3][j];
            }
        }
        self.set_rows(out)
    }

    /// `self = self × b`
    pub fn mul(&mut self, b: Mat4) -> &mut Self {
        let a = *self;
        self.mul2(a, b)
    }

    pub fn mulled(&self, b: Mat4) -> Mat4 {
        let mut m = Mat4::new();
        m.mul2(*self, b);
        m
    }

    /// `self = a × self`
    pub fn premul(&mut self, a: Mat4) -> &mut Self {
        let b = *self;
        self.mul2(a, b)
    }

    /// Rotate by `theta` radians about the axis `(x, y, z)`, which must already
    /// be unit length.
    pub fn rotate(&mut self, theta: f32, x: f32, y: f32, z: f32) -> &mut Self {
        let (s, c) = theta.sin_cos();
        let cc = 1.0 - c;
        let (xs, ys, zs) = (x * s, y * s, z * s);
        let (xc, yc, zc) = (x * cc, y * cc, z * cc);
        let (xyc, yzc, zxc) = (x * yc, y * zc, z * xc);
        self.mul(Mat4::from_rows([
            [x * xc + c, xyc - zs, zxc + ys, 0.0],
            [xyc + zs, y * yc + c, yzc - xs, 0.0],
            [zxc - ys, yzc + xs, z * zc + c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    pub fn rotated(&self, theta: f32, x: f32, y: f32, z: f32) -> Mat4 {
        let mut m = *self;
        m.rotate(theta, x, y, z);
        m
    }

    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) -> &mut Self {
        self.mul(Mat4::from_rows([
            [1.0, 0.0, 0.0, dx],
            [0.0, 1.0, 0.0, dy],
            [0.0, 0.0, 1.0, dz],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    pub fn translated(&self, dx: f32, dy: f32, dz: f32) -> Mat4 {
        let mut m = *self;
        m.translate(dx, dy, dz);
        m
    }

    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) -> &mut Self {
        self.mul(Mat4::from_rows([
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, sz, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    pub fn scaled(&self, sx: f32, sy: f32, sz: f32) -> Mat4 {
        let mut m = *self;
        m.scale(sx, sy, sz);
        m
    }

    /// Right-handed view matrix looking from `eye` toward `center`.
    pub fn look_at(&mut self, eye: Vec3, center: Vec3, up: Vec3) -> &mut Self {
        let z = eye.subbed(center).normalized();
        let x = up.crossed(z).normalized();
        let y = z.crossed(x);
        self.mul(Mat4::from_rows([
            [x.x, x.y, x.z, 0.0],
            [y.x, y.y, y.z, 0.0],
            [z.x, z.y, z.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]));
        self.translate(-eye.x, -eye.y, -eye.z)
    }

    /// OpenGL `glFrustum` projection.
    pub fn frustum(&mut self, l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) -> &mut Self {
        let rl = r - l;
        let tb = t - b;
        let fn_ = f - n;
        self.mul(Mat4::from_rows([
            [2.0 * n / rl, 0.0, (r + l) / rl, 0.0],
            [0.0, 2.0 * n / tb, (t + b) / tb, 0.0],
            [0.0, 0.0, -(f + n) / fn_, -2.0 * f * n / fn_],
            [0.0, 0.0, -1.0, 0.0],
        ]))
    }

    /// `gluPerspective` with the vertical field of view in degrees.
    pub fn perspective(&mut self, fovy: f32, aspect: f32, znear: f32, zfar: f32) -> &mut Self {
        let ymax = znear * (fovy * PI / 360.0).tan();
        let ymin = -ymax;
        let xmin = ymin * aspect;
        let xmax = ymax * aspect;
        self.frustum(xmin, xmax, ymin, ymax, znear, zfar)
    }

    /// OpenGL `glOrtho` projection.
    pub fn ortho(&mut self, l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) -> &mut Self {
        let rl = r - l;
        let tb = t - b;
        let fn_ = f - n;
        self.mul(Mat4::from_rows([
            [2.0 / rl, 0.0, 0.0, -(r + l) / rl],
            [0.0, 2.0 / tb, 0.0, -(t + b) / tb],
            [0.0, 0.0, -2.0 / fn_, -(f + n) / fn_],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Invert in place from 2x2 sub-determinants. A singular matrix divides by
    /// zero and fills the result with Inf/NaN.
    pub fn invert(&mut self) -> &mut Self {
        let Mat4 {
            a11,
            a12,
            a13,
            a14,
            a21,
            a22,
            a23,
            a24,
            a31,
            a32,
            a33,
            a34,
            a41,
            a42,
            a43,
            a44,
        } = *self;

        let b00 = a11 * a22 - a12 * a21;
        let b01 = a11 * a23 - a13 * a21;
        let b02 = a11 * a24 - a14 * a21;
        let b03 = a12 * a23 - a13 * a22;
        let b04 = a12 * a24 - a14 * a22;
        let b05 = a13 * a24 - a14 * a23;
        let b06 = a31 * a42 - a32 * a41;
        let b07 = a31 * a43 - a33 * a41;
        let b08 = a31 * a44 - a34 * a41;
        let b09 = a32 * a43 - a33 * a42;
        let b10 = a32 * a44 - a34 * a42;
        let b11 = a33 * a44 - a34 * a43;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        let inv = 1.0 / det;

        self.set_rows([
            [
                (a22 * b11 - a23 * b10 + a24 * b09) * inv,
                (a13 * b10 - a12 * b11 - a14 * b09) * inv,
                (a42 * b05 - a43 * b04 + a44 * b03) * inv,
                (a33 * b04 - a32 * b05 - a34 * b03) * inv,
            ],
            [
                (a23 * b08 - a21 * b11 - a24 * b07) * inv,
                (a11 * b11 - a13 * b08 + a14 * b07) * inv,
                (a43 * b02 - a41 * b05 - a44 * b01) * inv,
                (a31 * b05 - a33 * b02 + a34 * b01) * inv,
            ],
            [
                (a21 * b10 - a22 * b08 + a24 * b06) * inv,
                (a12 * b08 - a11 * b10 - a14 * b06) * inv,
                (a41 * b04 - a42 * b02 + a44 * b00) * inv,
                (a32 * b02 - a31 * b04 - a34 * b00) * inv,
            ],
            [
                (a22 * b07 - a21 * b09 - a23 * b06) * inv,
                (a11 * b09 - a12 * b07 + a13 * b06) * inv,
                (a42 * b01 - a41 * b03 - a43 * b00) * inv,
                (a31 * b03 - a32 * b01 + a33 * b00) * inv,
            ],
        ])
    }

    pub fn inverted(&self) -> Mat4 {
        let mut m = *self;
        m.invert();
        m
    }

    pub fn transpose(&mut self) -> &mut Self {
        std::mem::swap(&mut self.a12, &mut self.a21);
        std::mem::swap(&mut self.a13, &mut self.a31);
        std::mem::swap(&mut self.a14, &mut self.a41);
        std::mem::swap(&mut self.a23, &mut self.a32);
        std::mem::swap(&mut self.a24, &mut self.a42);
        std::mem::swap(&mut self.a34, &mut self.a43);
        self
    }

    pub fn transposed(&self) -> Mat4 {
        let mut m = *self;
        m.transpose();
        m
    }

    /// Transform a point with an implicit `w = 1`, no perspective divide.
    pub fn mul_vec3(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.a11 * v.x + self.a12 * v.y + self.a13 * v.z + self.a14,
            self.a21 * v.x + self.a22 * v.y + self.a23 * v.z + self.a24,
            self.a31 * v.x + self.a32 * v.y + self.a33 * v.z + self.a34,
        )
    }

    /// Transform a point and divide by the resulting `w`.
    pub fn mul_vec3p(&self, v: Vec3) -> Vec3 {
        let w = self.a41 * v.x + self.a42 * v.y + self.a43 * v.z + self.a44;
        self.mul_vec3(v) / w
    }

    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.a11 * v.x + self.a12 * v.y + self.a13 * v.z + self.a14 * v.w,
            self.a21 * v.x + self.a22 * v.y + self.a23 * v.z + self.a24 * v.w,
            self.a31 * v.x + self.a32 * v.y + self.a33 * v.z + self.a34 * v.w,
            self.a41 * v.x + self.a42 * v.y + self.a43 * v.z + self.a44 * v.w,
        )
    }

    /// Column-major elements, the layout `glUniformMatrix4fv` expects with
    /// `transpose = false`.
    pub fn to_f32_array(&self) -> [f32; 16] {
        bytemuck::cast(self.transposed())
    }

    /// Column-major elements as raw bytes for buffer uploads.
    pub fn to_bytes(&self) -> [u8; 64] {
        bytemuck::cast(self.to_f32_array())
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        self.mulled(rhs)
    }
}

impl std::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        self.mul_vec4(rhs)
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}, {}, {}, {}", r[0], r[1], r[2], r[3])?;
        }
        Ok(())
    }
}
