//! 4D (homogeneous) vector

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::Vec3;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Extend a `Vec3` with a homogeneous `w` (1 for points, 0 for directions).
    #[inline]
    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Drop `w` without dividing.
    #[inline]
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        *self = Self::new(x, y, z, w);
        self
    }

    #[inline]
    pub fn dot(&self, b: Vec4) -> f32 {
        self.x * b.x + self.y * b.y + self.z * b.z + self.w * b.w
    }

    pub fn add(&mut self, b: Vec4) -> &mut Self {
        *self += b;
        self
    }

    pub fn added(&self, b: Vec4) -> Vec4 {
        *self + b
    }

    pub fn sub(&mut self, b: Vec4) -> &mut Self {
        *self -= b;
        self
    }

    pub fn subbed(&self, b: Vec4) -> Vec4 {
        *self - b
    }

    /// Component-wise multiply.
    pub fn mul(&mut self, b: Vec4) -> &mut Self {
        self.x *= b.x;
        self.y *= b.y;
        self.z *= b.z;
        self.w *= b.w;
        self
    }

    pub fn mulled(&self, b: Vec4) -> Vec4 {
        Vec4::new(self.x * b.x, self.y * b.y, self.z * b.z, self.w * b.w)
    }

    pub fn scale(&mut self, s: f32) -> &mut Self {
        *self *= s;
        self
    }

    pub fn scaled(&self, s: f32) -> Vec4 {
        *self * s
    }

    pub fn lerp(&mut self, b: Vec4, t: f32) -> &mut Self {
        self.x += (b.x - self.x) * t;
        self.y += (b.y - self.y) * t;
        self.z += (b.z - self.z) * t;
        self.w += (b.w - self.w) * t;
        self
    }

    pub fn lerped(&self, b: Vec4, t: f32) -> Vec4 {
        let mut v = *self;
        v.lerp(b, t);
        v
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    pub fn normalize(&mut self) -> &mut Self {
        let inv = 1.0 / self.length();
        self.scale(inv)
    }

    pub fn normalized(&self) -> Vec4 {
        let mut v = *self;
        v.normalize();
        v
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {} y: {} z: {} w: {}", self.x, self.y, self.z, self.w)
    }
}

super::impl_vec_ops!(Vec4 { x, y, z, w }, 4);
