//! 3D vector

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A 3D point and/or vector.
///
/// There is no separate point type: the same three values are often read as
/// either. In-place operations return `&mut Self`; past-tense forms return a
/// copy.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Cross product, `self = self × b` (right-handed).
    pub fn set_vec(&mut self, v: Vec3) -> &mut Self {
        *self = v;
        self
    }

    /// `self = a × b`
    pub fn cross2(&mut self, a: Vec3, b: Vec3) -> &mut Self {
        self.x = a.y * b.z - a.z * b.y;
        self.y = a.z * b.x - a.x * b.z;
        self.z = a.x * b.y - a.y * b.x;
        self
    }

    /// `self = self × b`
    pub fn cross(&mut self, b: Vec3) -> &mut Self {
        let a = *self;
        self.cross2(a, b)
    }

    pub fn crossed(&self, b: Vec3) -> Vec3 {
        let mut v = *self;
        v.cross(b);
        v
    }

    #[inline]
    pub fn dot(&self, b: Vec3) -> f32 {
        self.x * b.x + self.y * b.y + self.z * b.z
    }

    /// `self = a + b`
    pub fn add2(&mut self, a: Vec3, b: Vec3) -> &mut Self {
        self.x = a.x + b.x;
        self.y = a.y + b.y;
        self.z = a.z + b.z;
        self
    }

    pub fn add(&mut self, b: Vec3) -> &mut Self {
        let a = *self;
        self.add2(a, b)
    }

    pub fn added(&self, b: Vec3) -> Vec3 {
        Vec3::new(self.x + b.x, self.y + b.y, self.z + b.z)
    }

    /// `self = a - b`
    pub fn sub2(&mut self, a: Vec3, b: Vec3) -> &mut Self {
        self.x = a.x - b.x;
        self.y = a.y - b.y;
        self.z = a.z - b.z;
        self
    }

    pub fn sub(&mut self, b: Vec3) -> &mut Self {
        let a = *self;
        self.sub2(a, b)
    }

    pub fn subbed(&self, b: Vec3) -> Vec3 {
        Vec3::new(self.x - b.x, self.y - b.y, self.z - b.z)
    }

    /// Component-wise multiply.
    pub fn mul(&mut self, b: Vec3) -> &mut Self {
        self.x *= b.x;
        self.y *= b.y;
        self.z *= b.z;
        self
    }

    pub fn mulled(&self, b: Vec3) -> Vec3 {
        Vec3::new(self.x * b.x, self.y * b.y, self.z * b.z)
    }

    pub fn scale(&mut self, s: f32) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self.z *= s;
        self
    }

    pub fn scaled(&self, s: f32) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn lerp(&mut self, b: Vec3, t: f32) -> &mut Self {
        self.x += (b.x - self.x) * t;
        self.y += (b.y - self.y) * t;
        self.z += (b.z - self.z) * t;
        self
    }

    pub fn lerped(&self, b: Vec3, t: f32) -> Vec3 {
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
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Scale to unit length. Invalid (NaN) for a zero vector.
    pub fn normalize(&mut self) -> &mut Self {
        let inv = 1.0 / self.length();
        self.scale(inv)
    }

    pub fn normalized(&self) -> Vec3 {
        let mut v = *self;
        v.normalize();
        v
    }

    pub fn dist(&self, b: Vec3) -> f32 {
        self.dist_squared(b).sqrt()
    }

    pub fn dist_squared(&self, b: Vec3) -> f32 {
        let dx = self.x - b.x;
        let dy = self.y - b.y;
        let dz = self.z - b.z;
        dx * dx + dy * dy + dz * dz
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {} y: {} z: {}", self.x, self.y, self.z)
    }
}

super::impl_vec_ops!(Vec3 { x, y, z }, 3);
