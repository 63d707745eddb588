//! 2D vector

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A 2D point and/or vector.
///
/// Core operations happen in place and return `&mut Self` for chaining. The
/// past-tense forms (`added`, `scaled`, ...) leave the receiver untouched and
/// return a new value.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    pub fn dot(&self, b: Vec2) -> f32 {
        self.x * b.x + self.y * b.y
    }

    pub fn set_vec(&mut self, v: Vec2) -> &mut Self {
        *self = v;
        self
    }

    /// `self = a + b`
    pub fn add2(&mut self, a: Vec2, b: Vec2) -> &mut Self {
        self.x = a.x + b.x;
        self.y = a.y + b.y;
        self
    }

    pub fn add(&mut self, b: Vec2) -> &mut Self {
        let a = *self;
        self.add2(a, b)
    }

    pub fn added(&self, b: Vec2) -> Vec2 {
        Vec2::new(self.x + b.x, self.y + b.y)
    }

    /// `self = a - b`
    pub fn sub2(&mut self, a: Vec2, b: Vec2) -> &mut Self {
        self.x = a.x - b.x;
        self.y = a.y - b.y;
        self
    }

    pub fn sub(&mut self, b: Vec2) -> &mut Self {
        let a = *self;
        self.sub2(a, b)
    }

    pub fn subbed(&self, b: Vec2) -> Vec2 {
        Vec2::new(self.x - b.x, self.y - b.y)
    }

    /// Component-wise multiply.
    pub fn mul(&mut self, b: Vec2) -> &mut Self {
        self.x *= b.x;
        self.y *= b.y;
        self
    }

    pub fn mulled(&self, b: Vec2) -> Vec2 {
        Vec2::new(self.x * b.x, self.y * b.y)
    }

    pub fn scale(&mut self, s: f32) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self
    }

    pub fn scaled(&self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }

    /// Move toward `b` by `t` (0 stays, 1 lands on `b`).
    pub fn lerp(&mut self, b: Vec2, t: f32) -> &mut Self {
        self.x += (b.x - self.x) * t;
        self.y += (b.y - self.y) * t;
        self
    }

    pub fn lerped(&self, b: Vec2, t: f32) -> Vec2 {
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
        self.x * self.x + self.y * self.y
    }

    /// Scale to unit length. A zero vector becomes NaN.
    pub fn normalize(&mut self) -> &mut Self {
        let inv = 1.0 / self.length();
        self.scale(inv)
    }

    pub fn normalized(&self) -> Vec2 {
        let mut v = *self;
        v.normalize();
        v
    }

    pub fn dist(&self, b: Vec2) -> f32 {
        self.dist_squared(b).sqrt()
    }

    pub fn dist_squared(&self, b: Vec2) -> f32 {
        let dx = self.x - b.x;
        let dy = self.y - b.y;
        dx * dx + dy * dy
    }

    /// Rotate counter-clockwise by `theta` radians.
    pub fn rotate(&mut self, theta: f32) -> &mut Self {
        let (s, c) = theta.sin_cos();
        let (x, y) = (self.x, self.y);
        self.x = x * c - y * s;
        self.y = x * s + y * c;
        self
    }

    pub fn rotated(&self, theta: f32) -> Vec2 {
        let mut v = *self;
        v.rotate(theta);
        v
    }

    /// Reflect about the unit normal `n`: `r = u - 2(u·n)n`.
    pub fn reflect(&mut self, n: Vec2) -> &mut Self {
        let d = 2.0 * self.dot(n);
        self.x -= n.x * d;
        self.y -= n.y * d;
        self
    }

    pub fn reflected(&self, n: Vec2) -> Vec2 {
        let mut v = *self;
        v.reflect(n);
        v
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {} y: {}", self.x, self.y)
    }
}

super::impl_vec_ops!(Vec2 { x, y }, 2);

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_in_place_chaining() {
        let mut v = Vec2::new(1.0, 2.0);
        v.add(Vec2::new(1.0, 1.0)).scale(2.0).sub(Vec2::new(0.0, 6.0));
        assert_eq!(v, Vec2::new(4.0, 0.0));
    }

    #[test]
    fn test_pure_forms_leave_receiver() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.added(Vec2::new(1.0, 1.0)), Vec2::new(4.0, 5.0));
        assert_eq!(v.subbed(Vec2::new(1.0, 1.0)), Vec2::new(2.0, 3.0));
        assert_eq!(v.mulled(Vec2::new(2.0, 0.5)), Vec2::new(6.0, 2.0));
        assert_eq!(v.scaled(0.5), Vec2::new(1.5, 2.0));
        assert_eq!(v, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_length_and_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
        assert!(approx(v.normalized(), Vec2::new(0.6, 0.8)));
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let v = Vec2::ZERO.normalized();
        assert!(v.x.is_nan() && v.y.is_nan());
    }

    #[test]
    fn test_reflect() {
        assert_eq!(Vec2::new(1.0, 0.0).reflected(Vec2::new(1.0, 0.0)), Vec2::new(-1.0, 0.0));
        // Glancing off the floor keeps the horizontal component
        let r = Vec2::new(0.6, -0.8).reflected(Vec2::new(0.0, 1.0));
        assert!(approx(r, Vec2::new(0.6, 0.8)));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = Vec2::X.rotated(std::f32::consts::FRAC_PI_2);
        assert!(approx(r, Vec2::Y));
    }

    #[test]
    fn test_dist() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert_eq!(a.dist_squared(b), 25.0);
        assert_eq!(a.dist(b), 5.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Vec2::new(-2.0, 7.0);
        let b = Vec2::new(10.0, 3.0);
        assert_eq!(a.lerped(b, 0.0), a);
        assert_eq!(a.lerped(b, 1.0), b);
        assert_eq!(a.lerped(b, 0.5), Vec2::new(4.0, 5.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec2::new(1.0, 2.5).to_string(), "x: 1 y: 2.5");
    }

    #[test]
    fn test_operators() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 5.0);
        assert_eq!(a + b, Vec2::new(4.0, 7.0));
        assert_eq!(b - a, Vec2::new(2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_two_operand_forms() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(5.0, -1.0);
        let mut v = Vec2::ZERO;
        v.add2(a, b);
        assert_eq!(v, Vec2::new(6.0, 1.0));
        v.sub2(a, b).scale(2.0);
        assert_eq!(v, Vec2::new(-8.0, 6.0));
        assert_eq!(*v.set_vec(a), a);
    }
}
