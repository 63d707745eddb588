//! Scalar helpers shared by the vector types and the sketches
//!
//! These follow GLSL conventions where GLSL has an equivalent.

pub const PI: f32 = std::f32::consts::PI;
/// π / 2
pub const PI2: f32 = std::f32::consts::FRAC_PI_2;
/// π / 4
pub const PI4: f32 = std::f32::consts::FRAC_PI_4;
pub const TWO_PI: f32 = std::f32::consts::TAU;

/// Returns `a` if `a < b`, otherwise `b` (so a NaN in `a` yields `b`).
#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a < b { a } else { b }
}

/// Returns `a` if `a > b`, otherwise `b`.
#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a > b { a } else { b }
}

/// Keep `v` in the range `vmin..=vmax`. Matches GLSL `clamp()`.
#[inline]
pub fn clamp(v: f32, vmin: f32, vmax: f32) -> f32 {
    min(vmax, max(vmin, v))
}

/// Linear interpolation on the line through `(0, a)` and `(1, b)`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite interpolation between 0 and 1 as `x` moves from `edge0` to `edge1`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - t - t)
}

/// Ken Perlin's variant of [`smoothstep`] with zero first and second derivatives
/// at the edges.
#[inline]
pub fn smootherstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// GLSL `fract`: `x - floor(x)`, always in `[0, 1)`.
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Fractional part of `|x|`.
#[inline]
pub fn fract2(x: f32) -> f32 {
    let x = x.abs();
    x - x.floor()
}

/// Fractional part keeping the sign of `x` (`x - trunc(x)`).
#[inline]
pub fn fract3(x: f32) -> f32 {
    x - x.trunc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fracts() {
        assert_eq!(fract(1.25), 0.25);
        assert_eq!(fract(-1.75), 0.25);
        assert_eq!(fract2(1.25), 0.25);
        assert_eq!(fract2(-1.25), 0.25);
        assert_eq!(fract3(1.25), 0.25);
        assert_eq!(fract3(-1.25), -0.25);
    }

    #[test]
    fn test_clamp_matches_glsl() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.3, 0.0, 1.0), 0.3);
        // Both comparisons are false for NaN, so it passes straight through
        assert!(clamp(f32::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(50.0, 100.0, 0.0), 50.0);
        assert_eq!(lerp(50.0, 100.0, 1.0), 100.0);
        assert_eq!(lerp(50.0, 100.0, 0.5), 75.0);
    }

    #[test]
    fn test_smoothstep_shape() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((smoothstep(10.0, 20.0, 12.5) - 0.15625).abs() < 1e-6);

        assert_eq!(smootherstep(0.0, 1.0, 0.0), 0.0);
        assert_eq!(smootherstep(0.0, 1.0, 1.0), 1.0);
        assert!((smootherstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
        // Flatter than smoothstep near the edges
        assert!(smootherstep(0.0, 1.0, 0.1) < smoothstep(0.0, 1.0, 0.1));
    }
}
