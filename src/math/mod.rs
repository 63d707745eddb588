//! Vector and matrix math
//!
//! Small value types for 2D/3D graphics:
//! - `Vec2`, `Vec3`, `Vec4`: points and/or vectors
//! - `Mat3`, `Mat4`: row-major transforms, serialized column-major for GL
//! - `scalar`: clamp/lerp/smoothstep/fract helpers
//!
//! Nothing here validates its input. Normalizing a zero vector or inverting a
//! singular matrix produces Inf/NaN.

/// Operator impls shared by the vector types.
macro_rules! impl_vec_ops {
    ($t:ident { $($f:ident),+ }, $n:literal) => {
        impl ::std::ops::Add for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: $t) -> $t {
                $t { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl ::std::ops::Sub for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: $t) -> $t {
                $t { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl ::std::ops::Neg for $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> $t {
                $t { $($f: -self.$f),+ }
            }
        }

        impl ::std::ops::Mul<f32> for $t {
            type Output = $t;
            #[inline]
            fn mul(self, s: f32) -> $t {
                $t { $($f: self.$f * s),+ }
            }
        }

        impl ::std::ops::Mul<$t> for f32 {
            type Output = $t;
            #[inline]
            fn mul(self, v: $t) -> $t {
                $t { $($f: v.$f * self),+ }
            }
        }

        impl ::std::ops::Div<f32> for $t {
            type Output = $t;
            #[inline]
            fn div(self, s: f32) -> $t {
                $t { $($f: self.$f / s),+ }
            }
        }

        impl ::std::ops::AddAssign for $t {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                $(self.$f += rhs.$f;)+
            }
        }

        impl ::std::ops::SubAssign for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                $(self.$f -= rhs.$f;)+
            }
        }

        impl ::std::ops::MulAssign<f32> for $t {
            #[inline]
            fn mul_assign(&mut self, s: f32) {
                $(self.$f *= s;)+
            }
        }

        impl From<[f32; $n]> for $t {
            #[inline]
            fn from(a: [f32; $n]) -> $t {
                ::bytemuck::cast(a)
            }
        }

        impl From<$t> for [f32; $n] {
            #[inline]
            fn from(v: $t) -> [f32; $n] {
                ::bytemuck::cast(v)
            }
        }
    };
}
pub(crate) use impl_vec_ops;

pub mod interop;
pub mod mat3;
pub mod mat4;
pub mod scalar;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use scalar::{clamp, fract, fract2, fract3, lerp, max, min, smootherstep, smoothstep};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
