//! Linear algebra value types.
//!
//! Conventions:
//! - `f32` everywhere, all types `#[repr(C)]` and `Pod` so they can be written
//!   straight into GPU buffers
//! - matrices are row-major: `m[row][col]`, translation lives in column 4
//! - right-handed coordinates, counter-clockwise positive angles, radians
//!
//! Indexing out of range panics in every build profile. Use the `get`/`row`
//! accessors where an index comes from untrusted input.

#[macro_use]
mod macros;

mod mat4;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use mat4::Mat4;
pub use quat::Quat;
pub use vec2::{vec2, Vec2};
pub use vec3::{vec3, Vec3};
pub use vec4::{vec4, Vec4};

pub const PI32: f32 = std::f32::consts::PI;

/// Length below which `normalize_or_*` returns its fallback instead of dividing.
pub const NORMALIZE_EPSILON: f32 = 0.001;

#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * (PI32 / 180.0)
}

#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * (180.0 / PI32)
}

#[cold]
#[track_caller]
pub(crate) fn index_out_of_range(type_name: &str, index: usize, len: usize) -> ! {
    panic!("{type_name} index out of range: the len is {len} but the index is {index}")
}
