use bytemuck::{Pod, Zeroable};

use crate::Vec3;

/// 2D vector. `x`/`y` double as the `r`/`g` channels of a two-channel color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl_vector!(Vec2, 2, x, y);

/// Shorthand for [`Vec2::new`].
#[inline(always)]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

impl Vec2 {
    pub const X: Vec2 = Vec2::new(1.0, 0.0);
    pub const Y: Vec2 = Vec2::new(0.0, 1.0);

    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    #[inline]
    pub fn dot(a: Vec2, b: Vec2) -> f32 {
        a.x * b.x + a.y * b.y
    }

    #[inline]
    pub fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }

    #[inline(always)]
    pub fn r(self) -> f32 {
        self.x
    }

    #[inline(always)]
    pub fn g(self) -> f32 {
        self.y
    }

    #[inline(always)]
    pub fn set_r(&mut self, r: f32) {
        self.x = r;
    }

    #[inline(always)]
    pub fn set_g(&mut self, g: f32) {
        self.y = g;
    }
}
