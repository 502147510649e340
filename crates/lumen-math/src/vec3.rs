use bytemuck::{Pod, Zeroable};

use crate::Vec4;

/// 3D vector. `x`/`y`/`z` double as the `r`/`g`/`b` channels of a color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl_vector!(Vec3, 3, x, y, z);

/// Shorthand for [`Vec3::new`].
#[inline(always)]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

impl Vec3 {
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    #[inline(always)]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline(always)]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    #[inline]
    pub fn dot(a: Vec3, b: Vec3) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    /// Right-handed cross product: `cross(X, Y) == Z`.
    #[inline]
    pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
        Vec3::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    #[inline]
    pub fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
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
    pub fn b(self) -> f32 {
        self.z
    }

    #[inline(always)]
    pub fn set_r(&mut self, r: f32) {
        self.x = r;
    }

    #[inline(always)]
    pub fn set_g(&mut self, g: f32) {
        self.y = g;
    }

    #[inline(always)]
    pub fn set_b(&mut self, b: f32) {
        self.z = b;
    }
}
