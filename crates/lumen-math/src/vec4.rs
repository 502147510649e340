use bytemuck::{Pod, Zeroable};

use crate::Vec3;

/// 4D vector. `x`/`y`/`z`/`w` double as the `r`/`g`/`b`/`a` channels of an RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_vector!(Vec4, 4, x, y, z, w);

/// Shorthand for [`Vec4::new`].
#[inline(always)]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vec4::new(x, y, z, w)
}

impl Vec4 {
    #[inline(always)]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline(always)]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    #[inline]
    pub fn dot(a: Vec4, b: Vec4) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w
    }

    /// Drops `w`.
    #[inline]
    pub fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
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
    pub fn a(self) -> f32 {
        self.w
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

    #[inline(always)]
    pub fn set_a(&mut self, a: f32) {
        self.w = a;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rgba_view() {
        let mut c = vec4(0.2, 0.5, 0.8, 1.0);
        assert_eq!([c.r(), c.g(), c.b(), c.a()], [0.2, 0.5, 0.8, 1.0]);
        c.set_a(0.5);
        assert_eq!(c.w, 0.5);
        assert_eq!(c.truncate(), Vec3::new(0.2, 0.5, 0.8));
    }

    #[test]
    fn array_round_trip_preserves_order() {
        let v = Vec4::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v, vec4(1.0, 2.0, 3.0, 4.0));
        assert_eq!(<[f32; 4]>::from(v), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v[3], 4.0);
    }

    #[test]
    #[should_panic(expected = "Vec4 index out of range")]
    fn index_out_of_range_panics() {
        let _ = Vec4::ONE[4];
    }

    #[test]
    fn dot_and_norms() {
        let v = vec4(1.0, 1.0, 1.0, 1.0);
        assert_eq!(Vec4::dot(v, vec4(1.0, 2.0, 3.0, 4.0)), 10.0);
        assert_eq!(v.length(), 2.0);
        assert_abs_diff_eq!(v.normalize_or_zero(), Vec4::splat(0.5), epsilon = 1e-6);
        assert_eq!(Vec4::splat(0.0001).normalize_or_zero(), Vec4::ZERO);
    }

    #[test]
    fn in_place_componentwise() {
        let mut v = vec4(2.0, 4.0, 6.0, 8.0);
        v *= vec4(0.5, 0.5, 0.5, 0.5);
        assert_eq!(v, vec4(1.0, 2.0, 3.0, 4.0));
        v /= vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v, Vec4::ONE);
    }
}
