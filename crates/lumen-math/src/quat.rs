use approx::AbsDiffEq;
use bytemuck::{Pod, Zeroable};

use crate::{Mat4, Vec3, NORMALIZE_EPSILON};

/// Quaternion with real part `w` and imaginary part `(x, y, z)`.
///
/// Unit quaternions represent rotations. Multiplication follows the Hamilton
/// product, so `a * b` applies `b` first, then `a`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Quat::IDENTITY
    }
}

impl Quat {
    pub const ZERO: Quat = Quat::new(0.0, 0.0, 0.0, 0.0);
    pub const IDENTITY: Quat = Quat::new(1.0, 0.0, 0.0, 0.0);

    #[inline(always)]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    #[inline(always)]
    pub const fn identity() -> Self {
        Quat::IDENTITY
    }

    #[inline]
    pub fn set(&mut self, w: f32, x: f32, y: f32, z: f32) {
        *self = Quat::new(w, x, y, z);
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// `axis` is expected to be unit length; it is not normalized here.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (sha, cha) = (0.5 * angle).sin_cos();
        Quat::new(cha, axis.x * sha, axis.y * sha, axis.z * sha)
    }

    #[inline]
    pub fn set_from_axis_angle(&mut self, axis: Vec3, angle: f32) {
        *self = Quat::from_axis_angle(axis, angle);
    }

    /// Imaginary part as a vector.
    #[inline(always)]
    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Negates the imaginary part. For unit quaternions this is the inverse rotation.
    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Quat {
        Quat::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Negates all four components. Represents the same rotation as `self`.
    #[inline]
    #[must_use]
    pub fn negate(self) -> Quat {
        Quat::new(-self.w, -self.x, -self.y, -self.z)
    }

    #[inline]
    pub fn dot(a: Quat, b: Quat) -> f32 {
        a.w * b.w + a.x * b.x + a.y * b.y + a.z * b.z
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        Quat::dot(self, self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    fn scaled_to_unit(self) -> Option<Quat> {
        let len_sq = self.length_squared();
        if len_sq > NORMALIZE_EPSILON * NORMALIZE_EPSILON {
            let inv_len = 1.0 / len_sq.sqrt();
            Some(Quat::new(
                self.w * inv_len,
                self.x * inv_len,
                self.y * inv_len,
                self.z * inv_len,
            ))
        } else {
            None
        }
    }

    /// Unit-length copy of `self`, or [`Quat::ZERO`] for near-zero input.
    #[must_use]
    pub fn normalize_or_zero(self) -> Quat {
        self.scaled_to_unit().unwrap_or(Quat::ZERO)
    }

    /// Unit-length copy of `self`, or [`Quat::IDENTITY`] for near-zero input.
    #[must_use]
    pub fn normalize_or_identity(self) -> Quat {
        self.scaled_to_unit().unwrap_or(Quat::IDENTITY)
    }

    /// Rotates `v` by `self`, which must be unit length.
    pub fn rotate_vec3(self, v: Vec3) -> Vec3 {
        let w = self.w;
        let u = self.xyz();
        v * (w * w - Vec3::dot(u, u)) + u * (2.0 * Vec3::dot(u, v)) + Vec3::cross(u, v) * (2.0 * w)
    }

    /// Rotation matrix for a unit quaternion, embedded in a 4x4 identity.
    pub fn to_mat4(self) -> Mat4 {
        let Quat { w, x, y, z } = self;

        let x_sq = x * x;
        let y_sq = y * y;
        let z_sq = z * z;

        let xw = x * w;
        let yw = y * w;
        let zw = z * w;

        let xy = x * y;
        let xz = x * z;
        let yz = y * z;

        Mat4::from_rows_array([
            [1.0 - 2.0 * y_sq - 2.0 * z_sq, 2.0 * xy - 2.0 * zw, 2.0 * xz + 2.0 * yw, 0.0],
            [2.0 * xy + 2.0 * zw, 1.0 - 2.0 * x_sq - 2.0 * z_sq, 2.0 * yz - 2.0 * xw, 0.0],
            [2.0 * xz - 2.0 * yw, 2.0 * yz + 2.0 * xw, 1.0 - 2.0 * x_sq - 2.0 * y_sq, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

impl std::ops::Neg for Quat {
    type Output = Quat;

    #[inline]
    fn neg(self) -> Quat {
        self.negate()
    }
}

impl std::ops::Add for Quat {
    type Output = Quat;

    #[inline]
    fn add(self, rhs: Quat) -> Quat {
        Quat::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Quat {
    type Output = Quat;

    #[inline]
    fn sub(self, rhs: Quat) -> Quat {
        Quat::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul for Quat {
    type Output = Quat;

    /// Hamilton product.
    #[inline]
    fn mul(self, b: Quat) -> Quat {
        let a = self;
        Quat::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }
}

impl std::ops::Mul<Vec3> for Quat {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate_vec3(rhs)
    }
}

impl AbsDiffEq for Quat {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Quat, epsilon: f32) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}
