use bytemuck::{Pod, Zeroable};

use crate::{Vec3, Vec4};

/// 4x4 row-major matrix.
///
/// `m[row][col]` addresses row `row`, column `col`. Translation lives in the
/// last column (`m[0][3]`, `m[1][3]`, `m[2][3]`), so points are transformed as
/// column vectors: `m * v`.
///
/// GPU APIs expecting column-major data need [`Mat4::to_cols_array`].
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub rows: [Vec4; 4],
}

impl Mat4 {
    pub const ZERO: Mat4 = Mat4::from_rows_array([
        [0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0],
    ]);

    pub const IDENTITY: Mat4 = Mat4::from_rows_array([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    #[inline(always)]
    pub const fn identity() -> Mat4 {
        Mat4::IDENTITY
    }

    #[inline(always)]
    pub const fn from_rows(rows: [Vec4; 4]) -> Mat4 {
        Mat4 { rows }
    }

    #[inline(always)]
    pub const fn from_rows_array(rows: [[f32; 4]; 4]) -> Mat4 {
        Mat4 {
            rows: [
                Vec4::from_array(rows[0]),
                Vec4::from_array(rows[1]),
                Vec4::from_array(rows[2]),
                Vec4::from_array(rows[3]),
            ],
        }
    }

    #[inline(always)]
    pub fn as_rows_array(&self) -> &[[f32; 4]; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline(always)]
    pub fn as_rows_array_mut(&mut self) -> &mut [[f32; 4]; 4] {
        bytemuck::cast_mut(self)
    }

    /// Returns row `index`, or `None` when `index >= 4`.
    #[inline]
    pub fn row(&self, index: usize) -> Option<Vec4> {
        self.rows.get(index).copied()
    }

    /// Returns element `(row, col)`, or `None` when either index is out of range.
    #[inline]
    pub fn element(&self, row: usize, col: usize) -> Option<f32> {
        self.row(row).and_then(|r| r.get(col))
    }

    /// Copies the matrix out in column-major order (`result[col][row]`).
    #[inline]
    pub fn to_cols_array(&self) -> [[f32; 4]; 4] {
        *self.transpose().as_rows_array()
    }

    #[must_use]
    pub fn transpose(&self) -> Mat4 {
        let m = self.as_rows_array();
        let mut result = Mat4::ZERO;
        let out = result.as_rows_array_mut();
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, value) in out_row.iter_mut().enumerate() {
                *value = m[col][row];
            }
        }
        result
    }

    /// Non-uniform scale along x/y/z. The w diagonal stays `1.0`.
    pub fn from_scale(scale: Vec3) -> Mat4 {
        Mat4::from_rows_array([
            [scale.x, 0.0, 0.0, 0.0],
            [0.0, scale.y, 0.0, 0.0],
            [0.0, 0.0, scale.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Uniform scale along x/y/z. The w diagonal stays `1.0`.
    pub fn from_uniform_scale(scale: f32) -> Mat4 {
        Mat4::from_scale(Vec3::splat(scale))
    }

    pub fn from_translation(translation: Vec3) -> Mat4 {
        Mat4::from_rows_array([
            [1.0, 0.0, 0.0, translation.x],
            [0.0, 1.0, 0.0, translation.y],
            [0.0, 0.0, 1.0, translation.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation of `phi` radians about +X.
    pub fn x_rotation(phi: f32) -> Mat4 {
        let (sp, cp) = phi.sin_cos();
        Mat4::from_rows_array([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cp, -sp, 0.0],
            [0.0, sp, cp, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation of `phi` radians about +Y.
    pub fn y_rotation(phi: f32) -> Mat4 {
        let (sp, cp) = phi.sin_cos();
        Mat4::from_rows_array([
            [cp, 0.0, sp, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sp, 0.0, cp, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation of `phi` radians about +Z.
    pub fn z_rotation(phi: f32) -> Mat4 {
        let (sp, cp) = phi.sin_cos();
        Mat4::from_rows_array([
            [cp, -sp, 0.0, 0.0],
            [sp, cp, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[must_use]
    #[inline]
    pub fn mul_vec4(&self, vec: Vec4) -> Vec4 {
        Vec4::new(
            Vec4::dot(self.rows[0], vec),
            Vec4::dot(self.rows[1], vec),
            Vec4::dot(self.rows[2], vec),
            Vec4::dot(self.rows[3], vec),
        )
    }

    /// Transforms `point` with an implicit `w = 1`, dropping the resulting `w`.
    #[must_use]
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.mul_vec4(point.extend(1.0)).truncate()
    }

    /// Transforms `vec` with an implicit `w = 0`, so translation is ignored.
    #[must_use]
    #[inline]
    pub fn transform_vector(&self, vec: Vec3) -> Vec3 {
        self.mul_vec4(vec.extend(0.0)).truncate()
    }
}

impl std::ops::Index<usize> for Mat4 {
    type Output = Vec4;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Vec4 {
        match self.rows.get(index) {
            Some(row) => row,
            None => crate::index_out_of_range("Mat4", index, 4),
        }
    }
}

impl std::ops::IndexMut<usize> for Mat4 {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Vec4 {
        match self.rows.get_mut(index) {
            Some(row) => row,
            None => crate::index_out_of_range("Mat4", index, 4),
        }
    }
}

impl std::ops::Add for Mat4 {
    type Output = Mat4;

    #[inline]
    fn add(self, rhs: Mat4) -> Mat4 {
        Mat4 {
            rows: [
                self.rows[0] + rhs.rows[0],
                self.rows[1] + rhs.rows[1],
                self.rows[2] + rhs.rows[2],
                self.rows[3] + rhs.rows[3],
            ],
        }
    }
}

impl std::ops::Sub for Mat4 {
    type Output = Mat4;

    #[inline]
    fn sub(self, rhs: Mat4) -> Mat4 {
        Mat4 {
            rows: [
                self.rows[0] - rhs.rows[0],
                self.rows[1] - rhs.rows[1],
                self.rows[2] - rhs.rows[2],
                self.rows[3] - rhs.rows[3],
            ],
        }
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Mat4;

    /// Row-by-column product: `result[i][j] = Σk self[i][k] * rhs[k][j]`.
    fn mul(self, rhs: Mat4) -> Mat4 {
        let lhs = self.as_rows_array();
        let rhs = rhs.as_rows_array();
        let mut result = Mat4::ZERO;
        let out = result.as_rows_array_mut();
        for i in 0..4 {
            for j in 0..4 {
                out[i][j] = lhs[i][0] * rhs[0][j]
                    + lhs[i][1] * rhs[1][j]
                    + lhs[i][2] * rhs[2][j]
                    + lhs[i][3] * rhs[3][j];
            }
        }
        result
    }
}

impl std::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.mul_vec4(rhs)
    }
}

impl std::ops::MulAssign for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Mat4) {
        *self = *self * rhs;
    }
}

impl approx::AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Mat4, epsilon: f32) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

impl approx::RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Mat4, epsilon: f32, max_relative: f32) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}
