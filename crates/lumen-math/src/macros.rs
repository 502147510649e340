/// Shared implementation for the fixed-size float vectors.
///
/// Expects the type to be a `#[repr(C)]` struct of `$n` `f32` fields named by
/// `$field`, with `dot` and `from_array` defined alongside it.
macro_rules! impl_vector {
    ($name:ident, $n:expr, $($field:ident),+) => {
        impl $name {
            #[doc = concat!("[`", stringify!($name), "`] with all elements set to `0.0`.")]
            pub const ZERO: $name = $name::splat(0.0);
            #[doc = concat!("[`", stringify!($name), "`] with all elements set to `1.0`.")]
            pub const ONE: $name = $name::splat(1.0);

            #[doc = concat!("Constructs a [`", stringify!($name), "`] with every element set to `value`.")]
            #[inline(always)]
            #[must_use]
            pub const fn splat(value: f32) -> $name {
                $name { $($field: value),+ }
            }

            /// Applies `f` to each element in order.
            #[inline(always)]
            #[must_use]
            pub fn map<F>(self, mut f: F) -> $name
            where
                F: FnMut(f32) -> f32,
            {
                $name { $($field: f(self.$field)),+ }
            }

            /// Applies `f` to each pair of corresponding elements in order.
            #[inline(always)]
            #[must_use]
            pub fn map2<F>(self, rhs: $name, mut f: F) -> $name
            where
                F: FnMut(f32, f32) -> f32,
            {
                $name { $($field: f(self.$field, rhs.$field)),+ }
            }

            #[inline(always)]
            pub fn as_array(&self) -> &[f32; $n] {
                bytemuck::cast_ref(self)
            }

            #[inline(always)]
            pub fn as_array_mut(&mut self) -> &mut [f32; $n] {
                bytemuck::cast_mut(self)
            }

            /// Returns element `index`, or `None` when `index` is out of range.
            #[inline]
            pub fn get(self, index: usize) -> Option<f32> {
                self.as_array().get(index).copied()
            }

            /// Sum of the squared elements. Avoids the `sqrt` in [`Self::length`].
            #[inline]
            #[must_use]
            pub fn length_squared(self) -> f32 {
                Self::dot(self, self)
            }

            #[inline]
            #[must_use]
            pub fn length(self) -> f32 {
                self.length_squared().sqrt()
            }

            /// Returns `self` scaled to unit length, or [`Self::ZERO`] when the
            /// length does not exceed [`crate::NORMALIZE_EPSILON`].
            #[inline]
            #[must_use]
            pub fn normalize_or_zero(self) -> $name {
                let len_sq = self.length_squared();
                if len_sq > crate::NORMALIZE_EPSILON * crate::NORMALIZE_EPSILON {
                    let inv_len = 1.0 / len_sq.sqrt();
                    self * inv_len
                } else {
                    $name::ZERO
                }
            }

            /// Element-by-element product, same as `a * b`.
            #[inline]
            #[must_use]
            pub fn componentwise_product(a: $name, b: $name) -> $name {
                a.map2(b, |a, b| a * b)
            }
        }

        impl From<[f32; $n]> for $name {
            #[inline(always)]
            fn from(array: [f32; $n]) -> $name {
                $name::from_array(array)
            }
        }

        impl From<$name> for [f32; $n] {
            #[inline(always)]
            fn from(value: $name) -> [f32; $n] {
                *value.as_array()
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = f32;

            #[inline]
            #[track_caller]
            fn index(&self, index: usize) -> &f32 {
                match self.as_array().get(index) {
                    Some(value) => value,
                    None => crate::index_out_of_range(stringify!($name), index, $n),
                }
            }
        }

        impl std::ops::IndexMut<usize> for $name {
            #[inline]
            #[track_caller]
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                match self.as_array_mut().get_mut(index) {
                    Some(value) => value,
                    None => crate::index_out_of_range(stringify!($name), index, $n),
                }
            }
        }

        impl std::ops::Neg for $name {
            type Output = $name;
            #[inline]
            fn neg(self) -> $name {
                self.map(|x| -x)
            }
        }

        impl std::ops::Add for $name {
            type Output = $name;
            #[inline]
            fn add(self, rhs: $name) -> $name {
                self.map2(rhs, |a, b| a + b)
            }
        }

        impl std::ops::Sub for $name {
            type Output = $name;
            #[inline]
            fn sub(self, rhs: $name) -> $name {
                self.map2(rhs, |a, b| a - b)
            }
        }

        impl std::ops::Mul for $name {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: $name) -> $name {
                self.map2(rhs, |a, b| a * b)
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: f32) -> $name {
                self.map(|x| x * rhs)
            }
        }

        impl std::ops::Mul<$name> for f32 {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: $name) -> $name {
                rhs.map(|x| self * x)
            }
        }

        impl std::ops::Div for $name {
            type Output = $name;
            #[inline]
            fn div(self, rhs: $name) -> $name {
                self.map2(rhs, |a, b| a / b)
            }
        }

        impl std::ops::Div<f32> for $name {
            type Output = $name;
            #[inline]
            fn div(self, rhs: f32) -> $name {
                let inv = 1.0 / rhs;
                self.map(|x| x * inv)
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: $name) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: $name) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl std::ops::MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: $name) {
                $(self.$field *= rhs.$field;)+
            }
        }

        impl std::ops::MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                $(self.$field *= rhs;)+
            }
        }

        impl std::ops::DivAssign for $name {
            #[inline]
            fn div_assign(&mut self, rhs: $name) {
                $(self.$field /= rhs.$field;)+
            }
        }

        impl std::ops::DivAssign<f32> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                let inv = 1.0 / rhs;
                $(self.$field *= inv;)+
            }
        }

        impl approx::AbsDiffEq for $name {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::EPSILON
            }

            fn abs_diff_eq(&self, other: &$name, epsilon: f32) -> bool {
                true $(&& approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))+
            }
        }

        impl approx::RelativeEq for $name {
            fn default_max_relative() -> f32 {
                f32::EPSILON
            }

            fn relative_eq(&self, other: &$name, epsilon: f32, max_relative: f32) -> bool {
                true $(&& approx::RelativeEq::relative_eq(
                    &self.$field,
                    &other.$field,
                    epsilon,
                    max_relative,
                ))+
            }
        }
    };
}
