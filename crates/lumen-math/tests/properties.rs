//! Algebraic properties checked over a fixed spread of inputs.

use approx::assert_abs_diff_eq;
use lumen_math::{
    to_degrees, to_radians, vec2, vec3, vec4, Mat4, Quat, Vec2, Vec3, Vec4, NORMALIZE_EPSILON, PI32,
};

const SAMPLES: [f32; 9] = [-7.5, -1.0, -0.25, 0.0, 0.0004, 0.5, 1.0, 3.0, 12.0];

fn vec3_samples() -> impl Iterator<Item = Vec3> {
    SAMPLES.iter().enumerate().map(|(i, &s)| {
        vec3(s, SAMPLES[(i + 3) % SAMPLES.len()], SAMPLES[(i + 5) % SAMPLES.len()])
    })
}

fn vec4_samples() -> impl Iterator<Item = Vec4> {
    vec3_samples().zip(SAMPLES.iter().rev()).map(|(v, &w)| v.extend(w))
}

fn mat4_samples() -> Vec<Mat4> {
    let mut out = vec![
        Mat4::IDENTITY,
        Mat4::from_translation(vec3(1.0, -2.0, 3.0)),
        Mat4::from_scale(vec3(2.0, 0.5, -1.0)),
        Mat4::x_rotation(0.3) * Mat4::y_rotation(-1.2),
    ];
    let rows: Vec<Vec4> = vec4_samples().collect();
    for window in rows.windows(4) {
        out.push(Mat4::from_rows([window[0], window[1], window[2], window[3]]));
    }
    out
}

// ── vectors ───────────────────────────────────────────────────────────────

#[test]
fn normalize_or_zero_is_unit_or_zero() {
    for v in vec3_samples() {
        let n = v.normalize_or_zero();
        if v.length() > NORMALIZE_EPSILON {
            assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-5);
        } else {
            assert_eq!(n, Vec3::ZERO);
        }
    }
    for v in vec4_samples() {
        let n = v.normalize_or_zero();
        if v.length() > NORMALIZE_EPSILON {
            assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-5);
        } else {
            assert_eq!(n, Vec4::ZERO);
        }
    }
}

#[test]
fn dot_is_commutative() {
    for (a, b) in vec3_samples().zip(vec3_samples().skip(2)) {
        assert_eq!(Vec3::dot(a, b), Vec3::dot(b, a));

        let (a2, b2) = (vec2(a.x, a.y), vec2(b.z, b.x));
        assert_eq!(Vec2::dot(a2, b2), Vec2::dot(b2, a2));

        let (a4, b4) = (a.extend(b.y), b.extend(a.z));
        assert_eq!(Vec4::dot(a4, b4), Vec4::dot(b4, a4));
    }
}

#[test]
fn cross_is_anticommutative() {
    for (a, b) in vec3_samples().zip(vec3_samples().skip(1)) {
        assert_eq!(Vec3::cross(a, b), -Vec3::cross(b, a));
    }
}

#[test]
fn scalar_multiplication_commutes() {
    for v in vec4_samples() {
        assert_eq!(v * 2.5, 2.5 * v);
    }
}

#[test]
fn in_place_operators_match_pure_operators() {
    for (a, b) in vec4_samples().zip(vec4_samples().skip(4)) {
        let mut acc = a;
        acc += b;
        assert_eq!(acc, a + b);

        let mut acc = a;
        acc -= b;
        assert_eq!(acc, a - b);

        let mut acc = a;
        acc *= 3.0;
        assert_eq!(acc, a * 3.0);

        let mut acc = a;
        acc /= 4.0;
        assert_eq!(acc, a / 4.0);
    }
}

// ── matrices ──────────────────────────────────────────────────────────────

#[test]
fn identity_is_neutral() {
    for m in mat4_samples() {
        assert_eq!(Mat4::identity() * m, m);
        assert_eq!(m * Mat4::identity(), m);
    }
}

#[test]
fn transpose_twice_restores_matrix() {
    for m in mat4_samples() {
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn transpose_reverses_products() {
    let samples = mat4_samples();
    for (a, b) in samples.iter().zip(samples.iter().skip(1)) {
        assert_abs_diff_eq!((*a * *b).transpose(), b.transpose() * a.transpose(), epsilon = 1e-3);
    }
}

#[test]
fn rotations_preserve_length() {
    let v = vec3(1.0, -2.0, 0.5);
    for angle in SAMPLES {
        for m in [Mat4::x_rotation(angle), Mat4::y_rotation(angle), Mat4::z_rotation(angle)] {
            assert_abs_diff_eq!(m.transform_point(v).length(), v.length(), epsilon = 1e-5);
        }
    }
}

#[test]
fn zero_x_rotation_is_identity() {
    assert_eq!(Mat4::x_rotation(0.0), Mat4::identity());
}

#[test]
fn matrix_times_vector_uses_rows() {
    let m = Mat4::from_rows([
        vec4(1.0, 0.0, 0.0, 5.0),
        vec4(0.0, 2.0, 0.0, 0.0),
        vec4(0.0, 0.0, 3.0, 0.0),
        vec4(0.0, 0.0, 0.0, 1.0),
    ]);
    assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(6.0, 2.0, 3.0, 1.0));
}

// ── quaternions ───────────────────────────────────────────────────────────

#[test]
fn normalize_or_identity_is_unit_or_identity() {
    for v in vec4_samples() {
        let q = Quat::new(v.w, v.x, v.y, v.z);
        let n = q.normalize_or_identity();
        if q.length() > NORMALIZE_EPSILON {
            assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-5);
        } else {
            assert_eq!(n, Quat::IDENTITY);
        }
    }
    assert_eq!(Quat::ZERO.normalize_or_identity(), Quat::IDENTITY);
    assert_eq!(Quat::ZERO.normalize_or_zero(), Quat::ZERO);
}

#[test]
fn identity_quaternion_to_matrix_is_identity() {
    assert_eq!(Quat::identity().to_mat4(), Mat4::identity());
}

#[test]
fn unit_quaternion_matrices_are_orthonormal() {
    for v in vec3_samples() {
        let axis = v.normalize_or_zero();
        if axis == Vec3::ZERO {
            continue;
        }
        let m = Quat::from_axis_angle(axis, 0.9).to_mat4();
        assert_abs_diff_eq!(m * m.transpose(), Mat4::IDENTITY, epsilon = 1e-5);
    }
}

#[test]
fn conjugate_undoes_rotation() {
    let q = Quat::from_axis_angle(vec3(0.0, 0.6, 0.8), 2.0);
    for v in vec3_samples() {
        assert_abs_diff_eq!(q.conjugate() * (q * v), v, epsilon = 1e-4);
    }
}

// ── angles ────────────────────────────────────────────────────────────────

#[test]
fn degree_radian_conversions() {
    assert_abs_diff_eq!(to_radians(180.0), PI32, epsilon = 1e-5);
    assert_abs_diff_eq!(to_degrees(PI32), 180.0, epsilon = 1e-5);
}
