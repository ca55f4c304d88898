//! # 4x4 Matrix
//!
//! Row-major 4x4 transform matrix and the constructors the transform
//! pipeline needs: translation, uniform scale, axis-angle rotation, and
//! perspective projection.
//!
//! ## Convention
//!
//! One convention, used everywhere in this crate: **row vectors**.
//! Points are rows, transforming is `v * M`, and `a * b` means "apply
//! `a` first, then `b`", so a chain reads left to right:
//!
//! ```text
//! clip = v * model * view * projection
//! ```
//!
//! Translation therefore lives in the last *row*. Storage is
//! `[[f32; 4]; 4]` indexed `[row][col]`, and
//! [`TransformUniforms`](crate::gfx::TransformUniforms) uploads that
//! layout unchanged; a consumer expecting column vectors should
//! [`transpose`](Matrix4x4::transpose) first.

use std::ops::Mul;

use super::vector::{Vector3, Vector4};

/// A 4x4 float matrix in row-major layout, row-vector convention.
///
/// Value type: every operation returns a new matrix. Multiplication is
/// not commutative; composition order is preserved exactly as written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4x4 {
    pub m: [[f32; 4]; 4],
}

impl Matrix4x4 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// The entries as a row-major `[[f32; 4]; 4]` array.
    pub const fn to_array(self) -> [[f32; 4]; 4] {
        self.m
    }

    /// Swap rows and columns.
    pub fn transpose(self) -> Self {
        let m = &self.m;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0], m[3][0]],
            [m[0][1], m[1][1], m[2][1], m[3][1]],
            [m[0][2], m[1][2], m[2][2], m[3][2]],
            [m[0][3], m[1][3], m[2][3], m[3][3]],
        ])
    }

    /// Transform a point, treating it as homogeneous with `w = 1`.
    ///
    /// Applies the rotation/scale rows plus the translation row. The
    /// projective column is ignored; use [`transform`](Self::transform)
    /// when the result's `w` matters.
    pub fn transform_point(self, v: Vector3) -> Vector3 {
        let m = &self.m;
        Vector3::new(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0] + m[3][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1] + m[3][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2] + m[3][2],
        )
    }

    /// Full homogeneous transform; all four result components are
    /// computed.
    pub fn transform(self, v: Vector4) -> Vector4 {
        let m = &self.m;
        Vector4::new(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0] + v.w * m[3][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1] + v.w * m[3][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2] + v.w * m[3][2],
            v.x * m[0][3] + v.y * m[1][3] + v.z * m[2][3] + v.w * m[3][3],
        )
    }

    /// Translation by `t`, identity rotation/scale.
    pub const fn translation(t: Vector3) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [t.x, t.y, t.z, 1.0],
        ])
    }

    /// Uniform scale of x/y/z by `s`; the `w` row is unchanged.
    pub const fn uniform_scale(s: f32) -> Self {
        Self::from_rows([
            [s, 0.0, 0.0, 0.0],
            [0.0, s, 0.0, 0.0],
            [0.0, 0.0, s, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation of `angle` radians around `axis`, via Rodrigues' formula
    /// expanded per axis component.
    ///
    /// `axis` must already be unit length. This is a documented
    /// precondition, not a runtime check: a non-unit axis silently
    /// produces a matrix that also scales and shears.
    pub fn rotation_axis_angle(axis: Vector3, angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        let (x, y, z) = (axis.x, axis.y, axis.z);

        Self::from_rows([
            [
                x * x + (1.0 - x * x) * c,
                x * y * (1.0 - c) - z * s,
                x * z * (1.0 - c) + y * s,
                0.0,
            ],
            [
                x * y * (1.0 - c) + z * s,
                y * y + (1.0 - y * y) * c,
                y * z * (1.0 - c) - x * s,
                0.0,
            ],
            [
                x * z * (1.0 - c) - y * s,
                y * z * (1.0 - c) + x * s,
                z * z + (1.0 - z * z) * c,
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed perspective projection.
    ///
    /// `aspect` is width over height, `fovy` the vertical field of view
    /// in radians. Callers are expected to pass `aspect > 0`,
    /// `0 < fovy < pi`, and `0 < near < far`; `far == near` divides by
    /// zero and degenerate inputs propagate into the entries unchecked.
    pub fn perspective(aspect: f32, fovy: f32, near: f32, far: f32) -> Self {
        let y_scale = 1.0 / (fovy * 0.5).tan();
        let x_scale = y_scale / aspect;
        let z_range = far - near;
        let z_scale = -(far + near) / z_range;
        let wz_scale = -2.0 * far * near / z_range;

        Self::from_rows([
            [x_scale, 0.0, 0.0, 0.0],
            [0.0, y_scale, 0.0, 0.0],
            [0.0, 0.0, z_scale, -1.0],
            [0.0, 0.0, wz_scale, 0.0],
        ])
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;

    /// `a * b` composes "apply `a`, then `b`" under the row-vector
    /// convention.
    fn mul(self, rhs: Self) -> Self {
        let a = &self.m;
        let b = &rhs.m;
        let mut out = [[0.0f32; 4]; 4];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, entry) in out_row.iter_mut().enumerate() {
                *entry = a[row][0] * b[0][col]
                    + a[row][1] * b[1][col]
                    + a[row][2] * b[2][col]
                    + a[row][3] * b[3][col];
            }
        }
        Self::from_rows(out)
    }
}

impl Mul<Matrix4x4> for Vector4 {
    type Output = Vector4;

    fn mul(self, m: Matrix4x4) -> Vector4 {
        m.transform(self)
    }
}

impl Mul<Matrix4x4> for Vector3 {
    type Output = Vector3;

    fn mul(self, m: Matrix4x4) -> Vector3 {
        m.transform_point(self)
    }
}
