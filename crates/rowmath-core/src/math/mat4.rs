// SPDX-License-Identifier: Apache-2.0
use tracing::debug;

use crate::math::Vec3;
use crate::MathError;

/// Row-major 4×4 matrix using the row-vector convention.
///
/// - Points are rows multiplied on the left: `v' = v * M`.
/// - Row 3 holds the translation; column 3 holds the projective terms.
/// - Composition reads left to right, so `S * R * T` scales, then rotates,
///   then translates.
///
/// # Examples
/// ```
/// use rowmath_core::{Mat4, Vec3};
/// let t = Mat4::translation(Vec3::new(5.0, -3.0, 2.0));
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Precision
/// All entries are `f32`; chained multiplies accumulate rounding, so compare
/// results with [`Mat4::approx_eq`] rather than `==` unless the inputs are
/// exactly representable.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Mat4 {
    m: [[f32; 4]; 4],
}

impl Mat4 {
    /// The all-zero matrix. Also the sentinel returned by [`Mat4::inverse`]
    /// for singular input.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a matrix from its four rows.
    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    /// Returns the four rows.
    pub fn rows(&self) -> [[f32; 4]; 4] {
        self.m
    }

    /// Entry at `row`, `col`.
    ///
    /// # Panics
    /// Panics if either index is outside `0..4`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[row][col]
    }

    /// Returns the entries flattened row by row.
    pub fn to_array(self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (row, chunk) in self.m.iter().zip(out.chunks_exact_mut(4)) {
            chunk.copy_from_slice(row);
        }
        out
    }

    /// Builds a translation matrix; the offset lands in row 3.
    pub fn translation(translate: Vec3) -> Self {
        let [tx, ty, tz] = translate.to_array();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [tx, ty, tz, 1.0],
        ])
    }

    /// Builds a non-uniform scale matrix.
    pub fn scaling(scale: Vec3) -> Self {
        let [sx, sy, sz] = scale.to_array();
        Self::from_rows([
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, sz, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the X axis by `radian`.
    #[rustfmt::skip]
    pub fn rotation_x(radian: f32) -> Self {
        let (s, c) = radian.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c,   s,   0.0],
            [0.0, -s,  c,   0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Y axis by `radian`.
    #[rustfmt::skip]
    pub fn rotation_y(radian: f32) -> Self {
        let (s, c) = radian.sin_cos();
        Self::from_rows([
            [c,   0.0, -s,  0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s,   0.0, c,   0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Z axis by `radian`.
    #[rustfmt::skip]
    pub fn rotation_z(radian: f32) -> Self {
        let (s, c) = radian.sin_cos();
        Self::from_rows([
            [c,   s,   0.0, 0.0],
            [-s,  c,   0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Euler rotation `Rx(roll) * Ry(pitch) * Rz(yaw)`.
    ///
    /// The composition order is fixed; callers needing another order should
    /// multiply the single-axis matrices themselves.
    pub fn rotation_euler(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self::rotation_x(roll)
            .multiply(&Self::rotation_y(pitch))
            .multiply(&Self::rotation_z(yaw))
    }

    /// Rotation of `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// `axis` must already be unit length; it is not normalized here.
    pub fn rotation_axis_angle(axis: Vec3, angle: f32) -> Self {
        let [x, y, z] = axis.to_array();
        let (s, c) = angle.sin_cos();
        let k = 1.0 - c;
        Self::from_rows([
            [x * x * k + c, x * y * k + z * s, x * z * k - y * s, 0.0],
            [x * y * k - z * s, y * y * k + c, y * z * k + x * s, 0.0],
            [x * z * k + y * s, y * z * k - x * s, z * z * k + c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Affine world matrix `S * R * T`.
    ///
    /// `rotate` holds `(roll, pitch, yaw)` and goes through
    /// [`Mat4::rotation_euler`].
    pub fn affine(scale: Vec3, rotate: Vec3, translate: Vec3) -> Self {
        let s = Self::scaling(scale);
        let r = Self::rotation_euler(rotate.x(), rotate.y(), rotate.z());
        let t = Self::translation(translate);
        s.multiply(&r).multiply(&t)
    }

    /// Perspective projection from a vertical field of view (radians).
    ///
    /// View-space depth `near..far` maps to `0..1` after the divide by `w`
    /// (`w` takes the view-space `z`). Requires `far != near`.
    pub fn perspective_fov(fov_y: f32, aspect_ratio: f32, near_clip: f32, far_clip: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let depth = far_clip - near_clip;
        let mut m = Self::ZERO;
        m.m[0][0] = f / aspect_ratio;
        m.m[1][1] = f;
        m.m[2][2] = far_clip / depth;
        m.m[2][3] = 1.0;
        m.m[3][2] = (-near_clip * far_clip) / depth;
        m
    }

    /// Orthographic projection of the box `left..right`, `bottom..top`,
    /// `near..far` onto x, y in `-1..1` and depth in `0..1`.
    ///
    /// Requires `right != left`, `top != bottom`, and `far != near`.
    pub fn orthographic(
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        near_clip: f32,
        far_clip: f32,
    ) -> Self {
        Self::from_rows([
            [2.0 / (right - left), 0.0, 0.0, 0.0],
            [0.0, 2.0 / (top - bottom), 0.0, 0.0],
            [0.0, 0.0, 1.0 / (far_clip - near_clip), 0.0],
            [
                (left + right) / (left - right),
                (top + bottom) / (bottom - top),
                near_clip / (near_clip - far_clip),
                1.0,
            ],
        ])
    }

    /// Maps NDC onto a screen rectangle with a top-left origin.
    ///
    /// NDC `y = +1` lands on `top`, so the Y scale is negative. Depth maps
    /// `0..1` onto `min_depth..max_depth`.
    pub fn viewport(
        left: f32,
        top: f32,
        width: f32,
        height: f32,
        min_depth: f32,
        max_depth: f32,
    ) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self::from_rows([
            [half_w, 0.0, 0.0, 0.0],
            [0.0, -half_h, 0.0, 0.0],
            [0.0, 0.0, max_depth - min_depth, 0.0],
            [left + half_w, top + half_h, min_depth, 1.0],
        ])
    }

    /// Element-wise sum.
    pub fn add(&self, rhs: &Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Element-wise difference.
    pub fn sub(&self, rhs: &Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                out.m[row][col] = f(self.m[row][col], rhs.m[row][col]);
            }
        }
        out
    }

    /// Matrix product `self * rhs`.
    ///
    /// With row vectors, `v * (A * B)` applies `A` first and `B` second.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let a = &self.m;
        let b = &rhs.m;
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                out.m[row][col] = a[row][0] * b[0][col]
                    + a[row][1] * b[1][col]
                    + a[row][2] * b[2][col]
                    + a[row][3] * b[3][col];
            }
        }
        out
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                out.m[row][col] = self.m[col][row];
            }
        }
        out
    }

    /// Determinant via the full 24-term expansion.
    #[rustfmt::skip]
    pub fn determinant(&self) -> f32 {
        let [
            [a00, a01, a02, a03],
            [a10, a11, a12, a13],
            [a20, a21, a22, a23],
            [a30, a31, a32, a33],
        ] = self.m;
        a00 * a11 * a22 * a33 + a00 * a12 * a23 * a31 + a00 * a13 * a21 * a32
            - a00 * a13 * a22 * a31 - a00 * a12 * a21 * a33 - a00 * a11 * a23 * a32
            - a01 * a10 * a22 * a33 - a02 * a10 * a23 * a31 - a03 * a10 * a21 * a32
            + a03 * a10 * a22 * a31 + a02 * a10 * a21 * a33 + a01 * a10 * a23 * a32
            + a01 * a12 * a20 * a33 + a02 * a13 * a20 * a31 + a03 * a11 * a20 * a32
            - a03 * a12 * a20 * a31 - a02 * a11 * a20 * a33 - a01 * a13 * a20 * a32
            - a01 * a12 * a23 * a30 - a02 * a13 * a21 * a30 - a03 * a11 * a22 * a30
            + a03 * a12 * a21 * a30 + a02 * a11 * a23 * a30 + a01 * a13 * a22 * a30
    }

    /// Inverse via the adjugate divided by the determinant.
    ///
    /// A determinant of exactly `0.0` returns [`Mat4::ZERO`] instead of
    /// failing; callers that need to tell the two apart should use
    /// [`Mat4::checked_inverse`].
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == 0.0 {
            debug!(target: "rowmath::mat4", "inverse of singular matrix; returning zero sentinel");
            return Self::ZERO;
        }
        let adj = self.adjugate();
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                out.m[row][col] = adj.m[row][col] / det;
            }
        }
        out
    }

    /// Like [`Mat4::inverse`] but reports a zero determinant as
    /// [`MathError::Singular`].
    pub fn checked_inverse(&self) -> Result<Self, MathError> {
        if self.determinant() == 0.0 {
            return Err(MathError::Singular);
        }
        Ok(self.inverse())
    }

    #[rustfmt::skip]
    fn adjugate(&self) -> Self {
        let [
            [a00, a01, a02, a03],
            [a10, a11, a12, a13],
            [a20, a21, a22, a23],
            [a30, a31, a32, a33],
        ] = self.m;
        Self::from_rows([
            [
                a11 * a22 * a33 + a12 * a23 * a31 + a13 * a21 * a32
                    - a13 * a22 * a31 - a12 * a21 * a33 - a11 * a23 * a32,
                -a01 * a22 * a33 - a02 * a23 * a31 - a03 * a21 * a32
                    + a03 * a22 * a31 + a02 * a21 * a33 + a01 * a23 * a32,
                a01 * a12 * a33 + a02 * a13 * a31 + a03 * a11 * a32
                    - a03 * a12 * a31 - a02 * a11 * a33 - a01 * a13 * a32,
                -a01 * a12 * a23 - a02 * a13 * a21 - a03 * a11 * a22
                    + a03 * a12 * a21 + a02 * a11 * a23 + a01 * a13 * a22,
            ],
            [
                -a10 * a22 * a33 - a12 * a23 * a30 - a13 * a20 * a32
                    + a13 * a22 * a30 + a12 * a20 * a33 + a10 * a23 * a32,
                a00 * a22 * a33 + a02 * a23 * a30 + a03 * a20 * a32
                    - a03 * a22 * a30 - a02 * a20 * a33 - a00 * a23 * a32,
                -a00 * a12 * a33 - a02 * a13 * a30 - a03 * a10 * a32
                    + a03 * a12 * a30 + a02 * a10 * a33 + a00 * a13 * a32,
                a00 * a12 * a23 + a02 * a13 * a20 + a03 * a10 * a22
                    - a03 * a12 * a20 - a02 * a10 * a23 - a00 * a13 * a22,
            ],
            [
                a10 * a21 * a33 + a11 * a23 * a30 + a13 * a20 * a31
                    - a13 * a21 * a30 - a11 * a20 * a33 - a10 * a23 * a31,
                -a00 * a21 * a33 - a01 * a23 * a30 - a03 * a20 * a31
                    + a03 * a21 * a30 + a01 * a20 * a33 + a00 * a23 * a31,
                a00 * a11 * a33 + a01 * a13 * a30 + a03 * a10 * a31
                    - a03 * a11 * a30 - a01 * a10 * a33 - a00 * a13 * a31,
                -a00 * a11 * a23 - a01 * a13 * a20 - a03 * a10 * a21
                    + a03 * a11 * a20 + a01 * a10 * a23 + a00 * a13 * a21,
            ],
            [
                -a10 * a21 * a32 - a11 * a22 * a30 - a12 * a20 * a31
                    + a12 * a21 * a30 + a11 * a20 * a32 + a10 * a22 * a31,
                a00 * a21 * a32 + a01 * a22 * a30 + a02 * a20 * a31
                    - a02 * a21 * a30 - a01 * a20 * a32 - a00 * a22 * a31,
                -a00 * a11 * a32 - a01 * a12 * a30 - a02 * a10 * a31
                    + a02 * a11 * a30 + a01 * a10 * a32 + a00 * a12 * a31,
                a00 * a11 * a22 + a01 * a12 * a20 + a02 * a10 * a21
                    - a02 * a11 * a20 - a01 * a10 * a22 - a00 * a12 * a21,
            ],
        ])
    }

    fn homogeneous(&self, point: &Vec3) -> ([f32; 3], f32) {
        let [x, y, z] = point.to_array();
        let m = &self.m;
        let column = |c: usize| m[0][c] * x + m[1][c] * y + m[2][c] * z + m[3][c];
        ([column(0), column(1), column(2)], column(3))
    }

    /// Transforms `point` as a homogeneous row vector (`w = 1`) and divides
    /// by the resulting `w`.
    ///
    /// # Panics
    /// Panics when the resulting `w` is exactly zero. Affine and perspective
    /// matrices built by this type never produce that for points in front of
    /// the camera; use [`Mat4::try_transform_point`] for untrusted input.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let ([x, y, z], w) = self.homogeneous(point);
        assert!(w != 0.0, "transform_point: homogeneous w is zero");
        Vec3::new(x / w, y / w, z / w)
    }

    /// Like [`Mat4::transform_point`] but reports `w == 0` as
    /// [`MathError::ZeroW`].
    pub fn try_transform_point(&self, point: &Vec3) -> Result<Vec3, MathError> {
        let ([x, y, z], w) = self.homogeneous(point);
        if w == 0.0 {
            debug!(target: "rowmath::mat4", ?point, "rejecting transform with zero w");
            return Err(MathError::ZeroW);
        }
        Ok(Vec3::new(x / w, y / w, z / w))
    }

    /// Transforms a direction (`w = 0`): translation and projective terms
    /// are ignored and no divide happens.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let [x, y, z] = direction.to_array();
        let m = &self.m;
        let column = |c: usize| m[0][c] * x + m[1][c] * y + m[2][c] * z;
        Vec3::new(column(0), column(1), column(2))
    }

    /// Entry-wise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    fn from(value: [[f32; 4]; 4]) -> Self {
        Self::from_rows(value)
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        let mut out = Self::ZERO;
        for (row, chunk) in out.m.iter_mut().zip(value.chunks_exact(4)) {
            row.copy_from_slice(chunk);
        }
        out
    }
}

impl core::ops::Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Mat4::add(&self, &rhs)
    }
}

impl core::ops::Sub for Mat4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Mat4::sub(&self, &rhs)
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}
