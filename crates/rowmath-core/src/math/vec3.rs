// SPDX-License-Identifier: Apache-2.0
use crate::math::Mat4;

/// 3D vector of `f32` components used for points and directions alike.
///
/// * Value type: every method returns a new vector; only the compound
///   assignment operators (`+=`, `-=`, `*=`, `/=`) mutate in place.
/// * Operators are thin aliases over the named methods ([`Vec3::add`],
///   [`Vec3::sub`], [`Vec3::scale`]).
/// * Use [`Mat4::transform_point`] to apply a matrix with perspective divide.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(scalar * self.x(), scalar * self.y(), scalar * self.z())
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Returns the unit vector in the same direction.
    ///
    /// A vector whose length is exactly zero normalizes to [`Vec3::ZERO`];
    /// tiny but non-zero vectors are still scaled up.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Applies `matrix` to this vector as a point. See [`Mat4::transform_point`].
    ///
    /// # Panics
    /// Panics when the transformed homogeneous `w` is exactly zero.
    pub fn transform(&self, matrix: &Mat4) -> Self {
        matrix.transform_point(self)
    }

    /// Vector projection of `self` onto `onto`.
    ///
    /// Returns [`Vec3::ZERO`] when `onto` has zero length.
    pub fn project(&self, onto: &Self) -> Self {
        let len = onto.length();
        if len == 0.0 {
            return Self::ZERO;
        }
        onto.scale(self.dot(onto) / (len * len))
    }

    /// Closest point to `point` on the finite segment `[start, end]`.
    ///
    /// The projection parameter is clamped to `[0, 1]`, so points past either
    /// end snap to that endpoint. A zero-length segment yields NaN components.
    pub fn closest_point_on_segment(start: &Self, end: &Self, point: &Self) -> Self {
        let dir = end.sub(start);
        let t = point.sub(start).dot(&dir) / dir.dot(&dir);
        if t < 0.0 {
            *start
        } else if t > 1.0 {
            *end
        } else {
            start.add(&dir.scale(t))
        }
    }

    /// Some vector orthogonal to `self`.
    ///
    /// `(-y, x, 0)` unless both `x` and `y` are zero, otherwise `(0, -z, y)`.
    pub fn perpendicular(&self) -> Self {
        if self.x() != 0.0 || self.y() != 0.0 {
            return Self::new(-self.y(), self.x(), 0.0);
        }
        Self::new(0.0, -self.z(), self.y())
    }

    /// Linear interpolation `t * v1 + (1 - t) * v2`.
    ///
    /// Note the parameter order: `t = 0` yields `v2` and `t = 1` yields `v1`.
    pub fn lerp(v1: &Self, v2: &Self, t: f32) -> Self {
        v1.scale(t).add(&v2.scale(1.0 - t))
    }

    /// Quadratic Bézier point built from two nested [`Vec3::lerp`] passes.
    pub fn bezier(p0: &Self, p1: &Self, p2: &Self, t: f32) -> Self {
        let p0p1 = Self::lerp(p0, p1, t);
        let p1p2 = Self::lerp(p1, p2, t);
        Self::lerp(&p0p1, &p1p2, t)
    }

    /// Reflects `self` about a surface with unit `normal`.
    ///
    /// The normal is not renormalized.
    pub fn reflect(&self, normal: &Self) -> Self {
        self.sub(&normal.scale(self.dot(normal)).scale(2.0))
    }

    /// Component-wise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec3::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::sub(&self, &rhs)
    }
}

impl core::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl core::ops::Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs.scale(self)
    }
}

impl core::ops::Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self::Output {
        self.scale(1.0 / rhs)
    }
}

impl core::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x(), -self.y(), -self.z())
    }
}

impl core::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.data[0] += rhs.data[0];
        self.data[1] += rhs.data[1];
        self.data[2] += rhs.data[2];
    }
}

impl core::ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.data[0] -= rhs.data[0];
        self.data[1] -= rhs.data[1];
        self.data[2] -= rhs.data[2];
    }
}

impl core::ops::MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        for c in &mut self.data {
            *c *= rhs;
        }
    }
}

impl core::ops::DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        for c in &mut self.data {
            *c /= rhs;
        }
    }
}
