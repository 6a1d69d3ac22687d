// SPDX-License-Identifier: Apache-2.0
use rowmath_core::math::Vec3;

/// Plane `{ p | dot(normal, p) == distance }`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed distance from the origin along `normal`.
    pub distance: f32,
    /// Packed `0xRRGGBBAA` color.
    pub color: u32,
}

impl Plane {
    /// Creates a plane from a unit normal and its distance from the origin.
    pub const fn new(normal: Vec3, distance: f32, color: u32) -> Self {
        Self {
            normal,
            distance,
            color,
        }
    }

    /// Point on the plane closest to the origin (`normal * distance`).
    pub fn center(&self) -> Vec3 {
        self.normal.scale(self.distance)
    }
}
