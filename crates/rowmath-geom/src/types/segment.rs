// SPDX-License-Identifier: Apache-2.0
use rowmath_core::math::Vec3;

/// Finite segment from `origin` to `origin + diff`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Start point.
    pub origin: Vec3,
    /// Offset from the start point to the end point.
    pub diff: Vec3,
    /// Packed `0xRRGGBBAA` color.
    pub color: u32,
}

impl Segment {
    /// Creates a segment from its start point and offset.
    pub const fn new(origin: Vec3, diff: Vec3, color: u32) -> Self {
        Self {
            origin,
            diff,
            color,
        }
    }

    /// Creates a segment spanning `start` to `end`.
    pub fn from_endpoints(start: Vec3, end: Vec3, color: u32) -> Self {
        Self::new(start, end.sub(&start), color)
    }

    /// End point (`origin + diff`).
    pub fn end(&self) -> Vec3 {
        self.origin.add(&self.diff)
    }

    /// Closest point on this segment to `point`.
    ///
    /// A zero-length segment yields NaN components; see
    /// [`Vec3::closest_point_on_segment`].
    pub fn closest_point(&self, point: &Vec3) -> Vec3 {
        Vec3::closest_point_on_segment(&self.origin, &self.end(), point)
    }
}
