// SPDX-License-Identifier: Apache-2.0
use rowmath_core::math::Vec3;

/// Sphere with a center and radius.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    /// Center point.
    pub center: Vec3,
    /// Radius.
    pub radius: f32,
    /// Packed `0xRRGGBBAA` color.
    pub color: u32,
}

impl Sphere {
    /// Creates a sphere.
    pub const fn new(center: Vec3, radius: f32, color: u32) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }
}
