// SPDX-License-Identifier: Apache-2.0
use rowmath_core::math::Vec3;

/// Point mass drawn as a sphere.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ball {
    /// Position.
    pub position: Vec3,
    /// Velocity.
    pub velocity: Vec3,
    /// Acceleration.
    pub acceleration: Vec3,
    /// Mass.
    pub mass: f32,
    /// Drawing radius.
    pub radius: f32,
    /// Packed `0xRRGGBBAA` color.
    pub color: u32,
}

impl Ball {
    /// Creates a ball at rest at `position`.
    pub const fn at_rest(position: Vec3, mass: f32, radius: f32, color: u32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            mass,
            radius,
            color,
        }
    }
}
