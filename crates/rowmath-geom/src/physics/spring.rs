// SPDX-License-Identifier: Apache-2.0
use rowmath_core::math::Vec3;

/// Damped spring attached to a fixed anchor.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring {
    /// Fixed end of the spring.
    pub anchor: Vec3,
    /// Rest length.
    pub natural_length: f32,
    /// Spring constant `k`.
    pub stiffness: f32,
    /// Velocity damping coefficient.
    pub damping_coefficient: f32,
}

impl Spring {
    /// Creates a spring.
    pub const fn new(
        anchor: Vec3,
        natural_length: f32,
        stiffness: f32,
        damping_coefficient: f32,
    ) -> Self {
        Self {
            anchor,
            natural_length,
            stiffness,
            damping_coefficient,
        }
    }
}
