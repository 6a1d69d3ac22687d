// SPDX-License-Identifier: Apache-2.0
use rowmath_core::math::Vec3;

/// Planar pendulum swinging about `anchor`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pendulum {
    /// Fixed pivot.
    pub anchor: Vec3,
    /// String length.
    pub length: f32,
    /// Current angle from the vertical.
    pub angle: f32,
    /// Angular velocity ω.
    pub angular_velocity: f32,
    /// Angular acceleration.
    pub angular_acceleration: f32,
}

impl Pendulum {
    /// Creates a pendulum released from rest at `angle`.
    pub const fn new(anchor: Vec3, length: f32, angle: f32) -> Self {
        Self {
            anchor,
            length,
            angle,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
        }
    }
}

/// Conical pendulum: the bob circles below `anchor` at a fixed apex angle.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConicalPendulum {
    /// Fixed pivot.
    pub anchor: Vec3,
    /// String length.
    pub length: f32,
    /// Half of the cone's apex angle.
    pub half_apex_angle: f32,
    /// Current angle around the cone axis.
    pub angle: f32,
    /// Angular velocity ω.
    pub angular_velocity: f32,
}

impl ConicalPendulum {
    /// Creates a conical pendulum at angle zero.
    pub const fn new(
        anchor: Vec3,
        length: f32,
        half_apex_angle: f32,
        angular_velocity: f32,
    ) -> Self {
        Self {
            anchor,
            length,
            half_apex_angle,
            angle: 0.0,
            angular_velocity,
        }
    }
}
