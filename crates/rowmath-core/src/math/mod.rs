// SPDX-License-Identifier: Apache-2.0
//! The [`Vec3`] and [`Mat4`] value types plus angle conversion.
//!
//! All arithmetic is `f32`. Matrices are row-major and vectors are treated as
//! rows, so composition reads left to right: `S * R * T` scales first.

use std::f32::consts::PI;

mod mat4;
mod vec3;

pub use mat4::Mat4;
pub use vec3::Vec3;

/// Converts degrees to the radians every builder in this crate expects.
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}
