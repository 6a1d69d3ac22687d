// SPDX-License-Identifier: Apache-2.0
use rowmath_core::math::Vec3;

/// Triangle given by three vertices.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    /// Vertices in winding order.
    pub vertices: [Vec3; 3],
    /// Packed `0xRRGGBBAA` color.
    pub color: u32,
}

impl Triangle {
    /// Creates a triangle from its vertices.
    pub const fn new(vertices: [Vec3; 3], color: u32) -> Self {
        Self { vertices, color }
    }
}
