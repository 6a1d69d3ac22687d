// SPDX-License-Identifier: Apache-2.0
use rowmath_core::math::Vec3;

use super::segment::Segment;

/// Capsule: every point within `radius` of `segment`.
///
/// The segment's color is the capsule's color.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capsule {
    /// Core segment.
    pub segment: Segment,
    /// Radius around the segment.
    pub radius: f32,
}

impl Capsule {
    /// Creates a capsule around `segment`.
    pub const fn new(segment: Segment, radius: f32) -> Self {
        Self { segment, radius }
    }

    /// Start of the core segment.
    pub fn start(&self) -> Vec3 {
        self.segment.origin
    }

    /// End of the core segment.
    pub fn end(&self) -> Vec3 {
        self.segment.end()
    }

    /// Color of the core segment.
    pub fn color(&self) -> u32 {
        self.segment.color
    }
}
