// SPDX-License-Identifier: Apache-2.0
use rowmath_core::math::{Mat4, Vec3};

/// Oriented bounding box.
///
/// Invariants:
/// - `orientations` are unit length and mutually orthogonal.
/// - `size` holds half-extents along each orientation axis, i.e. the distance
///   from the center to each face.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obb {
    /// Center point.
    pub center: Vec3,
    /// Local X, Y, Z axes in world space.
    pub orientations: [Vec3; 3],
    /// Half-extents along `orientations`.
    pub size: Vec3,
    /// Packed `0xRRGGBBAA` color.
    pub color: u32,
}

impl Obb {
    /// Creates an OBB from explicit axes.
    pub const fn new(center: Vec3, orientations: [Vec3; 3], size: Vec3, color: u32) -> Self {
        Self {
            center,
            orientations,
            size,
            color,
        }
    }

    /// Creates an OBB whose axes are the rows of `rotation`.
    ///
    /// With row vectors, row `i` of a rotation matrix is the image of the
    /// `i`-th basis axis.
    pub fn from_rotation(center: Vec3, rotation: &Mat4, size: Vec3, color: u32) -> Self {
        let axis = |row: usize| {
            Vec3::new(
                rotation.get(row, 0),
                rotation.get(row, 1),
                rotation.get(row, 2),
            )
        };
        Self::new(center, [axis(0), axis(1), axis(2)], size, color)
    }

    /// The eight corners, ordered by sign of (x, y, z) offsets with x slowest.
    pub fn corners(&self) -> [Vec3; 8] {
        let [ax, ay, az] = self.orientations;
        let [hx, hy, hz] = self.size.to_array();
        let mut out = [self.center; 8];
        for (i, corner) in out.iter_mut().enumerate() {
            let sx = if i & 4 == 0 { -hx } else { hx };
            let sy = if i & 2 == 0 { -hy } else { hy };
            let sz = if i & 1 == 0 { -hz } else { hz };
            *corner = self
                .center
                .add(&ax.scale(sx))
                .add(&ay.scale(sy))
                .add(&az.scale(sz));
        }
        out
    }
}

impl Default for Obb {
    fn default() -> Self {
        Self::new(
            Vec3::ZERO,
            [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z],
            Vec3::ZERO,
            0,
        )
    }
}
