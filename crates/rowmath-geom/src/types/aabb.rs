// SPDX-License-Identifier: Apache-2.0
use rowmath_core::math::{Mat4, Vec3};

/// Axis-aligned bounding box.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
    /// Packed `0xRRGGBBAA` color.
    pub color: u32,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    pub const fn new(min: Vec3, max: Vec3, color: u32) -> Self {
        Self { min, max, color }
    }

    /// Builds an AABB centered at `center` with half-extents `half`.
    pub fn from_center_half_extents(center: Vec3, half: Vec3, color: u32) -> Self {
        Self::new(center.sub(&half), center.add(&half), color)
    }

    /// Builds the minimal AABB containing all `points`, or `None` when empty.
    pub fn from_points(points: &[Vec3], color: u32) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest.iter().fold((*first, *first), |(min, max), p| {
            (component_min(&min, p), component_max(&max, p))
        });
        Some(Self::new(min, max, color))
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Vec3 {
        self.min.add(&self.max).scale(0.5)
    }

    /// Half the box size along each axis.
    pub fn half_extents(&self) -> Vec3 {
        self.max.sub(&self.min).scale(0.5)
    }

    /// Swaps components so that `min <= max` holds on every axis.
    pub fn normalized(&self) -> Self {
        Self::new(
            component_min(&self.min, &self.max),
            component_max(&self.min, &self.max),
            self.color,
        )
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    pub fn contains(&self, point: &Vec3) -> bool {
        let p = point.to_array();
        let lo = self.min.to_array();
        let hi = self.max.to_array();
        (0..3).all(|i| lo[i] <= p[i] && p[i] <= hi[i])
    }

    /// Computes the AABB that bounds this box after transformation by `mat`.
    ///
    /// Evaluates the eight corners under `mat` and wraps them in a new box.
    ///
    /// # Panics
    /// Panics if `mat` maps a corner to homogeneous `w == 0`.
    pub fn transformed(&self, mat: &Mat4) -> Self {
        let [minx, miny, minz] = self.min.to_array();
        let [maxx, maxy, maxz] = self.max.to_array();
        let corners = [
            Vec3::new(minx, miny, minz),
            Vec3::new(minx, miny, maxz),
            Vec3::new(minx, maxy, minz),
            Vec3::new(minx, maxy, maxz),
            Vec3::new(maxx, miny, minz),
            Vec3::new(maxx, miny, maxz),
            Vec3::new(maxx, maxy, minz),
            Vec3::new(maxx, maxy, maxz),
        ];
        let first = mat.transform_point(&corners[0]);
        let (min, max) = corners[1..].iter().fold((first, first), |(min, max), c| {
            let p = mat.transform_point(c);
            (component_min(&min, &p), component_max(&max, &p))
        });
        Self::new(min, max, self.color)
    }
}

fn component_min(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(a.x().min(b.x()), a.y().min(b.y()), a.z().min(b.z()))
}

fn component_max(a: &Vec3, b: &Vec3) -> Vec3 {
    Vec3::new(a.x().max(b.x()), a.y().max(b.y()), a.z().max(b.z()))
}
