// SPDX-License-Identifier: Apache-2.0
#![doc = r"Geometry primitives and physics demo state for rowmath.

This crate provides:
- Line segments, triangles, planes, spheres, and capsules.
- Axis-aligned (`Aabb`) and oriented (`Obb`) bounding boxes.
- Plain state records for the spring, ball, and pendulum demos.

Design notes:
- Types are plain data with public fields; no collision or integration
  algorithms live here.
- Colors are packed `0xRRGGBBAA` values (see [`color`]).
- Float32 throughout, built on `rowmath_core::math::Vec3`.
"]
#![forbid(unsafe_code)]

pub mod color;
/// State records for the physics demos.
pub mod physics;
/// Foundational geometric types.
pub mod types;

pub use physics::{Ball, ConicalPendulum, Pendulum, Spring};
pub use types::aabb::Aabb;
pub use types::capsule::Capsule;
pub use types::obb::Obb;
pub use types::plane::Plane;
pub use types::segment::Segment;
pub use types::sphere::Sphere;
pub use types::triangle::Triangle;
