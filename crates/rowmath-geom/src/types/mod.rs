// SPDX-License-Identifier: Apache-2.0
//! Geometric primitives shared by the demos (segments through boxes).
//!
//! Conventions:
//! - Every drawable primitive carries a packed `0xRRGGBBAA` color.
//! - Normals and OBB axes are expected to be unit length; constructors do not
//!   renormalize them.

#[doc = "Axis-aligned bounding boxes."]
pub mod aabb;
#[doc = "Capsules (swept spheres along a segment)."]
pub mod capsule;
#[doc = "Oriented bounding boxes."]
pub mod obb;
#[doc = "Infinite planes in normal/distance form."]
pub mod plane;
#[doc = "Finite line segments stored as origin plus offset."]
pub mod segment;
#[doc = "Spheres."]
pub mod sphere;
#[doc = "Triangles."]
pub mod triangle;
