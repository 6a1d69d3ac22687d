// SPDX-License-Identifier: Apache-2.0
//! rowmath-core: float32 vector and 4×4 matrix algebra.
//!
//! Matrices follow the row-vector convention (`v' = v * M`) with translation
//! stored in the last row. Every operation is a pure function of its inputs;
//! degenerate inputs follow the policies documented on each method.
#![forbid(unsafe_code)]

/// Vector and matrix types plus angle conversion.
pub mod math;

mod error;

pub use error::MathError;
pub use math::{Mat4, Vec3};
