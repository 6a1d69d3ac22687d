// SPDX-License-Identifier: Apache-2.0
//! Errors reported by the non-panicking math companions.

use thiserror::Error;

/// Degenerate inputs surfaced by [`crate::Mat4::checked_inverse`] and
/// [`crate::Mat4::try_transform_point`].
///
/// The plain `inverse`/`transform_point` methods never return this type; they
/// keep their sentinel and panic policies respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Determinant evaluated to exactly zero.
    #[error("matrix is singular (determinant is zero)")]
    Singular,
    /// Homogeneous `w` evaluated to exactly zero after transformation.
    #[error("homogeneous w is zero; point cannot be projected")]
    ZeroW,
}
