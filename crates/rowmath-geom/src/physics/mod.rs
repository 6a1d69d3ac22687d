// SPDX-License-Identifier: Apache-2.0
//! State records for the spring, ball, and pendulum demos.
//!
//! Angles are radians. These types hold state only; stepping them forward in
//! time is left to the caller.

mod ball;
mod pendulum;
mod spring;

pub use ball::Ball;
pub use pendulum::{ConicalPendulum, Pendulum};
pub use spring::Spring;
