// SPDX-License-Identifier: Apache-2.0
//! Saved preferences for the `rowmath` demo commands.

use serde::{Deserialize, Serialize};

/// Config key under which [`DemoPrefs`] are stored.
pub const DEMO_PREFS_KEY: &str = "demo";

/// Largest accepted [`DemoPrefs::precision`].
pub const MAX_PRECISION: usize = 9;

/// Demo surface and output preferences.
///
/// Missing fields fall back to their defaults, so older config files keep
/// loading as fields are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoPrefs {
    /// Surface width in pixels (viewport and aspect ratio).
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Decimal places when printing matrices (at most [`MAX_PRECISION`]).
    pub precision: usize,
    /// Rotation axis for `rowmath demo` (normalized before use).
    pub demo_axis: [f32; 3],
    /// Rotation angle for `rowmath demo` (radians).
    pub demo_angle: f32,
}

impl DemoPrefs {
    /// `width / height`, or `1.0` when the height is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }

    /// Resets out-of-range fields to their defaults.
    ///
    /// Returns the names of the fields that were reset.
    pub fn sanitize(&mut self) -> Vec<&'static str> {
        let defaults = Self::default();
        let mut reset = Vec::new();
        if self.precision > MAX_PRECISION {
            self.precision = defaults.precision;
            reset.push("precision");
        }
        if self.demo_axis.iter().any(|c| !c.is_finite()) {
            self.demo_axis = defaults.demo_axis;
            reset.push("demo_axis");
        }
        if !self.demo_angle.is_finite() {
            self.demo_angle = defaults.demo_angle;
            reset.push("demo_angle");
        }
        reset
    }
}

impl Default for DemoPrefs {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            precision: 3,
            demo_axis: [1.0, 1.0, 1.0],
            demo_angle: 0.44,
        }
    }
}
