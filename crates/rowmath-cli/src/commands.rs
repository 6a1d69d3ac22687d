// SPDX-License-Identifier: Apache-2.0
//! Subcommands and the matrix/point computations behind them.

use anyhow::{anyhow, Context, Result};
use clap::Subcommand;
use rowmath_app_core::prefs::DemoPrefs;
use rowmath_core::math::deg_to_rad;
use rowmath_core::{Mat4, Vec3};
use tracing::debug;

use crate::output::Output;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the axis-angle rotation from the demo prefs
    Demo,
    /// Build an affine world matrix (scale, then rotate, then translate)
    Affine {
        /// Scale factors
        #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true, default_values_t = [1.0, 1.0, 1.0])]
        scale: Vec<f32>,
        /// Rotation as roll, pitch, yaw (radians unless --degrees)
        #[arg(long, num_args = 3, value_names = ["ROLL", "PITCH", "YAW"], allow_negative_numbers = true, default_values_t = [0.0, 0.0, 0.0])]
        rotate: Vec<f32>,
        /// Translation
        #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true, default_values_t = [0.0, 0.0, 0.0])]
        translate: Vec<f32>,
        /// Read rotation angles as degrees
        #[arg(long)]
        degrees: bool,
    },
    /// Build a perspective projection from a vertical field of view
    Perspective {
        /// Vertical field of view (radians unless --degrees)
        #[arg(long, default_value_t = 0.45)]
        fov_y: f32,
        /// Read the field of view as degrees
        #[arg(long)]
        degrees: bool,
        /// Width over height (defaults to the prefs surface size)
        #[arg(long)]
        aspect: Option<f32>,
        /// Near clip distance
        #[arg(long, default_value_t = 0.1)]
        near: f32,
        /// Far clip distance
        #[arg(long, default_value_t = 100.0)]
        far: f32,
    },
    /// Build an orthographic projection
    Orthographic {
        /// Left edge
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        left: f32,
        /// Top edge
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        top: f32,
        /// Right edge (defaults to the prefs width)
        #[arg(long, allow_negative_numbers = true)]
        right: Option<f32>,
        /// Bottom edge (defaults to the prefs height)
        #[arg(long, allow_negative_numbers = true)]
        bottom: Option<f32>,
        /// Near clip distance
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        near: f32,
        /// Far clip distance
        #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
        far: f32,
    },
    /// Build a viewport matrix mapping NDC to screen pixels
    Viewport {
        /// Left edge in pixels
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        left: f32,
        /// Top edge in pixels
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        top: f32,
        /// Width in pixels (defaults to the prefs width)
        #[arg(long)]
        width: Option<f32>,
        /// Height in pixels (defaults to the prefs height)
        #[arg(long)]
        height: Option<f32>,
        /// Depth mapped from NDC z = 0
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        min_depth: f32,
        /// Depth mapped from NDC z = 1
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        max_depth: f32,
    },
    /// Invert a matrix given as 16 row-major values
    Inverse {
        /// Matrix entries, row by row
        #[arg(num_args = 16, value_name = "M", allow_negative_numbers = true, required = true)]
        values: Vec<f32>,
    },
    /// Transform a point by a matrix, with perspective divide
    Transform {
        /// Matrix entries, row by row
        #[arg(long, num_args = 16, value_name = "M", allow_negative_numbers = true, required = true)]
        matrix: Vec<f32>,
        /// Point to transform
        #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true, required = true)]
        point: Vec<f32>,
    },
}

/// Result of a command plus any non-fatal warnings for stderr.
#[derive(Debug)]
pub struct Report {
    pub output: Output,
    pub warnings: Vec<String>,
}

impl From<Output> for Report {
    fn from(output: Output) -> Self {
        Self {
            output,
            warnings: Vec::new(),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
pub fn run(cmd: &Command, prefs: &DemoPrefs) -> Result<Report> {
    let report: Report = match cmd {
        Command::Demo => {
            let axis = Vec3::from(prefs.demo_axis).normalize();
            debug!(?axis, angle = prefs.demo_angle, "demo rotation");
            Output::matrix("matrix", Mat4::rotation_axis_angle(axis, prefs.demo_angle)).into()
        }
        Command::Affine {
            scale,
            rotate,
            translate,
            degrees,
        } => {
            let mut rotate = vec3_arg("rotate", rotate)?;
            if *degrees {
                rotate = Vec3::from(rotate.to_array().map(deg_to_rad));
            }
            let m = Mat4::affine(
                vec3_arg("scale", scale)?,
                rotate,
                vec3_arg("translate", translate)?,
            );
            Output::matrix("affine", m).into()
        }
        Command::Perspective {
            fov_y,
            degrees,
            aspect,
            near,
            far,
        } => {
            let fov_y = if *degrees { deg_to_rad(*fov_y) } else { *fov_y };
            let aspect = aspect.unwrap_or_else(|| prefs.aspect_ratio());
            let m = Mat4::perspective_fov(fov_y, aspect, *near, *far);
            Output::matrix("perspective", m).into()
        }
        Command::Orthographic {
            left,
            top,
            right,
            bottom,
            near,
            far,
        } => {
            let right = right.unwrap_or(prefs.width as f32);
            let bottom = bottom.unwrap_or(prefs.height as f32);
            let m = Mat4::orthographic(*left, *top, right, bottom, *near, *far);
            Output::matrix("orthographic", m).into()
        }
        Command::Viewport {
            left,
            top,
            width,
            height,
            min_depth,
            max_depth,
        } => {
            let width = width.unwrap_or(prefs.width as f32);
            let height = height.unwrap_or(prefs.height as f32);
            let m = Mat4::viewport(*left, *top, width, height, *min_depth, *max_depth);
            Output::matrix("viewport", m).into()
        }
        Command::Inverse { values } => {
            let m = mat4_arg("values", values)?;
            let inv = m.inverse();
            let mut report = Report::from(Output::matrix("inverse", inv));
            if inv == Mat4::ZERO {
                report.warnings.push("matrix is singular".to_owned());
            }
            report
        }
        Command::Transform { matrix, point } => {
            let m = mat4_arg("matrix", matrix)?;
            let p = vec3_arg("point", point)?;
            let out = m
                .try_transform_point(&p)
                .with_context(|| format!("cannot transform point {:?}", p.to_array()))?;
            Output::vector("point", out).into()
        }
    };
    Ok(report)
}

fn vec3_arg(name: &str, values: &[f32]) -> Result<Vec3> {
    let arr: [f32; 3] = values
        .try_into()
        .map_err(|_| anyhow!("--{name} expects 3 values, got {}", values.len()))?;
    Ok(Vec3::from(arr))
}

fn mat4_arg(name: &str, values: &[f32]) -> Result<Mat4> {
    let arr: [f32; 16] = values
        .try_into()
        .map_err(|_| anyhow!("{name} expects 16 values, got {}", values.len()))?;
    Ok(Mat4::from(arr))
}
