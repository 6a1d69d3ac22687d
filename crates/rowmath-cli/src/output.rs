// SPDX-License-Identifier: Apache-2.0
//! Text and JSON rendering of command results.

use anyhow::Result;
use clap::ValueEnum;
use rowmath_app_core::prefs::MAX_PRECISION;
use rowmath_core::{Mat4, Vec3};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Labelled, fixed-width columns
    Text,
    /// One JSON object per result
    Json,
}

/// A labelled command result.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Matrix { label: &'static str, matrix: Mat4 },
    Vector { label: &'static str, vector: Vec3 },
}

impl Output {
    pub const fn matrix(label: &'static str, matrix: Mat4) -> Self {
        Self::Matrix { label, matrix }
    }

    pub const fn vector(label: &'static str, vector: Vec3) -> Self {
        Self::Vector { label, vector }
    }
}

/// JSON number, or `"inf"`, `"-inf"`, `"NaN"` where JSON has no number.
#[derive(Debug, Clone, Copy)]
struct Scalar(f32);

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.is_finite() {
            serializer.serialize_f32(v)
        } else if v.is_nan() {
            serializer.serialize_str("NaN")
        } else if v > 0.0 {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }
}

#[derive(Serialize)]
struct MatrixJson<'a> {
    label: &'a str,
    rows: [[Scalar; 4]; 4],
}

#[derive(Serialize)]
struct VectorJson<'a> {
    label: &'a str,
    vector: [Scalar; 3],
}

pub fn render(output: &Output, precision: usize, format: Format) -> Result<String> {
    let text = match (format, output) {
        (Format::Text, Output::Matrix { label, matrix }) => format_matrix(label, matrix, precision),
        (Format::Text, Output::Vector { label, vector }) => format_vector(label, vector, precision),
        (Format::Json, Output::Matrix { label, matrix }) => serde_json::to_string(&MatrixJson {
            label,
            rows: matrix.rows().map(|row| row.map(Scalar)),
        })?,
        (Format::Json, Output::Vector { label, vector }) => serde_json::to_string(&VectorJson {
            label,
            vector: vector.to_array().map(Scalar),
        })?,
    };
    Ok(text)
}

/// `label:` followed by one indented line per row, columns `%7.<precision>f`.
///
/// `precision` is capped at [`MAX_PRECISION`].
pub fn format_matrix(label: &str, matrix: &Mat4, precision: usize) -> String {
    let mut out = format!("{label}:");
    for row in matrix.rows() {
        out.push_str("\n  ");
        out.push_str(&format_columns(&row, precision));
    }
    out
}

pub fn format_vector(label: &str, vector: &Vec3, precision: usize) -> String {
    format!("{label}:\n  {}", format_columns(&vector.to_array(), precision))
}

fn format_columns(values: &[f32], precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    values
        .iter()
        .map(|v| format!("{v:7.precision$}"))
        .collect::<Vec<_>>()
        .join(" ")
}
