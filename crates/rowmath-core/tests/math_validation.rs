// SPDX-License-Identifier: Apache-2.0
//! Fixture-driven validation of vector algebra and matrix builders.
//!
//! Expected values are computed in double precision; comparisons use the
//! tolerance stored alongside the fixtures.
#![allow(missing_docs)]

use once_cell::sync::Lazy;
use serde::Deserialize;

use rowmath_core::{Mat4, Vec3};

static RAW_FIXTURES: &str = include_str!("fixtures/math-fixtures.json");

static FIXTURES: Lazy<MathFixtures> = Lazy::new(|| {
    let fixtures: MathFixtures =
        serde_json::from_str(RAW_FIXTURES).expect("failed to parse math fixtures");
    fixtures.validate();
    fixtures
});

type Rows = [[f32; 4]; 4];

#[derive(Debug, Deserialize)]
struct MathFixtures {
    #[serde(default)]
    tolerance: Tolerance,
    vec3: Vec3Fixtures,
    mat4: Mat4Fixtures,
}

impl MathFixtures {
    fn validate(&self) {
        fn ensure<T>(name: &str, slice: &[T]) {
            assert!(!slice.is_empty(), "math fixtures set '{name}' must not be empty");
        }

        ensure("vec3.add", &self.vec3.add);
        ensure("vec3.dot", &self.vec3.dot);
        ensure("vec3.cross", &self.vec3.cross);
        ensure("vec3.normalize", &self.vec3.normalize);
        ensure("vec3.project", &self.vec3.project);
        ensure("vec3.reflect", &self.vec3.reflect);
        ensure("vec3.closest_point", &self.vec3.closest_point);
        ensure("vec3.bezier", &self.vec3.bezier);
        ensure("mat4.multiply", &self.mat4.multiply);
        ensure("mat4.inverse", &self.mat4.inverse);
        ensure("mat4.transform_point", &self.mat4.transform_point);
        ensure("mat4.rotation_axis_angle", &self.mat4.rotation_axis_angle);
        ensure("mat4.affine", &self.mat4.affine);
        ensure("mat4.perspective_fov", &self.mat4.perspective_fov);
        ensure("mat4.orthographic", &self.mat4.orthographic);
        ensure("mat4.viewport", &self.mat4.viewport);
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Tolerance {
    #[serde(default = "Tolerance::default_absolute")]
    absolute: f32,
    #[serde(default = "Tolerance::default_relative")]
    relative: f32,
}

impl Tolerance {
    const fn default_absolute() -> f32 {
        1e-5
    }

    const fn default_relative() -> f32 {
        1e-5
    }

    fn allowed_error(&self, reference: f32) -> f32 {
        self.absolute.max(self.relative * reference.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::default_absolute(),
            relative: Self::default_relative(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Vec3Fixtures {
    add: Vec<Vec3BinaryFixture>,
    dot: Vec<Vec3DotFixture>,
    cross: Vec<Vec3BinaryFixture>,
    normalize: Vec<Vec3UnaryFixture>,
    project: Vec<Vec3BinaryFixture>,
    reflect: Vec<Vec3BinaryFixture>,
    closest_point: Vec<ClosestPointFixture>,
    bezier: Vec<BezierFixture>,
}

#[derive(Debug, Deserialize)]
struct Vec3BinaryFixture {
    a: [f32; 3],
    b: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct Vec3DotFixture {
    a: [f32; 3],
    b: [f32; 3],
    expected: f32,
}

#[derive(Debug, Deserialize)]
struct Vec3UnaryFixture {
    value: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct ClosestPointFixture {
    start: [f32; 3],
    end: [f32; 3],
    point: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct BezierFixture {
    p0: [f32; 3],
    p1: [f32; 3],
    p2: [f32; 3],
    t: f32,
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct Mat4Fixtures {
    multiply: Vec<Mat4BinaryFixture>,
    inverse: Vec<Mat4UnaryFixture>,
    transform_point: Vec<Mat4Vec3Fixture>,
    rotation_axis_angle: Vec<AxisAngleFixture>,
    affine: Vec<AffineFixture>,
    perspective_fov: Vec<PerspectiveFixture>,
    orthographic: Vec<OrthographicFixture>,
    viewport: Vec<ViewportFixture>,
}

#[derive(Debug, Deserialize)]
struct Mat4BinaryFixture {
    a: Rows,
    b: Rows,
    expected: Rows,
}

#[derive(Debug, Deserialize)]
struct Mat4UnaryFixture {
    value: Rows,
    expected: Rows,
}

#[derive(Debug, Deserialize)]
struct Mat4Vec3Fixture {
    matrix: Rows,
    vector: [f32; 3],
    expected: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct AxisAngleFixture {
    axis: [f32; 3],
    angle: f32,
    expected: Rows,
}

#[derive(Debug, Deserialize)]
struct AffineFixture {
    scale: [f32; 3],
    rotate: [f32; 3],
    translate: [f32; 3],
    expected: Rows,
}

#[derive(Debug, Deserialize)]
struct PerspectiveFixture {
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    expected: Rows,
}

#[derive(Debug, Deserialize)]
struct OrthographicFixture {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    near: f32,
    far: f32,
    expected: Rows,
}

#[derive(Debug, Deserialize)]
struct ViewportFixture {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    min_depth: f32,
    max_depth: f32,
    expected: Rows,
}

fn assert_scalar(actual: f32, expected: f32, tol: &Tolerance, ctx: &str) {
    let diff = (actual - expected).abs();
    let allowed = tol.allowed_error(expected);
    assert!(
        diff <= allowed,
        "{ctx}: expected {expected}, got {actual} (diff {diff} > {allowed})"
    );
}

fn assert_vec3(actual: Vec3, expected: [f32; 3], tol: &Tolerance, ctx: &str) {
    for (i, (a, e)) in actual.to_array().iter().zip(expected.iter()).enumerate() {
        assert_scalar(*a, *e, tol, &format!("{ctx}[{i}]"));
    }
}

fn assert_mat4(actual: Mat4, expected: Rows, tol: &Tolerance, ctx: &str) {
    let rows = actual.rows();
    for (r, (row, exp_row)) in rows.iter().zip(expected.iter()).enumerate() {
        for (c, (a, e)) in row.iter().zip(exp_row.iter()).enumerate() {
            assert_scalar(*a, *e, tol, &format!("{ctx}[{r}][{c}]"));
        }
    }
}

#[test]
fn vec3_fixtures_cover_operations() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.vec3.add {
        let actual = Vec3::from(fix.a).add(&Vec3::from(fix.b));
        assert_vec3(actual, fix.expected, tol, &format!("vec3.add a={:?} b={:?}", fix.a, fix.b));
    }

    for fix in &FIXTURES.vec3.dot {
        let actual = Vec3::from(fix.a).dot(&Vec3::from(fix.b));
        assert_scalar(actual, fix.expected, tol, &format!("vec3.dot a={:?} b={:?}", fix.a, fix.b));
    }

    for fix in &FIXTURES.vec3.cross {
        let actual = Vec3::from(fix.a).cross(&Vec3::from(fix.b));
        assert_vec3(actual, fix.expected, tol, &format!("vec3.cross a={:?} b={:?}", fix.a, fix.b));
    }

    for (idx, fix) in FIXTURES.vec3.normalize.iter().enumerate() {
        let actual = Vec3::from(fix.value).normalize();
        assert_vec3(actual, fix.expected, tol, &format!("vec3.normalize#[{idx}] value={:?}", fix.value));
    }

    for fix in &FIXTURES.vec3.project {
        let actual = Vec3::from(fix.a).project(&Vec3::from(fix.b));
        assert_vec3(actual, fix.expected, tol, &format!("vec3.project a={:?} onto={:?}", fix.a, fix.b));
    }

    for fix in &FIXTURES.vec3.reflect {
        let actual = Vec3::from(fix.a).reflect(&Vec3::from(fix.b));
        assert_vec3(actual, fix.expected, tol, &format!("vec3.reflect a={:?} n={:?}", fix.a, fix.b));
    }

    for fix in &FIXTURES.vec3.closest_point {
        let actual = Vec3::closest_point_on_segment(
            &Vec3::from(fix.start),
            &Vec3::from(fix.end),
            &Vec3::from(fix.point),
        );
        assert_vec3(
            actual,
            fix.expected,
            tol,
            &format!("vec3.closest_point [{:?}, {:?}] p={:?}", fix.start, fix.end, fix.point),
        );
    }

    for fix in &FIXTURES.vec3.bezier {
        let actual = Vec3::bezier(
            &Vec3::from(fix.p0),
            &Vec3::from(fix.p1),
            &Vec3::from(fix.p2),
            fix.t,
        );
        assert_vec3(actual, fix.expected, tol, &format!("vec3.bezier t={}", fix.t));
    }
}

#[test]
fn mat4_fixtures_validate_algebra() {
    let tol = &FIXTURES.tolerance;
    for (i, fix) in FIXTURES.mat4.multiply.iter().enumerate() {
        let actual = Mat4::from(fix.a).multiply(&Mat4::from(fix.b));
        assert_mat4(actual, fix.expected, tol, &format!("mat4.multiply[{i}]"));
    }

    for (i, fix) in FIXTURES.mat4.inverse.iter().enumerate() {
        let actual = Mat4::from(fix.value).inverse();
        assert_mat4(actual, fix.expected, tol, &format!("mat4.inverse[{i}]"));
    }

    for fix in &FIXTURES.mat4.transform_point {
        let actual = Mat4::from(fix.matrix).transform_point(&Vec3::from(fix.vector));
        assert_vec3(
            actual,
            fix.expected,
            tol,
            &format!("mat4.transform_point vector={:?}", fix.vector),
        );
    }
}

#[test]
fn mat4_fixtures_validate_builders() {
    let tol = &FIXTURES.tolerance;
    for fix in &FIXTURES.mat4.rotation_axis_angle {
        let actual = Mat4::rotation_axis_angle(Vec3::from(fix.axis), fix.angle);
        assert_mat4(
            actual,
            fix.expected,
            tol,
            &format!("mat4.rotation_axis_angle axis={:?} angle={}", fix.axis, fix.angle),
        );
    }

    for fix in &FIXTURES.mat4.affine {
        let actual = Mat4::affine(
            Vec3::from(fix.scale),
            Vec3::from(fix.rotate),
            Vec3::from(fix.translate),
        );
        assert_mat4(actual, fix.expected, tol, "mat4.affine");
    }

    for fix in &FIXTURES.mat4.perspective_fov {
        let actual = Mat4::perspective_fov(fix.fov_y, fix.aspect, fix.near, fix.far);
        assert_mat4(
            actual,
            fix.expected,
            tol,
            &format!("mat4.perspective_fov fov={} near={} far={}", fix.fov_y, fix.near, fix.far),
        );
    }

    for fix in &FIXTURES.mat4.orthographic {
        let actual = Mat4::orthographic(
            fix.left, fix.top, fix.right, fix.bottom, fix.near, fix.far,
        );
        assert_mat4(actual, fix.expected, tol, "mat4.orthographic");
    }

    for fix in &FIXTURES.mat4.viewport {
        let actual = Mat4::viewport(
            fix.left,
            fix.top,
            fix.width,
            fix.height,
            fix.min_depth,
            fix.max_depth,
        );
        assert_mat4(actual, fix.expected, tol, "mat4.viewport");
    }
}
