// SPDX-License-Identifier: Apache-2.0
#![allow(missing_docs)]
//! End-to-end tests for the `rowmath` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rowmath(config: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rowmath").expect("binary builds");
    cmd.env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config.path());
    cmd
}

fn json_rows(stdout: &[u8]) -> Vec<Vec<f64>> {
    let v: serde_json::Value = serde_json::from_slice(stdout).expect("json output");
    v["rows"]
        .as_array()
        .expect("rows array")
        .iter()
        .map(|row| {
            row.as_array()
                .expect("row array")
                .iter()
                .map(|x| x.as_f64().expect("number"))
                .collect()
        })
        .collect()
}

#[test]
fn demo_prints_default_axis_angle_rotation() {
    let dir = TempDir::new().unwrap();
    rowmath(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("matrix:\n"))
        .stdout(predicate::str::contains("    0.937   0.278  -0.214   0.000\n"))
        .stdout(predicate::str::contains("   -0.214   0.937   0.278   0.000\n"))
        .stdout(predicate::str::contains("    0.278  -0.214   0.937   0.000\n"))
        .stdout(predicate::str::contains("    0.000   0.000   0.000   1.000"));
}

#[test]
fn demo_persists_default_prefs_once() {
    let dir = TempDir::new().unwrap();
    rowmath(&dir).arg("demo").assert().success();
    let text = std::fs::read_to_string(dir.path().join("demo.json")).unwrap();
    assert!(text.contains("\"width\": 1280"), "{text}");
    assert!(text.contains("\"precision\": 3"), "{text}");
}

#[test]
fn saved_prefs_drive_demo_and_precision() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("demo.json"),
        r#"{"precision": 1, "demo_axis": [0.0, 0.0, 1.0], "demo_angle": 0.0}"#,
    )
    .unwrap();
    rowmath(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("      1.0     0.0     0.0     0.0\n"));
}

#[test]
fn corrupt_prefs_fall_back_to_defaults_without_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demo.json");
    std::fs::write(&path, "{not json").unwrap();
    rowmath(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.937"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
}

#[test]
fn inverse_of_singular_matrix_warns_and_prints_zero() {
    let dir = TempDir::new().unwrap();
    let mut cmd = rowmath(&dir);
    cmd.arg("inverse");
    for _ in 0..16 {
        cmd.arg("0");
    }
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("warning: matrix is singular"))
        .stdout(predicate::str::contains("inverse:"));
}

#[test]
fn inverse_of_scale_translate_as_json() {
    let dir = TempDir::new().unwrap();
    let out = rowmath(&dir)
        .args(["--format", "json", "inverse"])
        .args(["2", "0", "0", "0"])
        .args(["0", "4", "0", "0"])
        .args(["0", "0", "8", "0"])
        .args(["1", "2", "3", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("singular").not())
        .get_output()
        .stdout
        .clone();
    let rows = json_rows(&out);
    assert_eq!(
        rows,
        vec![
            vec![0.5, 0.0, 0.0, 0.0],
            vec![0.0, 0.25, 0.0, 0.0],
            vec![0.0, 0.0, 0.125, 0.0],
            vec![-0.5, -0.5, -0.375, 1.0],
        ]
    );
}

#[test]
fn transform_applies_translation_row() {
    let dir = TempDir::new().unwrap();
    rowmath(&dir)
        .args(["transform", "--matrix"])
        .args(["1", "0", "0", "0", "0", "1", "0", "0", "0", "0", "1", "0", "10", "0", "0", "1"])
        .args(["--point", "1", "2", "-3"])
        .assert()
        .success()
        .stdout(predicate::str::diff("point:\n   11.000   2.000  -3.000\n"));
}

#[test]
fn transform_with_zero_w_is_an_error_not_a_panic() {
    let dir = TempDir::new().unwrap();
    rowmath(&dir)
        .args(["transform", "--matrix"])
        .args(["1", "0", "0", "0", "0", "1", "0", "0", "0", "0", "1", "0", "0", "0", "0", "0"])
        .args(["--point", "1", "2", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("homogeneous w is zero"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn affine_accepts_negative_components() {
    let dir = TempDir::new().unwrap();
    rowmath(&dir)
        .args(["affine", "--translate", "-1", "2", "-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("affine:\n"))
        .stdout(predicate::str::contains("   -1.000   2.000  -3.000   1.000"));
}

#[test]
fn viewport_and_perspective_default_from_prefs() {
    let dir = TempDir::new().unwrap();
    rowmath(&dir)
        .arg("viewport")
        .assert()
        .success()
        .stdout(predicate::str::contains("  640.000 360.000   0.000   1.000"));

    let out = rowmath(&dir)
        .args(["--format", "json", "perspective", "--near", "1", "--far", "11"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rows = json_rows(&out);
    assert_eq!(rows[2][3], 1.0);
    assert!((rows[2][2] - 1.1).abs() < 1e-6);
    assert!((rows[3][2] + 1.1).abs() < 1e-6);
    assert!((rows[1][1] / rows[0][0] - 1280.0 / 720.0).abs() < 1e-5);
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    rowmath(&dir).assert().failure().code(2);
}

#[test]
fn oversized_precision_in_prefs_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("demo.json"), r#"{"precision": 70000}"#).unwrap();
    rowmath(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("    0.937   0.278  -0.214   0.000\n"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn json_reports_infinite_entries_as_strings() {
    let dir = TempDir::new().unwrap();
    let out = rowmath(&dir)
        .args(["--format", "json", "perspective", "--near", "1", "--far", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("json output");
    assert_eq!(v["rows"][2][2], "inf");
    assert_eq!(v["rows"][3][2], "-inf");
    assert_eq!(v["rows"][2][3], 1.0);
}

#[test]
fn affine_degrees_flag_matches_radians() {
    let dir = TempDir::new().unwrap();
    let deg = rowmath(&dir)
        .args(["--format", "json", "affine", "--rotate", "0", "0", "180", "--degrees"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rows = json_rows(&deg);
    assert!((rows[0][0] + 1.0).abs() < 1e-6);
    assert!((rows[1][1] + 1.0).abs() < 1e-6);
    assert!(rows[0][1].abs() < 1e-6);
}
