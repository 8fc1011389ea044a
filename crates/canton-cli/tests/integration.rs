//! Integration tests for the canton CLI.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Path to the canton binary built for this test run.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_canton"))
}

fn canton() -> Command {
    let mut cmd = Command::new(binary_path());
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn default_run_writes_fifty_star_flag() {
    let dir = tempfile::tempdir().unwrap();

    let output = canton()
        .current_dir(dir.path())
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Using pattern for 50 stars: [6, 5, 6, 5, 6, 5, 6, 5, 6]"), "{}", stdout);

    let svg = fs::read_to_string(dir.path().join("bandera.svg")).expect("bandera.svg not written");
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<rect ").count(), 14);
    assert_eq!(svg.matches("<polygon ").count(), 50);
}

#[test]
fn render_to_stdout() {
    let output = canton()
        .args(["render", "48", "-o", "-"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<svg"), "SVG should be the only thing on stdout");
    assert!(stdout.contains("</svg>"));
    assert_eq!(stdout.matches("<polygon ").count(), 48);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Using pattern for 48 stars"));
}

#[test]
fn repeated_renders_are_identical() {
    let run = || {
        canton()
            .args(["37", "-o", "-"])
            .output()
            .expect("Failed to execute command")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn zero_stars_fails() {
    let output = canton()
        .args(["pattern", "0"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("star count must be at least 1"), "{}", stderr);
}

#[test]
fn non_numeric_count_fails() {
    let output = canton()
        .args(["render", "many"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
}

#[test]
fn pattern_json() {
    let output = canton()
        .args(["pattern", "50", "--json"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"rows\""));
    assert!(stdout.contains("\"staggered\": true"));
    assert!(stdout.contains("\"mode\": \"alt-staggered-high-first\""));
}

#[test]
fn config_overrides_palette() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("flag.yaml");
    fs::write(&config, "palette:\n  star: \"#FFD700\"\n").unwrap();

    let output = canton()
        .args(["render", "13", "-o", "-", "--config"])
        .arg(&config)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("fill=\"#FFD700\"").count(), 13);
}

#[test]
fn bad_config_color_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("flag.yaml");
    fs::write(&config, "palette:\n  blue: nope\n").unwrap();

    let output = canton()
        .args(["render", "-o", "-", "--config"])
        .arg(&config)
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a valid SVG color"));
}

#[test]
fn png_output() {
    let dir = tempfile::tempdir().unwrap();
    let svg = dir.path().join("flag.svg");
    let png = dir.path().join("flag.png");

    let output = canton()
        .args(["render", "20", "-o"])
        .arg(&svg)
        .arg("--png")
        .arg(&png)
        .args(["--png-scale", "0.2"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    assert!(svg.exists());
    let bytes = fs::read(&png).expect("png not written");
    assert_eq!(&bytes[..4], b"\x89PNG");
}

#[test]
fn inspect_generated_flag() {
    let dir = tempfile::tempdir().unwrap();
    let svg = dir.path().join("flag.svg");

    let status = canton()
        .args(["render", "50", "-o"])
        .arg(&svg)
        .status()
        .expect("Failed to execute command");
    assert!(status.success());

    let output = canton()
        .arg("inspect")
        .arg(&svg)
        .arg("--json")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["rects"], 14);
    assert_eq!(report["polygons"], 50);
    assert_eq!(report["polygon_vertices"]["10"], 50);
}
