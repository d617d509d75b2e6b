use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

const ALL_SCENES: [&str; 7] = [
    "mandelbrot",
    "julia",
    "burning-ship",
    "seahorse",
    "elephant",
    "julia-flower",
    "deep-zoom",
];

fn escapetime() -> Command {
    Command::cargo_bin("escapetime").unwrap()
}

#[test]
fn writes_every_preset_scene() {
    let dir = tempfile::tempdir().unwrap();
    escapetime()
        .args(&["--size", "16x9", "--iterations", "25", "--threads", "1"])
        .arg("--outdir")
        .arg(dir.path())
        .assert()
        .success();

    let header = b"P6\n16 9\n255\n";
    for name in &ALL_SCENES {
        let raw = fs::read(dir.path().join(format!("{}.ppm", name))).unwrap();
        assert!(raw.starts_with(header), "{} has a bad header", name);
        assert_eq!(raw.len(), header.len() + 16 * 9 * 3, "{} has a bad payload", name);
    }
}

#[test]
fn renders_only_the_requested_scene() {
    let dir = tempfile::tempdir().unwrap();
    escapetime()
        .args(&["--scene", "julia", "--size", "16x9", "--iterations", "25", "--threads", "1"])
        .arg("--outdir")
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("julia.ppm").is_file());
    assert!(!dir.path().join("mandelbrot.ppm").exists());
}

#[test]
fn accepts_a_julia_override() {
    let dir = tempfile::tempdir().unwrap();
    escapetime()
        .args(&["--scene", "julia", "--julia", "0.285,0.01"])
        .args(&["--size", "16x9", "--iterations", "25", "--threads", "1"])
        .arg("--outdir")
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("julia.ppm").is_file());
}

#[test]
fn rejects_a_malformed_size() {
    escapetime()
        .args(&["--size", "1920"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}

#[test]
fn rejects_an_empty_axis() {
    escapetime()
        .args(&["--size", "0x1080"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must both be nonzero"));
}

#[test]
fn rejects_an_unknown_scene() {
    escapetime()
        .args(&["--scene", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("isn't a valid value"));
}

#[test]
fn skips_scenes_it_cannot_write() {
    let dir = tempfile::tempdir().unwrap();
    // Squat on one scene's output name with a directory; that scene
    // cannot be written, but the run still finishes the rest.
    fs::create_dir(dir.path().join("julia.ppm")).unwrap();

    escapetime()
        .args(&["--size", "16x9", "--iterations", "25", "--threads", "1"])
        .arg("--outdir")
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("julia.ppm").is_dir());
    for name in &ALL_SCENES {
        if *name == "julia" {
            continue;
        }
        assert!(
            dir.path().join(format!("{}.ppm", name)).is_file(),
            "{} was not written",
            name
        );
    }
}
