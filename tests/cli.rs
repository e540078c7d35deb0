//! CLI end-to-end tests
//!
//! None of these need a working ffmpeg or ffprobe.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[allow(deprecated)]
fn reencode_cmd() -> Command {
    Command::cargo_bin("reencode-to-size").unwrap()
}

#[test]
fn test_cli_help_flag() {
    reencode_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--target-size-mb"))
        .stdout(predicate::str::contains("--strict"));
}

#[test]
fn test_cli_version_flag() {
    reencode_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("reencode-to-size"));
}

#[test]
fn test_prompt_with_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.mp4");

    reencode_cmd()
        .write_stdin(format!("  {}  \n", missing.display()))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Enter the path to the MP4 file: "))
        .stdout(predicate::str::contains("File does not exist."));
}

#[test]
fn test_argument_with_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.mp4");

    reencode_cmd()
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::diff("File does not exist.\n"));
}

#[test]
fn test_missing_file_never_touches_ffmpeg() {
    let dir = tempdir().unwrap();

    reencode_cmd()
        .arg(dir.path().join("nope.mp4"))
        .args(["--ffmpeg", "nonexistent_tool_xyz_12345"])
        .args(["--ffprobe", "nonexistent_tool_xyz_12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File does not exist."));
}

#[test]
fn test_missing_ffmpeg_is_fatal() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("clip.mp4");
    std::fs::write(&input, b"x").unwrap();

    reencode_cmd()
        .current_dir(dir.path())
        .arg(&input)
        .args(["--ffmpeg", "nonexistent_tool_xyz_12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tool not found"));
}

#[test]
fn test_empty_encoder_name_is_rejected() {
    reencode_cmd()
        .args(["--encoder", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}
