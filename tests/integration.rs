// Integration tests for the taskrank CLI surface.
//
// These use assert_cmd to invoke the binary and verify exit codes and
// stdout/stderr output. Each run gets an isolated HOME and working directory
// so no stray config file is picked up.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to build a Command for the taskrank binary inside `dir`.
fn taskrank(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taskrank").expect("binary should exist");
    cmd.current_dir(dir.path()).env("HOME", dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_version_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    taskrank(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("taskrank"));
}

#[test]
fn cli_help_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    taskrank(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task priority scoring"));
}

#[test]
fn analyze_requires_tasks_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    taskrank(&dir)
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    let dir = TempDir::new().expect("temp dir should be created");
    taskrank(&dir)
        .args(["-q", "-v", "strategies"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn strategies_lists_all_four_with_default_marker() {
    let dir = TempDir::new().expect("temp dir should be created");
    taskrank(&dir)
        .arg("strategies")
        .assert()
        .success()
        .stdout(predicate::str::contains("fastest_wins"))
        .stdout(predicate::str::contains("high_impact"))
        .stdout(predicate::str::contains("deadline_driven"))
        .stdout(predicate::str::contains("Smart balanced approach (default)"));
}

#[test]
fn suggest_without_file_scores_sample_tasks() {
    let dir = TempDir::new().expect("temp dir should be created");
    taskrank(&dir)
        .arg("suggest")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"suggestions\""))
        .stdout(predicate::str::contains("\"title\": \"Fix critical bug\""))
        .stdout(predicate::str::contains("\"priority\": \"critical\""))
        .stdout(predicate::str::contains("\"strategy\": \"smart_balance\""));
}
