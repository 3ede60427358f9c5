//! Smoke tests for the students binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_serve() {
    let mut cmd = Command::cargo_bin("students").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("students").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_serve_without_database_settings_fails() {
    // Empty directory so no .env file is picked up
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("students").unwrap();
    cmd.env_clear()
        .current_dir(dir.path())
        .arg("serve")
        .arg("--bind")
        .arg("127.0.0.1:0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("POSTGRES_USER"));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("students").unwrap();
    cmd.arg("enroll");

    cmd.assert().failure();
}
