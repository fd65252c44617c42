//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("blogly").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Server-rendered blog"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("blogly").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("blogly").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database URL"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("blogly").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("blogly"));
}

#[test]
fn test_serve_requires_database_url() {
    let mut cmd = Command::cargo_bin("blogly").unwrap();
    cmd.env_remove("DATABASE_URL").arg("serve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL"));
}
