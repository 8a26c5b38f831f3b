//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn crcf() -> Command {
    let mut cmd = Command::cargo_bin("crcf").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn invalid_component_name_fails_with_no_writes() {
    let temp = TempDir::new().unwrap();

    crcf()
        .current_dir(temp.path())
        .arg("foo-bar")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid component name"));

    assert!(!temp.path().join("foo-bar").exists());
}

#[test]
fn digit_in_name_is_rejected() {
    let temp = TempDir::new().unwrap();

    crcf()
        .current_dir(temp.path())
        .arg("Button2")
        .assert()
        .failure()
        .code(2);

    assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
}

#[test]
fn one_bad_name_aborts_the_whole_run() {
    let temp = TempDir::new().unwrap();

    crcf()
        .current_dir(temp.path())
        .args(["Button", "bad_name"])
        .assert()
        .failure()
        .code(2);

    // Validation happens before any writes, so Button is not created either.
    assert!(!temp.path().join("Button").exists());
}

#[test]
fn existing_directory_is_not_overwritten() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("Button")).unwrap();
    fs::write(temp.path().join("Button/keep.txt"), "precious").unwrap();

    crcf()
        .current_dir(temp.path())
        .arg("Button")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    // The preexisting content is untouched and nothing new was written.
    let kept = fs::read_to_string(temp.path().join("Button/keep.txt")).unwrap();
    assert_eq!(kept, "precious");
    assert!(!temp.path().join("Button/index.js").exists());
}

#[test]
fn second_run_for_same_component_fails() {
    let temp = TempDir::new().unwrap();

    crcf().current_dir(temp.path()).arg("Button").assert().success();

    crcf()
        .current_dir(temp.path())
        .arg("Button")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    // Files from the first run survive.
    assert!(temp.path().join("Button/index.js").is_file());
}

#[test]
fn uppercase_second_run_fails_and_keeps_the_first_run() {
    let temp = TempDir::new().unwrap();

    crcf()
        .current_dir(temp.path())
        .args(["-u", "button"])
        .assert()
        .success();
    let first = fs::read_to_string(temp.path().join("Button/index.js")).unwrap();

    crcf()
        .current_dir(temp.path())
        .args(["-u", "button"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    let second = fs::read_to_string(temp.path().join("Button/index.js")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn nocss_with_less_is_a_user_error() {
    let temp = TempDir::new().unwrap();

    crcf()
        .current_dir(temp.path())
        .args(["--nocss", "--less", "Button"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--nocss"));

    assert!(!temp.path().join("Button").exists());
}

#[test]
fn nocss_with_scss_is_a_user_error() {
    let temp = TempDir::new().unwrap();

    crcf()
        .current_dir(temp.path())
        .args(["--nocss", "--scss", "Button"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();

    crcf()
        .current_dir(temp.path())
        .args(["--config", "nope.toml", "Button"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn invalid_config_file_is_a_configuration_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bad.toml"), "not [[ valid toml").unwrap();

    crcf()
        .current_dir(temp.path())
        .args(["--config", "bad.toml", "Button"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn errors_include_suggestions() {
    let temp = TempDir::new().unwrap();

    crcf()
        .current_dir(temp.path())
        .arg("foo-bar")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn quiet_mode_still_reports_errors() {
    let temp = TempDir::new().unwrap();

    crcf()
        .current_dir(temp.path())
        .args(["--quiet", "foo-bar"])
        .assert()
        .failure()
        .stderr(predicate::str::is_empty().not());
}
