//! Command-line integration tests.
//!
//! These only exercise paths that terminate before a front-end loop
//! starts: help, completions, and configuration failures.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_modes() {
    Command::cargo_bin("pomo")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("config.json"));
}

#[test]
fn completions_print_script() {
    Command::cargo_bin("pomo")
        .unwrap()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomo"));
}

#[test]
fn rejects_non_positive_duration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"work_minutes": 0}"#).unwrap();

    Command::cargo_bin("pomo")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("work_minutes"));
}

#[test]
fn rejects_oversized_duration_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"work_minutes": 100000000}"#).unwrap();

    Command::cargo_bin("pomo")
        .unwrap()
        .arg(&path)
        .args(["--mode", "prompt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("work_minutes"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn rejects_out_of_range_opacity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"ui": {"opacity": 0.1}}"#).unwrap();

    Command::cargo_bin("pomo")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("opacity"));
}

#[test]
fn rejects_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();

    Command::cargo_bin("pomo")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn quits_prompt_mode_on_q() {
    Command::cargo_bin("pomo")
        .unwrap()
        .args(["--mode", "prompt"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quitting"));
}

#[test]
fn prompt_skip_after_unpause_prints_no_countdown_line() {
    // Unpause at the prompt, then skip: the skip message must not be
    // interleaved with a countdown line for the next session.
    Command::cargo_bin("pomo")
        .unwrap()
        .args(["--mode", "prompt"])
        .write_stdin("p\ns\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped Work"))
        .stdout(predicate::str::contains("05:00").not());
}

#[test]
fn prompt_mode_reprompts_on_unknown_command() {
    Command::cargo_bin("pomo")
        .unwrap()
        .args(["--mode", "prompt"])
        .write_stdin("x\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a known command"));
}
