//! Integration tests for the gymcheck binary.
//!
//! These tests drive the interactive prompt through stdin and verify:
//! - Status lines for paying, lapsed and unknown people
//! - Workout log creation and appending
//! - Input validation messages
//! - Startup behavior with a missing or malformed roster

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ROSTER: &str = "9006161234, Daniel Isaksson\n\
                      2023-06-16\n\
                      9403021234, Sarah Wrengler\n\
                      2022-12-02\n\
                      7608081234, Malin Isaksson\n\
                      2021-02-02\n";

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("gymcheck"))
}

fn write_roster(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("paying_customers.txt");
    fs::write(&path, contents).expect("Failed to write roster");
    path
}

/// Command pointed at files inside `dir`, with today pinned to 2024-01-01
fn checkin(dir: &Path) -> Command {
    let mut cmd = cli();
    cmd.arg("--data-dir")
        .arg(dir)
        .arg("--today")
        .arg("2024-01-01")
        .env("XDG_CONFIG_HOME", dir.join("config"));
    cmd
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gym check-in terminal"));
}

#[test]
fn test_paying_customer_by_identifier() {
    let temp_dir = setup_test_dir();
    write_roster(temp_dir.path(), "9006161234, Daniel Isaksson\n2023-06-16\n");

    checkin(temp_dir.path())
        .write_stdin("9006161234\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("9006161234 is a paying customer"))
        .stdout(predicate::str::contains("Good bye!"));

    let log = fs::read_to_string(temp_dir.path().join("workout_sheet.txt"))
        .expect("Failed to read workout log");
    assert_eq!(log, "Workout sheet:\n9006161234, Daniel Isaksson\n2024-01-01");
}

#[test]
fn test_lapsed_and_unknown_not_logged() {
    let temp_dir = setup_test_dir();
    write_roster(temp_dir.path(), ROSTER);

    checkin(temp_dir.path())
        .write_stdin("malin isaksson\nHenrik Isaksson\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "malin isaksson is a customer, but has not paid their fee",
        ))
        .stdout(predicate::str::contains("Henrik Isaksson is not a customer"));

    assert!(!temp_dir.path().join("workout_sheet.txt").exists());
}

#[test]
fn test_header_written_once_across_runs() {
    let temp_dir = setup_test_dir();
    write_roster(temp_dir.path(), ROSTER);

    for _ in 0..2 {
        checkin(temp_dir.path())
            .write_stdin("Daniel Isaksson\nquit\n")
            .assert()
            .success();
    }

    let log = fs::read_to_string(temp_dir.path().join("workout_sheet.txt"))
        .expect("Failed to read workout log");
    assert_eq!(log.matches("Workout sheet:").count(), 1);
    assert_eq!(log.matches("9006161234, Daniel Isaksson\n2024-01-01").count(), 2);
}

#[test]
fn test_invalid_input_messages() {
    let temp_dir = setup_test_dir();
    write_roster(temp_dir.path(), ROSTER);

    checkin(temp_dir.path())
        .write_stdin("\n900616\nQUIT\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Person or identifier field cannot be empty",
        ))
        .stdout(predicate::str::contains(
            "The identifier you have entered is not 10 digits long",
        ))
        .stdout(predicate::str::contains("is not a customer").not());
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let temp_dir = setup_test_dir();
    write_roster(temp_dir.path(), ROSTER);

    checkin(temp_dir.path())
        .write_stdin("Sarah Wrengler\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sarah Wrengler is a customer, but has not paid their fee",
        ));
}

#[test]
fn test_missing_roster_continues_with_empty_roster() {
    let temp_dir = setup_test_dir();

    checkin(temp_dir.path())
        .write_stdin("9006161234\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Roster file could not be found"))
        .stdout(predicate::str::contains("9006161234 is not a customer"));
}

#[test]
fn test_missing_roster_fails_when_required() {
    let temp_dir = setup_test_dir();

    checkin(temp_dir.path())
        .arg("--require-roster")
        .write_stdin("quit\n")
        .assert()
        .failure();
}

#[test]
fn test_malformed_roster_fails_when_required() {
    let temp_dir = setup_test_dir();
    write_roster(temp_dir.path(), "9006161234, Daniel Isaksson\n16/06/2023\n");

    checkin(temp_dir.path())
        .arg("--require-roster")
        .write_stdin("quit\n")
        .assert()
        .failure();
}

#[test]
fn test_require_roster_from_config() {
    let temp_dir = setup_test_dir();
    let config_dir = temp_dir.path().join("config/gymcheck");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[roster]\nrequire_roster = true\n",
    )
    .unwrap();

    checkin(temp_dir.path())
        .write_stdin("quit\n")
        .assert()
        .failure();
}

#[test]
fn test_explicit_file_paths() {
    let temp_dir = setup_test_dir();
    let roster_path = temp_dir.path().join("members.txt");
    let log_path = temp_dir.path().join("logs/visits.txt");
    fs::write(&roster_path, ROSTER).unwrap();

    checkin(temp_dir.path())
        .arg("--roster")
        .arg(&roster_path)
        .arg("--workout-log")
        .arg(&log_path)
        .write_stdin("7608081234\n9006161234\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "7608081234 is a customer, but has not paid their fee",
        ));

    let log = fs::read_to_string(&log_path).expect("Failed to read workout log");
    assert_eq!(log, "Workout sheet:\n9006161234, Daniel Isaksson\n2024-01-01");
}

#[test]
fn test_invalid_today_rejected() {
    cli().arg("--today").arg("2024-1-1").assert().failure();
}
