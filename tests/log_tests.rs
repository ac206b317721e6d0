//! Integration tests for log and show commands

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{lifeos_cmd, stdout_json};

fn init() -> TempDir {
    let temp = TempDir::new().unwrap();
    lifeos_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_log_new_day_with_defaults() {
    let temp = init();

    lifeos_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-01-17", "--study", "45", "--workout", "--prayer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged 2025-01-17"))
        .stdout(predicate::str::contains("studied 45 min"))
        .stdout(predicate::str::contains("workout yes"))
        .stdout(predicate::str::contains("sleep 7 hrs"))
        .stdout(predicate::str::contains("mood 3/5"));
}

#[test]
fn test_log_updates_existing_day() {
    let temp = init();

    lifeos_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-01-17", "--spent", "30", "--mood", "4"])
        .assert()
        .success();

    lifeos_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-01-17", "--saved", "12.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 2025-01-17"))
        .stdout(predicate::str::contains("spent 30  saved 12.5"))
        .stdout(predicate::str::contains("mood 4/5"));
}

#[test]
fn test_log_toggle_off() {
    let temp = init();

    lifeos_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-01-17", "--project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("project yes"));

    lifeos_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-01-17", "--no-project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("project no"));
}

#[test]
fn test_log_rejects_out_of_range_mood() {
    let temp = init();

    lifeos_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-01-17", "--mood", "0"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("moodScale must be between 1 and 5"));

    lifeos_cmd()
        .current_dir(temp.path())
        .args(["show", "2025-01-17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry logged for 2025-01-17"));
}

#[test]
fn test_log_rejects_negative_amount() {
    let temp = init();

    lifeos_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-01-17", "--spent=-5"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("moneySpent must be zero or positive"));
}

#[test]
fn test_log_rejects_invalid_date() {
    let temp = init();

    lifeos_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-02-30"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid date: '2025-02-30'"));
}

#[test]
fn test_log_today_then_show_today() {
    let temp = init();

    lifeos_cmd()
        .current_dir(temp.path())
        .args(["log", "--reflection", "15"])
        .assert()
        .success();

    lifeos_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("reflection 15 min"));
}

#[test]
fn test_show_json_uses_camel_case_fields() {
    let temp = init();

    lifeos_cmd()
        .current_dir(temp.path())
        .args(["log", "2025-01-17", "--sleep", "7.5", "--practice", "20", "--technique"])
        .assert()
        .success();

    let json = stdout_json(
        lifeos_cmd()
            .current_dir(temp.path())
            .args(["show", "2025-01-17", "--json"]),
    );

    assert_eq!(json["date"], "2025-01-17");
    assert_eq!(json["health"]["sleepHours"], 7.5);
    assert_eq!(json["hobbies"]["practiceMinutes"], 20.0);
    assert_eq!(json["hobbies"]["techniquePracticed"], true);
    assert_eq!(json["finance"]["moneySpent"], 0.0);
}

#[test]
fn test_logs_file_stays_sorted() {
    let temp = init();

    for date in ["2025-01-20", "2025-01-05", "2025-01-12"] {
        lifeos_cmd()
            .current_dir(temp.path())
            .args(["log", date])
            .assert()
            .success();
    }

    let raw = std::fs::read_to_string(temp.path().join(".lifeos/logs.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let dates: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-01-05", "2025-01-12", "2025-01-20"]);
}
