#![allow(dead_code)]

use assert_cmd::Command;
use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

pub fn lifeos_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lifeos").unwrap();
    cmd.env_remove("LIFEOS_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A day with the log form defaults, as it appears in an export file
pub fn entry(date: &str) -> Value {
    json!({
        "date": date,
        "finance": { "incomeAdded": 0.0, "moneySpent": 0.0, "savingsAdded": 0.0 },
        "career": { "minutesStudied": 0.0, "skillsPracticed": 0, "projectWork": false },
        "health": { "sleepHours": 7.0, "workoutDone": false, "moodScale": 3 },
        "spirituality": { "prayerDone": false, "reflectionMinutes": 0.0 },
        "hobbies": { "practiceMinutes": 0.0, "techniquePracticed": false }
    })
}

/// `days` consecutive days from `start` (YYYY-MM-DD), each passed through `fill`
pub fn consecutive(start: &str, days: usize, fill: impl Fn(&mut Value)) -> Vec<Value> {
    let first = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
    (0..days)
        .map(|offset| {
            let date = first + Duration::days(offset as i64);
            let mut value = entry(&date.format("%Y-%m-%d").to_string());
            fill(&mut value);
            value
        })
        .collect()
}

/// Consecutive January 2025 days starting on the 1st
pub fn january(days: usize, fill: impl Fn(&mut Value)) -> Vec<Value> {
    consecutive("2025-01-01", days, fill)
}

pub fn write_entries(path: &Path, entries: &[Value]) {
    fs::write(path, serde_json::to_string_pretty(entries).unwrap()).unwrap();
}

/// Initialize `root` and import `entries` into it
pub fn seed(root: &Path, entries: &[Value]) {
    lifeos_cmd().arg("init").arg(root).assert().success();

    let file = root.join("seed.json");
    write_entries(&file, entries);
    lifeos_cmd()
        .current_dir(root)
        .arg("import")
        .arg(&file)
        .assert()
        .success();
}

pub fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}
