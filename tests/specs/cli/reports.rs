// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the report commands against the sample data.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn school() -> Command {
    let mut cmd = cargo_bin_cmd!("school");
    cmd.env("NO_COLOR", "1").env_remove("SCHOOL_DB");
    cmd
}

fn seeded_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    school().arg("init").current_dir(temp.path()).assert().success();
    school().arg("seed").current_dir(temp.path()).assert().success();
    temp
}

fn json(temp: &TempDir, args: &[&str]) -> Value {
    let output = school()
        .args(args)
        .args(["-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?} failed", args);
    serde_json::from_slice(&output.stdout).unwrap()
}

fn names(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["full_name"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Grades for one student
// =============================================================================

#[test]
fn grades_for_alice_johnson() {
    let temp = seeded_temp();
    let value = json(&temp, &["grades", "Alice Johnson"]);

    let pairs: Vec<(String, u64)> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|g| {
            (
                g["subject"].as_str().unwrap().to_string(),
                g["score"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Math".to_string(), 88),
            ("English".to_string(), 92),
            ("Science".to_string(), 85)
        ]
    );
}

#[test]
fn grades_for_unknown_student_fails() {
    let temp = seeded_temp();
    school()
        .args(["grades", "Alice"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("student not found: Alice"));
}

// =============================================================================
// Averages
// =============================================================================

#[test]
fn averages_sorted_descending() {
    let temp = seeded_temp();
    let value = json(&temp, &["averages"]);
    let rows = value.as_array().unwrap();

    assert_eq!(rows.len(), 9);
    assert_eq!(rows[0]["full_name"], "Isabella Martinez");
    assert!((rows[0]["average"].as_f64().unwrap() - 92.33).abs() < 1e-9);
    let averages: Vec<f64> = rows.iter().map(|r| r["average"].as_f64().unwrap()).collect();
    assert!(averages.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn averages_top_three() {
    let temp = seeded_temp();
    let value = json(&temp, &["averages", "--top"]);
    assert_eq!(
        names(&value),
        vec!["Isabella Martinez", "Emily Wilson", "Carla Davis"]
    );
}

#[test]
fn averages_text_table() {
    let temp = seeded_temp();
    school()
        .args(["averages", "--top", "1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(" 1  Isabella Martinez  92.33"));
}

// =============================================================================
// Filters
// =============================================================================

#[test]
fn born_after_2004_by_default() {
    let temp = seeded_temp();
    let value = json(&temp, &["born-after"]);
    let years: Vec<i64> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["birth_year"].as_i64().unwrap())
        .collect();
    assert_eq!(years.len(), 5);
    assert!(years.iter().all(|&y| y > 2004));
}

#[test]
fn below_80_by_default() {
    let temp = seeded_temp();
    let value = json(&temp, &["below"]);
    assert_eq!(
        names(&value),
        vec!["Brian Smith", "Daniel Brown", "Frank Miller", "Henry Taylor"]
    );
}

#[test]
fn config_changes_report_defaults() {
    let temp = seeded_temp();
    std::fs::write(
        temp.path().join(".school/config.toml"),
        "[reports]\nbelow_threshold = 70\nborn_after = 2005\n",
    )
    .unwrap();

    assert_eq!(names(&json(&temp, &["below"])), vec!["Daniel Brown"]);
    assert_eq!(
        names(&json(&temp, &["born-after"])),
        vec!["Carla Davis", "Grace Lee"]
    );
}

// =============================================================================
// Aggregates
// =============================================================================

#[test]
fn subjects_sorted_descending() {
    let temp = seeded_temp();
    school()
        .arg("subjects")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "English  84.67\nScience  84.33\nMath     83.78",
        ));
}

#[test]
fn gradebook_has_every_grade() {
    let temp = seeded_temp();
    let value = json(&temp, &["gradebook"]);
    assert_eq!(value.as_array().unwrap().len(), 27);
}

#[test]
fn rankings_share_ties() {
    let temp = seeded_temp();
    let value = json(&temp, &["rankings"]);
    let tied: Vec<&Value> = value
        .as_array()
        .unwrap()
        .iter()
        .filter(|r| r["subject"] == "English" && r["rank"] == 3)
        .collect();
    assert_eq!(tied.len(), 2);
}

#[test]
fn summary_text() {
    let temp = seeded_temp();
    school()
        .arg("summary")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice Johnson's average grade is 88.33"))
        .stdout(predicate::str::contains("Max Average: 92.33"))
        .stdout(predicate::str::contains("Min Average: 70.67"))
        .stdout(predicate::str::contains("Overall Average: 84.26"))
        .stdout(predicate::str::contains(
            "highest average is Isabella Martinez",
        ));
}

#[test]
fn profile_with_fixed_year() {
    let temp = seeded_temp();
    let value = json(&temp, &["profile", "Isabella Martinez", "--year", "2025"]);
    assert_eq!(value["age"], 20);
    assert_eq!(value["stage"], "adult");
}

#[test]
fn schema_for_summary() {
    school()
        .args(["schema", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"top_performer\""));
}
