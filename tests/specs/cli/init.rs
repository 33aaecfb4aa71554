// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `school init`, `school seed`, and project discovery.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn school() -> Command {
    let mut cmd = cargo_bin_cmd!("school");
    cmd.env("NO_COLOR", "1").env_remove("SCHOOL_DB");
    cmd
}

#[test]
fn init_creates_school_dir() {
    let temp = TempDir::new().unwrap();
    school()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized school database"));

    assert!(temp.path().join(".school/config.toml").exists());
    assert!(temp.path().join(".school/school.db").exists());
}

#[test]
fn init_with_custom_database_path() {
    let temp = TempDir::new().unwrap();
    school()
        .args(["init", "--database", "data/class.db"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("data/class.db").exists());
    assert!(!temp.path().join(".school/school.db").exists());
}

#[test]
fn init_with_path_flag() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("class");
    std::fs::create_dir_all(&target).unwrap();

    school()
        .args(["init", "--path"])
        .arg(&target)
        .assert()
        .success();

    assert!(target.join(".school/config.toml").exists());
}

#[test]
fn init_twice_fails() {
    let temp = TempDir::new().unwrap();
    school().arg("init").current_dir(temp.path()).assert().success();
    school()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn commands_outside_project_fail() {
    let temp = TempDir::new().unwrap();
    school()
        .arg("summary")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("school init"));
}

#[test]
fn seed_then_seed_again() {
    let temp = TempDir::new().unwrap();
    school().arg("init").current_dir(temp.path()).assert().success();

    school()
        .arg("seed")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Loaded 9 students and 27 grades\n");

    school()
        .arg("seed")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already contains students"));
}

#[test]
fn commands_work_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    school().arg("init").current_dir(temp.path()).assert().success();
    school().arg("seed").current_dir(temp.path()).assert().success();

    let nested = temp.path().join("notes/week1");
    std::fs::create_dir_all(&nested).unwrap();
    school()
        .args(["grades", "Alice Johnson"])
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("Math     88"));
}

#[test]
fn directory_flag_changes_project() {
    let temp = TempDir::new().unwrap();
    school().arg("init").current_dir(temp.path()).assert().success();
    school().arg("seed").current_dir(temp.path()).assert().success();

    let elsewhere = TempDir::new().unwrap();
    school()
        .args(["subjects", "-C"])
        .arg(temp.path())
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("English  84.67"));
}

#[test]
fn school_db_env_overrides_config() {
    let temp = TempDir::new().unwrap();
    school().arg("init").current_dir(temp.path()).assert().success();

    let other = temp.path().join("other.db");
    school()
        .arg("seed")
        .env("SCHOOL_DB", &other)
        .current_dir(temp.path())
        .assert()
        .success();
    assert!(other.exists());

    // The configured database is still empty.
    school()
        .arg("averages")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("No students with grades\n");
}

#[test]
fn completion_prints_script() {
    school()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("school"));
}
