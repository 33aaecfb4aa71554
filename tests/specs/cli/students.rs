// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for adding and removing students and grades.

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

fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    school().arg("init").current_dir(temp.path()).assert().success();
    temp
}

fn run_ok(temp: &TempDir, args: &[&str]) {
    school()
        .args(args)
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn add_student_and_grades() {
    let temp = init_temp();
    school()
        .args(["add-student", "Jane Roe", "--birth-year", "2007"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Added student Jane Roe (id 1)\n");

    run_ok(&temp, &["add-grade", "Jane Roe", "Math", "91"]);
    run_ok(&temp, &["add-grade", "Jane Roe", "Art", "77"]);

    school()
        .args(["grades", "Jane Roe"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Math     91"))
        .stdout(predicate::str::contains("Art      77"));
}

#[test]
fn duplicate_student_rejected() {
    let temp = init_temp();
    run_ok(&temp, &["add-student", "Jane Roe"]);
    school()
        .args(["add-student", "Jane Roe"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn out_of_range_score_rejected() {
    let temp = init_temp();
    run_ok(&temp, &["add-student", "Jane Roe"]);

    for bad in ["0", "101"] {
        school()
            .args(["add-grade", "Jane Roe", "Math", bad])
            .current_dir(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("between 1 and 100"));
    }
}

#[test]
fn grade_for_missing_student_rejected() {
    let temp = init_temp();
    school()
        .args(["add-grade", "Ghost", "Math", "50"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("student not found: Ghost"));
}

#[test]
fn remove_student_removes_grades() {
    let temp = init_temp();
    run_ok(&temp, &["seed"]);

    school()
        .args(["remove-student", "Isabella Martinez"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Removed Isabella Martinez and 3 grades\n");

    school()
        .args(["gradebook", "-o", "json"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Isabella").not());

    school()
        .args(["averages", "--top", "1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Emily Wilson"));
}

#[test]
fn summary_shows_na_for_student_without_grades() {
    let temp = init_temp();
    run_ok(&temp, &["add-student", "Quiet Student"]);
    school()
        .arg("summary")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Quiet Student's average grade is N/A",
        ))
        .stdout(predicate::str::contains("No students with grades"));
}
