// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commands that change the students and grades tables.

use std::io::{self, Write};

use school_core::{NewGrade, NewStudent, Score};

use crate::db::Database;
use crate::error::Result;

use super::open_db;

pub fn add_student(name: &str, birth_year: Option<i32>) -> Result<()> {
    let (db, _) = open_db()?;
    add_student_impl(&db, name, birth_year, &mut io::stdout())
}

pub(crate) fn add_student_impl(
    db: &Database,
    name: &str,
    birth_year: Option<i32>,
    out: &mut dyn Write,
) -> Result<()> {
    let name = name.trim();
    if db.find_student_by_name(name)?.is_some() {
        return Err(school_core::Error::StudentExists(name.to_string()).into());
    }
    let student = db.insert_student(&NewStudent::new(name, birth_year))?;
    tracing::info!(id = student.id, name = %student.full_name, "added student");
    writeln!(out, "Added student {} (id {})", student.full_name, student.id)?;
    Ok(())
}

pub fn add_grade(name: &str, subject: &str, score: Score) -> Result<()> {
    let (db, _) = open_db()?;
    add_grade_impl(&db, name, subject, score, &mut io::stdout())
}

pub(crate) fn add_grade_impl(
    db: &Database,
    name: &str,
    subject: &str,
    score: Score,
    out: &mut dyn Write,
) -> Result<()> {
    let subject = subject.trim();
    let student = db.require_student(name)?;
    let grade = db.insert_grade(&NewGrade::new(student.id, subject, score))?;
    tracing::info!(student_id = student.id, subject, score = %score, "recorded grade");
    writeln!(
        out,
        "Recorded {} {} for {}",
        grade.subject, grade.score, student.full_name
    )?;
    Ok(())
}

pub fn remove_student(name: &str) -> Result<()> {
    let (db, _) = open_db()?;
    remove_student_impl(&db, name, &mut io::stdout())
}

pub(crate) fn remove_student_impl(db: &Database, name: &str, out: &mut dyn Write) -> Result<()> {
    let student = db.require_student(name)?;
    let grades = db.get_grades(student.id)?.len();
    db.delete_student(student.id)?;
    tracing::info!(id = student.id, grades, "removed student");
    writeln!(
        out,
        "Removed {} and {} grade{}",
        student.full_name,
        grades,
        if grades == 1 { "" } else { "s" }
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "student_tests.rs"]
mod tests;
