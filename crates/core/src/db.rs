// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed storage for students and grades.
//!
//! The [`Database`] struct owns the connection and exposes the write
//! operations plus simple lookups. Reporting queries live in
//! [`crate::report`].

use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Grade, NewGrade, NewStudent, Student};

/// SQL schema for the school database.
pub const SCHEMA: &str = include_str!("schema.sql");

/// Apply the schema to a connection. Safe to run on every open.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

pub(crate) fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get("id")?,
        full_name: row.get("full_name")?,
        birth_year: row.get("birth_year")?,
    })
}

fn grade_from_row(row: &Row<'_>) -> rusqlite::Result<Grade> {
    Ok(Grade {
        id: row.get("id")?,
        student_id: row.get("student_id")?,
        subject: row.get("subject")?,
        score: row.get("grade")?,
    })
}

/// Database connection wrapper.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database at the given path, creating the file and schema if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // Foreign keys are off by default in SQLite; cascade deletes need them.
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        debug!(path = %path.display(), "opened database");
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Insert a student and return it with its generated id.
    pub fn insert_student(&self, student: &NewStudent) -> Result<Student> {
        if student.full_name.trim().is_empty() {
            return Err(Error::InvalidInput(
                "student name cannot be empty".to_string(),
            ));
        }
        self.conn.execute(
            "INSERT INTO students (full_name, birth_year) VALUES (?1, ?2)",
            params![student.full_name, student.birth_year],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, name = %student.full_name, "inserted student");
        Ok(Student {
            id,
            full_name: student.full_name.clone(),
            birth_year: student.birth_year,
        })
    }

    /// Insert a grade. Fails with a constraint error if the student does not exist.
    pub fn insert_grade(&self, grade: &NewGrade) -> Result<Grade> {
        if grade.subject.trim().is_empty() {
            return Err(Error::InvalidInput("subject cannot be empty".to_string()));
        }
        self.conn.execute(
            "INSERT INTO grades (student_id, subject, grade) VALUES (?1, ?2, ?3)",
            params![grade.student_id, grade.subject, grade.score],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, student_id = grade.student_id, subject = %grade.subject, "inserted grade");
        Ok(Grade {
            id,
            student_id: grade.student_id,
            subject: grade.subject.clone(),
            score: grade.score,
        })
    }

    /// Delete a student. Their grades go with them.
    ///
    /// Returns false if no student had that id.
    pub fn delete_student(&self, id: i64) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1", params![id])?;
        debug!(id, affected, "deleted student");
        Ok(affected > 0)
    }

    /// Get a student by id.
    pub fn get_student(&self, id: i64) -> Result<Student> {
        self.conn
            .query_row(
                "SELECT id, full_name, birth_year FROM students WHERE id = ?1",
                params![id],
                student_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::StudentNotFound(id.to_string()))
    }

    /// Find a student by exact full name. The lowest id wins if names repeat.
    pub fn find_student_by_name(&self, full_name: &str) -> Result<Option<Student>> {
        let student = self
            .conn
            .query_row(
                "SELECT id, full_name, birth_year FROM students
                 WHERE full_name = ?1 ORDER BY id LIMIT 1",
                params![full_name],
                student_from_row,
            )
            .optional()?;
        Ok(student)
    }

    /// Like [`Database::find_student_by_name`], but a missing student is an error.
    pub fn require_student(&self, full_name: &str) -> Result<Student> {
        self.find_student_by_name(full_name)?
            .ok_or_else(|| Error::StudentNotFound(full_name.to_string()))
    }

    /// All students in id order.
    pub fn list_students(&self) -> Result<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, full_name, birth_year FROM students ORDER BY id")?;
        let students = stmt
            .query_map([], student_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(students)
    }

    /// All grades of one student in insertion order.
    pub fn get_grades(&self, student_id: i64) -> Result<Vec<Grade>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, student_id, subject, grade FROM grades
             WHERE student_id = ?1 ORDER BY id",
        )?;
        let grades = stmt
            .query_map(params![student_id], grade_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(grades)
    }

    pub fn count_students(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    pub fn count_grades(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM grades", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
