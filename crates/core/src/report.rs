// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only reports over the students and grades tables.
//!
//! Every report is a single SQL statement; averages are rounded to two
//! decimals by SQLite's `ROUND`. Ordering ties are broken by name so output
//! is stable.

use rusqlite::{params, Row};
use serde::Serialize;

use crate::db::{student_from_row, Database};
use crate::error::Result;
use crate::model::{Score, Student};

/// Birth year cutoff used by the sample "born after" report.
pub const DEFAULT_BORN_AFTER: i32 = 2004;
/// Threshold used by the sample "below" report.
pub const DEFAULT_BELOW_THRESHOLD: u8 = 80;
/// Row count of the sample "top students" report.
pub const DEFAULT_TOP: u32 = 3;

/// One `(subject, score)` pair of a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SubjectScore {
    pub subject: String,
    pub score: Score,
}

/// A student's mean score across all their grades.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct StudentAverage {
    pub student_id: i64,
    pub full_name: String,
    /// Rounded to two decimals.
    pub average: f64,
}

/// A subject's mean score across all students.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SubjectAverage {
    pub subject: String,
    /// Rounded to two decimals.
    pub average: f64,
}

/// A grade joined with its student's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct GradebookRow {
    pub full_name: String,
    pub subject: String,
    pub score: Score,
}

/// A student's standing within one subject. Equal scores share a rank and
/// leave a gap after them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SubjectRank {
    pub subject: String,
    pub full_name: String,
    pub score: Score,
    pub rank: u32,
}

/// A student's line in the class summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct StudentOverview {
    pub student_id: i64,
    pub full_name: String,
    /// `None` when the student has no grades.
    pub average: Option<f64>,
    pub grade_count: u32,
}

/// Per-student averages plus class-wide statistics.
///
/// Students without grades appear in `students` but are left out of the
/// statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ClassSummary {
    pub students: Vec<StudentOverview>,
    pub max_average: Option<f64>,
    pub min_average: Option<f64>,
    /// Mean of the per-student averages.
    pub overall_average: Option<f64>,
}

/// Round to two decimals, matching SQLite's `ROUND(x, 2)` for the values
/// these reports produce.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn student_average_from_row(row: &Row<'_>) -> rusqlite::Result<StudentAverage> {
    Ok(StudentAverage {
        student_id: row.get("id")?,
        full_name: row.get("full_name")?,
        average: row.get("average")?,
    })
}

impl Database {
    /// All `(subject, score)` pairs of the student with exactly this full name.
    ///
    /// An unknown name yields an empty list, as the plain query would.
    pub fn grades_for_student(&self, full_name: &str) -> Result<Vec<SubjectScore>> {
        let mut stmt = self.conn.prepare(
            "SELECT g.subject, g.grade
             FROM grades g
             JOIN students s ON s.id = g.student_id
             WHERE s.full_name = ?1
             ORDER BY g.id",
        )?;
        let rows = stmt
            .query_map(params![full_name], |row| {
                Ok(SubjectScore {
                    subject: row.get(0)?,
                    score: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Every student's average score, highest first.
    pub fn student_averages(&self) -> Result<Vec<StudentAverage>> {
        self.averages_limited(None)
    }

    /// The `limit` students with the highest average, highest first.
    pub fn top_students(&self, limit: u32) -> Result<Vec<StudentAverage>> {
        self.averages_limited(Some(limit))
    }

    /// The single best student, if anyone has grades.
    pub fn top_performer(&self) -> Result<Option<StudentAverage>> {
        Ok(self.top_students(1)?.into_iter().next())
    }

    fn averages_limited(&self, limit: Option<u32>) -> Result<Vec<StudentAverage>> {
        // A negative LIMIT means no limit in SQLite.
        let limit = limit.map_or(-1, i64::from);
        let mut stmt = self.conn.prepare(
            "SELECT s.id, s.full_name, ROUND(AVG(g.grade), 2) AS average
             FROM students s
             JOIN grades g ON g.student_id = s.id
             GROUP BY s.id, s.full_name
             ORDER BY average DESC, s.full_name
             LIMIT ?1",
        )?;
        let rows = stmt
            .query_map(params![limit], student_average_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Students born strictly after `year`. Students without a birth year
    /// never match.
    pub fn students_born_after(&self, year: i32) -> Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, full_name, birth_year
             FROM students
             WHERE birth_year > ?1
             ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![year], student_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Every subject's average score across all students, highest first.
    pub fn subject_averages(&self) -> Result<Vec<SubjectAverage>> {
        let mut stmt = self.conn.prepare(
            "SELECT subject, ROUND(AVG(grade), 2) AS average
             FROM grades
             GROUP BY subject
             ORDER BY average DESC, subject",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SubjectAverage {
                    subject: row.get("subject")?,
                    average: row.get("average")?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Distinct students with at least one score strictly below `threshold`.
    pub fn students_below(&self, threshold: u8) -> Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT s.id, s.full_name, s.birth_year
             FROM students s
             JOIN grades g ON g.student_id = s.id
             WHERE g.grade < ?1
             ORDER BY s.full_name, s.id",
        )?;
        let rows = stmt
            .query_map(params![threshold], student_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Every grade with its student's name, by student then subject.
    pub fn gradebook(&self) -> Result<Vec<GradebookRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT s.full_name, g.subject, g.grade
             FROM grades g
             JOIN students s ON s.id = g.student_id
             ORDER BY s.full_name, g.subject, g.id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(GradebookRow {
                    full_name: row.get(0)?,
                    subject: row.get(1)?,
                    score: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Rank of every student within each subject by score.
    pub fn subject_rankings(&self) -> Result<Vec<SubjectRank>> {
        let mut stmt = self.conn.prepare(
            "SELECT g.subject, s.full_name, g.grade,
                    RANK() OVER (PARTITION BY g.subject ORDER BY g.grade DESC) AS position
             FROM grades g
             JOIN students s ON s.id = g.student_id
             ORDER BY g.subject, position, s.full_name",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SubjectRank {
                    subject: row.get(0)?,
                    full_name: row.get(1)?,
                    score: row.get(2)?,
                    rank: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Every student's average (or none), with class max, min, and mean.
    pub fn class_summary(&self) -> Result<ClassSummary> {
        let mut stmt = self.conn.prepare(
            "SELECT s.id, s.full_name, AVG(g.grade) AS average, COUNT(g.id) AS grade_count
             FROM students s
             LEFT JOIN grades g ON g.student_id = s.id
             GROUP BY s.id, s.full_name
             ORDER BY s.id",
        )?;
        let raw = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>("id")?,
                    row.get::<_, String>("full_name")?,
                    row.get::<_, Option<f64>>("average")?,
                    row.get::<_, u32>("grade_count")?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let averages: Vec<f64> = raw.iter().filter_map(|(_, _, avg, _)| *avg).collect();
        let max_average = averages.iter().copied().reduce(f64::max).map(round2);
        let min_average = averages.iter().copied().reduce(f64::min).map(round2);
        let overall_average = if averages.is_empty() {
            None
        } else {
            Some(round2(averages.iter().sum::<f64>() / averages.len() as f64))
        };

        let students = raw
            .into_iter()
            .map(|(student_id, full_name, average, grade_count)| StudentOverview {
                student_id,
                full_name,
                average: average.map(round2),
                grade_count,
            })
            .collect();

        Ok(ClassSummary {
            students,
            max_average,
            min_average,
            overall_average,
        })
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
