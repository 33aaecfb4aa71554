// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed sample data: nine students with three grades each.

use rusqlite::params;
use serde::Serialize;
use tracing::info;

use crate::db::Database;
use crate::error::{Error, Result};
use crate::model::Score;

/// A sample student together with their grades.
#[derive(Debug, Clone, Copy)]
pub struct SeedStudent {
    pub full_name: &'static str,
    pub birth_year: i32,
    pub grades: [(&'static str, u8); 3],
}

/// Sample rows, in insertion order.
pub const STUDENTS: [SeedStudent; 9] = [
    SeedStudent {
        full_name: "Alice Johnson",
        birth_year: 2005,
        grades: [("Math", 88), ("English", 92), ("Science", 85)],
    },
    SeedStudent {
        full_name: "Brian Smith",
        birth_year: 2004,
        grades: [("Math", 75), ("English", 80), ("Science", 78)],
    },
    SeedStudent {
        full_name: "Carla Davis",
        birth_year: 2006,
        grades: [("Math", 95), ("English", 85), ("Science", 90)],
    },
    SeedStudent {
        full_name: "Daniel Brown",
        birth_year: 2003,
        grades: [("Math", 68), ("English", 74), ("Science", 70)],
    },
    SeedStudent {
        full_name: "Emily Wilson",
        birth_year: 2005,
        grades: [("Math", 91), ("English", 89), ("Science", 94)],
    },
    SeedStudent {
        full_name: "Frank Miller",
        birth_year: 2004,
        grades: [("Math", 82), ("English", 79), ("Science", 85)],
    },
    SeedStudent {
        full_name: "Grace Lee",
        birth_year: 2006,
        grades: [("Math", 87), ("English", 93), ("Science", 88)],
    },
    SeedStudent {
        full_name: "Henry Taylor",
        birth_year: 2003,
        grades: [("Math", 72), ("English", 81), ("Science", 77)],
    },
    SeedStudent {
        full_name: "Isabella Martinez",
        birth_year: 2005,
        grades: [("Math", 96), ("English", 89), ("Science", 92)],
    },
];

/// Row counts written by [`Database::seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedStats {
    pub students: usize,
    pub grades: usize,
}

impl Database {
    /// Load the sample rows in a single transaction.
    ///
    /// Refuses to run against a database that already has students, so the
    /// sample rows are never mixed with other data.
    pub fn seed(&mut self) -> Result<SeedStats> {
        if self.count_students()? > 0 {
            return Err(Error::AlreadySeeded);
        }

        let tx = self.conn.transaction()?;
        let mut stats = SeedStats {
            students: 0,
            grades: 0,
        };
        {
            let mut insert_student =
                tx.prepare("INSERT INTO students (full_name, birth_year) VALUES (?1, ?2)")?;
            let mut insert_grade = tx.prepare(
                "INSERT INTO grades (student_id, subject, grade) VALUES (?1, ?2, ?3)",
            )?;

            for student in &STUDENTS {
                let student_id =
                    insert_student.insert(params![student.full_name, student.birth_year])?;
                stats.students += 1;
                for (subject, score) in student.grades {
                    let score = Score::new(i64::from(score))?;
                    insert_grade.execute(params![student_id, subject, score])?;
                    stats.grades += 1;
                }
            }
        }
        tx.commit()?;

        info!(
            students = stats.students,
            grades = stats.grades,
            "loaded sample data"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
