// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Row types for the two tables: students and their grades.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Lowest accepted score.
pub const MIN_SCORE: u8 = 1;
/// Highest accepted score.
pub const MAX_SCORE: u8 = 100;

/// A single subject score, always within `[1, 100]`.
///
/// The same bound is enforced by the `grades` table's CHECK constraint; the
/// newtype rejects bad values before they reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    /// Create a score, rejecting anything outside `[1, 100]`.
    pub fn new(value: i64) -> Result<Self> {
        if (i64::from(MIN_SCORE)..=i64::from(MAX_SCORE)).contains(&value) {
            Ok(Score(value as u8))
        } else {
            Err(Error::ScoreOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Score {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Score::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> u8 {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Score {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidInput(format!("invalid score: '{s}'")))?;
        Score::new(value)
    }
}

impl ToSql for Score {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(i64::from(self.0)))
    }
}

impl FromSql for Score {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = value.as_i64()?;
        Score::new(raw).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Score {
    fn schema_name() -> String {
        "Score".to_string()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        let mut schema = <u8 as schemars::JsonSchema>::json_schema(gen).into_object();
        schema.number().minimum = Some(f64::from(MIN_SCORE));
        schema.number().maximum = Some(f64::from(MAX_SCORE));
        schema.into()
    }
}

/// An enrolled student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Student {
    pub id: i64,
    pub full_name: String,
    pub birth_year: Option<i32>,
}

/// A student row that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub full_name: String,
    pub birth_year: Option<i32>,
}

impl NewStudent {
    pub fn new(full_name: impl Into<String>, birth_year: Option<i32>) -> Self {
        NewStudent {
            full_name: full_name.into(),
            birth_year,
        }
    }
}

/// One subject score belonging to one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub subject: String,
    pub score: Score,
}

/// A grade row that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGrade {
    pub student_id: i64,
    pub subject: String,
    pub score: Score,
}

impl NewGrade {
    pub fn new(student_id: i64, subject: impl Into<String>, score: Score) -> Self {
        NewGrade {
            student_id,
            subject: subject.into(),
            score,
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
