// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for school-core operations.

use thiserror::Error;

/// All possible errors that can occur in school-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("student not found: {0}")]
    StudentNotFound(String),

    #[error("student already exists: {0}\n  hint: full names must be unique when adding through the CLI")]
    StudentExists(String),

    #[error("score out of range: {0}\n  hint: scores must be between 1 and 100")]
    ScoreOutOfRange(i64),

    #[error("database already contains students\n  hint: sample data can only be loaded into an empty database")]
    AlreadySeeded,

    #[error("{0}")]
    InvalidInput(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            // A stored value our types refuse, e.g. a score outside [1, 100].
            rusqlite::Error::FromSqlConversionFailure(column, _, source) => {
                Error::CorruptedData(format!("column {column}: {source}"))
            }
            other => Error::Database(other),
        }
    }
}

impl Error {
    /// Returns true if the store rejected a write because of a constraint
    /// (CHECK, FOREIGN KEY, NOT NULL).
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Error::Database(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

/// A specialized Result type for school-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
