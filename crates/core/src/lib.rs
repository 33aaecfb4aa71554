// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! school-core: schema, sample data, and reports for a small school database.
//!
//! This crate owns the SQLite schema (students and their grades), the fixed
//! sample rows, and every reporting query. The `school` CLI is a thin front
//! end over it.

pub mod db;
pub mod error;
pub mod model;
pub mod profile;
pub mod report;
pub mod seed;

pub use db::Database;
pub use error::{Error, Result};
pub use model::{Grade, NewGrade, NewStudent, Score, Student};
pub use profile::{LifeStage, StudentProfile};
pub use report::{
    ClassSummary, GradebookRow, StudentAverage, StudentOverview, SubjectAverage, SubjectRank,
    SubjectScore,
};
