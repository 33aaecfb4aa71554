// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Student profiles: age and life stage derived from the birth year.

use serde::Serialize;
use std::fmt;

use crate::db::Database;
use crate::error::Result;
use crate::report::SubjectScore;

/// Coarse age bracket of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum LifeStage {
    /// 0 to 12 years.
    Child,
    /// 13 to 19 years.
    Teenager,
    /// 20 years and up.
    Adult,
}

impl LifeStage {
    /// Bracket for an age in whole years. Negative ages have no stage.
    pub fn from_age(age: i32) -> Option<Self> {
        match age {
            0..=12 => Some(LifeStage::Child),
            13..=19 => Some(LifeStage::Teenager),
            20.. => Some(LifeStage::Adult),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LifeStage::Child => "Child",
            LifeStage::Teenager => "Teenager",
            LifeStage::Adult => "Adult",
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Age reached during `current_year` by someone born in `birth_year`.
///
/// `None` when the difference does not fit in an `i32`.
pub fn age_in(birth_year: i32, current_year: i32) -> Option<i32> {
    current_year.checked_sub(birth_year)
}

/// A student with derived age information and their grades.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct StudentProfile {
    pub full_name: String,
    pub birth_year: Option<i32>,
    pub age: Option<i32>,
    pub stage: Option<LifeStage>,
    pub grades: Vec<SubjectScore>,
    /// Mean of `grades`, rounded to two decimals.
    pub average: Option<f64>,
}

impl Database {
    /// Build the profile of the student with exactly this full name.
    pub fn student_profile(&self, full_name: &str, current_year: i32) -> Result<StudentProfile> {
        let student = self.require_student(full_name)?;
        let age = student.birth_year.and_then(|year| age_in(year, current_year));
        let grades: Vec<SubjectScore> = self
            .get_grades(student.id)?
            .into_iter()
            .map(|g| SubjectScore {
                subject: g.subject,
                score: g.score,
            })
            .collect();
        let average = if grades.is_empty() {
            None
        } else {
            let total: u32 = grades.iter().map(|g| u32::from(g.score.value())).sum();
            Some(crate::report::round2(
                f64::from(total) / grades.len() as f64,
            ))
        };

        Ok(StudentProfile {
            full_name: student.full_name,
            birth_year: student.birth_year,
            age,
            stage: age.and_then(LifeStage::from_age),
            grades,
            average,
        })
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
