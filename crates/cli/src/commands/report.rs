// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report commands: each runs one query and prints it as text or JSON.

use std::io::{self, Write};

use schemars::JsonSchema;
use serde::Serialize;

use school_core::{ClassSummary, StudentAverage};

use crate::cli::OutputFormat;
use crate::colors::Palette;
use crate::config::Config;
use crate::db::Database;
use crate::display::{
    format_gradebook, format_rankings, format_student_averages, format_students,
    format_subject_averages, format_subject_scores, format_summary, format_top_performer,
};
use crate::error::Result;

use super::{emit, open_db};

/// JSON output of the summary command.
#[derive(Serialize, JsonSchema)]
pub struct SummaryOutput {
    #[serde(flatten)]
    pub summary: ClassSummary,
    /// Student with the highest average, if anyone has grades.
    pub top_performer: Option<StudentAverage>,
}

fn or_empty(lines: Vec<String>, has_rows: bool, empty: &str) -> Vec<String> {
    if has_rows {
        lines
    } else {
        vec![empty.to_string()]
    }
}

pub fn grades(name: &str, output: OutputFormat) -> Result<()> {
    let (db, config) = open_db()?;
    grades_impl(&db, &config, name, output, &Palette::stdout(), &mut io::stdout())
}

pub(crate) fn grades_impl(
    db: &Database,
    config: &Config,
    name: &str,
    output: OutputFormat,
    palette: &Palette,
    out: &mut dyn Write,
) -> Result<()> {
    // Unknown names are an error here rather than an empty table.
    db.require_student(name)?;
    let scores = db.grades_for_student(name)?;
    emit(out, output, &scores, || {
        let mut lines = vec![format!("Grades for {}:", name)];
        if scores.is_empty() {
            lines.push("No grades recorded.".to_string());
        } else {
            lines.extend(format_subject_scores(
                &scores,
                config.reports.below_threshold,
                palette,
            ));
        }
        lines
    })
}

pub fn averages(top: Option<Option<u32>>, output: OutputFormat) -> Result<()> {
    let (db, config) = open_db()?;
    averages_impl(&db, &config, top, output, &Palette::stdout(), &mut io::stdout())
}

/// `top` is `None` without `--top`, `Some(None)` for a bare `--top`.
pub(crate) fn averages_impl(
    db: &Database,
    config: &Config,
    top: Option<Option<u32>>,
    output: OutputFormat,
    palette: &Palette,
    out: &mut dyn Write,
) -> Result<()> {
    let rows = match top.map(|n| n.unwrap_or(config.reports.top)) {
        Some(limit) => db.top_students(limit)?,
        None => db.student_averages()?,
    };
    emit(out, output, &rows, || {
        or_empty(
            format_student_averages(&rows, palette),
            !rows.is_empty(),
            "No students with grades",
        )
    })
}

pub fn born_after(year: Option<i32>, output: OutputFormat) -> Result<()> {
    let (db, config) = open_db()?;
    born_after_impl(&db, &config, year, output, &Palette::stdout(), &mut io::stdout())
}

pub(crate) fn born_after_impl(
    db: &Database,
    config: &Config,
    year: Option<i32>,
    output: OutputFormat,
    palette: &Palette,
    out: &mut dyn Write,
) -> Result<()> {
    let year = year.unwrap_or(config.reports.born_after);
    let students = db.students_born_after(year)?;
    emit(out, output, &students, || {
        or_empty(
            format_students(&students, palette),
            !students.is_empty(),
            &format!("No students born after {}", year),
        )
    })
}

pub fn subjects(output: OutputFormat) -> Result<()> {
    let (db, _) = open_db()?;
    subjects_impl(&db, output, &Palette::stdout(), &mut io::stdout())
}

pub(crate) fn subjects_impl(
    db: &Database,
    output: OutputFormat,
    palette: &Palette,
    out: &mut dyn Write,
) -> Result<()> {
    let subjects = db.subject_averages()?;
    emit(out, output, &subjects, || {
        or_empty(
            format_subject_averages(&subjects, palette),
            !subjects.is_empty(),
            "No grades recorded",
        )
    })
}

pub fn below(threshold: Option<u8>, output: OutputFormat) -> Result<()> {
    let (db, config) = open_db()?;
    below_impl(&db, &config, threshold, output, &Palette::stdout(), &mut io::stdout())
}

pub(crate) fn below_impl(
    db: &Database,
    config: &Config,
    threshold: Option<u8>,
    output: OutputFormat,
    palette: &Palette,
    out: &mut dyn Write,
) -> Result<()> {
    let threshold = threshold.unwrap_or(config.reports.below_threshold);
    let students = db.students_below(threshold)?;
    emit(out, output, &students, || {
        or_empty(
            format_students(&students, palette),
            !students.is_empty(),
            &format!("No students with a score below {}", threshold),
        )
    })
}

pub fn gradebook(output: OutputFormat) -> Result<()> {
    let (db, _) = open_db()?;
    gradebook_impl(&db, output, &Palette::stdout(), &mut io::stdout())
}

pub(crate) fn gradebook_impl(
    db: &Database,
    output: OutputFormat,
    palette: &Palette,
    out: &mut dyn Write,
) -> Result<()> {
    let rows = db.gradebook()?;
    emit(out, output, &rows, || {
        or_empty(
            format_gradebook(&rows, palette),
            !rows.is_empty(),
            "No grades recorded",
        )
    })
}

pub fn rankings(output: OutputFormat) -> Result<()> {
    let (db, _) = open_db()?;
    rankings_impl(&db, output, &Palette::stdout(), &mut io::stdout())
}

pub(crate) fn rankings_impl(
    db: &Database,
    output: OutputFormat,
    palette: &Palette,
    out: &mut dyn Write,
) -> Result<()> {
    let ranks = db.subject_rankings()?;
    emit(out, output, &ranks, || {
        or_empty(
            format_rankings(&ranks, palette),
            !ranks.is_empty(),
            "No grades recorded",
        )
    })
}

pub fn summary(output: OutputFormat) -> Result<()> {
    let (db, _) = open_db()?;
    summary_impl(&db, output, &Palette::stdout(), &mut io::stdout())
}

pub(crate) fn summary_impl(
    db: &Database,
    output: OutputFormat,
    palette: &Palette,
    out: &mut dyn Write,
) -> Result<()> {
    let report = SummaryOutput {
        summary: db.class_summary()?,
        top_performer: db.top_performer()?,
    };
    emit(out, output, &report, || {
        let mut lines = format_summary(&report.summary, palette);
        if report.top_performer.is_some() {
            lines.push(format_top_performer(report.top_performer.as_ref()));
        }
        lines
    })
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
