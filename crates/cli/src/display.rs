// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text rendering of reports.
//!
//! Every formatter returns lines without trailing newlines so commands can
//! print them and tests can compare them.

use school_core::{
    ClassSummary, GradebookRow, Student, StudentAverage, StudentProfile, SubjectAverage,
    SubjectRank, SubjectScore,
};

use crate::colors::Palette;

/// Placeholder for missing values.
const NOT_AVAILABLE: &str = "N/A";

/// Width of the widest string, at least the header's width.
fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

/// Format an average with two decimals.
pub fn format_average(average: f64) -> String {
    format!("{average:.2}")
}

fn format_optional_average(average: Option<f64>, palette: &Palette) -> String {
    match average {
        Some(avg) => format_average(avg),
        None => palette.context(NOT_AVAILABLE),
    }
}

/// One student's grades, highlighting scores under `threshold`.
pub fn format_subject_scores(
    scores: &[SubjectScore],
    threshold: u8,
    palette: &Palette,
) -> Vec<String> {
    let width = column_width("Subject", scores.iter().map(|s| s.subject.as_str()));
    let mut lines = vec![format!(
        "{}  {}",
        palette.header(&pad("Subject", width)),
        palette.header("Score")
    )];
    for s in scores {
        let score = s.score.to_string();
        let score = if s.score.value() < threshold {
            palette.low(&score)
        } else {
            score
        };
        lines.push(format!("{}  {}", pad(&s.subject, width), score));
    }
    lines
}

/// Student averages as a ranked table.
pub fn format_student_averages(averages: &[StudentAverage], palette: &Palette) -> Vec<String> {
    let width = column_width("Student", averages.iter().map(|a| a.full_name.as_str()));
    let mut lines = vec![format!(
        "{}  {}  {}",
        palette.header(" #"),
        palette.header(&pad("Student", width)),
        palette.header("Average")
    )];
    for (i, a) in averages.iter().enumerate() {
        lines.push(format!(
            "{:>2}  {}  {}",
            i + 1,
            pad(&a.full_name, width),
            format_average(a.average)
        ));
    }
    lines
}

/// Student list with birth years.
pub fn format_students(students: &[Student], palette: &Palette) -> Vec<String> {
    let width = column_width("Student", students.iter().map(|s| s.full_name.as_str()));
    let mut lines = vec![format!(
        "{}  {}",
        palette.header(&pad("Student", width)),
        palette.header("Born")
    )];
    for s in students {
        let born = match s.birth_year {
            Some(year) => year.to_string(),
            None => palette.context(NOT_AVAILABLE),
        };
        lines.push(format!("{}  {}", pad(&s.full_name, width), born));
    }
    lines
}

/// Subject averages table.
pub fn format_subject_averages(subjects: &[SubjectAverage], palette: &Palette) -> Vec<String> {
    let width = column_width("Subject", subjects.iter().map(|s| s.subject.as_str()));
    let mut lines = vec![format!(
        "{}  {}",
        palette.header(&pad("Subject", width)),
        palette.header("Average")
    )];
    for s in subjects {
        lines.push(format!(
            "{}  {}",
            pad(&s.subject, width),
            format_average(s.average)
        ));
    }
    lines
}

/// Every grade with its student.
pub fn format_gradebook(rows: &[GradebookRow], palette: &Palette) -> Vec<String> {
    let name_width = column_width("Student", rows.iter().map(|r| r.full_name.as_str()));
    let subject_width = column_width("Subject", rows.iter().map(|r| r.subject.as_str()));
    let mut lines = vec![format!(
        "{}  {}  {}",
        palette.header(&pad("Student", name_width)),
        palette.header(&pad("Subject", subject_width)),
        palette.header("Score")
    )];
    for r in rows {
        lines.push(format!(
            "{}  {}  {}",
            pad(&r.full_name, name_width),
            pad(&r.subject, subject_width),
            r.score
        ));
    }
    lines
}

/// Rankings grouped under one heading per subject.
pub fn format_rankings(ranks: &[SubjectRank], palette: &Palette) -> Vec<String> {
    let width = column_width("", ranks.iter().map(|r| r.full_name.as_str()));
    let mut lines = Vec::new();
    let mut current: Option<&str> = None;
    for r in ranks {
        if current != Some(r.subject.as_str()) {
            if current.is_some() {
                lines.push(String::new());
            }
            lines.push(palette.header(&format!("{}:", r.subject)));
            current = Some(r.subject.as_str());
        }
        lines.push(format!(
            "  {:>2}. {}  {}",
            r.rank,
            pad(&r.full_name, width),
            r.score
        ));
    }
    lines
}

/// Per-student averages followed by class statistics.
pub fn format_summary(summary: &ClassSummary, palette: &Palette) -> Vec<String> {
    if summary.students.is_empty() {
        return vec!["No students added".to_string()];
    }

    let mut lines = vec![palette.header("Student report")];
    for s in &summary.students {
        lines.push(format!(
            "{}'s average grade is {}",
            s.full_name,
            format_optional_average(s.average, palette)
        ));
    }

    match (
        summary.max_average,
        summary.min_average,
        summary.overall_average,
    ) {
        (Some(max), Some(min), Some(overall)) => {
            lines.push(String::new());
            lines.push(format!("Max Average: {}", format_average(max)));
            lines.push(format!("Min Average: {}", format_average(min)));
            lines.push(format!("Overall Average: {}", format_average(overall)));
        }
        _ => {
            lines.push(String::new());
            lines.push("No students with grades".to_string());
        }
    }
    lines
}

/// The best student line appended to the summary.
pub fn format_top_performer(top: Option<&StudentAverage>) -> String {
    match top {
        Some(a) => format!(
            "The student with the highest average is {} with a grade of {}",
            a.full_name,
            format_average(a.average)
        ),
        None => "No students with grades".to_string(),
    }
}

/// Profile card.
pub fn format_profile(profile: &StudentProfile, palette: &Palette) -> Vec<String> {
    let mut lines = vec![palette.header("Profile Summary:")];
    lines.push(format!("Name: {}", profile.full_name));
    lines.push(format!(
        "Age: {}",
        profile
            .age
            .map_or_else(|| palette.context(NOT_AVAILABLE), |a| a.to_string())
    ));
    lines.push(format!(
        "Life Stage: {}",
        profile
            .stage
            .map_or_else(|| palette.context(NOT_AVAILABLE), |s| s.to_string())
    ));

    if profile.grades.is_empty() {
        lines.push("No grades recorded.".to_string());
    } else {
        lines.push(format!("Grades ({}):", profile.grades.len()));
        for g in &profile.grades {
            lines.push(format!("- {}: {}", g.subject, g.score));
        }
        lines.push(format!(
            "Average: {}",
            format_optional_average(profile.average, palette)
        ));
    }
    lines
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
