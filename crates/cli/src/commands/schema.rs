// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for reports that support JSON output.

use schemars::schema::RootSchema;
use schemars::schema_for;

use school_core::{
    GradebookRow, Student, StudentAverage, StudentProfile, SubjectAverage, SubjectRank,
    SubjectScore,
};

use crate::cli::SchemaCommand;
use crate::error::Result;

use super::report::SummaryOutput;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let json = serde_json::to_string_pretty(&schema(cmd))?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn schema(cmd: SchemaCommand) -> RootSchema {
    match cmd {
        SchemaCommand::Grades => schema_for!(Vec<SubjectScore>),
        SchemaCommand::Averages => schema_for!(Vec<StudentAverage>),
        SchemaCommand::Students => schema_for!(Vec<Student>),
        SchemaCommand::Subjects => schema_for!(Vec<SubjectAverage>),
        SchemaCommand::Gradebook => schema_for!(Vec<GradebookRow>),
        SchemaCommand::Rankings => schema_for!(Vec<SubjectRank>),
        SchemaCommand::Summary => schema_for!(SummaryOutput),
        SchemaCommand::Profile => schema_for!(StudentProfile),
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
