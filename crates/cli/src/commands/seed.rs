// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::db::Database;
use crate::error::Result;

use super::{emit, open_db};

pub fn run(output: OutputFormat) -> Result<()> {
    let (mut db, _) = open_db()?;
    run_impl(&mut db, output, &mut io::stdout())
}

pub(crate) fn run_impl(db: &mut Database, output: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let stats = db.seed()?;
    emit(out, output, &stats, || {
        vec![format!(
            "Loaded {} students and {} grades",
            stats.students, stats.grades
        )]
    })
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
