// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use chrono::Datelike;

use crate::cli::OutputFormat;
use crate::colors::Palette;
use crate::db::Database;
use crate::display::format_profile;
use crate::error::Result;

use super::{emit, open_db};

pub fn run(name: &str, year: Option<i32>, output: OutputFormat) -> Result<()> {
    let (db, _) = open_db()?;
    let year = year.unwrap_or_else(|| chrono::Local::now().year());
    run_impl(&db, name, year, output, &Palette::stdout(), &mut io::stdout())
}

pub(crate) fn run_impl(
    db: &Database,
    name: &str,
    year: i32,
    output: OutputFormat,
    palette: &Palette,
    out: &mut dyn Write,
) -> Result<()> {
    let profile = db.student_profile(name, year)?;
    emit(out, output, &profile, || format_profile(&profile, palette))
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
