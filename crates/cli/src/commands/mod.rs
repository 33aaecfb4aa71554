// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod init;
pub mod profile;
pub mod report;
pub mod schema;
pub mod seed;
pub mod student;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::{find_school_dir, resolve_db_path, Config};
use crate::db::Database;
use crate::error::Result;

/// Helper to open the database from the current context.
pub fn open_db() -> Result<(Database, Config)> {
    let school_dir = find_school_dir()?;
    let config = Config::load(&school_dir)?;
    let db_path = resolve_db_path(&school_dir, &config);
    tracing::debug!(path = %db_path.display(), "opening database");
    let db = Database::open(&db_path)?;
    Ok((db, config))
}

/// Write `value` as pretty JSON, or the text `lines`, depending on `format`.
pub(crate) fn emit<T: Serialize>(
    out: &mut dyn Write,
    format: OutputFormat,
    value: &T,
    lines: impl FnOnce() -> Vec<String>,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Text => {
            for line in lines() {
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(())
}
