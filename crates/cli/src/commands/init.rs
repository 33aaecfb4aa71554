// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::{get_db_path, init_school_dir, Config};
use crate::db::Database;
use crate::error::Result;

pub fn run(path: Option<String>, database: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    run_impl(&target_path, database, &mut io::stdout())?;
    Ok(())
}

/// Create `.school/` under `target_path` and an empty database at the
/// configured path (`SCHOOL_DB` only affects later commands).
///
/// Returns the path of the database file.
pub(crate) fn run_impl(
    target_path: &Path,
    database: Option<String>,
    out: &mut dyn Write,
) -> Result<PathBuf> {
    let school_dir = init_school_dir(target_path, database)?;
    let config = Config::load(&school_dir)?;
    let db_path = get_db_path(&school_dir, &config);

    // Creates the file and schema
    Database::open(&db_path)?;
    tracing::info!(db = %db_path.display(), "initialized school project");

    writeln!(out, "Initialized school database at {}", school_dir.display())?;
    writeln!(out, "Database: {}", db_path.display())?;
    Ok(db_path)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
