// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! schoolrs - command line front end for the school gradebook.
//!
//! This crate provides the `school` CLI on top of [`school_core`]: project
//! discovery, configuration, and text/JSON rendering of the reports.
//!
//! # Main Components
//!
//! - [`Database`] - SQLite-backed storage for students and grades
//! - [`Config`] - Project configuration (database location, report defaults)
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! ```rust,ignore
//! use schoolrs::{init_school_dir, find_school_dir, get_db_path, Config, Database};
//!
//! let school_dir = init_school_dir(Path::new("."), None)?;
//!
//! // Later, find and open an existing project
//! let school_dir = find_school_dir()?;
//! let config = Config::load(&school_dir)?;
//! let db = Database::open(&get_db_path(&school_dir, &config))?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod logging;

pub mod config;
pub mod db;
pub mod error;

pub use cli::{Cli, Command, OutputArgs, OutputFormat, SchemaCommand};
pub use config::{find_school_dir, get_db_path, init_school_dir, Config};
pub use db::Database;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { path, database } => commands::init::run(path, database),
        Command::Seed { output } => commands::seed::run(output.output),
        Command::AddStudent { name, birth_year } => {
            commands::student::add_student(&name, birth_year)
        }
        Command::AddGrade {
            name,
            subject,
            score,
        } => commands::student::add_grade(&name, &subject, score),
        Command::RemoveStudent { name } => commands::student::remove_student(&name),
        Command::Grades { name, output } => commands::report::grades(&name, output.output),
        Command::Averages { top, output } => commands::report::averages(top, output.output),
        Command::BornAfter { year, output } => commands::report::born_after(year, output.output),
        Command::Subjects { output } => commands::report::subjects(output.output),
        Command::Below { threshold, output } => commands::report::below(threshold, output.output),
        Command::Gradebook { output } => commands::report::gradebook(output.output),
        Command::Rankings { output } => commands::report::rankings(output.output),
        Command::Summary { output } => commands::report::summary(output.output),
        Command::Profile { name, year, output } => {
            commands::profile::run(&name, year, output.output)
        }
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "school", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
