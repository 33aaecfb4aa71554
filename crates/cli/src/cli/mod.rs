// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use school_core::Score;

pub use args::OutputArgs;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse a score in `[1, 100]`.
fn parse_score(s: &str) -> Result<Score, String> {
    s.parse::<Score>().map_err(|e| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "school")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A tiny school gradebook: students, grades, and reports over SQLite")]
pub struct Cli {
    /// Run as if school was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Create a .school directory with config and an empty database
    #[command(after_help = colors::examples("\
Examples:
  school init                          Initialize in the current directory
  school init --path ~/class           Initialize in another directory
  school init --database data/s.db     Keep the database outside .school/"))]
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(long)]
        path: Option<String>,

        /// Database path, relative to the project root or absolute
        #[arg(long)]
        database: Option<String>,
    },

    /// Load the sample students and grades into an empty database
    Seed {
        #[command(flatten)]
        output: OutputArgs,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Students and grades
    // ─────────────────────────────────────────────────────────────────────────
    /// Add a student
    #[command(after_help = colors::examples("\
Examples:
  school add-student \"Jane Roe\"                  Add without a birth year
  school add-student \"Jane Roe\" --birth-year 2006"))]
    AddStudent {
        /// Full name (must not already exist)
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Birth year
        #[arg(long, short = 'b')]
        birth_year: Option<i32>,
    },

    /// Record a grade for a student
    #[command(after_help = colors::examples("\
Examples:
  school add-grade \"Jane Roe\" Math 91    Record a Math score of 91"))]
    AddGrade {
        /// Student full name (exact match)
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Subject name
        #[arg(value_parser = non_empty_string)]
        subject: String,

        /// Score between 1 and 100
        #[arg(value_parser = parse_score)]
        score: Score,
    },

    /// Remove a student together with all their grades
    RemoveStudent {
        /// Student full name (exact match)
        #[arg(value_parser = non_empty_string)]
        name: String,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Reports
    // ─────────────────────────────────────────────────────────────────────────
    /// Show every (subject, score) pair of one student
    Grades {
        /// Student full name (exact match)
        name: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Average score per student, highest first
    #[command(after_help = colors::examples("\
Examples:
  school averages              Every student
  school averages --top        Best three (or reports.top from config)
  school averages --top 5      Best five"))]
    Averages {
        /// Only show the best N students
        #[arg(long, short = 't', value_name = "N", num_args = 0..=1)]
        top: Option<Option<u32>>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Students born strictly after a year
    BornAfter {
        /// Cutoff year (default: reports.born_after, 2004)
        year: Option<i32>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Average score per subject, highest first
    Subjects {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Students with at least one score below a threshold
    Below {
        /// Threshold score (default: reports.below_threshold, 80)
        threshold: Option<u8>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Every grade with its student's name
    Gradebook {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Rank students within each subject
    Rankings {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Per-student averages with class max, min, and overall average
    Summary {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show a student's age, life stage, and grades
    Profile {
        /// Student full name (exact match)
        name: String,

        /// Year to compute the age in (default: current year)
        #[arg(long)]
        year: Option<i32>,

        #[command(flatten)]
        output: OutputArgs,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Tooling
    // ─────────────────────────────────────────────────────────────────────────
    /// Print the JSON Schema of a report's JSON output
    #[command(subcommand)]
    Schema(SchemaCommand),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Reports with a JSON Schema.
#[derive(Clone, Copy, Debug, Subcommand, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Schema for `grades -o json`
    Grades,
    /// Schema for `averages -o json`
    Averages,
    /// Schema for `born-after -o json` and `below -o json`
    Students,
    /// Schema for `subjects -o json`
    Subjects,
    /// Schema for `gradebook -o json`
    Gradebook,
    /// Schema for `rankings -o json`
    Rankings,
    /// Schema for `summary -o json`
    Summary,
    /// Schema for `profile -o json`
    Profile,
}
