// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions.

use std::path::PathBuf;

/// Environment variable names.
pub mod vars {
    /// Overrides the database path from the project config.
    pub const SCHOOL_DB: &str = "SCHOOL_DB";
    /// Tracing filter directive (e.g. `debug`, `school_core=trace`).
    pub const SCHOOL_LOG: &str = "SCHOOL_LOG";
    /// `NO_COLOR=1` disables colored output.
    pub const NO_COLOR: &str = "NO_COLOR";
    /// `COLOR=1` forces colored output without a TTY.
    pub const COLOR: &str = "COLOR";
}

/// Returns the value of `SCHOOL_DB` if set and non-empty.
pub fn db_override() -> Option<PathBuf> {
    std::env::var(vars::SCHOOL_DB)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Returns the value of `SCHOOL_LOG` if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::SCHOOL_LOG).ok()
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
