// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.school/config.toml` and includes:
//! - `database`: Optional path to the SQLite file (relative to the project root or absolute)
//! - `[reports]`: Default parameters for reports when no argument is given

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use school_core::report::{DEFAULT_BELOW_THRESHOLD, DEFAULT_BORN_AFTER, DEFAULT_TOP};

use crate::env;
use crate::error::{Error, Result};

const SCHOOL_DIR_NAME: &str = ".school";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "school.db";

/// Project configuration stored in `.school/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Optional database path (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Defaults for report parameters.
    #[serde(default)]
    pub reports: ReportDefaults,
}

/// Report parameters used when the command line leaves them out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportDefaults {
    /// `born-after` cutoff year (exclusive).
    #[serde(default = "default_born_after")]
    pub born_after: i32,
    /// `below` threshold score (exclusive).
    #[serde(default = "default_below_threshold")]
    pub below_threshold: u8,
    /// Row count for `averages --top` without a value.
    #[serde(default = "default_top")]
    pub top: u32,
}

impl Default for ReportDefaults {
    fn default() -> Self {
        ReportDefaults {
            born_after: DEFAULT_BORN_AFTER,
            below_threshold: DEFAULT_BELOW_THRESHOLD,
            top: DEFAULT_TOP,
        }
    }
}

fn default_born_after() -> i32 {
    DEFAULT_BORN_AFTER
}

fn default_below_threshold() -> u8 {
    DEFAULT_BELOW_THRESHOLD
}

fn default_top() -> u32 {
    DEFAULT_TOP
}

impl Config {
    /// Creates a config that stores the database at `database`.
    pub fn with_database(database: Option<String>) -> Self {
        Config {
            database,
            reports: ReportDefaults::default(),
        }
    }

    /// Loads configuration from the given `.school/` directory.
    pub fn load(school_dir: &Path) -> Result<Self> {
        let config_path = school_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.school/` directory.
    pub fn save(&self, school_dir: &Path) -> Result<()> {
        let config_path = school_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .school directory by walking up from the current directory
pub fn find_school_dir() -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    find_school_dir_from(&current)
}

/// Find the .school directory by walking up from `start`
pub fn find_school_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let school_dir = current.join(SCHOOL_DIR_NAME);
        if school_dir.is_dir() {
            return Ok(school_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the database path from config, ignoring environment overrides
pub fn get_db_path(school_dir: &Path, config: &Config) -> PathBuf {
    match &config.database {
        Some(database) => {
            let database_path = Path::new(database);
            if database_path.is_absolute() {
                database_path.to_path_buf()
            } else {
                // Relative to the project root
                school_dir.parent().unwrap_or(school_dir).join(database)
            }
        }
        None => school_dir.join(DB_FILE_NAME),
    }
}

/// Get the database path, letting `SCHOOL_DB` take precedence over config
pub fn resolve_db_path(school_dir: &Path, config: &Config) -> PathBuf {
    env::db_override().unwrap_or_else(|| get_db_path(school_dir, config))
}

/// Initialize a new .school directory at the given path
pub fn init_school_dir(path: &Path, database: Option<String>) -> Result<PathBuf> {
    let school_dir = path.join(SCHOOL_DIR_NAME);

    if school_dir.exists() {
        return Err(Error::AlreadyInitialized(school_dir.display().to_string()));
    }

    fs::create_dir_all(&school_dir)?;

    let config = Config::with_database(database);
    config.save(&school_dir)?;

    Ok(school_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
