// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::path::PathBuf;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::SCHOOL_DB, "SCHOOL_DB");
    assert_eq!(vars::SCHOOL_LOG, "SCHOOL_LOG");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
}

#[test]
fn test_db_override() {
    std::env::remove_var("SCHOOL_DB");
    assert_eq!(db_override(), None);

    std::env::set_var("SCHOOL_DB", "");
    assert_eq!(db_override(), None);

    std::env::set_var("SCHOOL_DB", "/tmp/school-test.db");
    assert_eq!(db_override(), Some(PathBuf::from("/tmp/school-test.db")));
    std::env::remove_var("SCHOOL_DB");
}

#[test]
fn test_log_filter() {
    std::env::set_var("SCHOOL_LOG", "debug");
    assert_eq!(log_filter().as_deref(), Some("debug"));
    std::env::remove_var("SCHOOL_LOG");
    assert_eq!(log_filter(), None);
}

#[test]
fn test_no_color() {
    std::env::remove_var("NO_COLOR");
    assert!(!no_color());
    std::env::set_var("NO_COLOR", "true");
    assert!(!no_color());
    std::env::set_var("NO_COLOR", "1");
    assert!(no_color());
    std::env::remove_var("NO_COLOR");
}

#[test]
fn test_force_color() {
    std::env::remove_var("COLOR");
    assert!(!force_color());
    std::env::set_var("COLOR", "yes");
    assert!(!force_color());
    std::env::set_var("COLOR", "1");
    assert!(force_color());
    std::env::remove_var("COLOR");
}
