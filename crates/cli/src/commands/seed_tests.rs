// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;

#[test]
fn test_seed_text() {
    let mut ctx = TestContext::new();
    let text = ctx.capture(|db, _, out| run_impl(db, OutputFormat::Text, out));
    assert_eq!(text, "Loaded 9 students and 27 grades\n");
}

#[test]
fn test_seed_json() {
    let mut ctx = TestContext::new();
    let text = ctx.capture(|db, _, out| run_impl(db, OutputFormat::Json, out));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["students"], 9);
    assert_eq!(value["grades"], 27);
}

#[test]
fn test_seed_non_empty_database() {
    let mut ctx = TestContext::new();
    ctx.add_student("Early Bird", None);

    let err = run_impl(&mut ctx.db, OutputFormat::Text, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, Error::Core(school_core::Error::AlreadySeeded)));
}
