// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Database access for the CLI.
//!
//! The CLI opens the database directly using [`school_core::Database`].

pub use school_core::Database;
