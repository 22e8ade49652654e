// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test double for `sf provar automation test run`.
//!
//! Honours only the observable contract the harness consumes: which config
//! and properties files are read, the exit code, the plain-text error line,
//! and the `{status, result, warnings}` JSON envelope. It never executes a
//! test case; a case "passes" when its file exists under
//! `<projectPath>/tests`.

pub mod cli;
pub mod messages;
pub mod output;
pub mod run;
