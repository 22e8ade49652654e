// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verification harness for `provar automation test run`.
//!
//! Drives the command as a black box: patch JSON fixtures on disk, invoke
//! the command once, and compare exactly one of stdout, stderr, or the
//! parsed `--json` payload against an expected value.
//!
//! Scenarios can be written in Rust against [`FixtureStore`],
//! [`invoke_command`] and [`OutputCheck`], or declared in a TOML suite file
//! and executed by [`Runner`].

pub mod check;
pub mod error;
pub mod fixture;
pub mod invoke;
pub mod io;
pub mod locator;
pub mod nested;
pub mod properties;
pub mod report;
pub mod runner;
pub mod suite;

/// Re-exported capture types from the nut-capture crate.
pub mod capture {
    pub use nut_capture::{CaptureLog, CapturedInvocation, CapturedOutcome, InvocationArgs};
}

pub use check::{assert_equals, Mismatch, OutputCheck};
pub use error::{FixtureError, HarnessError, InvokeError, SuiteError};
pub use fixture::{patch_json_file, FixtureStore, CONFIG_INDENT, PROPERTIES_INDENT};
pub use invoke::{invoke_captured, invoke_command, CommandLine, CommandOutput, InvokeOptions};
pub use locator::{ConfigHandle, ConfigLocator};
pub use report::{ScenarioOutcome, ScenarioResult, SuiteReport};
pub use runner::{RunContext, Runner};
pub use suite::{Scenario, Suite};
