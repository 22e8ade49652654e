// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparing captured output against expected fixtures.

use crate::invoke::CommandOutput;
use crate::io::to_pretty_json;
use serde::Serialize;
use serde_json::Value;
use similar::TextDiff;

/// The single stream a scenario asserts on.
#[derive(Clone, Debug, PartialEq)]
pub enum OutputCheck {
    Stdout(String),
    Stderr(String),
    Json(Value),
}

impl OutputCheck {
    /// Stream name as used in suite files and reports.
    pub fn stream(&self) -> &'static str {
        match self {
            OutputCheck::Stdout(_) => "stdout",
            OutputCheck::Stderr(_) => "stderr",
            OutputCheck::Json(_) => "json",
        }
    }

    /// Whether verifying this check needs the JSON flag.
    pub fn needs_json(&self) -> bool {
        matches!(self, OutputCheck::Json(_))
    }

    /// Compare against a captured invocation.
    pub fn verify(&self, output: &CommandOutput) -> Result<(), Mismatch> {
        match self {
            OutputCheck::Stdout(expected) => assert_equals("stdout", &output.stdout, expected),
            OutputCheck::Stderr(expected) => assert_equals("stderr", &output.stderr, expected),
            OutputCheck::Json(expected) => match &output.json {
                Some(actual) => assert_equals("json", actual, expected),
                None => Err(Mismatch {
                    stream: "json",
                    diff: "command output was not captured as JSON".to_string(),
                }),
            },
        }
    }
}

/// A failed comparison, with a unified diff of expected vs actual.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub stream: &'static str,
    pub diff: String,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} mismatch (-expected +actual):", self.stream)?;
        write!(f, "{}", self.diff)
    }
}

/// Values that can be compared and rendered for a diff.
pub trait Comparable: PartialEq {
    fn render(&self) -> String;
}

impl Comparable for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Comparable for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl Comparable for Value {
    fn render(&self) -> String {
        to_pretty_json(self, 2).unwrap_or_else(|_| self.to_string())
    }
}

/// Deep equality with a descriptive diff on mismatch.
///
/// JSON values compare structurally, so key order does not matter.
pub fn assert_equals<T: Comparable + ?Sized>(
    stream: &'static str,
    actual: &T,
    expected: &T,
) -> Result<(), Mismatch> {
    if actual == expected {
        return Ok(());
    }
    Err(Mismatch {
        stream,
        diff: text_diff(&expected.render(), &actual.render()),
    })
}

/// Unified line diff from `expected` to `actual`.
///
/// When the texts differ only in trailing whitespace the line diff is
/// unreadable, so both sides are shown escaped instead.
pub fn text_diff(expected: &str, actual: &str) -> String {
    if expected.trim_end() == actual.trim_end() {
        return format!("-{:?}\n+{:?}\n", expected, actual);
    }
    TextDiff::from_lines(expected, actual)
        .unified_diff()
        .context_radius(3)
        .header("expected", "actual")
        .to_string()
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
