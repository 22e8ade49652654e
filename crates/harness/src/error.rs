// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for fixture handling, process invocation, and suite loading.

use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing JSON fixtures. Always fatal to a run.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fixture {path}: {source}")]
    MalformedFixture {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed fixture {path}: root must be a JSON object")]
    NotAnObject { path: PathBuf },

    #[error("Config directory does not exist: {0}")]
    ConfigDirMissing(PathBuf),

    #[error("Invalid config file pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl FixtureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures launching a command or interpreting its result.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("Command line is empty")]
    EmptyCommand,

    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unexpected exit code: expected {expected}, got {}{}", display_code(.actual), stderr_suffix(.stderr))]
    UnexpectedExitCode {
        expected: i32,
        actual: Option<i32>,
        stderr: String,
    },

    #[error("Command output is not valid JSON: {source}\n{stdout}")]
    MalformedOutput {
        stdout: String,
        #[source]
        source: serde_json::Error,
    },
}

impl InvokeError {
    /// Whether this error fails the current scenario rather than the whole run.
    pub fn fails_scenario(&self) -> bool {
        matches!(
            self,
            InvokeError::UnexpectedExitCode { .. } | InvokeError::MalformedOutput { .. }
        )
    }

    /// Exit code of the process, when the error carries one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            InvokeError::UnexpectedExitCode { actual, .. } => *actual,
            _ => None,
        }
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\nstderr: {}", trimmed)
    }
}

/// Errors that can occur when loading a suite file
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("Failed to read suite file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Scenario '{scenario}' patches unknown fixture '{fixture}'")]
    UnknownFixture { scenario: String, fixture: String },

    #[error("Scenario '{scenario}' references unknown expected result '{key}'")]
    UnknownExpected { scenario: String, key: String },
}

/// Any error that aborts a harness run.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    Invoke(#[from] InvokeError),

    #[error(transparent)]
    Suite(#[from] SuiteError),
}
