// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering of a run outcome.

use crate::messages;
use crate::run::{RunError, RunSummary};
use serde::Serialize;
use std::io::Write;

/// Exit codes of the stub
pub mod exit_codes {
    /// Success, or any `--json` invocation
    pub const SUCCESS: i32 = 0;
    /// Plain-text failure
    pub const ERROR: i32 = 1;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

/// `--json` envelope
#[derive(Debug, Serialize)]
pub struct JsonEnvelope {
    pub status: i32,
    pub result: RunResult,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl JsonEnvelope {
    pub fn from_outcome(outcome: &Result<RunSummary, RunError>) -> Self {
        let result = match outcome {
            Ok(_) => RunResult {
                success: true,
                message: Some(messages::TEST_RUN_SUCCEEDED.to_string()),
                errors: Vec::new(),
            },
            Err(e) => RunResult {
                success: false,
                message: None,
                errors: vec![ErrorDetail {
                    code: e.code().to_string(),
                    message: e.to_string(),
                }],
            },
        };
        Self {
            status: 0,
            result,
            warnings: Vec::new(),
        }
    }
}

/// Write the outcome and return the process exit code.
pub fn write_outcome<O: Write, E: Write>(
    outcome: &Result<RunSummary, RunError>,
    mode: OutputMode,
    stdout: &mut O,
    stderr: &mut E,
) -> std::io::Result<i32> {
    match mode {
        OutputMode::Json => {
            let envelope = JsonEnvelope::from_outcome(outcome);
            let json = serde_json::to_string_pretty(&envelope).map_err(std::io::Error::other)?;
            writeln!(stdout, "{}", json)?;
            Ok(exit_codes::SUCCESS)
        }
        OutputMode::Text => match outcome {
            Ok(_) => {
                writeln!(stdout, "{}", messages::TEST_RUN_SUCCEEDED)?;
                Ok(exit_codes::SUCCESS)
            }
            Err(e) => {
                writeln!(stderr, "Error (1): [{}] {}\n\n", e.code(), e)?;
                Ok(exit_codes::ERROR)
            }
        },
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
