// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured invocation data types.

use crate::duration_serde;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// One recorded process invocation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapturedInvocation {
    /// Sequence number within the log
    pub seq: u64,

    /// Wall-clock timestamp at record time
    pub timestamp: SystemTime,

    /// Time since the log was created
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,

    /// How the process was launched
    pub args: InvocationArgs,

    /// What came back
    pub outcome: CapturedOutcome,
}

/// Launch parameters of a captured invocation
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InvocationArgs {
    /// Scenario that triggered the invocation, if any
    pub scenario: Option<String>,
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<String>,
    /// Whether the JSON output flag was passed
    pub json: bool,
}

/// Captured outcome of an invocation
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CapturedOutcome {
    /// Process ran to completion
    Exited {
        /// `None` when terminated by a signal
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        #[serde(with = "duration_serde")]
        duration: Duration,
    },
    /// Process could not be started
    SpawnFailed { message: String },
}

impl CapturedOutcome {
    /// Exit code when the process ran, `None` otherwise.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CapturedOutcome::Exited { exit_code, .. } => *exit_code,
            CapturedOutcome::SpawnFailed { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "interaction_tests.rs"]
mod tests;
