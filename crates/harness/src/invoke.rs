// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking invocation of the command under test.

use crate::error::InvokeError;
use nut_capture::{CaptureLog, CapturedOutcome, InvocationArgs};
use serde_json::Value;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Flag that switches the command to JSON output.
pub const DEFAULT_JSON_FLAG: &str = "--json";

/// Program plus arguments. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine(Vec<String>);

impl CommandLine {
    pub fn new<I, S>(argv: I) -> Result<Self, InvokeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        if argv.is_empty() {
            return Err(InvokeError::EmptyCommand);
        }
        Ok(Self(argv))
    }

    /// Split a command line on whitespace. No quoting is supported.
    pub fn parse(line: &str) -> Result<Self, InvokeError> {
        Self::new(line.split_whitespace())
    }

    pub fn program(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or_default()
    }

    pub fn args(&self) -> &[String] {
        self.0.get(1..).unwrap_or_default()
    }

    /// Append extra arguments.
    pub fn with_args<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(extra.into_iter().map(Into::into));
        self
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// How to run one invocation.
#[derive(Clone, Debug, Default)]
pub struct InvokeOptions {
    /// Fail with [`InvokeError::UnexpectedExitCode`] when the exit code differs.
    pub expected_exit_code: Option<i32>,
    /// Append the JSON flag and parse stdout as JSON.
    pub json: bool,
    /// Overrides [`DEFAULT_JSON_FLAG`].
    pub json_flag: Option<String>,
    pub current_dir: Option<PathBuf>,
    pub env: Vec<(String, String)>,
    /// Scenario name recorded in the capture log.
    pub scenario: Option<String>,
}

impl InvokeOptions {
    pub fn expect_exit(mut self, code: i32) -> Self {
        self.expected_exit_code = Some(code);
        self
    }

    pub fn json(mut self) -> Self {
        self.json = true;
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

/// Captured result of one invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Parsed stdout when the invocation used the JSON flag.
    pub json: Option<Value>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run the command to completion and capture its output.
pub fn invoke_command(
    command: &CommandLine,
    options: &InvokeOptions,
) -> Result<CommandOutput, InvokeError> {
    invoke_captured(command, options, None)
}

/// Like [`invoke_command`], recording the invocation into `capture`.
pub fn invoke_captured(
    command: &CommandLine,
    options: &InvokeOptions,
    capture: Option<&CaptureLog>,
) -> Result<CommandOutput, InvokeError> {
    let mut args: Vec<String> = command.args().to_vec();
    if options.json {
        let flag = options.json_flag.as_deref().unwrap_or(DEFAULT_JSON_FLAG);
        args.push(flag.to_string());
    }

    let mut cmd = Command::new(command.program());
    cmd.args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = &options.current_dir {
        cmd.current_dir(dir);
    }
    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    let recorded_args = InvocationArgs {
        scenario: options.scenario.clone(),
        program: command.program().to_string(),
        args: args.clone(),
        cwd: options
            .current_dir
            .as_ref()
            .map(|d| d.to_string_lossy().into_owned()),
        json: options.json,
    };

    tracing::debug!(command = %command, json = options.json, "invoking");
    let started = Instant::now();
    let output = match cmd.output() {
        Ok(output) => output,
        Err(source) => {
            if let Some(log) = capture {
                log.record(
                    recorded_args,
                    CapturedOutcome::SpawnFailed {
                        message: source.to_string(),
                    },
                );
            }
            return Err(InvokeError::Spawn {
                program: command.program().to_string(),
                source,
            });
        }
    };
    let duration = started.elapsed();

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    let exit_code = output.status.code();
    tracing::debug!(?exit_code, elapsed_ms = millis(duration), "command finished");

    if let Some(log) = capture {
        log.record(
            recorded_args,
            CapturedOutcome::Exited {
                exit_code,
                stdout: stdout.clone(),
                stderr: stderr.clone(),
                duration,
            },
        );
    }

    if let Some(expected) = options.expected_exit_code {
        if exit_code != Some(expected) {
            return Err(InvokeError::UnexpectedExitCode {
                expected,
                actual: exit_code,
                stderr,
            });
        }
    }

    let json = if options.json {
        let value = serde_json::from_str(&stdout)
            .map_err(|source| InvokeError::MalformedOutput {
                stdout: stdout.clone(),
                source,
            })?;
        Some(value)
    } else {
        None
    };

    Ok(CommandOutput {
        stdout,
        stderr,
        exit_code,
        json,
    })
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "invoke_tests.rs"]
mod tests;
