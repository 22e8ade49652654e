// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand implementations. Each returns the process exit code.

use crate::cli::{EnsureConfigArgs, PatchArgs, ReportFormat, RunArgs};
use crate::exit_codes;
use crate::output_diagnostic::print_warning;
use provardx_nut::capture::CaptureLog;
use provardx_nut::locator::CONFIG_FILE_NAME;
use provardx_nut::nested::{remove_nested, set_nested};
use provardx_nut::{
    ConfigLocator, FixtureError, FixtureStore, HarnessError, RunContext, Runner, Suite,
    SuiteError, SuiteReport, CONFIG_INDENT, PROPERTIES_INDENT,
};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that stop a subcommand before it can report.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Harness(#[from] HarnessError),

    #[error(transparent)]
    Suite(#[from] SuiteError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("Cannot open capture file {path}: {source}")]
    Capture {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid assignment '{0}': expected PATH=VALUE")]
    InvalidAssignment(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

/// `nut run`
pub fn run<W: Write>(args: &RunArgs, out: &mut W) -> Result<i32, CliError> {
    let suite = Suite::load(&args.suite)?;
    if suite.scenarios.is_empty() {
        print_warning(format_args!("{} has no scenarios", args.suite.display()));
    }

    let workdir = match &args.workdir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let mut ctx = RunContext::new(&args.config_dir, workdir);
    ctx.command = args.command.clone();
    ctx.fail_fast = args.fail_fast;

    let mut runner = Runner::new(suite, ctx)?;
    if let Some(path) = &args.capture {
        let capture = CaptureLog::with_file(path).map_err(|source| CliError::Capture {
            path: path.clone(),
            source,
        })?;
        runner = runner.with_capture(capture);
    }

    let report = runner.run()?;
    write_report(&report, args.format, out)?;

    Ok(if report.all_passed() {
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILED
    })
}

fn write_report<W: Write>(
    report: &SuiteReport,
    format: ReportFormat,
    out: &mut W,
) -> Result<(), CliError> {
    match format {
        ReportFormat::Text => write!(out, "{}", report.to_text())?,
        ReportFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }
    out.flush()?;
    Ok(())
}

/// `nut ensure-config`
pub fn ensure_config<W: Write>(args: &EnsureConfigArgs, out: &mut W) -> Result<i32, CliError> {
    let locator = match &args.locate {
        Some(pattern) => ConfigLocator::with_pattern(&args.config_dir, pattern, CONFIG_FILE_NAME)?,
        None => ConfigLocator::new(&args.config_dir),
    };
    let handle = locator.ensure_baseline()?;
    writeln!(out, "{}", handle.path().display())?;
    Ok(exit_codes::SUCCESS)
}

/// `nut patch`
///
/// Assignments are parsed before the file is read, so a bad `--set` leaves
/// the file untouched.
pub fn patch(args: &PatchArgs) -> Result<i32, CliError> {
    let assignments = args
        .set
        .iter()
        .map(|raw| parse_assignment(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let indent = args.indent.unwrap_or_else(|| default_indent(&args.file));

    FixtureStore::edit(&args.file, indent, |doc| {
        for path in &args.unset {
            remove_nested(doc, path);
        }
        for (path, value) in assignments {
            set_nested(doc, &path, value);
        }
        Ok::<(), FixtureError>(())
    })?;
    Ok(exit_codes::SUCCESS)
}

/// Split `PATH=VALUE`. VALUE is parsed as JSON; anything that is not valid
/// JSON is taken as a string.
pub fn parse_assignment(raw: &str) -> Result<(String, Value), CliError> {
    let Some((path, value)) = raw.split_once('=') else {
        return Err(CliError::InvalidAssignment(raw.to_string()));
    };
    let path = path.trim();
    if path.is_empty() {
        return Err(CliError::InvalidAssignment(raw.to_string()));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((path.to_string(), value))
}

/// The sf config file is written with 4 spaces, everything else with 2.
pub fn default_indent(path: &Path) -> usize {
    if path.file_name().and_then(|n| n.to_str()) == Some(CONFIG_FILE_NAME) {
        CONFIG_INDENT
    } else {
        PROPERTIES_INDENT
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
