// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolving the loaded properties file and checking its test cases.

use crate::messages;
use provardx_nut::io::read_json_object;
use provardx_nut::locator::ConfigLocator;
use provardx_nut::properties::{test_cases, PROJECT_PATH, PROPERTIES_FILE_PATH_KEY};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures reported by `automation test run`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    /// No properties file is referenced, or it cannot be read
    #[error("{}", messages::MISSING_FILE_ERROR)]
    MissingFile,

    /// Test cases that could not be found under the project
    #[error("{}", messages::TEST_RUN_FAILED)]
    TestRun { missing: Vec<String> },
}

impl RunError {
    pub fn code(&self) -> &'static str {
        match self {
            RunError::MissingFile => messages::MISSING_FILE,
            RunError::TestRun { .. } => messages::TEST_RUN_ERROR,
        }
    }
}

/// A successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub test_cases: Vec<String>,
}

/// Run the test cases of the properties file referenced from `config_dir`.
pub fn run_tests(config_dir: &Path) -> Result<RunSummary, RunError> {
    let properties = load_properties(config_dir).ok_or(RunError::MissingFile)?;

    let cases = test_cases(&properties);
    let Some(project) = properties.get(PROJECT_PATH).and_then(Value::as_str) else {
        return Err(RunError::TestRun { missing: cases });
    };
    if cases.is_empty() {
        return Err(RunError::TestRun { missing: cases });
    }

    let missing: Vec<String> = cases
        .iter()
        .filter(|case| !test_case_path(Path::new(project), case).is_file())
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(RunError::TestRun { missing });
    }

    Ok(RunSummary { test_cases: cases })
}

fn load_properties(config_dir: &Path) -> Option<Map<String, Value>> {
    let handle = ConfigLocator::new(config_dir).locate().ok()??;
    let config = read_json_object(handle.path()).ok()?;
    let path = config.get(PROPERTIES_FILE_PATH_KEY)?.as_str()?;
    read_json_object(Path::new(path)).ok()
}

/// Test case references are relative to `<project>/tests`.
pub fn test_case_path(project: &Path, case: &str) -> PathBuf {
    project.join("tests").join(case.trim_start_matches(['/', '\\']))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
