// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

//! Shared sandbox for stub integration tests.

use provardx_nut::io::forward_slashes;
use provardx_nut::CommandLine;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn stub_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_provar-stub"))
}

/// `provar-stub automation test run`
pub fn stub_argv() -> Vec<String> {
    vec![
        stub_bin().to_string_lossy().into_owned(),
        "automation".to_string(),
        "test".to_string(),
        "run".to_string(),
    ]
}

pub fn stub_command() -> CommandLine {
    CommandLine::new(stub_argv()).unwrap()
}

/// A config directory plus a working directory holding a Provar project
/// with a single test case, `/Test Case 1.testcase`.
pub struct Sandbox {
    config_dir: TempDir,
    workdir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let sandbox = Self {
            config_dir: tempfile::tempdir().unwrap(),
            workdir: tempfile::tempdir().unwrap(),
        };
        let tests = sandbox.workdir().join("ProvarRegression/AutomationRevamp/tests");
        std::fs::create_dir_all(&tests).unwrap();
        std::fs::create_dir_all(sandbox.workdir().join("ProvarHome")).unwrap();
        std::fs::write(tests.join("Test Case 1.testcase"), "<testCase/>\n").unwrap();
        std::fs::write(sandbox.properties_path(), "{}").unwrap();
        sandbox
    }

    pub fn config_dir(&self) -> &Path {
        self.config_dir.path()
    }

    pub fn workdir(&self) -> &Path {
        self.workdir.path()
    }

    pub fn properties_path(&self) -> PathBuf {
        self.workdir().join("provardx-properties.json")
    }

    pub fn provar_home(&self) -> String {
        forward_slashes(&self.workdir().join("ProvarHome"))
    }

    pub fn project_path(&self) -> String {
        forward_slashes(&self.workdir().join("ProvarRegression/AutomationRevamp"))
    }
}
