// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed messages and error codes emitted by the stub.

pub const MISSING_FILE: &str = "MISSING_FILE";
pub const MISSING_FILE_ERROR: &str =
    "The properties file has not been loaded or cannot be accessed.";

pub const TEST_RUN_ERROR: &str = "TEST_RUN_ERROR";
pub const TEST_RUN_FAILED: &str = "Test Run completed with failures.";

pub const TEST_RUN_SUCCEEDED: &str = "Test Run completed successfully.";
