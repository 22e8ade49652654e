// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `nut`: run provardx-nut suites from the shell.
//!
//! Internal modules are public for the binary and its tests.

#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod commands;
#[doc(hidden)]
pub mod logging;
#[doc(hidden)]
pub mod output_diagnostic;

/// Process exit codes
pub mod exit_codes {
    /// Every scenario passed, or the command succeeded
    pub const SUCCESS: i32 = 0;
    /// At least one scenario failed
    pub const FAILED: i32 = 1;
    /// Bad arguments, unreadable suite, or a fixture error
    pub const SETUP: i32 = 2;
}
