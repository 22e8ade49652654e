// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing matching `sf provar automation test run`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Provar automation CLI stub
#[derive(Parser, Debug)]
#[command(name = "provar-stub", version, about = "Provar automation CLI stub")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Automation commands
    Automation {
        #[command(subcommand)]
        command: AutomationCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum AutomationCommand {
    /// Test commands
    Test {
        #[command(subcommand)]
        command: TestCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum TestCommand {
    /// Run the test cases listed in the loaded properties file
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Format output as JSON
    #[arg(long)]
    pub json: bool,

    /// Directory holding config.json
    #[arg(long, env = "SF_DIR")]
    pub config_dir: PathBuf,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
