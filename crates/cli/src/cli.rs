// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Declarative CLI-output verification for `sf provar automation test run`
#[derive(Parser, Debug)]
#[command(name = "nut", version, about = "Run provardx-nut verification suites")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a suite file and report each scenario
    Run(RunArgs),
    /// Locate the sf config file, creating `{}` if absent, and print its path
    EnsureConfig(EnsureConfigArgs),
    /// Edit a JSON fixture in place
    Patch(PatchArgs),
}

/// Report format
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// `ok` / `FAILED` lines with diffs
    #[default]
    Text,
    /// Machine-readable report
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Suite file (TOML, or JSON with a `.json` extension)
    #[arg(value_name = "SUITE")]
    pub suite: PathBuf,

    /// Directory holding the sf config file
    #[arg(long, env = "SF_DIR")]
    pub config_dir: PathBuf,

    /// Working directory for the command and relative fixtures (default: current)
    #[arg(long)]
    pub workdir: Option<PathBuf>,

    /// Replace the suite's command. Consumes the remaining arguments.
    #[arg(long, value_name = "ARGV", num_args = 1.., allow_hyphen_values = true)]
    pub command: Option<Vec<String>>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Append every invocation to this JSONL file
    #[arg(long, value_name = "FILE")]
    pub capture: Option<PathBuf>,

    /// Stop at the first failed scenario
    #[arg(long)]
    pub fail_fast: bool,
}

#[derive(Args, Debug, Clone)]
pub struct EnsureConfigArgs {
    /// Directory holding the sf config file
    #[arg(long, env = "SF_DIR")]
    pub config_dir: PathBuf,

    /// Accept any file whose name matches this regex
    #[arg(long, value_name = "REGEX")]
    pub locate: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct PatchArgs {
    /// JSON file to edit
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Set a dot-path to a JSON value; bare words are taken as strings
    #[arg(long = "set", value_name = "PATH=JSON")]
    pub set: Vec<String>,

    /// Remove a dot-path (applied before --set)
    #[arg(long = "unset", value_name = "PATH")]
    pub unset: Vec<String>,

    /// Spaces per indentation level (default: 4 for config.json, else 2)
    #[arg(long)]
    pub indent: Option<usize>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
