// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! provar-stub binary entry point.

use clap::Parser;

use provar_stub::cli::{AutomationCommand, Cli, Command, TestCommand};
use provar_stub::output::{write_outcome, OutputMode};
use provar_stub::run::run_tests;

fn main() {
    let cli = Cli::parse();

    let Command::Automation {
        command: AutomationCommand::Test {
            command: TestCommand::Run(args),
        },
    } = cli.command;

    let mode = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    let outcome = run_tests(&args.config_dir);

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let code = match write_outcome(&outcome, mode, &mut stdout, &mut stderr) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: failed to write output: {}", e);
            1
        }
    };
    std::process::exit(code);
}
