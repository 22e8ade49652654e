// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! nut binary entry point.

use clap::Parser;

use provardx_nut_cli::cli::{Cli, Command};
use provardx_nut_cli::commands;
use provardx_nut_cli::exit_codes;
use provardx_nut_cli::logging::init_logging;
use provardx_nut_cli::output_diagnostic::print_error;

fn main() {
    let cli = Cli::parse();
    init_logging();

    let mut stdout = std::io::stdout();
    let result = match &cli.command {
        Command::Run(args) => commands::run(args, &mut stdout),
        Command::EnsureConfig(args) => commands::ensure_config(args, &mut stdout),
        Command::Patch(args) => commands::patch(args),
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            print_error(&e);
            exit_codes::SETUP
        }
    };
    std::process::exit(code);
}
