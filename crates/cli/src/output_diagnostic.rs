// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error and warning lines on stderr, coloured when stderr is a terminal.

use std::io::{self, IsTerminal, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Error,
    Warning,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
        }
    }

    /// ANSI foreground colour
    fn color(self) -> &'static str {
        match self {
            Level::Error => "31",
            Level::Warning => "33",
        }
    }
}

/// Print an error message to stderr.
pub fn print_error(msg: impl std::fmt::Display) {
    print_diagnostic(Level::Error, msg);
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl std::fmt::Display) {
    print_diagnostic(Level::Warning, msg);
}

fn print_diagnostic(level: Level, msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), level, msg, is_tty);
}

fn write_diagnostic<W: Write>(
    writer: &mut W,
    level: Level,
    msg: impl std::fmt::Display,
    is_terminal: bool,
) {
    // Multi-line messages (diffs) keep the colour on the first line only
    let text = msg.to_string();
    let (first, rest) = match text.split_once('\n') {
        Some((first, rest)) => (first, Some(rest)),
        None => (text.as_str(), None),
    };
    let _ = if is_terminal {
        writeln!(
            writer,
            "\x1b[{}m{}: {}\x1b[0m",
            level.color(),
            level.label(),
            first
        )
    } else {
        writeln!(writer, "{}: {}", level.label(), first)
    };
    if let Some(rest) = rest {
        let _ = writeln!(writer, "{}", rest.trim_end_matches('\n'));
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
