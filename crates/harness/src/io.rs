// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! IO helpers for JSON fixture files.

use crate::error::FixtureError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Read a file and parse it as a JSON object.
pub fn read_json_object(path: &Path) -> Result<Map<String, Value>, FixtureError> {
    let content = std::fs::read_to_string(path).map_err(|e| FixtureError::io(path, e))?;
    parse_json_object(path, &content)
}

/// Parse content as a JSON object, attributing failures to `path`.
pub fn parse_json_object(path: &Path, content: &str) -> Result<Map<String, Value>, FixtureError> {
    let value: Value =
        serde_json::from_str(content).map_err(|source| FixtureError::MalformedFixture {
            path: path.to_path_buf(),
            source,
        })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(FixtureError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Render a value as pretty JSON with `indent` spaces per level.
pub fn to_pretty_json<T: Serialize>(value: &T, indent: usize) -> Result<String, serde_json::Error> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // PrettyFormatter only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Replace `path` with `content` atomically.
///
/// The content is written to a temporary file next to the real target and
/// renamed over it, so readers see either the old or the new file. Symlinks
/// are followed and an existing file keeps its permissions.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), FixtureError> {
    let target = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| FixtureError::io(path, e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|()| tmp.flush())
        .map_err(|e| FixtureError::io(path, e))?;
    if let Ok(existing) = std::fs::metadata(&target) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| FixtureError::io(path, e))?;
    }
    tmp.persist(&target)
        .map_err(|e| FixtureError::io(path, e.error))?;
    Ok(())
}

/// Iterate over file paths in a directory.
///
/// Silently skips entries that can't be read. Returns an empty iterator if the
/// directory doesn't exist or can't be read.
pub fn files_in(dir: &Path) -> impl Iterator<Item = PathBuf> {
    std::fs::read_dir(dir)
        .into_iter()
        .flatten()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
}

/// Render a path with forward slashes regardless of platform.
pub fn forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;
