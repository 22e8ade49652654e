// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Finding (or creating) the singleton sf config file.

use crate::error::FixtureError;
use crate::fixture::{FixtureStore, CONFIG_INDENT};
use crate::io::{files_in, write_atomic};
use regex::Regex;
use std::path::{Path, PathBuf};

/// File name created when no config file exists.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Locates the config file inside an injected directory.
///
/// Files are matched by exact name, or against an optional regex pattern.
/// An exact name match wins; otherwise the first match in sorted order is
/// used.
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    dir: PathBuf,
    file_name: String,
    pattern: Option<Regex>,
}

/// A located config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigHandle {
    path: PathBuf,
    created: bool,
}

impl ConfigHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether [`ConfigLocator::ensure_baseline`] had to create the file.
    pub fn was_created(&self) -> bool {
        self.created
    }

    /// Open the config for patching.
    pub fn open(&self) -> Result<FixtureStore, FixtureError> {
        FixtureStore::load(&self.path, CONFIG_INDENT)
    }
}

impl ConfigLocator {
    /// Locator for `config.json` in `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_name: CONFIG_FILE_NAME.to_string(),
            pattern: None,
        }
    }

    /// Locator for files whose name matches `pattern`; `file_name` is
    /// created when nothing matches.
    pub fn with_pattern(
        dir: impl Into<PathBuf>,
        pattern: &str,
        file_name: impl Into<String>,
    ) -> Result<Self, FixtureError> {
        Ok(Self {
            dir: dir.into(),
            file_name: file_name.into(),
            pattern: Some(Regex::new(pattern)?),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Find an existing config file without creating one.
    pub fn locate(&self) -> Result<Option<ConfigHandle>, FixtureError> {
        if !self.dir.is_dir() {
            return Err(FixtureError::ConfigDirMissing(self.dir.clone()));
        }

        let mut matches: Vec<PathBuf> = files_in(&self.dir)
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| self.matches(n))
            })
            .collect();
        matches.sort();

        let exact = matches
            .iter()
            .position(|p| p.file_name().and_then(|n| n.to_str()) == Some(self.file_name.as_str()));
        let found = match exact {
            Some(index) => Some(matches.swap_remove(index)),
            None => matches.into_iter().next(),
        };

        Ok(found.map(|path| ConfigHandle {
            path,
            created: false,
        }))
    }

    fn matches(&self, name: &str) -> bool {
        name == self.file_name || self.pattern.as_ref().is_some_and(|r| r.is_match(name))
    }

    /// Locate the config file, writing `{}` if none exists. Idempotent.
    pub fn ensure_baseline(&self) -> Result<ConfigHandle, FixtureError> {
        if let Some(handle) = self.locate()? {
            tracing::debug!(path = %handle.path.display(), "located config");
            return Ok(handle);
        }
        let path = self.dir.join(&self.file_name);
        write_atomic(&path, "{}")?;
        tracing::debug!(path = %path.display(), "created baseline config");
        Ok(ConfigHandle {
            path,
            created: true,
        })
    }
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;
