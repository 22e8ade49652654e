// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read / patch / write cycles over JSON fixture files.

use crate::error::FixtureError;
use crate::io::{read_json_object, to_pretty_json, write_atomic};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Indentation used by the sf config file.
pub const CONFIG_INDENT: usize = 4;
/// Indentation used by the provardx properties file.
pub const PROPERTIES_INDENT: usize = 2;

/// An in-memory copy of a JSON fixture file.
///
/// The document is only written back on [`save`](Self::save); dropping a
/// store without saving leaves the file untouched.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    path: PathBuf,
    indent: usize,
    doc: Map<String, Value>,
    dirty: bool,
}

impl FixtureStore {
    /// Load a fixture from disk.
    pub fn load(path: impl Into<PathBuf>, indent: usize) -> Result<Self, FixtureError> {
        let path = path.into();
        let doc = read_json_object(&path)?;
        Ok(Self {
            path,
            indent,
            doc,
            dirty: false,
        })
    }

    /// Load, apply `patch`, and save in one scoped step.
    ///
    /// If loading fails or `patch` returns an error the file is not touched.
    pub fn edit<F, E>(path: impl Into<PathBuf>, indent: usize, patch: F) -> Result<Self, E>
    where
        F: FnOnce(&mut Map<String, Value>) -> Result<(), E>,
        E: From<FixtureError>,
    {
        let mut store = Self::load(path, indent)?;
        patch(&mut store.doc)?;
        store.dirty = true;
        store.save()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Map<String, Value> {
        &self.doc
    }

    /// Whether the document changed since the last load or save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Apply a transformation to the in-memory document.
    pub fn with_patch<F>(&mut self, patch: F) -> &mut Self
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        patch(&mut self.doc);
        self.dirty = true;
        self
    }

    /// Render the document the way [`save`](Self::save) writes it.
    pub fn render(&self) -> Result<String, FixtureError> {
        to_pretty_json(&self.doc, self.indent).map_err(|source| FixtureError::MalformedFixture {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the document back atomically.
    pub fn save(&mut self) -> Result<(), FixtureError> {
        let content = self.render()?;
        write_atomic(&self.path, &content)?;
        tracing::debug!(path = %self.path.display(), "saved fixture");
        self.dirty = false;
        Ok(())
    }
}

/// Read a JSON file, apply `mutation`, and write it back with `indent`.
pub fn patch_json_file<F>(path: &Path, indent: usize, mutation: F) -> Result<(), FixtureError>
where
    F: FnOnce(&mut Map<String, Value>),
{
    FixtureStore::edit(path, indent, |doc| {
        mutation(doc);
        Ok::<(), FixtureError>(())
    })?;
    Ok(())
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
