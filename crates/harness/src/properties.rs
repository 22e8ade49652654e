// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keys of the sf config file and the provardx properties file.

use crate::nested::{remove_nested, set_nested};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Default file name of the properties file, relative to the working directory.
pub const PROPERTIES_FILE_NAME: &str = "provardx-properties.json";

/// Config key that points at the loaded properties file.
pub const PROPERTIES_FILE_PATH_KEY: &str = "PROVARDX_PROPERTIES_FILE_PATH";

pub const PROVAR_HOME: &str = "provarHome";
pub const PROJECT_PATH: &str = "projectPath";
pub const RESULTS_PATH: &str = "resultsPath";
pub const TEST_CASE: &str = "testCase";
pub const ENVIRONMENT: &str = "environment";
pub const ENVIRONMENTS_SECRETS: &str = "environmentsSecrets";

/// Secrets password for one named test environment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSecret {
    pub name: String,
    pub secrets_password: String,
}

/// Point the sf config at a properties file.
pub fn set_properties_reference(config: &mut Map<String, Value>, properties: &Path) {
    config.insert(
        PROPERTIES_FILE_PATH_KEY.to_string(),
        Value::String(properties.to_string_lossy().into_owned()),
    );
}

/// Drop the properties reference from the sf config. Returns whether it was set.
pub fn clear_properties_reference(config: &mut Map<String, Value>) -> bool {
    remove_nested(config, PROPERTIES_FILE_PATH_KEY).is_some()
}

/// Typed mutator over a properties document.
pub struct ProvarProperties<'a> {
    doc: &'a mut Map<String, Value>,
}

impl<'a> ProvarProperties<'a> {
    pub fn new(doc: &'a mut Map<String, Value>) -> Self {
        Self { doc }
    }

    pub fn provar_home(&mut self, path: impl Into<String>) -> &mut Self {
        self.set_str(PROVAR_HOME, path)
    }

    pub fn project_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.set_str(PROJECT_PATH, path)
    }

    pub fn results_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.set_str(RESULTS_PATH, path)
    }

    /// Replace the ordered list of test case references.
    pub fn test_cases<I, S>(&mut self, cases: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cases = cases
            .into_iter()
            .map(|c| Value::String(c.into()))
            .collect();
        self.doc.insert(TEST_CASE.to_string(), Value::Array(cases));
        self
    }

    /// Set `environment.<key>`, keeping other environment settings.
    pub fn environment(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        set_nested(
            self.doc,
            &format!("{ENVIRONMENT}.{key}"),
            Value::String(value.into()),
        );
        self
    }

    pub fn environments_secrets(&mut self, secrets: &[EnvironmentSecret]) -> &mut Self {
        // Only string fields, so serialization cannot fail
        if let Ok(secrets) = serde_json::to_value(secrets) {
            self.doc.insert(ENVIRONMENTS_SECRETS.to_string(), secrets);
        }
        self
    }

    fn set_str(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.doc.insert(key.to_string(), Value::String(value.into()));
        self
    }
}

/// Read `testCase` as a list of strings, ignoring non-string entries.
pub fn test_cases(doc: &Map<String, Value>) -> Vec<String> {
    match doc.get(TEST_CASE) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(single)) => vec![single.clone()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "properties_tests.rs"]
mod tests;
