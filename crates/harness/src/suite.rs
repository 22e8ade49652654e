// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite files: fixtures, scenarios, and expectations in TOML or JSON.

use crate::check::OutputCheck;
use crate::error::SuiteError;
use crate::fixture::{CONFIG_INDENT, PROPERTIES_INDENT};
use crate::io::forward_slashes;
use crate::locator::CONFIG_FILE_NAME;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

fn default_indent() -> usize {
    PROPERTIES_INDENT
}

/// Top-level suite configuration
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Name for reports
    #[serde(default)]
    pub name: String,

    /// Command under test, program first. Placeholders are expanded.
    pub command: Vec<String>,

    /// Flag appended for JSON scenarios (default: "--json")
    #[serde(default)]
    pub json_flag: Option<String>,

    /// Expected-results file, relative to the suite file
    #[serde(default)]
    pub expected: Option<PathBuf>,

    /// Environment variables for every invocation. Placeholders are expanded.
    #[serde(default)]
    pub env: BTreeMap<String, String>,

    /// Named JSON fixtures that scenarios patch
    #[serde(default)]
    pub fixtures: BTreeMap<String, FixtureSpec>,

    /// Scenarios, executed in order
    #[serde(default)]
    pub scenarios: Vec<ScenarioSpec>,
}

/// Where a fixture lives
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureSpec {
    /// Locate in the config directory by file-name pattern (regex).
    /// `{}` is written to `config.json` when nothing matches.
    #[serde(default)]
    pub locate: Option<String>,

    /// Path relative to the working directory
    #[serde(default)]
    pub path: Option<String>,

    /// Spaces per indentation level when writing back
    #[serde(default)]
    pub indent: Option<usize>,
}

/// A single scenario
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioSpec {
    pub name: String,

    /// Fixture edits applied, in order, before the invocation
    #[serde(default)]
    pub patches: Vec<PatchSpec>,

    /// Pass the JSON flag (default: true for `json` expectations)
    #[serde(default)]
    pub json: Option<bool>,

    /// Extra arguments appended to the command
    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default)]
    pub expected_exit_code: Option<i32>,

    /// Exactly one of `stdout`, `stderr`, `json`
    pub expect: ExpectSpec,
}

/// Edits to one fixture
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PatchSpec {
    pub fixture: String,

    /// Dot-paths removed before `set` is applied
    #[serde(default)]
    pub unset: Vec<String>,

    /// Dot-path to value. String values have placeholders expanded.
    #[serde(default)]
    pub set: Map<String, Value>,
}

/// Which stream to compare
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectSpec {
    Stdout(ExpectedValue),
    Stderr(ExpectedValue),
    Json(ExpectedValue),
}

/// An inline value or a key into the expected-results file.
///
/// Forms are tried in order: `{ ref = "key" }`, `{ inline = <value> }`, then
/// any other value taken literally. An expected JSON object that is itself
/// `{"ref": ...}` or `{"inline": ...}` must be wrapped in `inline`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ExpectedValue {
    Reference(ExpectedRef),
    Wrapped(ExpectedInline),
    Inline(Value),
}

/// `{ ref = "key" }`
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectedRef {
    #[serde(rename = "ref")]
    pub key: String,
}

/// `{ inline = <value> }`
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectedInline {
    pub inline: Value,
}

/// How a resolved fixture is found on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixtureLocation {
    /// Config directory, by file-name pattern
    Located { pattern: String },
    /// Working-directory relative path (may contain placeholders)
    Path(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureTarget {
    pub name: String,
    pub location: FixtureLocation,
    pub indent: usize,
}

/// A fixture edit with the target already validated.
#[derive(Clone, Debug, PartialEq)]
pub struct FixturePatch {
    pub fixture: String,
    pub unset: Vec<String>,
    pub set: Map<String, Value>,
}

/// A validated scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub patches: Vec<FixturePatch>,
    pub json: bool,
    pub args: Vec<String>,
    pub expected_exit_code: Option<i32>,
    pub check: OutputCheck,
}

/// A loaded and validated suite.
#[derive(Clone, Debug)]
pub struct Suite {
    pub name: String,
    pub command: Vec<String>,
    pub json_flag: Option<String>,
    pub env: BTreeMap<String, String>,
    pub fixtures: BTreeMap<String, FixtureTarget>,
    pub scenarios: Vec<Scenario>,
}

impl Suite {
    /// Load a suite from a TOML or JSON file.
    ///
    /// The expected-results file is resolved relative to the suite file.
    pub fn load(path: &Path) -> Result<Self, SuiteError> {
        let content = std::fs::read_to_string(path).map_err(|source| SuiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SuiteConfig = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        let base_dir = path.parent().unwrap_or(Path::new("."));
        Self::from_config(config, base_dir)
    }

    /// Validate a parsed config. `base_dir` anchors the expected-results file.
    pub fn from_config(config: SuiteConfig, base_dir: &Path) -> Result<Self, SuiteError> {
        if config.command.is_empty() {
            return Err(SuiteError::Validation("command must not be empty".to_string()));
        }

        let expected = match &config.expected {
            Some(rel) => load_expected(&base_dir.join(rel))?,
            None => Map::new(),
        };

        let mut fixtures = BTreeMap::new();
        for (name, spec) in &config.fixtures {
            fixtures.insert(name.clone(), resolve_fixture(name, spec)?);
        }

        let mut seen = std::collections::HashSet::new();
        let mut scenarios = Vec::with_capacity(config.scenarios.len());
        for spec in config.scenarios {
            if !seen.insert(spec.name.clone()) {
                return Err(SuiteError::Validation(format!(
                    "duplicate scenario name '{}'",
                    spec.name
                )));
            }
            scenarios.push(resolve_scenario(spec, &fixtures, &expected)?);
        }

        Ok(Self {
            name: config.name,
            command: config.command,
            json_flag: config.json_flag,
            env: config.env,
            fixtures,
            scenarios,
        })
    }
}

fn load_expected(path: &Path) -> Result<Map<String, Value>, SuiteError> {
    let content = std::fs::read_to_string(path).map_err(|source| SuiteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    match serde_json::from_str(&content)? {
        Value::Object(map) => Ok(map),
        _ => Err(SuiteError::Validation(format!(
            "expected-results file {} must contain a JSON object",
            path.display()
        ))),
    }
}

fn resolve_fixture(name: &str, spec: &FixtureSpec) -> Result<FixtureTarget, SuiteError> {
    let (location, default_indent) = match (&spec.locate, &spec.path) {
        (Some(pattern), None) => {
            regex::Regex::new(pattern).map_err(|e| {
                SuiteError::Validation(format!("fixture '{}': invalid pattern: {}", name, e))
            })?;
            (
                FixtureLocation::Located {
                    pattern: pattern.clone(),
                },
                CONFIG_INDENT,
            )
        }
        (None, Some(path)) => (FixtureLocation::Path(path.clone()), default_indent()),
        _ => {
            return Err(SuiteError::Validation(format!(
                "fixture '{}' must set exactly one of `locate` or `path`",
                name
            )))
        }
    };
    Ok(FixtureTarget {
        name: name.to_string(),
        location,
        indent: spec.indent.unwrap_or(default_indent),
    })
}

fn resolve_scenario(
    spec: ScenarioSpec,
    fixtures: &BTreeMap<String, FixtureTarget>,
    expected: &Map<String, Value>,
) -> Result<Scenario, SuiteError> {
    for patch in &spec.patches {
        if !fixtures.contains_key(&patch.fixture) {
            return Err(SuiteError::UnknownFixture {
                scenario: spec.name.clone(),
                fixture: patch.fixture.clone(),
            });
        }
    }

    let resolve = |value: &ExpectedValue| -> Result<Value, SuiteError> {
        match value {
            ExpectedValue::Inline(v) => Ok(v.clone()),
            ExpectedValue::Wrapped(w) => Ok(w.inline.clone()),
            ExpectedValue::Reference(r) => {
                expected
                    .get(&r.key)
                    .cloned()
                    .ok_or_else(|| SuiteError::UnknownExpected {
                        scenario: spec.name.clone(),
                        key: r.key.clone(),
                    })
            }
        }
    };
    let text = |value: Value, stream: &str| -> Result<String, SuiteError> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(SuiteError::Validation(format!(
                "scenario '{}': expected {} must be a string",
                spec.name, stream
            ))),
        }
    };

    let check = match &spec.expect {
        ExpectSpec::Stdout(v) => OutputCheck::Stdout(text(resolve(v)?, "stdout")?),
        ExpectSpec::Stderr(v) => OutputCheck::Stderr(text(resolve(v)?, "stderr")?),
        ExpectSpec::Json(v) => OutputCheck::Json(resolve(v)?),
    };

    let json = spec.json.unwrap_or_else(|| check.needs_json());
    if check.needs_json() && !json {
        return Err(SuiteError::Validation(format!(
            "scenario '{}': json expectation requires json = true",
            spec.name
        )));
    }

    Ok(Scenario {
        patches: spec
            .patches
            .into_iter()
            .map(|p| FixturePatch {
                fixture: p.fixture,
                unset: p.unset,
                set: p.set,
            })
            .collect(),
        json,
        args: spec.args,
        expected_exit_code: spec.expected_exit_code,
        check,
        name: spec.name,
    })
}

/// Values substituted for `${workdir}`, `${config_dir}` and `${config_file}`.
///
/// Paths are rendered with forward slashes. `${config_file}` starts as
/// `<config_dir>/config.json`; the runner repoints it at the file its first
/// located fixture resolves to.
#[derive(Clone, Debug, Default)]
pub struct Placeholders {
    pairs: Vec<(String, String)>,
}

impl Placeholders {
    pub fn new(workdir: &Path, config_dir: &Path) -> Self {
        Self::default()
            .with("workdir", forward_slashes(workdir))
            .with("config_dir", forward_slashes(config_dir))
            .with(
                "config_file",
                forward_slashes(&config_dir.join(CONFIG_FILE_NAME)),
            )
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Add a placeholder or replace the value of an existing one.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let key = format!("${{{}}}", name);
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Expand every known placeholder; unknown ones are left as written.
    pub fn expand(&self, input: &str) -> String {
        self.pairs
            .iter()
            .fold(input.to_string(), |acc, (key, value)| acc.replace(key, value))
    }

    /// Expand placeholders in every string inside `value`.
    pub fn expand_value(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => Value::String(self.expand(s)),
            Value::Array(items) => Value::Array(items.iter().map(|v| self.expand_value(v)).collect()),
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), self.expand_value(v)))
                    .collect(),
            ),
            other => other.clone(),
        }
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
