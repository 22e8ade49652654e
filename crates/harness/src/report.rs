// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-scenario verdicts and suite summaries.

use serde::Serialize;
use std::time::Duration;

/// Verdict for one scenario
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScenarioOutcome {
    Passed,
    /// Output mismatch, unexpected exit code, or unparseable JSON output
    Failed { reason: String },
    /// Not run because an earlier scenario failed under fail-fast
    Skipped,
}

/// Result of one scenario
#[derive(Clone, Debug, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    #[serde(flatten)]
    pub outcome: ScenarioOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

fn serialize_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

impl ScenarioResult {
    pub fn passed(&self) -> bool {
        self.outcome == ScenarioOutcome::Passed
    }
}

/// Results of a whole suite run, in execution order
#[derive(Clone, Debug, Default, Serialize)]
pub struct SuiteReport {
    pub name: String,
    pub results: Vec<ScenarioResult>,
}

impl SuiteReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, result: ScenarioResult) {
        self.results.push(result);
    }

    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, ScenarioOutcome::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ScenarioOutcome::Failed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ScenarioOutcome::Skipped))
    }

    fn count(&self, pred: impl Fn(&ScenarioOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }

    /// True when nothing failed or was skipped.
    pub fn all_passed(&self) -> bool {
        self.passed() == self.results.len()
    }

    /// Human-readable report, one line per scenario with failure detail indented.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if !self.name.is_empty() {
            out.push_str(&format!("suite: {}\n", self.name));
        }
        for result in &self.results {
            match &result.outcome {
                ScenarioOutcome::Passed => out.push_str(&format!("ok - {}\n", result.name)),
                ScenarioOutcome::Skipped => {
                    out.push_str(&format!("skipped - {}\n", result.name))
                }
                ScenarioOutcome::Failed { reason } => {
                    out.push_str(&format!("FAILED - {}\n", result.name));
                    for line in reason.lines() {
                        out.push_str("    ");
                        out.push_str(line);
                        out.push('\n');
                    }
                }
            }
        }
        out.push_str(&format!(
            "\n{} scenarios: {} passed, {} failed, {} skipped\n",
            self.results.len(),
            self.passed(),
            self.failed(),
            self.skipped()
        ));
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
