// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential execution of suite scenarios.
//!
//! Scenarios share on-disk fixtures, so they run one at a time in suite
//! order. Each patch re-reads its fixture from disk; nothing carries over
//! between scenarios in memory.

use crate::check::OutputCheck;
use crate::error::{FixtureError, HarnessError, SuiteError};
use crate::fixture::FixtureStore;
use crate::io::forward_slashes;
use crate::invoke::{invoke_captured, CommandLine, InvokeOptions};
use crate::locator::{ConfigLocator, CONFIG_FILE_NAME};
use crate::nested::{remove_nested, set_nested};
use crate::report::{ScenarioOutcome, ScenarioResult, SuiteReport};
use crate::suite::{FixtureLocation, FixturePatch, FixtureTarget, Placeholders, Scenario, Suite};
use nut_capture::CaptureLog;
use std::path::PathBuf;
use std::time::Instant;

/// Environment a suite runs in.
#[derive(Clone, Debug)]
pub struct RunContext {
    /// Directory holding the sf config file
    pub config_dir: PathBuf,
    /// Working directory for the command and for relative fixture paths
    pub workdir: PathBuf,
    /// Replaces the suite's command when set
    pub command: Option<Vec<String>>,
    /// Extra environment, applied after the suite's own
    pub env: Vec<(String, String)>,
    /// Stop at the first failed scenario; the rest are reported as skipped
    pub fail_fast: bool,
}

impl RunContext {
    pub fn new(config_dir: impl Into<PathBuf>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            workdir: workdir.into(),
            command: None,
            env: Vec::new(),
            fail_fast: false,
        }
    }
}

/// Drives a suite against the command under test.
pub struct Runner {
    suite: Suite,
    ctx: RunContext,
    placeholders: Placeholders,
    command: CommandLine,
    capture: CaptureLog,
}

impl Runner {
    pub fn new(suite: Suite, ctx: RunContext) -> Result<Self, HarnessError> {
        let placeholders = Placeholders::new(&ctx.workdir, &ctx.config_dir);
        // Expanded per scenario, once `${config_file}` is known
        let argv = ctx.command.as_ref().unwrap_or(&suite.command);
        let command = CommandLine::new(argv.iter().cloned())?;
        Ok(Self {
            suite,
            ctx,
            placeholders,
            command,
            capture: CaptureLog::new(),
        })
    }

    /// Record invocations into `capture` instead of a private log.
    pub fn with_capture(mut self, capture: CaptureLog) -> Self {
        self.capture = capture;
        self
    }

    pub fn capture(&self) -> &CaptureLog {
        &self.capture
    }

    pub fn suite(&self) -> &Suite {
        &self.suite
    }

    /// Run every scenario in order.
    ///
    /// Fixture errors and spawn failures abort the run. Scenario failures
    /// are collected in the report.
    pub fn run(&mut self) -> Result<SuiteReport, HarnessError> {
        self.ensure_located_fixtures()?;

        let mut report = SuiteReport::new(self.suite.name.clone());
        let scenarios = self.suite.scenarios.clone();
        let mut stop = false;
        for scenario in &scenarios {
            if stop {
                report.push(ScenarioResult {
                    name: scenario.name.clone(),
                    outcome: ScenarioOutcome::Skipped,
                    exit_code: None,
                    duration: std::time::Duration::ZERO,
                });
                continue;
            }
            let result = self.run_scenario(scenario)?;
            stop = self.ctx.fail_fast && !result.passed();
            report.push(result);
        }
        Ok(report)
    }

    /// Patch, invoke once, verify one stream.
    pub fn run_scenario(&mut self, scenario: &Scenario) -> Result<ScenarioResult, HarnessError> {
        let started = Instant::now();
        for patch in &scenario.patches {
            self.apply_patch(&scenario.name, patch)?;
        }

        let options = self.invoke_options(scenario);
        let command = CommandLine::new(
            std::iter::once(self.command.program())
                .chain(self.command.args().iter().map(String::as_str))
                .chain(scenario.args.iter().map(String::as_str))
                .map(|a| self.placeholders.expand(a)),
        )?;

        let check = self.expand_check(&scenario.check);
        let (outcome, exit_code) = match invoke_captured(&command, &options, Some(&self.capture)) {
            Ok(output) => {
                let outcome = match check.verify(&output) {
                    Ok(()) => ScenarioOutcome::Passed,
                    Err(mismatch) => ScenarioOutcome::Failed {
                        reason: mismatch.to_string(),
                    },
                };
                (outcome, output.exit_code)
            }
            Err(e) if e.fails_scenario() => {
                let code = e.exit_code();
                (ScenarioOutcome::Failed { reason: e.to_string() }, code)
            }
            Err(e) => return Err(e.into()),
        };

        match &outcome {
            ScenarioOutcome::Failed { reason } => {
                tracing::info!(scenario = %scenario.name, %reason, "scenario failed")
            }
            _ => tracing::info!(scenario = %scenario.name, "scenario passed"),
        }

        Ok(ScenarioResult {
            name: scenario.name.clone(),
            outcome,
            exit_code,
            duration: started.elapsed(),
        })
    }

    fn invoke_options(&self, scenario: &Scenario) -> InvokeOptions {
        let mut env: Vec<(String, String)> = self
            .suite
            .env
            .iter()
            .map(|(k, v)| (k.clone(), self.placeholders.expand(v)))
            .collect();
        env.extend(self.ctx.env.iter().cloned());
        InvokeOptions {
            expected_exit_code: scenario.expected_exit_code,
            json: scenario.json,
            json_flag: self.suite.json_flag.clone(),
            current_dir: Some(self.ctx.workdir.clone()),
            env,
            scenario: Some(scenario.name.clone()),
        }
    }

    /// Expectations may name the sandbox paths too.
    fn expand_check(&self, check: &OutputCheck) -> OutputCheck {
        match check {
            OutputCheck::Stdout(text) => OutputCheck::Stdout(self.placeholders.expand(text)),
            OutputCheck::Stderr(text) => OutputCheck::Stderr(self.placeholders.expand(text)),
            OutputCheck::Json(value) => OutputCheck::Json(self.placeholders.expand_value(value)),
        }
    }

    /// Create missing located fixtures and point `${config_file}` at the
    /// first one.
    fn ensure_located_fixtures(&mut self) -> Result<(), FixtureError> {
        let mut first = None;
        for target in self.suite.fixtures.values() {
            if let FixtureLocation::Located { pattern } = &target.location {
                let handle = self.locator(pattern)?.ensure_baseline()?;
                first.get_or_insert(handle);
            }
        }
        if let Some(handle) = first {
            self.placeholders
                .set("config_file", forward_slashes(handle.path()));
        }
        Ok(())
    }

    fn locator(&self, pattern: &str) -> Result<ConfigLocator, FixtureError> {
        ConfigLocator::with_pattern(&self.ctx.config_dir, pattern, CONFIG_FILE_NAME)
    }

    fn fixture_path(&self, target: &FixtureTarget) -> Result<PathBuf, FixtureError> {
        match &target.location {
            FixtureLocation::Located { pattern } => {
                Ok(self.locator(pattern)?.ensure_baseline()?.path().to_path_buf())
            }
            FixtureLocation::Path(path) => Ok(self.ctx.workdir.join(self.placeholders.expand(path))),
        }
    }

    fn apply_patch(&self, scenario: &str, patch: &FixturePatch) -> Result<(), HarnessError> {
        let target = self.suite.fixtures.get(&patch.fixture).ok_or_else(|| {
            SuiteError::UnknownFixture {
                scenario: scenario.to_string(),
                fixture: patch.fixture.clone(),
            }
        })?;
        let path = self.fixture_path(target)?;
        tracing::debug!(fixture = %target.name, path = %path.display(), "patching fixture");
        FixtureStore::edit(&path, target.indent, |doc| {
            for key in &patch.unset {
                remove_nested(doc, key);
            }
            for (key, value) in &patch.set {
                set_nested(doc, key, self.placeholders.expand_value(value));
            }
            Ok::<(), FixtureError>(())
        })?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
