// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared, append-only invocation log.

use crate::interaction::{CapturedInvocation, CapturedOutcome, InvocationArgs};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

struct Inner {
    invocations: Vec<CapturedInvocation>,
    /// JSONL sink; lines are written under the same lock as the push so the
    /// file order always matches `seq`.
    sink: Option<BufWriter<File>>,
    /// Set after the first failed write; later failures are not logged again.
    sink_failed: bool,
}

/// Invocation log. Clones share the same records.
#[derive(Clone)]
pub struct CaptureLog {
    start: Instant,
    inner: Arc<Mutex<Inner>>,
}

impl CaptureLog {
    /// In-memory log
    pub fn new() -> Self {
        Self::with_sink(None)
    }

    /// Log that also appends one JSON line per invocation to `path`.
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::with_sink(Some(BufWriter::new(file))))
    }

    fn with_sink(sink: Option<BufWriter<File>>) -> Self {
        Self {
            start: Instant::now(),
            inner: Arc::new(Mutex::new(Inner {
                invocations: Vec::new(),
                sink,
                sink_failed: false,
            })),
        }
    }

    /// Record an invocation and return its sequence number.
    pub fn record(&self, args: InvocationArgs, outcome: CapturedOutcome) -> u64 {
        let mut inner = self.inner.lock();
        let seq = inner.invocations.len() as u64;
        let invocation = CapturedInvocation {
            seq,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            args,
            outcome,
        };

        // A broken capture file must not fail the run
        let written = match inner.sink.as_mut() {
            Some(sink) => write_line(sink, &invocation),
            None => Ok(()),
        };
        if let Err(e) = written {
            if !inner.sink_failed {
                tracing::warn!(
                    seq,
                    error = %e,
                    "capture file write failed; records may be missing from it"
                );
                inner.sink_failed = true;
            }
        }
        inner.invocations.push(invocation);
        seq
    }

    pub fn invocations(&self) -> Vec<CapturedInvocation> {
        self.inner.lock().invocations.clone()
    }

    /// The last `n` invocations, oldest first
    pub fn last(&self, n: usize) -> Vec<CapturedInvocation> {
        let inner = self.inner.lock();
        let skip = inner.invocations.len().saturating_sub(n);
        inner.invocations[skip..].to_vec()
    }

    pub fn count<F: Fn(&CapturedInvocation) -> bool>(&self, pred: F) -> usize {
        self.inner.lock().invocations.iter().filter(|i| pred(i)).count()
    }

    /// Invocations recorded for a scenario
    pub fn find_by_scenario(&self, name: &str) -> Vec<CapturedInvocation> {
        self.filtered(|i| i.args.scenario.as_deref() == Some(name))
    }

    /// Invocations that exited non-zero, were killed, or never started
    pub fn find_failures(&self) -> Vec<CapturedInvocation> {
        self.filtered(|i| i.outcome.exit_code() != Some(0))
    }

    fn filtered<F: Fn(&CapturedInvocation) -> bool>(&self, pred: F) -> Vec<CapturedInvocation> {
        self.inner
            .lock()
            .invocations
            .iter()
            .filter(|i| pred(i))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().invocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().invocations.is_empty()
    }

    /// Drop in-memory records. Lines already written to the file stay.
    pub fn clear(&self) {
        self.inner.lock().invocations.clear();
    }
}

fn write_line(sink: &mut BufWriter<File>, invocation: &CapturedInvocation) -> std::io::Result<()> {
    let line = serde_json::to_string(invocation).map_err(std::io::Error::other)?;
    writeln!(sink, "{}", line)?;
    sink.flush()
}

impl Default for CaptureLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a JSONL capture file back. Blank lines are skipped.
pub fn read_jsonl(path: &Path) -> std::io::Result<Vec<CapturedInvocation>> {
    let reader = BufReader::new(File::open(path)?);
    let mut invocations = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let invocation = serde_json::from_str(&line)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        invocations.push(invocation);
    }
    Ok(invocations)
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
