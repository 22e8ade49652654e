// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation capture and recording for harness runs.
//!
//! Every process the harness spawns is recorded here, in memory and
//! optionally as JSONL on disk, so a failed suite can be inspected after
//! the fact and expected-output fixtures can be refreshed from real output.

mod duration_serde;
mod interaction;
mod log;

pub use interaction::{CapturedInvocation, CapturedOutcome, InvocationArgs};
pub use log::{read_jsonl, CaptureLog};
