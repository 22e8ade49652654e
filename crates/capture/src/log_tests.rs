// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use rstest::rstest;
use std::thread;
use std::time::Duration;

fn make_args(scenario: Option<&str>) -> InvocationArgs {
    InvocationArgs {
        scenario: scenario.map(|s| s.to_string()),
        program: "sf".to_string(),
        args: vec![
            "provar".to_string(),
            "automation".to_string(),
            "test".to_string(),
            "run".to_string(),
        ],
        cwd: None,
        json: false,
    }
}

fn exited(code: i32, stdout: &str) -> CapturedOutcome {
    CapturedOutcome::Exited {
        exit_code: Some(code),
        stdout: stdout.to_string(),
        stderr: String::new(),
        duration: Duration::from_millis(5),
    }
}

#[test]
fn test_record_and_retrieve() {
    let log = CaptureLog::new();

    log.record(make_args(Some("missing file")), exited(1, ""));

    assert_eq!(log.len(), 1);
    let invocations = log.invocations();
    assert_eq!(invocations[0].seq, 0);
    assert_eq!(
        invocations[0].args.scenario,
        Some("missing file".to_string())
    );
}

#[rstest]
#[case(1, 1)]
#[case(5, 2)]
#[case(10, 5)]
#[case(3, 10)]
fn test_last_n(#[case] total: usize, #[case] n: usize) {
    let log = CaptureLog::new();

    for i in 0..total {
        log.record(
            make_args(Some(&format!("scenario {}", i))),
            exited(0, &format!("out {}", i)),
        );
    }

    let last = log.last(n);
    let expected_len = n.min(total);
    assert_eq!(last.len(), expected_len);

    if expected_len > 0 {
        let start = total.saturating_sub(n);
        for (i, invocation) in last.iter().enumerate() {
            assert_eq!(
                invocation.args.scenario,
                Some(format!("scenario {}", start + i))
            );
        }
    }
}

#[test]
fn test_find_by_scenario() {
    let log = CaptureLog::new();

    log.record(make_args(Some("run")), exited(0, "ok"));
    log.record(make_args(Some("run json")), exited(0, "{}"));
    log.record(make_args(None), exited(0, "ok"));
    log.record(make_args(Some("run")), exited(1, ""));

    assert_eq!(log.find_by_scenario("run").len(), 2);
    assert!(log.find_by_scenario("absent").is_empty());
}

#[test]
fn test_find_failures() {
    let log = CaptureLog::new();

    log.record(make_args(None), exited(0, "ok"));
    log.record(make_args(None), exited(1, ""));
    log.record(
        make_args(None),
        CapturedOutcome::SpawnFailed {
            message: "No such file or directory".to_string(),
        },
    );
    log.record(
        make_args(None),
        CapturedOutcome::Exited {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::ZERO,
        },
    );

    assert_eq!(log.find_failures().len(), 3);
    assert_eq!(
        log.count(|i| matches!(i.outcome, CapturedOutcome::SpawnFailed { .. })),
        1
    );
}

#[test]
fn test_clear() {
    let log = CaptureLog::new();

    log.record(make_args(None), exited(0, "ok"));

    assert!(!log.is_empty());
    log.clear();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
}

#[test]
fn test_default() {
    let log = CaptureLog::default();
    assert!(log.is_empty());
}

#[test]
fn test_clone_shares_state() {
    let log1 = CaptureLog::new();
    let log2 = log1.clone();

    log1.record(make_args(Some("from log1")), exited(0, "ok"));
    assert_eq!(log1.len(), 1);
    assert_eq!(log2.len(), 1);

    log2.record(make_args(Some("from log2")), exited(0, "ok"));
    assert_eq!(log1.len(), 2);
    assert_eq!(log2.len(), 2);
}

#[test]
fn test_file_capture() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capture.jsonl");

    {
        let log = CaptureLog::with_file(&path).unwrap();
        log.record(make_args(Some("first")), exited(0, "one"));
        log.record(make_args(Some("second")), exited(1, "two"));
    }

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let i1: CapturedInvocation = serde_json::from_str(lines[0]).unwrap();
    let i2: CapturedInvocation = serde_json::from_str(lines[1]).unwrap();

    assert_eq!(i1.args.scenario, Some("first".to_string()));
    assert_eq!(i2.outcome.exit_code(), Some(1));
}

#[test]
fn test_file_capture_appends_and_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capture.jsonl");

    CaptureLog::with_file(&path)
        .unwrap()
        .record(make_args(Some("first run")), exited(0, "one"));
    let second = CaptureLog::with_file(&path).unwrap();
    assert_eq!(second.record(make_args(Some("second run")), exited(1, "")), 0);

    let read = read_jsonl(&path).unwrap();
    assert_eq!(read.len(), 2);
    assert_eq!(read[0].args.scenario.as_deref(), Some("first run"));
    assert_eq!(read[1].args.scenario.as_deref(), Some("second run"));
    assert_eq!(second.len(), 1);
}

#[test]
fn test_read_jsonl_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capture.jsonl");
    std::fs::write(&path, "\nnot json\n").unwrap();

    let err = read_jsonl(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn test_file_capture_invalid_path() {
    let result = CaptureLog::with_file(std::path::Path::new("/nonexistent/dir/file.jsonl"));
    assert!(result.is_err());
}

#[test]
fn test_thread_safety() {
    let log = CaptureLog::new();
    let log_clone = log.clone();

    let handle = thread::spawn(move || {
        for _ in 0..100 {
            log_clone.record(make_args(Some("worker")), exited(0, "ok"));
        }
    });

    for _ in 0..100 {
        log.record(make_args(Some("main")), exited(0, "ok"));
    }

    handle.join().unwrap();

    assert_eq!(log.len(), 200);
}

#[test]
fn test_sequence_numbers() {
    let log = CaptureLog::new();

    for _ in 0..5 {
        log.record(make_args(None), exited(0, "ok"));
    }

    for (i, invocation) in log.invocations().iter().enumerate() {
        assert_eq!(invocation.seq, i as u64);
    }
}

proptest! {
    #[test]
    fn len_equals_record_count(count in 0usize..100) {
        let log = CaptureLog::new();
        for _ in 0..count {
            log.record(make_args(None), exited(0, "ok"));
        }
        prop_assert_eq!(log.len(), count);
    }

    #[test]
    fn find_failures_consistent(
        passing in 0usize..20,
        failing in 0usize..20,
    ) {
        let log = CaptureLog::new();

        for _ in 0..passing {
            log.record(make_args(None), exited(0, "ok"));
        }
        for _ in 0..failing {
            log.record(make_args(None), exited(1, ""));
        }

        prop_assert_eq!(log.find_failures().len(), failing);
        prop_assert_eq!(log.len(), passing + failing);
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_failed_file_writes_keep_records_in_memory() {
    // Every write to /dev/full fails with ENOSPC
    let log = CaptureLog::with_file(std::path::Path::new("/dev/full")).unwrap();

    log.record(make_args(Some("first")), exited(0, "one"));
    assert!(log.inner.lock().sink_failed);
    log.record(make_args(Some("second")), exited(0, "two"));

    assert_eq!(log.len(), 2);
    assert!(log.inner.lock().sink_failed);
}
