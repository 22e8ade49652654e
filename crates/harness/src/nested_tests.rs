// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use serde_json::json;
use yare::parameterized;

fn doc(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn test_set_top_level() {
    let mut d = doc(json!({}));
    set_nested(&mut d, "provarHome", json!("/opt/provar"));
    assert_eq!(Value::Object(d), json!({"provarHome": "/opt/provar"}));
}

#[test]
fn test_set_creates_intermediate_objects() {
    let mut d = doc(json!({"testCase": []}));
    set_nested(&mut d, "environment.testEnvironment", json!("Env"));
    assert_eq!(
        Value::Object(d),
        json!({"testCase": [], "environment": {"testEnvironment": "Env"}})
    );
}

#[test]
fn test_set_keeps_sibling_keys() {
    let mut d = doc(json!({"environment": {"webBrowser": "Chrome"}}));
    set_nested(&mut d, "environment.testEnvironment", json!("Env"));
    assert_eq!(
        Value::Object(d),
        json!({"environment": {"webBrowser": "Chrome", "testEnvironment": "Env"}})
    );
}

#[test]
fn test_set_replaces_scalar_parent() {
    let mut d = doc(json!({"environment": "flat"}));
    set_nested(&mut d, "environment.testEnvironment", json!("Env"));
    assert_eq!(
        Value::Object(d),
        json!({"environment": {"testEnvironment": "Env"}})
    );
}

#[parameterized(
    top = { "a", Some(json!(1)) },
    nested = { "b.c", Some(json!(true)) },
    missing_leaf = { "b.x", None },
    through_scalar = { "a.b", None },
    missing_root = { "z", None },
)]
fn test_get_nested(path: &str, expected: Option<Value>) {
    let d = doc(json!({"a": 1, "b": {"c": true}}));
    assert_eq!(get_nested(&d, path).cloned(), expected);
}

#[test]
fn test_remove_top_level() {
    let mut d = doc(json!({"PROVARDX_PROPERTIES_FILE_PATH": "/x", "keep": 1}));
    assert_eq!(
        remove_nested(&mut d, "PROVARDX_PROPERTIES_FILE_PATH"),
        Some(json!("/x"))
    );
    assert_eq!(Value::Object(d), json!({"keep": 1}));
}

#[test]
fn test_remove_absent_is_noop() {
    let mut d = doc(json!({"keep": 1}));
    assert_eq!(remove_nested(&mut d, "PROVARDX_PROPERTIES_FILE_PATH"), None);
    assert_eq!(remove_nested(&mut d, "keep.inner"), None);
    assert_eq!(Value::Object(d), json!({"keep": 1}));
}

#[test]
fn test_remove_nested_keeps_parent() {
    let mut d = doc(json!({"environment": {"testEnvironment": "Env"}}));
    remove_nested(&mut d, "environment.testEnvironment");
    assert_eq!(Value::Object(d), json!({"environment": {}}));
}

#[test]
fn test_remove_preserves_order_of_remaining_keys() {
    let mut d = doc(json!({"c": 1, "b": 2, "a": 3}));
    remove_nested(&mut d, "b");
    let keys: Vec<_> = d.keys().cloned().collect();
    assert_eq!(keys, vec!["c", "a"]);
}
