// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dot-path access into JSON objects (`environment.testEnvironment`).

use serde_json::{Map, Value};

/// Look up a dot-separated path.
pub fn get_nested<'a>(doc: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = doc.get(first)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Set a dot-separated path, creating intermediate objects.
///
/// A non-object value sitting on an intermediate segment is replaced by an
/// empty object.
pub fn set_nested(doc: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            doc.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let child = doc
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(child) = child {
                set_nested(child, rest, value);
            }
        }
    }
}

/// Remove a dot-separated path. Returns the removed value, if any.
///
/// Parent objects left empty by the removal are kept.
pub fn remove_nested(doc: &mut Map<String, Value>, path: &str) -> Option<Value> {
    match path.split_once('.') {
        None => doc.shift_remove(path),
        Some((head, rest)) => match doc.get_mut(head)? {
            Value::Object(child) => remove_nested(child, rest),
            _ => None,
        },
    }
}

#[cfg(test)]
#[path = "nested_tests.rs"]
mod tests;
