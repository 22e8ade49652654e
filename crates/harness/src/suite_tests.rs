// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use serde_json::json;

fn parse(toml_str: &str) -> Result<Suite, SuiteError> {
    let config: SuiteConfig = toml::from_str(toml_str)?;
    Suite::from_config(config, Path::new("."))
}

const BASIC: &str = r#"
name = "automation test run"
command = ["sf", "provar", "automation", "test", "run"]

[fixtures.config]
locate = "config\\.json$"

[fixtures.properties]
path = "provardx-properties.json"

[[scenarios]]
name = "missing properties reference"
expect = { stderr = "Error (1): [MISSING_FILE] gone\n\n\n" }

[[scenarios.patches]]
fixture = "config"
unset = ["PROVARDX_PROPERTIES_FILE_PATH"]

[[scenarios]]
name = "missing properties reference as json"
expected_exit_code = 0
expect = { json = { status = 0, result = { success = false } } }

[[scenarios]]
name = "run"

[[scenarios.patches]]
fixture = "properties"
set = { testCase = ["/Test Case 1.testcase"], "environment.testEnvironment" = "Env" }

[scenarios.expect]
stdout = "done\n"
"#;

#[test]
fn test_parse_basic_suite() {
    let suite = parse(BASIC).unwrap();
    assert_eq!(suite.name, "automation test run");
    assert_eq!(suite.scenarios.len(), 3);

    let config = &suite.fixtures["config"];
    assert_eq!(
        config.location,
        FixtureLocation::Located {
            pattern: "config\\.json$".to_string()
        }
    );
    assert_eq!(config.indent, CONFIG_INDENT);
    assert_eq!(suite.fixtures["properties"].indent, PROPERTIES_INDENT);

    let first = &suite.scenarios[0];
    assert!(!first.json);
    assert_eq!(
        first.check,
        OutputCheck::Stderr("Error (1): [MISSING_FILE] gone\n\n\n".to_string())
    );
    assert_eq!(first.patches[0].unset, vec!["PROVARDX_PROPERTIES_FILE_PATH"]);

    let second = &suite.scenarios[1];
    assert!(second.json);
    assert_eq!(second.expected_exit_code, Some(0));
    assert_eq!(
        second.check,
        OutputCheck::Json(json!({"status": 0, "result": {"success": false}}))
    );

    let third = &suite.scenarios[2];
    assert_eq!(
        third.patches[0].set.get("environment.testEnvironment"),
        Some(&json!("Env"))
    );
    assert_eq!(third.check, OutputCheck::Stdout("done\n".to_string()));
}

#[test]
fn test_unknown_field_rejected() {
    let err = parse(
        r#"
        command = ["sf"]
        comand_typo = 1
        "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("comand_typo"), "{err}");
}

#[test]
fn test_empty_command_rejected() {
    let err = parse("command = []").unwrap_err();
    assert!(matches!(err, SuiteError::Validation(_)));
}

#[test]
fn test_unknown_fixture_rejected() {
    let err = parse(
        r#"
        command = ["sf"]
        [[scenarios]]
        name = "s"
        expect = { stdout = "" }
        [[scenarios.patches]]
        fixture = "nope"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, SuiteError::UnknownFixture { .. }), "{err}");
}

#[test]
fn test_fixture_needs_exactly_one_location() {
    for body in [
        "[fixtures.f]\nindent = 2",
        "[fixtures.f]\nlocate = \"a\"\npath = \"b\"",
    ] {
        let err = parse(&format!("command = [\"sf\"]\n{body}")).unwrap_err();
        assert!(matches!(err, SuiteError::Validation(_)), "{err}");
    }
}

#[test]
fn test_invalid_locate_pattern_rejected() {
    let err = parse("command = [\"sf\"]\n[fixtures.f]\nlocate = \"(\"").unwrap_err();
    assert!(err.to_string().contains("invalid pattern"), "{err}");
}

#[test]
fn test_duplicate_scenario_names_rejected() {
    let err = parse(
        r#"
        command = ["sf"]
        [[scenarios]]
        name = "same"
        expect = { stdout = "" }
        [[scenarios]]
        name = "same"
        expect = { stdout = "" }
        "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("duplicate"), "{err}");
}

#[test]
fn test_text_expectation_must_be_string() {
    let err = parse(
        r#"
        command = ["sf"]
        [[scenarios]]
        name = "s"
        expect = { stdout = 3 }
        "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("must be a string"), "{err}");
}

#[test]
fn test_json_expectation_cannot_disable_json() {
    let err = parse(
        r#"
        command = ["sf"]
        [[scenarios]]
        name = "s"
        json = false
        expect = { json = {} }
        "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("json = true"), "{err}");
}

#[test]
fn test_load_with_expected_results_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("expected.json"),
        r#"{"errorMessage": "Error (1): [TEST_RUN_ERROR] x\n\n\n", "errorJson": {"status": 0}}"#,
    )
    .unwrap();
    let suite_path = dir.path().join("suite.toml");
    std::fs::write(
        &suite_path,
        r#"
        command = ["sf"]
        expected = "expected.json"

        [[scenarios]]
        name = "text"
        expect = { stderr = { ref = "errorMessage" } }

        [[scenarios]]
        name = "json"
        expect = { json = { ref = "errorJson" } }
        "#,
    )
    .unwrap();

    let suite = Suite::load(&suite_path).unwrap();
    assert_eq!(
        suite.scenarios[0].check,
        OutputCheck::Stderr("Error (1): [TEST_RUN_ERROR] x\n\n\n".to_string())
    );
    assert_eq!(suite.scenarios[1].check, OutputCheck::Json(json!({"status": 0})));
}

#[test]
fn test_inline_objects_are_literal() {
    let config: SuiteConfig = toml::from_str(
        r#"
        command = ["sf"]

        [[scenarios]]
        name = "fixture key"
        expect = { json = { fixture = "literal" } }

        [[scenarios]]
        name = "wrapped ref"
        expect = { json = { inline = { ref = "literal" } } }

        [[scenarios]]
        name = "ref with extra keys"
        expect = { json = { ref = "literal", other = 1 } }
        "#,
    )
    .unwrap();

    let suite = Suite::from_config(config, Path::new(".")).unwrap();
    assert_eq!(
        suite.scenarios[0].check,
        OutputCheck::Json(json!({"fixture": "literal"}))
    );
    assert_eq!(
        suite.scenarios[1].check,
        OutputCheck::Json(json!({"ref": "literal"}))
    );
    assert_eq!(
        suite.scenarios[2].check,
        OutputCheck::Json(json!({"ref": "literal", "other": 1}))
    );
}

#[test]
fn test_unknown_expected_key() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("expected.json"), "{}").unwrap();
    let suite_path = dir.path().join("suite.toml");
    std::fs::write(
        &suite_path,
        r#"
        command = ["sf"]
        expected = "expected.json"
        [[scenarios]]
        name = "text"
        expect = { stdout = { ref = "absent" } }
        "#,
    )
    .unwrap();

    let err = Suite::load(&suite_path).unwrap_err();
    assert!(matches!(err, SuiteError::UnknownExpected { .. }), "{err}");
}

#[test]
fn test_load_json_suite() {
    let dir = tempfile::tempdir().unwrap();
    let suite_path = dir.path().join("suite.json");
    std::fs::write(
        &suite_path,
        r#"{
            "command": ["sf", "run"],
            "scenarios": [{"name": "s", "expect": {"json": {"status": 0}}}]
        }"#,
    )
    .unwrap();

    let suite = Suite::load(&suite_path).unwrap();
    assert!(suite.scenarios[0].json);
}

#[test]
fn test_load_missing_file() {
    let err = Suite::load(Path::new("/nonexistent/suite.toml")).unwrap_err();
    assert!(matches!(err, SuiteError::Io { .. }));
}

#[test]
fn test_placeholders_expand() {
    let placeholders = Placeholders::new(Path::new("/work"), Path::new("/home/u/.sf"));
    assert_eq!(
        placeholders.expand("${workdir}/ProvarHome"),
        "/work/ProvarHome"
    );
    assert_eq!(
        placeholders.expand("${config_file}"),
        "/home/u/.sf/config.json"
    );
    assert_eq!(placeholders.expand("${unknown}"), "${unknown}");
}

#[test]
fn test_placeholders_set_replaces_value() {
    let mut placeholders = Placeholders::new(Path::new("/work"), Path::new("/sf"));
    placeholders.set("config_file", "/sf/sf-config.json");
    assert_eq!(placeholders.expand("${config_file}"), "/sf/sf-config.json");
}

#[test]
fn test_placeholders_expand_nested_values() {
    let placeholders = Placeholders::default().with("workdir", "/w");
    let value = json!({"paths": ["${workdir}/a", 1], "flag": true});
    assert_eq!(
        placeholders.expand_value(&value),
        json!({"paths": ["/w/a", 1], "flag": true})
    );
}
