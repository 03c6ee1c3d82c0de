//! CLI tests using assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn assertlint() -> Command {
    Command::cargo_bin("assertlint").unwrap()
}

#[test]
fn flags_fixture_directory_with_exit_code_1() {
    assertlint()
        .arg("tests/fixtures")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Too many assertions (4). Maximum allowed is 3.",
        ))
        .stdout(predicate::str::contains(
            "Test without assertions is not allowed.",
        ));
}

#[test]
fn clean_file_exits_zero() {
    assertlint()
        .arg("tests/fixtures/clean.test.js")
        .assert()
        .success()
        .stdout(predicate::str::contains("no assertion problems"));
}

#[test]
fn json_output_is_machine_readable() {
    let output = assertlint()
        .args(["tests/fixtures/too-many.test.js", "--json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(value["filePath"]
        .as_str()
        .unwrap()
        .ends_with("too-many.test.js"));
    assert_eq!(
        value["diagnostics"][0]["message"],
        "Too many assertions (4). Maximum allowed is 3."
    );
}

#[test]
fn limit_flag_overrides_default() {
    assertlint()
        .args(["tests/fixtures/too-many.test.js", "--limit", "4"])
        .assert()
        .success();
}

#[test]
fn missing_path_exits_with_operational_error() {
    assertlint()
        .arg("does/not/exist")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Path does not exist").or(predicate::str::contains("No test files found")));
}

#[test]
fn config_file_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".assertlintrc.json"),
        r#"{ "skipSkipped": true }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("skipped.test.js"),
        fs::read_to_string("tests/fixtures/skipped.test.js").unwrap(),
    )
    .unwrap();

    assertlint().arg(dir.path()).assert().success();
}

#[test]
fn unknown_config_key_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".assertlintrc.json"),
        r#"{ "assertLimit": 3 }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("clean.test.js"),
        fs::read_to_string("tests/fixtures/clean.test.js").unwrap(),
    )
    .unwrap();

    assertlint()
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid JSON in config"));
}

#[test]
fn quiet_mode_still_names_files_that_fail_to_check() {
    let dir = tempfile::tempdir().unwrap();
    // Invalid UTF-8 makes the read step fail for this file
    fs::write(dir.path().join("bad.test.js"), [0xffu8, 0xfe, 0x00, 0xff]).unwrap();

    assertlint()
        .args([dir.path().to_str().unwrap(), "--quiet"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bad.test.js"));
}

#[test]
fn ignore_globs_skip_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".assertlintrc.json"),
        r#"{ "ignore": ["**/legacy/**"] }"#,
    )
    .unwrap();
    let legacy = dir.path().join("legacy");
    fs::create_dir_all(&legacy).unwrap();
    fs::write(
        legacy.join("old.test.js"),
        "it('empty', () => {});",
    )
    .unwrap();
    fs::write(
        dir.path().join("current.test.js"),
        "it('adds', () => { expect(1 + 1).toBe(2); });",
    )
    .unwrap();

    assertlint().arg(dir.path()).assert().success();
}
