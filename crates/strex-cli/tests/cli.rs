#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("strex-core")
        .join("tests")
        .join("fixtures")
}

fn strex_cmd() -> Command {
    Command::cargo_bin("strex").expect("binary should be built")
}

fn temp_results(data: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn default_report_prints_bare_strings() {
    strex_cmd()
        .arg(fixtures_dir().join("static_only.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("STREX RESULTS (version 2.3.0)"))
        .stdout(predicate::str::contains("\nhello\n"))
        .stdout(predicate::str::contains("Disabled"));
}

#[test]
fn verbose_report_prints_offsets() {
    strex_cmd()
        .arg(fixtures_dir().join("full.json"))
        .arg("--verbose")
        .arg("--color")
        .arg("never")
        .assert()
        .success()
        .stdout(predicate::str::contains("0x12345 kernel32.dll"))
        .stdout(predicate::str::contains("FUNCTION at 0x401000 (2)"))
        .stdout(predicate::str::contains("start date"));
}

#[test]
fn color_always_emits_ansi_in_verbose() {
    strex_cmd()
        .arg(fixtures_dir().join("full.json"))
        .arg("-v")
        .arg("--color")
        .arg("always")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));
}

#[test]
fn color_auto_is_plain_when_piped() {
    strex_cmd()
        .arg(fixtures_dir().join("full.json"))
        .arg("-v")
        .env_remove("CLICOLOR_FORCE")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn disable_headers_removes_title() {
    strex_cmd()
        .arg(fixtures_dir().join("static_only.json"))
        .arg("--disable-headers")
        .assert()
        .success()
        .stdout("hello\n\n");
}

#[test]
fn invalid_color_fails_without_output() {
    strex_cmd()
        .arg(fixtures_dir().join("static_only.json"))
        .arg("--color")
        .arg("loud")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unexpected color preference"));
}

#[test]
fn invalid_color_is_checked_before_reading_input() {
    strex_cmd()
        .arg("does-not-exist.json")
        .arg("--color")
        .arg("loud")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected color preference"));
}

#[test]
fn missing_results_file_fails() {
    strex_cmd()
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read results"));
}

#[test]
fn malformed_results_fail() {
    let file = temp_results("{ \"metadata\": 3 }");

    strex_cmd()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid results document"));
}

#[test]
fn json_output_round_trips_document() {
    let output = strex_cmd()
        .arg(fixtures_dir().join("full.json"))
        .arg("--format")
        .arg("json")
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");

    assert_eq!(parsed["metadata"]["language"], "go");
    assert_eq!(parsed["strings"]["decoded_strings"][0]["address_type"], "STACK");
    assert_eq!(parsed["strings"]["static_strings"][2]["encoding"], "UTF-16LE");
}

#[test]
fn out_writes_report_to_file() {
    let out = NamedTempFile::new().unwrap();

    strex_cmd()
        .arg(fixtures_dir().join("static_only.json"))
        .arg("--out")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(out.path()).unwrap();
    assert!(written.contains("STREX STATIC STRINGS (1)"));
}

#[test]
fn hostile_strings_are_escaped() {
    strex_cmd()
        .arg(fixtures_dir().join("full.json"))
        .arg("--color")
        .arg("never")
        .assert()
        .success()
        .stdout(predicate::str::contains("\\x1b[2J"))
        .stdout(predicate::str::contains("\x1b").not());
}
