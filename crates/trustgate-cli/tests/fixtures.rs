//! End-to-end CLI integration tests using test fixtures.
//!
//! Each fixture in `tests/fixtures/` contains:
//! - A source.json and target.json entity pair
//! - An expected.decision.json with expected output (timestamps use the
//!   "__TIMESTAMP__" placeholder, tool version uses "__VERSION__")
//!
//! These tests run the CLI against each fixture and verify:
//! 1. Exit code matches expected (0=allowed, 2=rejected)
//! 2. JSON output matches expected (ignoring timestamps and version)

use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;
use trustgate_test_util::normalize_nondeterministic;

/// Helper to get a Command for the trustgate binary.
/// Wraps the deprecated cargo_bin to centralize the deprecation warning.
#[allow(deprecated)]
fn trustgate_cmd() -> Command {
    Command::cargo_bin("trustgate").expect("trustgate binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("trustgate-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// Run the CLI verify command against a fixture and return the JSON decision.
fn run_verify_on_fixture(fixture_name: &str) -> (i32, Value) {
    let fixture_path = fixtures_dir().join(fixture_name);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let decision_path = temp_dir.path().join("decision.json");

    let output = trustgate_cmd()
        .arg("verify")
        .arg(fixture_path.join("source.json"))
        .arg(fixture_path.join("target.json"))
        .arg("--decision-out")
        .arg(&decision_path)
        .output()
        .expect("Failed to run command");

    let exit_code = output.status.code().unwrap_or(-1);

    let decision_content =
        std::fs::read_to_string(&decision_path).expect("Failed to read decision");
    let decision: Value =
        serde_json::from_str(&decision_content).expect("Failed to parse decision JSON");

    (exit_code, decision)
}

/// Load and parse the expected decision for a fixture.
fn load_expected_decision(fixture_name: &str) -> Value {
    let expected_path = fixtures_dir()
        .join(fixture_name)
        .join("expected.decision.json");
    let content =
        std::fs::read_to_string(&expected_path).expect("Failed to read expected decision");
    serde_json::from_str(&content).expect("Failed to parse expected decision")
}

/// Compare two JSON values, ignoring timestamp and version differences.
fn assert_decisions_match(actual: Value, expected: Value, fixture_name: &str) {
    let actual_normalized = normalize_nondeterministic(actual);
    let expected_normalized = normalize_nondeterministic(expected);

    assert_eq!(
        actual_normalized,
        expected_normalized,
        "Decision mismatch for fixture '{}'.\n\nActual:\n{}\n\nExpected:\n{}",
        fixture_name,
        serde_json::to_string_pretty(&actual_normalized).unwrap(),
        serde_json::to_string_pretty(&expected_normalized).unwrap()
    );
}

// ============================================================================
// Fixture tests
// ============================================================================

#[test]
fn fixture_accepted_passes() {
    let (exit_code, decision) = run_verify_on_fixture("accepted");
    let expected = load_expected_decision("accepted");

    assert_eq!(exit_code, 0, "accepted fixture should exit with 0 (allowed)");
    assert_decisions_match(decision, expected, "accepted");
}

#[test]
fn fixture_rejected_esg_fails() {
    let (exit_code, decision) = run_verify_on_fixture("rejected_esg");
    let expected = load_expected_decision("rejected_esg");

    assert_eq!(
        exit_code, 2,
        "rejected_esg fixture should exit with 2 (rejected)"
    );
    assert_decisions_match(decision, expected, "rejected_esg");
}

#[test]
fn fixture_unverified_fails() {
    let (exit_code, decision) = run_verify_on_fixture("unverified");
    let expected = load_expected_decision("unverified");

    assert_eq!(
        exit_code, 2,
        "unverified fixture should exit with 2 (rejected)"
    );
    assert_decisions_match(decision, expected, "unverified");
}

#[test]
fn fixture_default_policies_passes() {
    let (exit_code, decision) = run_verify_on_fixture("default_policies");
    let expected = load_expected_decision("default_policies");

    assert_eq!(
        exit_code, 0,
        "default_policies fixture should exit with 0 (allowed)"
    );
    assert_decisions_match(decision, expected, "default_policies");
}

#[test]
fn fixture_screened_credential_passes() {
    let (exit_code, decision) = run_verify_on_fixture("screened_credential");
    let expected = load_expected_decision("screened_credential");

    assert_eq!(
        exit_code, 0,
        "screened_credential fixture should exit with 0 (allowed)"
    );
    assert_decisions_match(decision, expected, "screened_credential");
}

// ============================================================================
// Artifact tests
// ============================================================================

#[test]
fn verify_writes_markdown_and_audit_log() {
    let fixture_path = fixtures_dir().join("accepted");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let decision_path = temp_dir.path().join("decision.json");
    let markdown_path = temp_dir.path().join("decision.md");
    let audit_path = temp_dir.path().join("audit.jsonl");

    trustgate_cmd()
        .arg("verify")
        .arg(fixture_path.join("source.json"))
        .arg(fixture_path.join("target.json"))
        .arg("--decision-out")
        .arg(&decision_path)
        .arg("--write-markdown")
        .arg("--markdown-out")
        .arg(&markdown_path)
        .arg("--audit-log")
        .arg(&audit_path)
        .assert()
        .success();

    let markdown = std::fs::read_to_string(&markdown_path).expect("read markdown");
    assert!(markdown.contains("Verdict: **ALLOWED**"));

    let audit = std::fs::read_to_string(&audit_path).expect("read audit log");
    let record: Value = serde_json::from_str(audit.lines().next().expect("one line"))
        .expect("parse audit record");
    assert_eq!(record["envelope"]["decision"]["allowed"], Value::Bool(true));
    assert_eq!(record["fingerprint"].as_str().map(str::len), Some(64));
}

#[test]
fn md_renders_existing_decision() {
    let fixture_path = fixtures_dir().join("rejected_esg");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let decision_path = temp_dir.path().join("decision.json");

    trustgate_cmd()
        .arg("verify")
        .arg(fixture_path.join("source.json"))
        .arg(fixture_path.join("target.json"))
        .arg("--decision-out")
        .arg(&decision_path)
        .assert()
        .code(2);

    let output = trustgate_cmd()
        .arg("md")
        .arg("--decision")
        .arg(&decision_path)
        .output()
        .expect("run md");
    assert!(output.status.success());
    let markdown = String::from_utf8_lossy(&output.stdout);
    assert!(markdown.contains("Verdict: **REJECTED**"));
}

#[test]
fn missing_entity_file_writes_error_decision() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let decision_path = temp_dir.path().join("decision.json");

    trustgate_cmd()
        .arg("verify")
        .arg(temp_dir.path().join("nope.json"))
        .arg(temp_dir.path().join("also-nope.json"))
        .arg("--decision-out")
        .arg(&decision_path)
        .assert()
        .code(1);

    let decision: Value = serde_json::from_str(
        &std::fs::read_to_string(&decision_path).expect("read error decision"),
    )
    .expect("parse error decision");

    assert_eq!(decision["decision"]["allowed"], Value::Bool(false));
    assert_eq!(
        decision["decision"]["policies_failed"],
        serde_json::json!(["system_error"])
    );
}
