//! Integration tests for the workflow-builder CLI
//!
//! These tests run the actual binary and verify output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get the binary to test
fn builder_cmd() -> Command {
    Command::cargo_bin("workflow-builder").unwrap()
}

#[test]
fn test_help_flag() {
    builder_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Visual node editor for composing agent workflow definitions",
        ))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("replay"));
}

// ============================================================================
// generate
// ============================================================================

#[test]
fn test_generate_agent_and_groupchat() {
    builder_cmd()
        .args(["generate", "agent", "groupchat", "--timestamp", "1700000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"workflow_id\": \"workflow-1700000000000\"",
        ))
        .stdout(predicate::str::contains("\"name\": \"new_agent_1\""))
        .stdout(predicate::str::contains("\"new_groupchat_2\""))
        .stdout(predicate::str::contains("\"type\": \"Sequential\""));
}

#[test]
fn test_generate_empty_canvas() {
    let output = builder_cmd().arg("generate").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["agents"], serde_json::json!([]));
    assert_eq!(value["orchestration"]["agents"], serde_json::json!([]));
}

#[test]
fn test_generate_invalid_type() {
    builder_cmd()
        .args(["generate", "agent", "loop"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("WFB-010"))
        .stderr(predicate::str::contains("Fix:"));
}

#[test]
fn test_generate_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("workflow.json");

    builder_cmd()
        .args(["generate", "parallel", "agent", "--timestamp", "7", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("workflow-7"));

    let written = fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["agents"][0]["name"], "new_agent_2");
    assert_eq!(
        value["orchestration"]["agents"],
        serde_json::json!(["new_parallel_1", "new_agent_2"])
    );
}

// ============================================================================
// replay
// ============================================================================

#[test]
fn test_replay_text_surface() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("build.actions");
    fs::write(
        &script,
        r#"
# two nodes then export
add:agent
add:sequential
generate
"#,
    )
    .unwrap();

    builder_cmd()
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("== Agent Workflow Builder =="))
        .stdout(predicate::str::contains("[new_agent_1]"))
        .stdout(predicate::str::contains("[new_sequential_2]"))
        .stdout(predicate::str::contains("\"schema_version\": \"2.0\""));
}

#[test]
fn test_replay_stdin_json_only() {
    let output = builder_cmd()
        .args(["replay", "-", "--json-only"])
        .write_stdin("add:agent\nadd:groupchat\nadd:sequential\nadd:parallel\nclear\nadd:parallel\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["orchestration"]["agents"],
        serde_json::json!(["new_parallel_1"])
    );
    assert_eq!(value["agents"], serde_json::json!([]));
}

#[test]
fn test_replay_clear_shows_placeholders() {
    builder_cmd()
        .args(["replay", "-"])
        .write_stdin("add:agent\ngenerate\nclear\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Click above to add nodes"))
        .stdout(predicate::str::contains("// Generated JSON will appear here"));
}

#[test]
fn test_replay_bad_line() {
    builder_cmd()
        .args(["replay", "-"])
        .write_stdin("add:agent\nremove:1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("add:<nodeType>"));
}

#[test]
fn test_replay_missing_file() {
    builder_cmd()
        .args(["replay", "/nonexistent/build.actions"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("WFB-030"));
}
