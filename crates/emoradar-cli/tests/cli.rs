//! Integration tests for the `emoradar` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

fn emoradar() -> Command {
    let mut cmd = Command::cargo_bin("emoradar").unwrap_or_else(|e| panic!("binary missing: {e}"));
    cmd.env_remove("EMORADAR_SEED")
        .env_remove("EMORADAR_CATALOG")
        .env_remove("EMORADAR_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output)
        .unwrap_or_else(|e| panic!("stdout is not JSON: {e}: {}", String::from_utf8_lossy(&output)))
}

#[test]
fn analyze_from_stdin_prints_decision_record() {
    let mut cmd = emoradar();
    cmd.args(["analyze", "--seed", "7"]).write_stdin(
        r#"{"frustration": 9, "confusion": 2, "engagement": 6, "confidence": 6}"#,
    );
    let record = stdout_json(&mut cmd);

    let rec = &record["recommendation"];
    assert_eq!(rec["primary_concern"], "high_frustration");
    assert_eq!(rec["urgency_level"], "critical");
    assert_eq!(rec["intervention_type"], "immediate");
    assert_eq!(rec["timing"]["when"], "immediately");
    assert_eq!(rec["recommended_actions"].as_array().map(Vec::len), Some(2));
    assert_eq!(record["engine"], "emoradar-engine");
    assert_eq!(record["reading"]["intervention_priority"], "high");
    assert_eq!(record["phase_emphasis"]["focus"], "skill development");
    assert!(record["ts"].as_str().is_some_and(|ts| ts.contains('T')));
}

#[test]
fn analyze_from_file_with_phase() {
    let path = std::env::temp_dir().join(format!("emoradar_cli_reading_{}.json", std::process::id()));
    fs::write(&path, r#"{"frustration": 3, "confusion": 3, "engagement": 8, "confidence": 7}"#)
        .unwrap_or_else(|e| panic!("failed to write reading: {e}"));

    let mut cmd = emoradar();
    cmd.args(["analyze", "--phase", "review", "--seed", "1", "--input"])
        .arg(&path);
    let record = stdout_json(&mut cmd);

    assert_eq!(record["recommendation"]["primary_concern"], "optimal_state");
    assert_eq!(record["recommendation"]["urgency_level"], "low");
    assert_eq!(record["recommendation"]["learning_phase"], "review");
    assert!(record["phase_emphasis"].is_null());
}

#[test]
fn seed_from_environment_is_reproducible() {
    let input = r#"{"confusion": 7.5}"#;
    let run = || {
        let mut cmd = emoradar();
        cmd.env("EMORADAR_SEED", "99").arg("analyze").write_stdin(input);
        stdout_json(&mut cmd)["recommendation"].clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn analyze_rejects_non_numeric_score() {
    emoradar()
        .arg("analyze")
        .write_stdin(r#"{"engagement": "bored"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid score type for 'engagement'"));
}

#[test]
fn analyze_unreadable_output_falls_back() {
    let mut cmd = emoradar();
    cmd.args(["analyze", "--seed", "0"])
        .write_stdin("The student appears focused but tired.");
    let record = stdout_json(&mut cmd);
    assert_eq!(record["reading"]["emotional_state"], "unknown");
    assert_eq!(record["recommendation"]["primary_concern"], "neutral_state");
}

#[test]
fn timing_table_lookup() {
    let mut cmd = emoradar();
    cmd.args(["timing", "--urgency", "high"]);
    let timing = stdout_json(&mut cmd);
    assert_eq!(timing["when"], "within next 2-3 minutes");
    assert_eq!(timing["frequency"], "monitor every 5 minutes");
}

#[test]
fn timing_unknown_urgency_uses_medium() {
    let mut cmd = emoradar();
    cmd.args(["timing", "--urgency", "extreme"]);
    assert_eq!(stdout_json(&mut cmd)["when"], "at next natural break");
}

#[test]
fn outcome_lookup() {
    let mut cmd = emoradar();
    cmd.args(["outcome", "--intervention", "supportive"]);
    let outcome = stdout_json(&mut cmd);
    assert_eq!(outcome["likelihood_of_success"], "40%");
    assert_eq!(outcome["confidence_level"], "low");

    let mut cmd = emoradar();
    cmd.args(["outcome", "--intervention", "hypnotic"]);
    assert_eq!(stdout_json(&mut cmd)["likelihood_of_success"], "50%");
}

#[test]
fn catalog_export_then_check() {
    let mut cmd = emoradar();
    cmd.args(["catalog", "export"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let path = std::env::temp_dir().join(format!("emoradar_cli_catalog_{}.json", std::process::id()));
    fs::write(&path, &output).unwrap_or_else(|e| panic!("failed to write catalog: {e}"));

    emoradar()
        .args(["catalog", "check", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 5 concerns"));
}

#[test]
fn catalog_check_rejects_duplicate_actions() {
    let path = std::env::temp_dir().join(format!("emoradar_cli_bad_catalog_{}.json", std::process::id()));
    fs::write(
        &path,
        r#"{"concerns": [{"concern": "high_confusion", "strategies": [
            {"intervention": "cognitive", "actions": ["Draw it", "Draw it"]}
        ]}]}"#,
    )
    .unwrap_or_else(|e| panic!("failed to write catalog: {e}"));

    emoradar()
        .args(["catalog", "check", "--path"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate action 'Draw it'"));
}

#[test]
fn unknown_phase_is_a_usage_error() {
    emoradar()
        .args(["analyze", "--phase", "daydreaming"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown learning phase label"));
}

#[test]
fn debug_log_carries_decision_fields() {
    let mut cmd = emoradar();
    cmd.args(["--log-level", "emoradar_engine=debug", "analyze", "--seed", "2"])
        .write_stdin(r#"{"frustration": 9, "confusion": 2, "engagement": 6, "confidence": 6}"#);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "decision concern=high_frustration urgency=critical intervention=immediate phase=practice",
        ));
}
