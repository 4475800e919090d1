//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

const NOTICE: &str = "\
Under the Extended Producer Responsibility regime, producers must register \
with the national authority before placing packaging on the market. \
Pursuant to the regulation, producers shall submit annual reports by March 31.

Failure to comply results in penalties. Compliance teams need to review \
recycling targets and liability provisions.";

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Run a subcommand with `--json` on `path` and parse the output.
fn json_output(args: &[&str]) -> Value {
    let output = cmd().args(args).arg("--json").output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("keywords"));
}

#[test]
fn no_arguments_prints_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn long_help_lists_environment() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EPR_COMMS_LOG_DIR"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let json = json_output(&["info"]);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["config"]["lexicon"]["process_terms"], 10);
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

#[test]
fn unknown_color_rejected() {
    cmd()
        .args(["--color", "sometimes", "info"])
        .assert()
        .failure();
}

// =============================================================================
// Report
// =============================================================================

#[test]
fn report_json_has_all_sections() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "notice.txt", NOTICE);
    let json = json_output(&["report", file.to_str().unwrap()]);

    assert!(json["implementation_priority"].is_string());
    assert!(json["strategic_recommendations"]["primary_message_focus"].is_string());
    assert!(json["strategic_recommendations"]["channel_strategy"]["primary"].is_array());
    assert!(json["analysis_summary"]["complexity_analysis"]["total_words"].is_u64());
    assert!(json["analysis_summary"]["key_concepts"]["epr_concepts"]["high_priority"].is_array());
    assert!(json["analysis_summary"]["translation_readiness"]["translation_difficulty"].is_string());
}

#[test]
fn report_json_leads_with_compliance() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "notice.txt", NOTICE);
    let json = json_output(&["report", file.to_str().unwrap()]);

    assert_eq!(
        json["strategic_recommendations"]["primary_message_focus"],
        "Compliance importance and consequences"
    );
    let priorities = &json["analysis_summary"]["key_concepts"]["communication_priorities"];
    assert_eq!(priorities[0], "Compliance obligations and liability");
    assert_eq!(priorities[1], "Required seller actions");
}

#[test]
fn report_text_shows_priority_and_channels() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "notice.txt", NOTICE);
    cmd()
        .args(["--color", "never", "report", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Priority:"))
        .stdout(predicate::str::contains("Channels:"))
        .stdout(predicate::str::contains("primary:"));
}

#[test]
fn report_missing_file_fails() {
    cmd()
        .args(["report", "/nonexistent/notice.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Complexity
// =============================================================================

#[test]
fn complexity_of_plain_text() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "plain.txt", "Sellers pay a fee. The fee is small.");
    let json = json_output(&["complexity", file.to_str().unwrap()]);

    assert_eq!(json["total_words"], 8);
    assert_eq!(json["total_sentences"], 2);
    assert_eq!(json["readability_level"], "Very Easy (5th grade level)");
    assert_eq!(json["recommended_audience"], "All seller segments");
    assert_eq!(json["legal_complexity_ratio"], 0.0);
}

#[test]
fn complexity_reads_stdin() {
    let output = cmd()
        .args(["complexity", "-", "--json"])
        .write_stdin("Producers must register. Fees are due.")
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_sentences"], 2);
}

#[test]
fn empty_input_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "empty.txt", "");
    let json = json_output(&["complexity", file.to_str().unwrap()]);
    assert_eq!(json["total_words"], 0);
    assert_eq!(json["avg_words_per_sentence"], 0.0);
}

// =============================================================================
// Concepts
// =============================================================================

#[test]
fn concepts_json_lists_actions_and_deadlines() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "notice.txt", NOTICE);
    let json = json_output(&["concepts", file.to_str().unwrap()]);

    let actions = json["action_items"].as_array().unwrap();
    assert!(actions.contains(&Value::from("must register")));
    assert!(actions.contains(&Value::from("shall submit")));
    assert!(actions.contains(&Value::from("need to review")));
    assert_eq!(json["critical_deadlines"][0], "by March 31");
}

#[test]
fn concepts_top_limits_phrases() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "notice.txt", NOTICE);
    let json = json_output(&["concepts", file.to_str().unwrap(), "--top", "2"]);
    assert_eq!(json["key_phrases"].as_array().unwrap().len(), 2);
}

#[test]
fn concepts_default_returns_ten_phrases() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "notice.txt", NOTICE);
    let json = json_output(&["concepts", file.to_str().unwrap()]);
    assert_eq!(json["key_phrases"].as_array().unwrap().len(), 10);
}

#[test]
fn markdown_code_blocks_are_ignored() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        &tmp,
        "guide.md",
        "# Guide\n\n```\nyou must register\n```\n\nSellers shall comply.\n",
    );
    let json = json_output(&["concepts", file.to_str().unwrap()]);
    assert_eq!(json["action_items"], serde_json::json!(["shall comply"]));
}

// =============================================================================
// Translation
// =============================================================================

#[test]
fn translation_reports_cultural_terms() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        &tmp,
        "notice.txt",
        "Sellers must act in good faith and exercise due diligence.",
    );
    let json = json_output(&["translation", file.to_str().unwrap()]);
    assert_eq!(json["cultural_adaptation_needed"], true);
    assert_eq!(
        json["cultural_terms_found"],
        serde_json::json!(["due diligence", "good faith"])
    );
}

// =============================================================================
// Keywords
// =============================================================================

#[test]
fn keywords_match_per_paragraph() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        &tmp,
        "notice.txt",
        "Producers must register.\n\nCompliance with EPR rules.",
    );
    let json = json_output(&["keywords", file.to_str().unwrap()]);

    assert_eq!(json[0]["segments"], 2);
    assert_eq!(
        json[0]["matches"],
        serde_json::json!([
            {"term": "register", "tier": "process_terms"},
            {"term": "epr", "tier": "high_priority"},
            {"term": "compliance", "tier": "high_priority"},
        ])
    );
}

#[test]
fn keywords_tier_filter() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(
        &tmp,
        "notice.txt",
        "Producers must register.\n\nCompliance with EPR rules.",
    );
    let json = json_output(&["keywords", file.to_str().unwrap(), "--tier", "process"]);
    assert_eq!(
        json[0]["matches"],
        serde_json::json!([{"term": "register", "tier": "process_terms"}])
    );
}

#[test]
fn keywords_text_output() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(&tmp, "notice.txt", "Submit evidence of compliance.");
    cmd()
        .args(["--color", "never", "keywords", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("high_priority"))
        .stdout(predicate::str::contains("evidence"));
}

#[test]
fn keywords_requires_a_file() {
    cmd().arg("keywords").assert().failure();
}

#[test]
fn keywords_accepts_multiple_files() {
    let tmp = TempDir::new().unwrap();
    let a = write_file(&tmp, "a.txt", "Penalties apply.");
    let b = write_file(&tmp, "b.txt", "Nothing relevant here.");
    let json = json_output(&["keywords", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1]["matches"], serde_json::json!([]));
}

#[test]
fn keywords_split_crlf_paragraphs() {
    let tmp = TempDir::new().unwrap();
    let notice = write_file(
        &tmp,
        "notice.txt",
        "Producers must register.\r\n\r\nPenalties apply.\r\n",
    );
    let json = json_output(&["keywords", notice.to_str().unwrap()]);
    assert_eq!(json[0]["segments"], 2);
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn schema_describes_report_json() {
    let json = json_output(&["schema"]);
    let properties = json["properties"].as_object().unwrap();
    assert!(properties.contains_key("implementation_priority"));
    assert!(properties.contains_key("analysis_summary"));
}

#[test]
fn schema_for_complexity() {
    let json = json_output(&["schema", "complexity"]);
    assert!(json["properties"]["flesch_reading_ease"].is_object());
}

#[test]
fn schema_rejects_unknown_kind() {
    cmd()
        .args(["schema", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
