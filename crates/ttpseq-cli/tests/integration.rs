#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ttpseq(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ttpseq").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("TTPSEQ_CORPUS")
        .env_remove("TTPSEQ_CONFIG");
    cmd
}

fn write_flow(dir: &TempDir, rel: &str, tactics: &[&str]) {
    let objects: Vec<serde_json::Value> = tactics
        .iter()
        .map(|id| {
            serde_json::json!({
                "template": "action",
                "properties": [["name", "step"], ["tactic_id", id]]
            })
        })
        .collect();
    let doc = serde_json::json!({ "objects": objects });
    let path = dir.path().join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
}

fn stdout_string(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// ---------------------------------------------------------------------------
// ttpseq matrix
// ---------------------------------------------------------------------------

#[test]
fn matrix_renders_both_grids() {
    let dir = TempDir::new().unwrap();
    write_flow(&dir, "corpus/intrusion.afb", &["TA0001", "TA0003"]);

    ttpseq(&dir)
        .arg("matrix")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filtered transitions:"))
        .stdout(predicate::str::contains("All transitions:"))
        .stdout(predicate::str::contains("Transitioned to"))
        .stdout(predicate::str::contains("From TA0001"));
}

#[test]
fn filtered_grid_prints_before_full_grid() {
    let dir = TempDir::new().unwrap();
    write_flow(&dir, "corpus/intrusion.afb", &["TA0001", "TA0003"]);

    let assert = ttpseq(&dir).arg("matrix").assert().success();
    let out = stdout_string(&assert);
    let filtered_at = out.find("Filtered transitions:").unwrap();
    let full_at = out.find("All transitions:").unwrap();
    assert!(filtered_at < full_at);
}

#[test]
fn matrix_flags_restrict_output() {
    let dir = TempDir::new().unwrap();
    write_flow(&dir, "corpus/intrusion.afb", &["TA0001", "TA0003"]);

    ttpseq(&dir)
        .args(["matrix", "--full"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All transitions:"))
        .stdout(predicate::str::contains("Filtered transitions:").not());

    ttpseq(&dir)
        .args(["matrix", "--filtered"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filtered transitions:"))
        .stdout(predicate::str::contains("All transitions:").not());

    ttpseq(&dir)
        .args(["matrix", "--filtered", "--full"])
        .assert()
        .failure();
}

#[test]
fn matrix_json_matches_counting_rules() {
    let dir = TempDir::new().unwrap();
    // TA0001, TA0001 collapse; then TA0002; then back to TA0001.
    write_flow(
        &dir,
        "corpus/intrusion.afb",
        &["TA0001", "TA0001", "TA0002", "TA0001"],
    );

    let assert = ttpseq(&dir).args(["matrix", "--json"]).assert().success();
    let json: serde_json::Value = serde_json::from_str(&stdout_string(&assert)).unwrap();

    assert_eq!(
        json["full"],
        serde_json::json!({ "TA0001": { "TA0002": 1 }, "TA0002": { "TA0001": 1 } })
    );
    // TA0002 is in the default filter set.
    assert_eq!(json["filtered"], serde_json::json!({}));
}

#[test]
fn empty_corpus_prints_headers_only() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("corpus")).unwrap();

    ttpseq(&dir)
        .arg("matrix")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transitioned to"))
        .stdout(predicate::str::contains("From ").not());
}

#[test]
fn missing_corpus_directory_fails() {
    let dir = TempDir::new().unwrap();

    ttpseq(&dir)
        .arg("matrix")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn malformed_document_aborts_with_file_name() {
    let dir = TempDir::new().unwrap();
    write_flow(&dir, "corpus/good.afb", &["TA0001"]);
    std::fs::write(dir.path().join("corpus/broken.afb"), "{ nope").unwrap();

    ttpseq(&dir)
        .arg("matrix")
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.afb"));
}

#[test]
fn non_afb_entries_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_flow(&dir, "corpus/intrusion.afb", &["TA0001", "TA0003"]);
    std::fs::write(dir.path().join("corpus/README.txt"), "not json").unwrap();
    std::fs::create_dir(dir.path().join("corpus/archive")).unwrap();

    ttpseq(&dir).arg("matrix").assert().success();
}

#[test]
fn corpus_flag_overrides_default_directory() {
    let dir = TempDir::new().unwrap();
    write_flow(&dir, "flows/intrusion.afb", &["TA0001", "TA0003"]);

    ttpseq(&dir)
        .args(["--corpus", "flows", "matrix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("From TA0001"));
}

#[test]
fn corpus_env_var_is_honored() {
    let dir = TempDir::new().unwrap();
    write_flow(&dir, "flows/intrusion.afb", &["TA0001", "TA0003"]);

    ttpseq(&dir)
        .env("TTPSEQ_CORPUS", "flows")
        .arg("matrix")
        .assert()
        .success()
        .stdout(predicate::str::contains("From TA0001"));
}

#[test]
fn config_file_overrides_filter_set() {
    let dir = TempDir::new().unwrap();
    write_flow(&dir, "corpus/intrusion.afb", &["TA0043", "TA0001", "TA0002"]);
    std::fs::write(
        dir.path().join("ttpseq.yaml"),
        "version: 1\nfilters:\n  - TA0043\n",
    )
    .unwrap();

    let assert = ttpseq(&dir).args(["matrix", "--json"]).assert().success();
    let json: serde_json::Value = serde_json::from_str(&stdout_string(&assert)).unwrap();

    // With only TA0043 filtered, TA0001 → TA0002 survives the filter.
    assert_eq!(json["filtered"]["TA0001"]["TA0002"], 1);
    assert!(json["filtered"].get("TA0043").is_none());
    assert_eq!(json["full"]["TA0043"]["TA0001"], 1);
}

#[test]
fn config_corpus_key_names_the_directory() {
    let dir = TempDir::new().unwrap();
    write_flow(&dir, "flows/intrusion.afb", &["TA0001", "TA0003"]);
    std::fs::write(dir.path().join("ttpseq.yaml"), "corpus: flows\n").unwrap();

    ttpseq(&dir)
        .arg("matrix")
        .assert()
        .success()
        .stdout(predicate::str::contains("From TA0001"));
}

// ---------------------------------------------------------------------------
// ttpseq freq
// ---------------------------------------------------------------------------

#[test]
fn freq_counts_every_occurrence() {
    let dir = TempDir::new().unwrap();
    write_flow(
        &dir,
        "corpus/one.afb",
        &["TA0001", "TA0001", "TA0002", "TA0001"],
    );
    write_flow(&dir, "corpus/two.afb", &["TA0002"]);

    ttpseq(&dir)
        .arg("freq")
        .assert()
        .success()
        .stdout(predicate::str::contains("TACTIC"))
        .stdout(predicate::str::is_match(r"TA0001\s+3").unwrap())
        .stdout(predicate::str::is_match(r"TA0002\s+2").unwrap());
}

#[test]
fn freq_json_includes_filtered_tactics() {
    let dir = TempDir::new().unwrap();
    write_flow(&dir, "corpus/one.afb", &["TA0043", "TA0001"]);

    let assert = ttpseq(&dir).args(["freq", "--json"]).assert().success();
    let json: serde_json::Value = serde_json::from_str(&stdout_string(&assert)).unwrap();
    assert_eq!(json, serde_json::json!({ "TA0001": 1, "TA0043": 1 }));
}

#[test]
fn runs_are_reproducible() {
    let dir = TempDir::new().unwrap();
    write_flow(&dir, "corpus/a.afb", &["TA0001", "TA0003", "TA0001"]);
    write_flow(&dir, "corpus/b.afb", &["TA0043", "TA0003"]);

    let first = stdout_string(&ttpseq(&dir).args(["matrix", "--json"]).assert().success());
    let second = stdout_string(&ttpseq(&dir).args(["matrix", "--json"]).assert().success());
    assert_eq!(first, second);
}
