//! CLI tests for the pagefold-slots binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_process_writes_transformed_tree() {
    let source = tempdir().expect("temp source dir");
    let output = tempdir().expect("temp output dir");
    fs::write(
        source.path().join("page.md"),
        "Intro\n---\nslot: footer\n---\nFoot\n",
    )
    .expect("fixture write");

    Command::cargo_bin("pagefold-slots")
        .expect("binary should build")
        .arg("process")
        .arg(source.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved:"));

    let rendered =
        fs::read_to_string(output.path().join("page.md")).expect("output file should exist");
    assert!(rendered.contains("slots:"));
    assert!(rendered.contains("name: footer"));
    assert!(rendered.contains("contents: Foot"));
    assert!(rendered.ends_with("---\nIntro"));
}

#[test]
fn test_process_reports_replacement_warning() {
    let source = tempdir().expect("temp source dir");
    let output = tempdir().expect("temp output dir");
    fs::write(
        source.path().join("conflicted.md"),
        "---\nslots:\n  - 1\n---\nBody\n---\nslot: footer\n---\nFoot\n",
    )
    .expect("fixture write");

    Command::cargo_bin("pagefold-slots")
        .expect("binary should build")
        .arg("process")
        .arg(source.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Warnings: 1"))
        .stdout(predicate::str::contains("\"array\""));
}

#[test]
fn test_process_rejects_missing_input_directory() {
    Command::cargo_bin("pagefold-slots")
        .expect("binary should build")
        .args(["process", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_process_with_front_matter_disabled_splits_leading_block() {
    let source = tempdir().expect("temp source dir");
    let output = tempdir().expect("temp output dir");
    fs::write(
        source.path().join("page.md"),
        "---\nslot: header\n---\n<header></header>\n",
    )
    .expect("fixture write");

    Command::cargo_bin("pagefold-slots")
        .expect("binary should build")
        .arg("process")
        .arg(source.path())
        .arg("--output")
        .arg(output.path())
        .arg("--no-front-matter")
        .assert()
        .success();

    let rendered =
        fs::read_to_string(output.path().join("page.md")).expect("output file should exist");
    // With front-matter loading off, the leading block is a slot block.
    assert!(rendered.contains("name: header"));
    assert!(rendered.contains("contents: <header></header>"));
}
