//! Integration tests for the beleg binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn beleg() -> Command {
    Command::cargo_bin("beleg").unwrap()
}

#[test]
fn parse_emits_json_result() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    std::fs::write(&input, "REWE Markt\nBrot 2,50\nSumme: 2,50\n").unwrap();

    beleg()
        .args(["parse", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"merchant_name\": \"REWE Markt\""))
        .stdout(predicate::str::contains("\"total_amount\": \"2.50\""));
}

#[test]
fn parse_text_format_with_scores() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    let scores = dir.path().join("scores.json");
    std::fs::write(&input, "Bäckerei Schmidt\nBrötchen 1,20\n").unwrap();
    std::fs::write(
        &scores,
        r#"[{"text":"full","score":0.9},{"text":"span","score":0.0},{"text":"span","score":0.7}]"#,
    )
    .unwrap();

    beleg()
        .args([
            "parse",
            input.to_str().unwrap(),
            "--scores",
            scores.to_str().unwrap(),
            "--format",
            "text",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bäckerei Schmidt"))
        .stdout(predicate::str::contains("0.80"));
}

#[test]
fn parse_missing_input_fails() {
    beleg()
        .args(["parse", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn batch_writes_one_result_per_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    std::fs::write(dir.path().join("a.txt"), "EDEKA\nMilch 1,20\n").unwrap();
    std::fs::write(dir.path().join("b.txt"), "Kiosk Müller\nCola 2,00\n").unwrap();

    let pattern = format!("{}/*.txt", dir.path().display());

    beleg()
        .args(["batch", &pattern, "--output-dir", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 file(s), 0 failed"));

    assert!(out.join("a.json").exists());
    assert!(out.join("b.json").exists());
}
