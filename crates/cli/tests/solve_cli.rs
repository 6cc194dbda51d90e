use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn wordsearch() -> Command {
    let mut cmd = Command::cargo_bin("wordsearch").expect("binary");
    cmd.env_remove("WORDSEARCH_PUZZLE").env_remove("RUST_LOG");
    cmd
}

fn run_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("command run");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn demo_puzzle_reports_found_and_missing_words() {
    wordsearch()
        .arg("solve")
        .assert()
        .success()
        .stdout(predicate::str::contains("RUST: (0,0)...(3,0)\n"))
        .stdout(predicate::str::contains("MATCH: (3,6)...(7,2)\n"))
        .stdout(predicate::str::contains("Found 12/13 words (92%)\n"))
        .stdout(predicate::str::contains("Missing: UNSAFE\n"));
}

#[test]
fn json_output_is_machine_readable() {
    let body = run_json(wordsearch().args(["solve", "--format", "json"]));
    assert_eq!(body["found_count"], 12);
    assert_eq!(body["total"], 13);
    assert_eq!(body["percent"], 92);
    assert_eq!(body["missing"][0], "UNSAFE");
    assert_eq!(body["found"][0]["word"], "RUST");
    assert_eq!(body["found"][0]["range"], "(0,0)...(3,0)");
}

#[test]
fn solves_toml_puzzle_from_disk() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("abc.toml");
    fs::write(
        &path,
        r#"
rows = ["ABC", "DEF", "GHI"]
words = ["abc", "aei", "ceg", "xyz"]
"#,
    )
    .unwrap();

    wordsearch()
        .arg("solve")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ABC: (0,0)...(2,0)"))
        .stdout(predicate::str::contains("AEI: (0,0)...(2,2)"))
        .stdout(predicate::str::contains("CEG: (0,2)...(2,0)"))
        .stdout(predicate::str::contains("Found 3/4 words (75%)"))
        .stdout(predicate::str::contains("Missing: XYZ"));
}

#[test]
fn json_puzzle_with_word_override_and_case() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("lower.json");
    fs::write(&path, r#"{"rows":["abc","def","ghi"],"words":["zzz"]}"#).unwrap();

    let body = run_json(
        wordsearch()
            .arg("solve")
            .arg(&path)
            .args(["-w", "gec", "-w", "GEC", "--case", "preserve", "--format", "json"]),
    );
    assert_eq!(body["found_count"], 1);
    assert_eq!(body["found"][0]["word"], "gec");
    assert_eq!(body["missing"][0], "GEC");
}

#[test]
fn puzzle_path_from_environment() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("env.toml");
    fs::write(&path, "rows = [\"DOG\"]\nwords = [\"dog\", \"god\"]\n").unwrap();

    wordsearch()
        .env("WORDSEARCH_PUZZLE", &path)
        .arg("solve")
        .assert()
        .success()
        .stdout(predicate::str::contains("DOG: (0,0)...(2,0)"))
        .stdout(predicate::str::contains("GOD: (0,0)...(2,0)"))
        .stdout(predicate::str::contains("Found 2/2 words (100%)"))
        .stdout(predicate::str::contains("Missing").not());
}

#[test]
fn missing_file_is_an_error() {
    let temp = tempdir().unwrap();
    wordsearch()
        .arg("solve")
        .arg(temp.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read puzzle"));
}

#[test]
fn malformed_puzzle_is_an_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("bad.json");
    fs::write(&path, "{\"words\": [\"abc\"]}").unwrap();
    wordsearch()
        .arg("solve")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON puzzle"));
}

#[test]
fn schema_describes_puzzle_and_report() {
    let body = run_json(wordsearch().arg("schema"));
    assert!(body["puzzle"]["properties"]["rows"].is_object());
    assert!(body["report"]["properties"]["found"].is_object());
}
