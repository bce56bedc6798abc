//! Integration tests for the nl2sql-eval binary.

use std::io::Write;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::{Builder, NamedTempFile};

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("nl2sql-eval");
    cmd.env_remove("NL2SQL_EVAL_LIMIT")
        .env_remove("NL2SQL_EVAL_PREVIEW")
        .env_remove("NL2SQL_EVAL_MIN_MATCH_RATE");
    cmd
}

fn dataset() -> NamedTempFile {
    let mut file = Builder::new().suffix(".jsonl").tempfile().unwrap();
    writeln!(
        file,
        r#"{{"question": "Which Nolan films came out after 2010?", "predicted": "select title from movies where year>2010 and director='Christopher Nolan'", "expected": "SELECT Title FROM movies WHERE Director = \"Christopher Nolan\" AND Year > 2010"}}"#
    )
    .unwrap();
    writeln!(
        file,
        r#"{{"predicted": "SELECT * FROM t WHERE age > 25", "expected": "SELECT * FROM t WHERE age < 25"}}"#
    )
    .unwrap();
    file
}

#[test]
fn test_canonicalize_arguments() {
    cmd()
        .args([
            "canonicalize",
            "SELECT  Name FROM t WHERE c = 1 AND b = 2",
            r#"SELECT "2010/ 11" FROM t"#
        ])
        .assert()
        .success()
        .stdout("select name from t where b = 2 and c = 1\nselect 2010_11 from t\n");
}

#[test]
fn test_canonicalize_stdin() {
    cmd()
        .args(["canonicalize", "-i", "-"])
        .write_stdin("SELECT * FROM t WHERE name = 'Bob'\n\nselect * from t where name = \"Bob\"\n")
        .assert()
        .success()
        .stdout("select * from t where name = bob\nselect * from t where name = bob\n");
}

#[test]
fn test_canonicalize_trace() {
    cmd()
        .args(["canonicalize", "--trace", "--no-color", "SELECT 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("case-and-trim"))
        .stdout(predicate::str::contains("condition-ordering"));
}

#[test]
fn test_canonicalize_nothing_given() {
    cmd()
        .arg("canonicalize")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_compare_match() {
    cmd()
        .args([
            "compare",
            "--no-color",
            "select title from movies where year>2010 and director='Christopher Nolan'",
            r#"SELECT Title FROM movies WHERE Director = "Christopher Nolan" AND Year > 2010"#
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Exact match: yes"));
}

#[test]
fn test_compare_mismatch() {
    cmd()
        .args([
            "compare",
            "--no-color",
            "SELECT * FROM t WHERE age > 25",
            "SELECT * FROM t WHERE age < 25"
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Exact match: no"));
}

#[test]
fn test_compare_with_table() {
    let mut table = NamedTempFile::new().unwrap();
    writeln!(
        table,
        r#"{{"name": "players", "header": ["Player", "School/Club Team"], "types": ["text", "text"]}}"#
    )
    .unwrap();

    cmd()
        .args([
            "compare",
            "-t",
            table.path().to_str().unwrap(),
            "-f",
            "json",
            "SELECT Player FROM players WHERE School_Club_Team = 'Butler'",
            r#"SELECT Player FROM players WHERE School/Club Team = "Butler""#
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"exact_match\": true"));
}

#[test]
fn test_evaluate_text() {
    let data = dataset();
    cmd()
        .args(["evaluate", "-d", data.path().to_str().unwrap(), "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Question: Which Nolan films came out after 2010?"))
        .stdout(predicate::str::contains("Exact Match: 50.00% (1/2)"))
        .stdout(predicate::str::contains("Total Examples: 2"));
}

#[test]
fn test_evaluate_json() {
    let data = dataset();
    cmd()
        .args(["evaluate", "-d", data.path().to_str().unwrap(), "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"exact_matches\": 1"))
        .stdout(predicate::str::contains("\"total\": 2"));
}

#[test]
fn test_evaluate_yaml_limit() {
    let data = dataset();
    cmd()
        .args([
            "evaluate",
            "-d",
            data.path().to_str().unwrap(),
            "-f",
            "yaml",
            "--limit",
            "1"
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("total: 1"));
}

#[test]
fn test_evaluate_below_min_match_rate() {
    let data = dataset();
    cmd()
        .args([
            "evaluate",
            "-d",
            data.path().to_str().unwrap(),
            "--min-match-rate",
            "75",
            "--no-color"
        ])
        .assert()
        .code(1);
}

#[test]
fn test_evaluate_min_match_rate_from_env() {
    let data = dataset();
    cmd()
        .env("NL2SQL_EVAL_MIN_MATCH_RATE", "50")
        .args(["evaluate", "-d", data.path().to_str().unwrap(), "--no-color"])
        .assert()
        .code(0);
}

#[test]
fn test_evaluate_stdin() {
    cmd()
        .args(["evaluate", "-d", "-", "-f", "json"])
        .write_stdin("{\"prediction\": \"select 1\", \"reference\": \"SELECT 1\"}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"match_rate\": 1.0"));
}

#[test]
fn test_evaluate_malformed_dataset() {
    let mut data = Builder::new().suffix(".jsonl").tempfile().unwrap();
    writeln!(data, "{{\"prediction\": \"select 1\"").unwrap();

    cmd()
        .args(["evaluate", "-d", data.path().to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_evaluate_file_not_found() {
    cmd()
        .args(["evaluate", "-d", "/nonexistent/predictions.jsonl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_help() {
    cmd().arg("--help").assert().success();
}

#[test]
fn test_version() {
    cmd().arg("--version").assert().success();
}
