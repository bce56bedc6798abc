// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use nl2sql_eval::{
    canonical::trace,
    dataset::Example,
    evaluate::{EvaluationReport, Evaluator, compare},
    output::{OutputFormat, OutputOptions, format_comparison, format_report, format_trace},
    schema::TableSchema
};

fn sample_report() -> EvaluationReport {
    let mut matched = Example::new(
        "select title from movies where year>2010",
        "SELECT Title FROM movies WHERE Year > 2010"
    );
    matched.question = Some("Which movies came out after 2010?".to_string());
    let missed = Example::new("SELECT name FROM t", "SELECT id FROM t");
    Evaluator::default().evaluate(&[matched, missed])
}

fn plain(format: OutputFormat) -> OutputOptions {
    OutputOptions {
        format,
        colored: false,
        verbose: false,
        preview: 5
    }
}

#[test]
fn test_output_format_default() {
    let format = OutputFormat::default();
    assert!(matches!(format, OutputFormat::Text));
}

#[test]
fn test_output_options_default() {
    let opts = OutputOptions::default();
    assert!(matches!(opts.format, OutputFormat::Text));
    assert!(opts.colored);
    assert!(!opts.verbose);
    assert_eq!(opts.preview, 5);
}

#[test]
fn test_format_report_text() {
    let output = format_report(&sample_report(), &plain(OutputFormat::Text));
    assert!(output.contains("=== NL2SQL Evaluation ==="));
    assert!(output.contains("Example #1"));
    assert!(output.contains("Question: Which movies came out after 2010?"));
    assert!(output.contains("Expected: SELECT Title FROM movies WHERE Year > 2010"));
    assert!(output.contains("Predicted: select title from movies where year>2010"));
    assert!(output.contains("Exact match: yes"));
    assert!(output.contains("Exact match: no"));
    assert!(output.contains("FINAL RESULTS:"));
    assert!(output.contains("Exact Match: 50.00% (1/2)"));
    assert!(output.contains("Mismatches: 1"));
    assert!(output.contains("Total Examples: 2"));
    assert!(!output.contains("Canonical expected"));
    assert!(!output.contains("Table:"));
}

#[test]
fn test_format_report_preview_limits_examples() {
    let opts = OutputOptions {
        preview: 1,
        ..plain(OutputFormat::Text)
    };
    let output = format_report(&sample_report(), &opts);
    assert!(output.contains("Example #1"));
    assert!(!output.contains("Example #2"));
    assert!(output.contains("Total Examples: 2"));
}

#[test]
fn test_format_report_verbose_shows_canonical_forms() {
    let opts = OutputOptions {
        verbose: true,
        ..plain(OutputFormat::Text)
    };
    let output = format_report(&sample_report(), &opts);
    assert!(output.contains("Canonical expected: select title from movies where year > 2010"));
    assert!(output.contains("Canonical predicted: select title from movies where year > 2010"));
}

#[test]
fn test_format_report_shows_table_summary() {
    let mut example = Example::new("SELECT Week FROM games", "SELECT Week FROM games");
    example.table = Some(TableSchema {
        name:   "games".to_string(),
        header: vec!["Week".to_string(), "Opponent".to_string()],
        types:  vec!["real".to_string(), "text".to_string()]
    });
    let report = Evaluator::default().evaluate(&[example]);
    let output = format_report(&report, &plain(OutputFormat::Text));
    assert!(output.contains("Table: games (2 columns)"));
    assert!(output.contains("Mismatches: 0"));
}

#[test]
fn test_format_report_colored() {
    let opts = OutputOptions {
        colored: true,
        ..plain(OutputFormat::Text)
    };
    let output = format_report(&sample_report(), &opts);
    assert!(output.contains("NL2SQL Evaluation"));
    assert!(output.contains("Total Examples: 2"));
}

#[test]
fn test_format_report_json() {
    let output = format_report(&sample_report(), &plain(OutputFormat::Json));
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["exact_matches"], 1);
    assert_eq!(value["outcomes"][0]["exact_match"], true);
    assert_eq!(
        value["outcomes"][0]["canonical_reference"],
        "select title from movies where year > 2010"
    );
    assert!(value["outcomes"][1].get("question").is_none());
}

#[test]
fn test_format_report_yaml() {
    let output = format_report(&sample_report(), &plain(OutputFormat::Yaml));
    assert!(output.contains("total: 2"));
    assert!(output.contains("exact_matches: 1"));
}

#[test]
fn test_format_comparison_text() {
    let outcome = compare("select 1", "SELECT 1");
    let output = format_comparison("select 1", "SELECT 1", &outcome, &plain(OutputFormat::Text));
    assert!(output.contains("Prediction: select 1"));
    assert!(output.contains("Reference:  select 1"));
    assert!(output.contains("Exact match: yes"));
    assert!(output.contains("Similarity: 100.00%"));
}

#[test]
fn test_format_comparison_json() {
    let outcome = compare("select a", "select b");
    let output = format_comparison("select a", "select b", &outcome, &plain(OutputFormat::Json));
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["prediction"], "select a");
    assert_eq!(value["exact_match"], false);
}

#[test]
fn test_format_trace_lists_every_stage() {
    let sql = r#"SELECT "2010/ 11" FROM t"#;
    let steps = trace(sql);
    let output = format_trace(sql, &steps, &plain(OutputFormat::Text));
    assert!(output.starts_with("Input: SELECT"));
    assert_eq!(output.lines().count(), steps.len() + 1);
    assert!(output.contains("slash-folding"));
    assert!(output.contains("quote-style"));
}
