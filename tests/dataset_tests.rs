use std::io::Write;

use nl2sql_eval::dataset::{DatasetFormat, Example, load_examples, parse_examples};
use tempfile::Builder;

#[test]
fn test_parse_json_array() {
    let content = r#"[
        {"question": "How many wins?", "prediction": "select count(*) from t", "reference": "SELECT COUNT(*) FROM t"},
        {"pred_sql": "select 1", "expected_sql": "SELECT 1"}
    ]"#;
    let examples = parse_examples(content, DatasetFormat::Json, "data.json").unwrap();
    assert_eq!(examples.len(), 2);
    assert_eq!(examples[0].question.as_deref(), Some("How many wins?"));
    assert_eq!(examples[1], Example::new("select 1", "SELECT 1"));
}

#[test]
fn test_parse_wikisql_style_line() {
    let content = r#"{"question": "Who is the player?", "predicted": "SELECT Player FROM table", "human_readable": "SELECT Player FROM table", "table": {"name": "t1", "header": ["Player"], "types": ["text"]}}"#;
    let examples = parse_examples(content, DatasetFormat::JsonLines, "data.jsonl").unwrap();
    assert_eq!(examples.len(), 1);
    let table = examples[0].table.as_ref().unwrap();
    assert_eq!(table.header, vec!["Player".to_string()]);
}

#[test]
fn test_parse_yaml() {
    let content = "\
- question: Which team?
  prediction: select team from t
  reference: SELECT Team FROM t
- prediction: select 2
  reference: SELECT 2
";
    let examples = parse_examples(content, DatasetFormat::Yaml, "data.yaml").unwrap();
    assert_eq!(examples.len(), 2);
    assert_eq!(examples[0].reference, "SELECT Team FROM t");
    assert!(examples[1].question.is_none());
}

#[test]
fn test_json_lines_skip_blank_lines() {
    let content = "\n{\"prediction\": \"a\", \"reference\": \"b\"}\n   \n{\"prediction\": \"c\", \"reference\": \"d\"}\n";
    let examples = parse_examples(content, DatasetFormat::JsonLines, "x").unwrap();
    assert_eq!(examples.len(), 2);
    assert_eq!(examples[1].prediction, "c");
}

#[test]
fn test_invalid_json_is_error() {
    assert!(parse_examples("{not json", DatasetFormat::Json, "x").is_err());
    assert!(parse_examples("- [unclosed", DatasetFormat::Yaml, "x").is_err());
}

#[test]
fn test_load_examples_by_extension() {
    let mut file = Builder::new().suffix(".jsonl").tempfile().unwrap();
    writeln!(file, r#"{{"prediction": "select 1", "reference": "SELECT 1"}}"#).unwrap();
    writeln!(file, r#"{{"prediction": "select 2", "reference": "SELECT 2"}}"#).unwrap();

    let examples = load_examples(file.path().to_str().unwrap()).unwrap();
    assert_eq!(examples.len(), 2);
}

#[test]
fn test_load_examples_missing_file() {
    assert!(load_examples("/nonexistent/predictions.json").is_err());
}
