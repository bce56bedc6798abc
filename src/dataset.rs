//! Evaluation datasets.
//!
//! A dataset is a list of [`Example`]s, each pairing a model prediction with
//! its reference SQL. Three encodings are accepted and picked by extension:
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.json` | JSON array of objects |
//! | `.jsonl`, `.ndjson` | one JSON object per non-blank line |
//! | `.yaml`, `.yml` | YAML sequence of mappings |
//!
//! Reading from stdin (`-`) expects JSON Lines.
//!
//! # Example
//!
//! ```
//! use nl2sql_eval::dataset::{DatasetFormat, parse_examples};
//!
//! let content = r#"
//! {"question": "Who directed Inception?", "predicted": "select director from movies", "expected": "SELECT Director FROM movies"}
//! {"prediction": "select 1", "reference": "SELECT 1"}
//! "#;
//! let examples = parse_examples(content, DatasetFormat::JsonLines, "inline").unwrap();
//! assert_eq!(examples.len(), 2);
//! assert_eq!(examples[0].reference, "SELECT Director FROM movies");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{AppResult, dataset_parse_error},
    input::{STDIN, read_input},
    schema::TableSchema
};

/// One prediction/reference pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Natural-language question, when the dataset ships it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question:   Option<String>,
    /// SQL produced by the model
    #[serde(alias = "predicted", alias = "pred_sql")]
    pub prediction: String,
    /// Ground-truth SQL
    #[serde(alias = "expected", alias = "expected_sql", alias = "human_readable")]
    pub reference:  String,
    /// Table the question is asked against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table:      Option<TableSchema>
}

impl Example {
    pub fn new(prediction: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            question:   None,
            prediction: prediction.into(),
            reference:  reference.into(),
            table:      None
        }
    }
}

/// Dataset encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    JsonLines,
    Yaml
}

impl DatasetFormat {
    /// Infer the format from a file extension; unknown extensions read as
    /// JSON and `-` (stdin) as JSON Lines.
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == STDIN {
            return Self::JsonLines;
        }
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("jsonl" | "ndjson") => Self::JsonLines,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json
        }
    }
}

/// Load examples from a file, or from stdin when `path` is `-`.
pub fn load_examples(path: &str) -> AppResult<Vec<Example>> {
    let content = read_input(path)?;
    let format = DatasetFormat::from_path(Path::new(path));
    let examples = parse_examples(&content, format, path)?;
    debug!(path, ?format, count = examples.len(), "loaded dataset");
    Ok(examples)
}

/// Parse dataset content. `source` names the input in error messages.
///
/// Blank content is an empty dataset, not an error.
pub fn parse_examples(
    content: &str,
    format: DatasetFormat,
    source: &str
) -> AppResult<Vec<Example>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    match format {
        DatasetFormat::Json => serde_json::from_str(content)
            .map_err(|e| dataset_parse_error(source, Some(e.line()), e.to_string())),
        DatasetFormat::Yaml => serde_yaml::from_str(content).map_err(|e| {
            let line = e.location().map(|loc| loc.line());
            dataset_parse_error(source, line, e.to_string())
        }),
        DatasetFormat::JsonLines => content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                serde_json::from_str(line)
                    .map_err(|e| dataset_parse_error(source, Some(idx + 1), e.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DatasetFormat::from_path(Path::new("a.json")), DatasetFormat::Json);
        assert_eq!(DatasetFormat::from_path(Path::new("a.JSONL")), DatasetFormat::JsonLines);
        assert_eq!(DatasetFormat::from_path(Path::new("a.ndjson")), DatasetFormat::JsonLines);
        assert_eq!(DatasetFormat::from_path(Path::new("a.yml")), DatasetFormat::Yaml);
        assert_eq!(DatasetFormat::from_path(Path::new("a")), DatasetFormat::Json);
        assert_eq!(DatasetFormat::from_path(Path::new("-")), DatasetFormat::JsonLines);
    }

    #[test]
    fn test_blank_content_is_empty() {
        for format in [DatasetFormat::Json, DatasetFormat::JsonLines, DatasetFormat::Yaml] {
            assert!(parse_examples("  \n", format, "x").unwrap().is_empty());
        }
    }

    #[test]
    fn test_json_lines_error_names_line() {
        let content = "{\"prediction\": \"a\", \"reference\": \"b\"}\n\n{broken\n";
        let err = parse_examples(content, DatasetFormat::JsonLines, "data.jsonl").unwrap_err();
        let msg = format!("{:?}", err);
        assert!(msg.contains("data.jsonl"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn test_missing_reference_is_error() {
        let content = r#"[{"prediction": "select 1"}]"#;
        assert!(parse_examples(content, DatasetFormat::Json, "x").is_err());
    }
}
