//! Table schemas shipped with evaluation examples.
//!
//! WikiSQL-style examples carry the table a question is asked against: a name,
//! the column headers and a type per column. Headers are free text
//! (`School/Club Team`, `No. in series`), while models are prompted with
//! underscore-joined identifiers. Reference SQL is therefore cleaned against
//! the header before canonicalization so both sides use the same column
//! spelling.
//!
//! # Example
//!
//! ```
//! use nl2sql_eval::schema::TableSchema;
//!
//! let table = TableSchema {
//!     name:   "players".to_string(),
//!     header: vec!["Player".to_string(), "School/Club Team".to_string()],
//!     types:  vec!["text".to_string(), "text".to_string()]
//! };
//!
//! let cleaned = table.clean_reference(r#"SELECT Player FROM players WHERE School/Club Team = "Butler""#);
//! assert_eq!(cleaned, r#"SELECT Player FROM players WHERE School_Club_Team = "Butler""#);
//! assert_eq!(
//!     table.create_table_sql(),
//!     "CREATE TABLE players (Player TEXT, School_Club_Team TEXT)"
//! );
//! ```

use regex::{NoExpand, Regex, escape};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A table as described by the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name
    #[serde(default)]
    pub name:   String,
    /// Column headers in dataset spelling
    #[serde(alias = "columns")]
    pub header: Vec<String>,
    /// Column types (`real` or `text`), parallel to `header`
    #[serde(default)]
    pub types:  Vec<String>
}

/// Replace spaces and slashes in a column name with underscores.
///
/// ```
/// use nl2sql_eval::schema::clean_column_name;
///
/// assert_eq!(clean_column_name("No. in series"), "No._in_series");
/// assert_eq!(clean_column_name("2010/ 11"), "2010__11");
/// ```
#[must_use]
pub fn clean_column_name(name: &str) -> String {
    name.replace([' ', '/'], "_")
}

impl TableSchema {
    /// Rewrite header column names found in `sql` to their cleaned spelling.
    ///
    /// Matching is case-insensitive and bounded by non-word characters, so
    /// `Away team` never rewrites part of `Away teams`. Longer names are
    /// replaced first, which keeps `Home team score` from being cut short by
    /// `Home team`.
    #[must_use]
    pub fn clean_reference(&self, sql: &str) -> String {
        let mut columns: Vec<&str> = self
            .header
            .iter()
            .map(String::as_str)
            .filter(|column| column.contains([' ', '/']))
            .collect();
        columns.sort_by_key(|column| std::cmp::Reverse(column.len()));

        let mut cleaned = sql.to_string();
        for column in columns {
            let Some(pattern) = column_pattern(column) else {
                continue;
            };
            let replacement = clean_column_name(column);
            cleaned = pattern
                .replace_all(&cleaned, NoExpand(&replacement))
                .into_owned();
        }
        cleaned
    }

    /// `CREATE TABLE` statement used to describe the table to the model.
    #[must_use]
    pub fn create_table_sql(&self) -> String {
        let columns: Vec<String> = self
            .header
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let sql_type = match self.types.get(idx).map(String::as_str) {
                    Some("real") => "REAL",
                    _ => "TEXT"
                };
                format!("{} {}", clean_column_name(column), sql_type)
            })
            .collect();
        format!("CREATE TABLE {} ({})", self.name, columns.join(", "))
    }

    /// Model prompt for a question asked against this table.
    #[must_use]
    pub fn prompt(&self, question: &str) -> String {
        format!("{};Question: {}", self.create_table_sql(), question)
    }

    /// One-line description for reports.
    #[must_use]
    pub fn to_summary(&self) -> String {
        format!("{} ({} columns)", self.name, self.header.len())
    }
}

fn column_pattern(column: &str) -> Option<Regex> {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let leading = if column.starts_with(is_word) { r"\b" } else { "" };
    let trailing = if column.ends_with(is_word) { r"\b" } else { "" };
    let pattern = format!("(?i){}{}{}", leading, escape(column), trailing);
    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!(column, error = %e, "skipping column that does not compile to a pattern");
            None
        }
    }
}
