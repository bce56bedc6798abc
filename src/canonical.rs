//! SQL canonicalization for exact-match comparison.
//!
//! Generated SQL and dataset reference SQL rarely agree character for
//! character even when they mean the same thing: keywords change case,
//! literals switch between single and double quotes, operators lose their
//! padding and multi-predicate `WHERE` clauses list conditions in a different
//! order. This module rewrites a SQL-like string into a canonical form so
//! that two strings are considered equivalent when their canonical forms are
//! identical.
//!
//! This is a textual canonicalizer, not a parser. It never fails: any input,
//! including malformed SQL, produces some output string.
//!
//! # Pipeline
//!
//! Canonicalization is a fixed, ordered list of [`Stage`]s folded over the
//! input. Later stages assume earlier ones already ran, so the order is part
//! of the contract:
//!
//! | # | Stage | Effect |
//! |---|-------|--------|
//! | 1 | `case-and-trim` | lowercase, strip surrounding whitespace |
//! | 2 | `slash-folding` | `2010/ 11` → `2010_11` |
//! | 3 | `hyphen-period-cleanup` | `a - b` → `a-b`, `oct.` → `oct`, `sept` → `sep` |
//! | 4 | `keyword-spacing` | `selectname` → `select name` |
//! | 5 | `whitespace-commas` | single spaces, `", "` after commas |
//! | 6 | `operator-spacing` | `a>=1` → `a >= 1` |
//! | 7 | `week-stripping` | `week 4` → `4` |
//! | 8 | `quote-stripping` | `"bob"`, `'bob'` → `bob` |
//! | 9 | `dash-unification` | `–`, `—`, `−` → `-` |
//! | 10 | `symbol-removal` | drop `✓ → ×`, trailing `--` and `.` |
//! | 11 | `article-stripping` | `the beatles` → `beatles` |
//! | 12 | `prefix-removal` | drop `short film ` |
//! | 13 | `paren-spacing` | `( a )` → `(a)` |
//! | 14 | `condition-ordering` | sort `WHERE` conditions |
//! | 15 | `quote-style` | `'` → `"` |
//!
//! # Example
//!
//! ```
//! use nl2sql_eval::canonical::canonicalize;
//!
//! let predicted = "select title from movies where year>2010 and director='Christopher Nolan'";
//! let expected =
//!     r#"SELECT Title FROM movies WHERE Director = "Christopher Nolan" AND Year > 2010"#;
//!
//! assert_eq!(canonicalize(predicted), canonicalize(expected));
//! ```

mod conditions;
mod stages;

use serde::Serialize;

/// A single named transformation of the canonicalization pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    /// Stable identifier used in traces
    pub name:  &'static str,
    /// The transformation itself
    pub apply: fn(&str) -> String
}

/// The canonicalization pipeline in execution order.
pub const PIPELINE: [Stage; 15] = [
    Stage {
        name:  "case-and-trim",
        apply: stages::lowercase_and_trim
    },
    Stage {
        name:  "slash-folding",
        apply: stages::fold_slashes
    },
    Stage {
        name:  "hyphen-period-cleanup",
        apply: stages::clean_hyphens_and_periods
    },
    Stage {
        name:  "keyword-spacing",
        apply: stages::repair_keyword_spacing
    },
    Stage {
        name:  "whitespace-commas",
        apply: stages::normalize_whitespace
    },
    Stage {
        name:  "operator-spacing",
        apply: stages::space_operators
    },
    Stage {
        name:  "week-stripping",
        apply: stages::strip_week_prefix
    },
    Stage {
        name:  "quote-stripping",
        apply: stages::strip_quotes
    },
    Stage {
        name:  "dash-unification",
        apply: stages::unify_dashes
    },
    Stage {
        name:  "symbol-removal",
        apply: stages::remove_symbols
    },
    Stage {
        name:  "article-stripping",
        apply: stages::strip_articles
    },
    Stage {
        name:  "prefix-removal",
        apply: stages::remove_domain_prefix
    },
    Stage {
        name:  "paren-spacing",
        apply: stages::tighten_parentheses
    },
    Stage {
        name:  "condition-ordering",
        apply: conditions::order_where_conditions
    },
    Stage {
        name:  "quote-style",
        apply: stages::unify_quote_style
    }
];

/// Output of one stage, recorded by [`trace`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageOutput {
    pub stage:  &'static str,
    pub output: String
}

/// Rewrite `text` into its canonical form.
///
/// Pure and total: no I/O, no shared state, no error path. Re-applying the
/// function to its own output returns the same string.
///
/// ```
/// use nl2sql_eval::canonical::canonicalize;
///
/// assert_eq!(
///     canonicalize("SELECT  Name FROM t WHERE c = 1 AND b = 2"),
///     "select name from t where b = 2 and c = 1"
/// );
/// assert_eq!(canonicalize(""), "");
/// ```
#[must_use]
pub fn canonicalize(text: &str) -> String {
    PIPELINE
        .iter()
        .fold(text.to_string(), |current, stage| (stage.apply)(&current))
}

/// Two SQL strings are an exact match when their canonical forms agree.
#[must_use]
pub fn is_exact_match(prediction: &str, reference: &str) -> bool {
    canonicalize(prediction) == canonicalize(reference)
}

/// Run the pipeline and keep every intermediate result.
///
/// The last entry always equals [`canonicalize`] of the same input.
#[must_use]
pub fn trace(text: &str) -> Vec<StageOutput> {
    let mut current = text.to_string();
    PIPELINE
        .iter()
        .map(|stage| {
            current = (stage.apply)(&current);
            StageOutput {
                stage:  stage.name,
                output: current.clone()
            }
        })
        .collect()
}
