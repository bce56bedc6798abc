//! Fuzzy similarity between prediction and reference.
//!
//! A secondary, non-binary quality signal next to exact matching. It compares
//! the raw strings case-insensitively and knows nothing about SQL.

use strsim::normalized_levenshtein;

/// Similarity ratio in `[0.0, 1.0]`; `1.0` means identical ignoring case.
///
/// ```
/// use nl2sql_eval::similarity::similarity;
///
/// assert_eq!(similarity("SELECT 1", "select 1"), 1.0);
/// assert!(similarity("SELECT * FROM users", "SELECT * FROM user") > 0.9);
/// ```
#[must_use]
pub fn similarity(prediction: &str, reference: &str) -> f64 {
    normalized_levenshtein(&prediction.to_lowercase(), &reference.to_lowercase())
}
