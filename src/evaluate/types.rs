//! Result types produced by the evaluator.
//!
//! - [`ComparisonOutcome`] - one prediction against one reference
//! - [`ExampleOutcome`] - a comparison tied to its dataset example
//! - [`EvaluationReport`] - totals over a whole run

use serde::Serialize;

/// Result of comparing one prediction with one reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonOutcome {
    /// Canonical form of the prediction
    pub canonical_prediction: String,
    /// Canonical form of the reference
    pub canonical_reference:  String,
    /// Whether the canonical forms are identical
    pub exact_match:          bool,
    /// Case-insensitive similarity of the raw strings, in `[0, 1]`
    pub similarity:           f64
}

/// Outcome for a single dataset example.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleOutcome {
    /// Zero-based position in the dataset
    pub index:      usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question:   Option<String>,
    /// Summary of the example's table, when it has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table:      Option<String>,
    pub prediction: String,
    /// Reference as compared, after schema cleaning when enabled
    pub reference:  String,
    #[serde(flatten)]
    pub comparison: ComparisonOutcome
}

impl ExampleOutcome {
    pub fn is_match(&self) -> bool {
        self.comparison.exact_match
    }
}

/// Totals for an evaluation run.
///
/// Rates are fractions in `[0, 1]`; an empty run reports zeros.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// Number of examples evaluated
    pub total:           usize,
    /// Examples whose canonical forms matched
    pub exact_matches:   usize,
    /// `exact_matches / total`
    pub match_rate:      f64,
    /// Mean similarity over all examples
    pub mean_similarity: f64,
    /// Per-example outcomes in dataset order
    pub outcomes:        Vec<ExampleOutcome>
}

impl EvaluationReport {
    /// Aggregate outcomes into a report.
    pub fn from_outcomes(outcomes: Vec<ExampleOutcome>) -> Self {
        let total = outcomes.len();
        let (exact_matches, similarity_sum) = outcomes
            .iter()
            .fold((0usize, 0.0f64), |(matches, sum), outcome| {
                (matches + usize::from(outcome.is_match()), sum + outcome.comparison.similarity)
            });

        let (match_rate, mean_similarity) = if total == 0 {
            (0.0, 0.0)
        } else {
            (exact_matches as f64 / total as f64, similarity_sum / total as f64)
        };

        Self {
            total,
            exact_matches,
            match_rate,
            mean_similarity,
            outcomes
        }
    }

    /// Match rate as a percentage.
    pub fn match_rate_percent(&self) -> f64 {
        self.match_rate * 100.0
    }

    /// Mean similarity as a percentage.
    pub fn mean_similarity_percent(&self) -> f64 {
        self.mean_similarity * 100.0
    }

    /// Examples whose canonical forms differ.
    pub fn mismatch_count(&self) -> usize {
        self.total - self.exact_matches
    }
}
