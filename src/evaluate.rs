//! Evaluation of predictions against references.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  Examples   │────▶│  Evaluator   │────▶│   Report    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                  ┌─────────┴─────────┐
//!                  │ clean → canonical │
//!                  │  → compare (par)  │
//!                  └───────────────────┘
//! ```
//!
//! Every example is compared independently on the [`rayon`] pool: the
//! reference is cleaned against the example's table (when enabled), both
//! sides are canonicalized through the shared cache and compared for an exact
//! match, and a fuzzy similarity is computed. Totals are aggregated after all
//! comparisons finish.
//!
//! # Example
//!
//! ```
//! use nl2sql_eval::{
//!     dataset::Example,
//!     evaluate::{EvaluationSettings, Evaluator}
//! };
//!
//! let examples = vec![
//!     Example::new("select name from t where y=2 and x=1", "SELECT name FROM t WHERE x = 1 AND y = 2"),
//!     Example::new("select name from t", "SELECT id FROM t"),
//! ];
//!
//! let report = Evaluator::new(EvaluationSettings::default()).evaluate(&examples);
//! assert_eq!(report.total, 2);
//! assert_eq!(report.exact_matches, 1);
//! assert_eq!(report.match_rate, 0.5);
//! ```

mod types;

use rayon::prelude::*;
use tracing::{debug, info};
pub use types::{ComparisonOutcome, EvaluationReport, ExampleOutcome};

use crate::{
    cache::canonicalize_cached, dataset::Example, schema::TableSchema, similarity::similarity
};

/// Knobs for an evaluation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationSettings {
    /// Rewrite reference column names against the example's table
    pub clean_references: bool,
    /// Evaluate only the first N examples
    pub limit:            Option<usize>
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            clean_references: true,
            limit:            None
        }
    }
}

/// Compare a prediction with a reference.
///
/// ```
/// use nl2sql_eval::evaluate::compare;
///
/// let outcome = compare("select * from t where name='Bob'", r#"SELECT * FROM t WHERE name = "Bob""#);
/// assert!(outcome.exact_match);
/// assert!(outcome.similarity < 1.0);
/// ```
pub fn compare(prediction: &str, reference: &str) -> ComparisonOutcome {
    let canonical_prediction = canonicalize_cached(prediction);
    let canonical_reference = canonicalize_cached(reference);
    ComparisonOutcome {
        exact_match: canonical_prediction == canonical_reference,
        similarity: similarity(prediction, reference),
        canonical_prediction,
        canonical_reference
    }
}

/// Parallel evaluation engine.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    settings: EvaluationSettings
}

impl Evaluator {
    pub fn new(settings: EvaluationSettings) -> Self {
        Self {
            settings
        }
    }

    /// Evaluate one example at position `index`.
    pub fn evaluate_example(&self, index: usize, example: &Example) -> ExampleOutcome {
        let reference = match &example.table {
            Some(table) if self.settings.clean_references => {
                table.clean_reference(&example.reference)
            }
            _ => example.reference.clone()
        };
        let comparison = compare(&example.prediction, &reference);
        debug!(
            index,
            exact_match = comparison.exact_match,
            similarity = comparison.similarity,
            "compared example"
        );

        ExampleOutcome {
            index,
            question: example.question.clone(),
            table: example.table.as_ref().map(TableSchema::to_summary),
            prediction: example.prediction.clone(),
            reference,
            comparison
        }
    }

    /// Run all examples (up to the limit) in parallel.
    pub fn evaluate(&self, examples: &[Example]) -> EvaluationReport {
        let selected = match self.settings.limit {
            Some(limit) => &examples[..limit.min(examples.len())],
            None => examples
        };
        info!(
            total = selected.len(),
            clean_references = self.settings.clean_references,
            "evaluation started"
        );

        let outcomes: Vec<ExampleOutcome> = selected
            .par_iter()
            .enumerate()
            .map(|(idx, example)| self.evaluate_example(idx, example))
            .collect();

        let report = EvaluationReport::from_outcomes(outcomes);
        info!(
            total = report.total,
            exact_matches = report.exact_matches,
            match_rate = report.match_rate,
            mean_similarity = report.mean_similarity,
            "evaluation finished"
        );
        report
    }
}
