//! Command execution.
//!
//! One runner per subcommand. Runners do all I/O except printing: they
//! return a [`CommandOutput`] that `main` writes out.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::{
    helpers::{
        collect_statements, create_output_options, effective_min_match_rate,
        evaluation_exit_code, evaluation_settings, load_table
    },
    types::{CanonicalizeParams, CommandOutput, CompareParams, EvaluateParams}
};
use crate::{
    cache::canonicalize_cached,
    canonical::trace,
    cli::Format,
    config::Config,
    dataset::load_examples,
    error::AppResult,
    evaluate::{Evaluator, compare},
    output::{OutputFormat, format_comparison, format_report, format_trace}
};

/// Canonicalizes every given statement.
///
/// Prints one canonical form per statement, or the per-stage trace when
/// `trace` is set.
///
/// # Errors
///
/// Returns an error if the input file cannot be read or nothing was given.
///
/// # Example
///
/// ```
/// use nl2sql_eval::app::{CanonicalizeParams, run_canonicalize};
///
/// let output = run_canonicalize(CanonicalizeParams {
///     sql:      vec!["SELECT  Name FROM t WHERE Team = 'Lakers'".to_string()],
///     input:    None,
///     trace:    false,
///     no_color: true
/// })
/// .unwrap();
/// assert_eq!(output.stdout, vec!["select name from t where team = lakers"]);
/// ```
pub fn run_canonicalize(params: CanonicalizeParams) -> AppResult<CommandOutput> {
    let statements = collect_statements(&params)?;
    let opts = create_output_options(Format::Text, params.no_color, false, 0);

    let stdout = if params.trace {
        statements
            .iter()
            .map(|sql| format_trace(sql, &trace(sql), &opts))
            .collect()
    } else {
        statements
            .iter()
            .map(|sql| canonicalize_cached(sql))
            .collect()
    };

    Ok(CommandOutput {
        exit_code: 0,
        stdout
    })
}

/// Compares a prediction with a reference.
///
/// Exit code `0` when the canonical forms match, `1` otherwise.
///
/// # Errors
///
/// Returns an error if the table file cannot be read or parsed.
pub fn run_compare(params: CompareParams) -> AppResult<CommandOutput> {
    let reference = match &params.table_path {
        Some(path) => load_table(path)?.clean_reference(&params.reference),
        None => params.reference.clone()
    };

    let outcome = compare(&params.prediction, &reference);
    let opts = create_output_options(params.output_format, params.no_color, false, 0);
    let output = format_comparison(&params.prediction, &reference, &outcome, &opts);

    Ok(CommandOutput {
        exit_code: if outcome.exact_match { 0 } else { 1 },
        stdout:    vec![output]
    })
}

/// Evaluates a dataset and renders the report.
///
/// # Errors
///
/// Returns an error if the dataset cannot be read or parsed, or if the
/// minimum match rate is out of range.
pub fn run_evaluate(params: EvaluateParams, config: Config) -> AppResult<CommandOutput> {
    let min_match_rate = effective_min_match_rate(&params, &config)?;
    let settings = evaluation_settings(&params, &config);
    let preview = params.preview.unwrap_or(config.output.preview);
    let opts = create_output_options(params.output_format, params.no_color, params.verbose, preview);

    let examples = load_examples(&params.dataset_path)?;
    info!(path = %params.dataset_path, count = examples.len(), "dataset loaded");

    let pb = ProgressBar::new_spinner();
    if opts.format == OutputFormat::Text {
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Evaluating {} examples...", examples.len()));
        pb.enable_steady_tick(Duration::from_millis(100));
    }

    let report = Evaluator::new(settings).evaluate(&examples);
    pb.finish_and_clear();

    Ok(CommandOutput {
        exit_code: evaluation_exit_code(&report, min_match_rate),
        stdout:    vec![format_report(&report, &opts)]
    })
}
