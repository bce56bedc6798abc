//! Helper functions for CLI operations.
//!
//! Statement and table loading, option resolution against the loaded configuration, and
//! exit code calculation.

use super::{
    convert::convert_format,
    types::{CanonicalizeParams, EvaluateParams}
};
use crate::{
    cli::Format,
    config::Config,
    error::{AppResult, config_error, dataset_parse_error, input_error},
    evaluate::{EvaluationReport, EvaluationSettings},
    input::read_input,
    output::OutputOptions,
    schema::TableSchema
};

/// Collects the statements to canonicalize.
///
/// Command-line statements come first, followed by every non-blank line of
/// the input file.
///
/// # Errors
///
/// Returns an error if the input cannot be read or nothing was given.
pub fn collect_statements(params: &CanonicalizeParams) -> AppResult<Vec<String>> {
    let mut statements = params.sql.clone();
    if let Some(path) = &params.input {
        let content = read_input(path)?;
        statements.extend(
            content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
        );
    }

    if statements.is_empty() {
        return Err(input_error(
            "Nothing to canonicalize: pass SQL arguments or --input <FILE|->"
        ));
    }
    Ok(statements)
}

/// Loads a table description from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a table object.
pub fn load_table(path: &str) -> AppResult<TableSchema> {
    let content = read_input(path)?;
    serde_json::from_str(&content)
        .map_err(|e| dataset_parse_error(path, Some(e.line()), e.to_string()))
}

/// Creates output options from CLI parameters.
pub fn create_output_options(
    format: Format,
    no_color: bool,
    verbose: bool,
    preview: usize
) -> OutputOptions {
    OutputOptions {
        format: convert_format(format),
        colored: !no_color,
        verbose,
        preview
    }
}

/// Resolves evaluation settings; CLI flags win over configuration.
///
/// ```
/// use nl2sql_eval::{
///     app::{EvaluateParams, evaluation_settings},
///     cli::Format,
///     config::Config
/// };
///
/// let mut config = Config::default();
/// config.evaluation.limit = Some(15);
///
/// let params = EvaluateParams {
///     dataset_path:   "data.json".to_string(),
///     limit:          None,
///     preview:        None,
///     no_clean:       true,
///     min_match_rate: None,
///     output_format:  Format::Text,
///     verbose:        false,
///     no_color:       true
/// };
///
/// let settings = evaluation_settings(&params, &config);
/// assert_eq!(settings.limit, Some(15));
/// assert!(!settings.clean_references);
/// ```
pub fn evaluation_settings(params: &EvaluateParams, config: &Config) -> EvaluationSettings {
    EvaluationSettings {
        clean_references: !params.no_clean && config.evaluation.clean_references,
        limit:            params.limit.or(config.evaluation.limit)
    }
}

/// Resolves the minimum match rate in percent.
///
/// # Errors
///
/// Returns an error if the rate is outside `[0, 100]`.
pub fn effective_min_match_rate(params: &EvaluateParams, config: &Config) -> AppResult<f64> {
    let rate = params
        .min_match_rate
        .unwrap_or(config.evaluation.min_match_rate);
    if !(0.0..=100.0).contains(&rate) {
        return Err(config_error(format!(
            "--min-match-rate must be between 0 and 100, got {}",
            rate
        )));
    }
    Ok(rate)
}

/// Calculates the process exit code for an evaluation.
///
/// - `0` - Match rate at or above the minimum
/// - `1` - Match rate below the minimum
///
/// ```
/// use nl2sql_eval::{app::evaluation_exit_code, evaluate::EvaluationReport};
///
/// let report = EvaluationReport::from_outcomes(vec![]);
/// assert_eq!(evaluation_exit_code(&report, 0.0), 0);
/// assert_eq!(evaluation_exit_code(&report, 10.0), 1);
/// ```
pub fn evaluation_exit_code(report: &EvaluationReport, min_match_rate: f64) -> i32 {
    if report.match_rate_percent() < min_match_rate {
        1
    } else {
        0
    }
}
