//! Application types for CLI commands.
//!
//! Parameters passed from the parsed command line to the command runners,
//! and the output they hand back to `main`.

use crate::cli::Format;

/// Parameters for the canonicalize command.
///
/// # Example
///
/// ```
/// use nl2sql_eval::app::CanonicalizeParams;
///
/// let params = CanonicalizeParams {
///     sql:      vec!["SELECT  Name FROM t".to_string()],
///     input:    None,
///     trace:    false,
///     no_color: true
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CanonicalizeParams {
    /// Statements given on the command line.
    pub sql:      Vec<String>,
    /// File with one statement per line, or "-" for stdin.
    pub input:    Option<String>,
    /// Print every stage's output instead of the final form.
    pub trace:    bool,
    /// Disable colored terminal output.
    pub no_color: bool
}

/// Parameters for the compare command.
#[derive(Debug, Clone)]
pub struct CompareParams {
    pub prediction:    String,
    pub reference:     String,
    /// Table JSON used to clean reference column names.
    pub table_path:    Option<String>,
    pub output_format: Format,
    pub no_color:      bool
}

/// Parameters for the evaluate command.
///
/// Options left as `None` fall back to the loaded configuration.
///
/// # Example
///
/// ```
/// use nl2sql_eval::{app::EvaluateParams, cli::Format};
///
/// let params = EvaluateParams {
///     dataset_path:   "predictions.jsonl".to_string(),
///     limit:          Some(15),
///     preview:        None,
///     no_clean:       false,
///     min_match_rate: None,
///     output_format:  Format::Text,
///     verbose:        false,
///     no_color:       false
/// };
/// ```
#[derive(Debug, Clone)]
pub struct EvaluateParams {
    /// Path to the dataset, or "-" for JSON Lines on stdin.
    pub dataset_path:   String,
    /// Evaluate only the first N examples.
    pub limit:          Option<usize>,
    /// Number of examples rendered in detail.
    pub preview:        Option<usize>,
    /// Skip schema cleaning of references.
    pub no_clean:       bool,
    /// Minimum exact-match percentage for a zero exit code.
    pub min_match_rate: Option<f64>,
    pub output_format:  Format,
    /// Show canonical forms for previewed examples.
    pub verbose:        bool,
    pub no_color:       bool
}

/// Output from CLI command execution.
///
/// Represents the final output ready for display, including the exit
/// code and all lines to be printed to stdout.
///
/// # Example
///
/// ```
/// use nl2sql_eval::app::CommandOutput;
///
/// let output = CommandOutput {
///     exit_code: 0,
///     stdout:    vec!["select name from t".to_string()]
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code for the process (0=success, 1=mismatch or rate below minimum).
    pub exit_code: i32,
    /// Lines to print to stdout.
    pub stdout:    Vec<String>
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_params_clone() {
        let params = EvaluateParams {
            dataset_path:   "data.json".to_string(),
            limit:          None,
            preview:        Some(3),
            no_clean:       true,
            min_match_rate: Some(50.0),
            output_format:  Format::Json,
            verbose:        false,
            no_color:       true
        };
        let cloned = params.clone();
        assert_eq!(cloned.dataset_path, params.dataset_path);
        assert_eq!(cloned.preview, Some(3));
    }

    #[test]
    fn test_command_output_debug() {
        let output = CommandOutput {
            exit_code: 1,
            stdout:    vec!["line1".to_string()]
        };
        assert!(format!("{:?}", output).contains("CommandOutput"));
    }
}
