//! Application logic for the nl2sql-eval CLI.
//!
//! This module contains the command runners separated from the main entry
//! point to enable testing.

mod convert;
mod helpers;
mod run;
mod types;

pub use convert::convert_format;
pub use helpers::{
    collect_statements, create_output_options, effective_min_match_rate, evaluation_exit_code,
    evaluation_settings, load_table
};
pub use run::{run_canonicalize, run_compare, run_evaluate};
pub use types::{CanonicalizeParams, CommandOutput, CompareParams, EvaluateParams};
