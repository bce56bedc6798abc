use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// NL2SQL Eval - Canonicalize generated SQL and score it against references
#[derive(Parser, Debug)]
#[command(name = "nl2sql-eval")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical form of SQL statements
    Canonicalize {
        /// SQL statements to canonicalize
        sql: Vec<String>,

        /// Read one statement per line from a file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Show the output of every pipeline stage
        #[arg(long)]
        trace: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// Compare a predicted statement with a reference
    Compare {
        /// Predicted SQL
        prediction: String,

        /// Reference SQL
        reference: String,

        /// Table JSON used to clean reference column names
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// Evaluate a dataset of predictions
    Evaluate {
        /// Path to dataset file: .json, .jsonl, .yaml (use - for JSON Lines on stdin)
        #[arg(short, long)]
        dataset: PathBuf,

        /// Evaluate only the first N examples
        #[arg(short, long, env = "NL2SQL_EVAL_LIMIT")]
        limit: Option<usize>,

        /// Number of examples shown in detail
        #[arg(short, long, env = "NL2SQL_EVAL_PREVIEW")]
        preview: Option<usize>,

        /// Compare references as written, without schema column cleaning
        #[arg(long)]
        no_clean: bool,

        /// Minimum exact-match percentage; lower rates exit with code 1
        #[arg(long, env = "NL2SQL_EVAL_MIN_MATCH_RATE")]
        min_match_rate: Option<f64>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Show canonical forms for previewed examples
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
