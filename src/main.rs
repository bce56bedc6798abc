//! # NL2SQL Eval
//!
//! Exact-match evaluation for text-to-SQL models.
//!
//! Generated SQL rarely matches its reference character for character: the
//! model lowercases keywords, swaps quote styles, reorders `WHERE`
//! conditions or spells a column `School_Club_Team` where the dataset says
//! `School/Club Team`. `nl2sql-eval` maps both sides through a fixed
//! canonicalization pipeline and compares the results, so only differences
//! that change the query's meaning count as misses.
//!
//! # Quick Start
//!
//! ```bash
//! # Canonical form of a statement
//! nl2sql-eval canonicalize "SELECT Title FROM movies WHERE Year > 2010"
//!
//! # Watch every pipeline stage
//! nl2sql-eval canonicalize --trace "SELECT \"2010/ 11\" FROM t"
//!
//! # Compare one prediction
//! nl2sql-eval compare "select title from movies" "SELECT Title FROM movies"
//!
//! # Evaluate a dataset, failing CI below 60% exact match
//! nl2sql-eval evaluate -d predictions.jsonl --min-match-rate 60
//!
//! # Stream JSON Lines from another tool
//! generate-predictions | nl2sql-eval evaluate -d - -f json
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Command-line arguments
//! 2. Environment variables (`NL2SQL_EVAL_LIMIT`, `NL2SQL_EVAL_PREVIEW`,
//!    `NL2SQL_EVAL_MIN_MATCH_RATE`)
//! 3. `.nl2sql-eval.toml` in current directory
//! 4. `~/.config/nl2sql-eval/config.toml`
//!
//! ```toml
//! [evaluation]
//! limit = 15
//! clean_references = true
//! min_match_rate = 0.0
//!
//! [output]
//! preview = 5
//! ```
//!
//! Logging goes to stderr and is filtered with `RUST_LOG` (default `warn`).
//!
//! # Exit Codes
//!
//! - `0` - Success: canonical forms match, or the match rate reached the
//!   minimum
//! - `1` - `compare` found a mismatch, or `evaluate` fell below
//!   `--min-match-rate`
//! - `2` - Error (unreadable file, malformed dataset, invalid config)
//!
//! # Output Formats
//!
//! - `text` - Human-readable colored output (default)
//! - `json` - Structured JSON for programmatic processing
//! - `yaml` - YAML format

use std::{io, process};

use clap::Parser;
use nl2sql_eval::{
    app::{
        CanonicalizeParams, CommandOutput, CompareParams, EvaluateParams, run_canonicalize,
        run_compare, run_evaluate
    },
    cli::{Cli, Commands},
    config::Config,
    error::AppResult
};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    match run() {
        Ok(output) => {
            for line in &output.stdout {
                println!("{}", line);
            }
            process::exit(output.exit_code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> AppResult<CommandOutput> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Canonicalize {
            sql,
            input,
            trace,
            no_color
        } => run_canonicalize(CanonicalizeParams {
            sql,
            input: input.map(|p| p.display().to_string()),
            trace,
            no_color
        }),
        Commands::Compare {
            prediction,
            reference,
            table,
            output_format,
            no_color
        } => run_compare(CompareParams {
            prediction,
            reference,
            table_path: table.map(|p| p.display().to_string()),
            output_format,
            no_color
        }),
        Commands::Evaluate {
            dataset,
            limit,
            preview,
            no_clean,
            min_match_rate,
            output_format,
            verbose,
            no_color
        } => {
            let config = Config::load()?;
            run_evaluate(
                EvaluateParams {
                    dataset_path: dataset.display().to_string(),
                    limit,
                    preview,
                    no_clean,
                    min_match_rate,
                    output_format,
                    verbose,
                    no_color
                },
                config
            )
        }
    }
}
