use colored::Colorize;
use serde::Serialize;

use crate::{
    canonical::StageOutput,
    evaluate::{ComparisonOutcome, EvaluationReport, ExampleOutcome}
};

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool,
    /// Number of examples rendered in detail
    pub preview: usize
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true,
            verbose: false,
            preview: 5
        }
    }
}

const RULE: &str = "==================================================";

/// Single comparison for serialization
#[derive(Debug, Serialize)]
pub struct ComparisonResult<'a> {
    pub prediction: &'a str,
    pub reference:  &'a str,
    #[serde(flatten)]
    pub outcome:    &'a ComparisonOutcome
}

/// Format an evaluation report based on output options
pub fn format_report(report: &EvaluationReport, opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(report).unwrap_or_default(),
        OutputFormat::Text => format_text_report(report, opts)
    }
}

/// Format one prediction/reference comparison
pub fn format_comparison(
    prediction: &str,
    reference: &str,
    outcome: &ComparisonOutcome,
    opts: &OutputOptions
) -> String {
    let result = ComparisonResult {
        prediction,
        reference,
        outcome
    };
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(&result).unwrap_or_default(),
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str(&format!("Prediction: {}\n", outcome.canonical_prediction));
            output.push_str(&format!("Reference:  {}\n", outcome.canonical_reference));
            output.push_str(&format!(
                "Exact match: {}\n",
                match_label(outcome.exact_match, opts.colored)
            ));
            output.push_str(&format!("Similarity: {:.2}%", outcome.similarity * 100.0));
            output
        }
    }
}

/// Format the per-stage trace of one canonicalization
pub fn format_trace(input: &str, steps: &[StageOutput], opts: &OutputOptions) -> String {
    let mut output = String::new();
    let header = format!("Input: {}", input);
    if opts.colored {
        output.push_str(&header.cyan().bold().to_string());
    } else {
        output.push_str(&header);
    }
    output.push('\n');

    let width = steps.iter().map(|s| s.stage.len()).max().unwrap_or(0);
    for (i, step) in steps.iter().enumerate() {
        output.push_str(&format!(
            "{:>2}. {:<width$}  {}\n",
            i + 1,
            step.stage,
            step.output,
            width = width
        ));
    }
    output
}

fn format_text_report(report: &EvaluationReport, opts: &OutputOptions) -> String {
    let mut output = String::new();

    if opts.colored {
        output.push_str(&"=== NL2SQL Evaluation ===\n\n".bold().to_string());
    } else {
        output.push_str("=== NL2SQL Evaluation ===\n\n");
    }

    for outcome in report.outcomes.iter().take(opts.preview) {
        output.push_str(&format_example(outcome, opts));
        output.push('\n');
    }

    output.push_str(RULE);
    output.push('\n');
    if opts.colored {
        output.push_str(&"FINAL RESULTS:".bold().to_string());
    } else {
        output.push_str("FINAL RESULTS:");
    }
    output.push('\n');

    let rate = format!("{:.2}%", report.match_rate_percent());
    let rate = if !opts.colored {
        rate
    } else if report.total > 0 && report.exact_matches == report.total {
        rate.green().to_string()
    } else if report.exact_matches == 0 {
        rate.red().to_string()
    } else {
        rate.yellow().to_string()
    };
    output.push_str(&format!(
        "Exact Match: {} ({}/{})\n",
        rate, report.exact_matches, report.total
    ));
    output.push_str(&format!(
        "Average Similarity: {:.2}%\n",
        report.mean_similarity_percent()
    ));
    output.push_str(&format!("Mismatches: {}\n", report.mismatch_count()));
    output.push_str(&format!("Total Examples: {}\n", report.total));

    output
}

fn format_example(outcome: &ExampleOutcome, opts: &OutputOptions) -> String {
    let mut text = String::new();
    let header = format!("Example #{}", outcome.index + 1);
    if opts.colored {
        text.push_str(&header.cyan().bold().to_string());
    } else {
        text.push_str(&header);
    }
    text.push('\n');

    if let Some(question) = &outcome.question {
        text.push_str(&format!("Question: {}\n", question));
    }
    if let Some(table) = &outcome.table {
        text.push_str(&format!("Table: {}\n", table));
    }
    text.push_str(&format!("Expected: {}\n", outcome.reference));
    text.push_str(&format!("Predicted: {}\n", outcome.prediction));

    if opts.verbose {
        text.push_str(&format!(
            "Canonical expected: {}\n",
            outcome.comparison.canonical_reference
        ));
        text.push_str(&format!(
            "Canonical predicted: {}\n",
            outcome.comparison.canonical_prediction
        ));
    }

    text.push_str(&format!(
        "Similarity: {:.2}%\n",
        outcome.comparison.similarity * 100.0
    ));
    text.push_str(&format!(
        "Exact match: {}\n",
        match_label(outcome.is_match(), opts.colored)
    ));
    text
}

fn match_label(matched: bool, colored: bool) -> String {
    match (matched, colored) {
        (true, true) => "yes".green().to_string(),
        (true, false) => "yes".to_string(),
        (false, true) => "no".red().to_string(),
        (false, false) => "no".to_string()
    }
}
