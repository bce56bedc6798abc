//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.nl2sql-eval.toml` in current directory
//! 4. `~/.config/nl2sql-eval/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [evaluation]
//! limit = 15                # evaluate only the first N examples
//! clean_references = true   # rewrite reference columns against the table
//! min_match_rate = 0.0      # percent; lower rates exit with code 1
//!
//! [output]
//! preview = 5               # examples shown in detail in text output
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `NL2SQL_EVAL_LIMIT` | Maximum number of examples |
//! | `NL2SQL_EVAL_PREVIEW` | Examples shown in detail |
//! | `NL2SQL_EVAL_MIN_MATCH_RATE` | Minimum exact-match percentage |

use std::{
    env, fs,
    path::{Path, PathBuf},
    str::FromStr
};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub evaluation: EvaluationConfig,
    #[serde(default)]
    pub output:     OutputConfig
}

/// Evaluation run configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub limit:            Option<usize>,
    pub clean_references: bool,
    /// Percentage in `[0, 100]`
    pub min_match_rate:   f64
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            limit:            None,
            clean_references: true,
            min_match_rate:   0.0
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub preview: usize
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            preview: 5
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.nl2sql-eval.toml)
    /// 3. Config file in home directory (~/.config/nl2sql-eval/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("nl2sql-eval")
                .join("config.toml");

            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        // Local config overrides home config
        let local_config = PathBuf::from(".nl2sql-eval.toml");
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        Self::parse(&content)
    }

    /// Parse TOML config content.
    pub fn parse(content: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| config_error(format!("Invalid config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Override values from `NL2SQL_EVAL_*` environment variables.
    pub fn apply_env(&mut self) -> AppResult<()> {
        if let Some(limit) = env_value::<usize>("NL2SQL_EVAL_LIMIT")? {
            self.evaluation.limit = Some(limit);
        }

        if let Some(preview) = env_value::<usize>("NL2SQL_EVAL_PREVIEW")? {
            self.output.preview = preview;
        }

        if let Some(rate) = env_value::<f64>("NL2SQL_EVAL_MIN_MATCH_RATE")? {
            self.evaluation.min_match_rate = rate;
        }

        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        let rate = self.evaluation.min_match_rate;
        if !(0.0..=100.0).contains(&rate) {
            return Err(config_error(format!(
                "min_match_rate must be a percentage between 0 and 100, got {}",
                rate
            )));
        }
        Ok(())
    }
}

fn env_value<T: FromStr>(name: &str) -> AppResult<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| config_error(format!("Invalid value for {}: '{}'", name, raw))),
        Err(_) => Ok(None)
    }
}
