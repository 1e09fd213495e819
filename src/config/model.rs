use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Default tracing filter when neither the environment nor `-v` sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Checker configuration, read from `.judge-checker.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Result format written to stdout.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the result after a successful comparison (default: true).
    #[serde(default = "default_true")]
    pub status_line: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            status_line: true,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Tracing filter directive, e.g. `warn` or `judge_checker=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
