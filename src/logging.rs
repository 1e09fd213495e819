//! Diagnostic logging on stderr. Stdout is reserved for the result line.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::DEFAULT_LOG_LEVEL;

/// Environment variable that overrides every other log level source.
pub const LOG_ENV_VAR: &str = "JUDGE_CHECKER_LOG";

/// Pick the filter directive: environment, then `-v` count, then config.
#[must_use]
pub fn filter_directive(env: Option<&str>, verbose: u8, configured: &str) -> String {
    if let Some(directive) = env.map(str::trim).filter(|d| !d.is_empty()) {
        return directive.to_string();
    }
    match verbose {
        0 => configured.to_string(),
        1 => "judge_checker=debug".to_string(),
        _ => "judge_checker=trace".to_string(),
    }
}

/// Build the filter for `directive`, falling back to the configured level and
/// then to the built-in default when a directive does not parse.
#[must_use]
pub fn build_filter(directive: &str, configured: &str) -> EnvFilter {
    EnvFilter::try_new(directive)
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(verbose: u8, configured: &str) {
    let env = std::env::var(LOG_ENV_VAR).ok();
    let directive = filter_directive(env.as_deref(), verbose, configured);
    let filter = build_filter(&directive, configured);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
