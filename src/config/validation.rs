//! Configuration semantic validation.

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::{CheckerError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if `logging.level` is not a valid filter directive.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    let level = config.logging.level.trim();
    if level.is_empty() {
        return Err(CheckerError::Config(
            "logging.level cannot be empty".to_string(),
        ));
    }
    EnvFilter::try_new(level).map_err(|e| {
        CheckerError::Config(format!("logging.level '{level}' is not a valid filter: {e}"))
    })?;
    Ok(())
}
