use crate::comparator::Classification;
use crate::error::Result;

use super::OutputFormatter;

/// The classic checker status line: `Result: <code>`.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, classification: Classification) -> Result<String> {
        Ok(format!("Result: {}\n", classification.exit_code()))
    }
}
