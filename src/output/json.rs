use serde::Serialize;

use crate::comparator::{Classification, Verdict};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    result: i32,
    classification: Classification,
    verdict: Verdict,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, classification: Classification) -> Result<String> {
        let output = JsonOutput {
            result: classification.exit_code(),
            classification,
            verdict: classification.verdict(),
        };
        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
