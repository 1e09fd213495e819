use std::fmt;

use serde::Serialize;

use crate::{
    EXIT_CONTENT_MISMATCH, EXIT_EXACT_MATCH, EXIT_INPUT_ERROR, EXIT_WHITESPACE_MISMATCH,
};

/// Outcome of one checker run.
///
/// `InputError` is only ever produced by the harness when a precondition
/// fails; the comparator itself yields one of the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    ExactMatch,
    ContentMismatch,
    WhitespaceMismatch,
    InputError,
}

/// Judging-pipeline status a classification is reported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    Accepted,
    WrongAnswer,
    PresentationError,
    SystemError,
}

impl Classification {
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::ExactMatch => EXIT_EXACT_MATCH,
            Self::ContentMismatch => EXIT_CONTENT_MISMATCH,
            Self::WhitespaceMismatch => EXIT_WHITESPACE_MISMATCH,
            Self::InputError => EXIT_INPUT_ERROR,
        }
    }

    #[must_use]
    pub const fn verdict(self) -> Verdict {
        match self {
            Self::ExactMatch => Verdict::Accepted,
            Self::ContentMismatch => Verdict::WrongAnswer,
            Self::WhitespaceMismatch => Verdict::PresentationError,
            Self::InputError => Verdict::SystemError,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExactMatch => "exact_match",
            Self::ContentMismatch => "content_mismatch",
            Self::WhitespaceMismatch => "whitespace_mismatch",
            Self::InputError => "input_error",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Accepted => "Accepted",
            Self::WrongAnswer => "WrongAnswer",
            Self::PresentationError => "PresentationError",
            Self::SystemError => "SystemError",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[path = "classification_tests.rs"]
mod tests;
