use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the three checker inputs a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamRole {
    Input,
    Reference,
    Candidate,
}

impl fmt::Display for StreamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => f.write_str("test input"),
            Self::Reference => f.write_str("reference output"),
            Self::Candidate => f.write_str("candidate output"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Failed to open {role}: {path}")]
    FileOpen {
        role: StreamRole,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {role}")]
    StreamRead {
        role: StreamRole,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CheckerError {
    /// Short category label used as the heading of printed errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::FileOpen { .. } => "FileOpen",
            Self::StreamRead { .. } => "StreamRead",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Underlying cause, if any, rendered for the detail line.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileOpen { source, .. } | Self::StreamRead { source, .. } => {
                Some(source.to_string())
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::FileOpen { .. } => Some("Check that the file exists and is readable"),
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Fix the configuration file or pass --no-config")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
