use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "judge-checker")]
#[command(
    author,
    version,
    about = "Compare a program's output against a reference, tolerating whitespace"
)]
#[command(long_about = "Compares a candidate output against a reference output token by token.\n\
    Differences in whitespace between tokens are tolerated but reported.\n\n\
    Exit codes:\n  \
    0 - Exact match\n  \
    1 - Content mismatch\n  \
    2 - Whitespace-only mismatch\n  \
    -1 - Precondition error (bad arguments, unreadable file, bad config)")]
pub struct Cli {
    /// Test input file (opened to validate it, never read)
    pub input: PathBuf,

    /// Reference output file
    pub reference: PathBuf,

    /// Candidate output file
    pub candidate: PathBuf,

    /// Increase log verbosity on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the result line
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Result format [possible values: text, json] (overrides config)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
