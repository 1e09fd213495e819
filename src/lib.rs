pub mod cli;
pub mod commands;
pub mod comparator;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod stream;

pub use comparator::{Classification, compare, compare_bytes};
pub use error::{CheckerError, Result};

pub const EXIT_EXACT_MATCH: i32 = 0;
pub const EXIT_CONTENT_MISMATCH: i32 = 1;
pub const EXIT_WHITESPACE_MISMATCH: i32 = 2;
pub const EXIT_INPUT_ERROR: i32 = -1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
