//! Whitespace-tolerant comparison of a candidate output against a reference.
//!
//! Tokens must match byte for byte. Differences in the shape of the
//! whitespace between tokens are tolerated but reported as
//! [`Classification::WhitespaceMismatch`]; a reference `\r\n` against a
//! candidate `\n` is treated as the same line break. Trailing whitespace on
//! either side is ignored.

mod classification;
mod scan;
mod whitespace;

pub use classification::{Classification, Verdict};
pub use scan::{Comparator, ScanState, Side, compare, compare_bytes};
pub use whitespace::{is_whitespace, normalize_line_ending};
