pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';

/// Space, tab, line feed and carriage return. Nothing else counts.
///
/// Vertical tab and form feed are compared as content, unlike C `isspace`.
#[must_use]
pub const fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | LF | CR)
}

/// Fold a carriage return onto a line feed.
#[must_use]
pub const fn normalize_line_ending(c: u8) -> u8 {
    if c == CR { LF } else { c }
}
