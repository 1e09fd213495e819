//! Forward-only character sources consumed by the comparator.
//!
//! Characters are bytes, read one at a time the way a C `fgetc` loop would see
//! them. End-of-stream is `None`; read failures are reported, never folded into
//! end-of-stream.

use std::io::{self, BufRead, ErrorKind};

/// A forward-only sequence of characters with an explicit end marker.
pub trait CharStream {
    /// Fetch the next character, or `None` once the stream is exhausted.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the source cannot be read.
    fn next_char(&mut self) -> io::Result<Option<u8>>;
}

impl<S: CharStream + ?Sized> CharStream for &mut S {
    fn next_char(&mut self) -> io::Result<Option<u8>> {
        (**self).next_char()
    }
}

/// Character stream over any buffered reader.
///
/// Borrows bytes straight out of the reader's buffer, so wrapping a file in
/// `BufReader` costs one refill per buffer, not one syscall per character.
#[derive(Debug)]
pub struct ByteStream<R> {
    reader: R,
}

impl<R: BufRead> ByteStream<R> {
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    #[must_use]
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> CharStream for ByteStream<R> {
    fn next_char(&mut self) -> io::Result<Option<u8>> {
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            let Some(&byte) = buf.first() else {
                return Ok(None);
            };
            self.reader.consume(1);
            return Ok(Some(byte));
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
