use tracing::{debug, trace};

use crate::error::{CheckerError, Result, StreamRole};
use crate::stream::{ByteStream, CharStream};

use super::Classification;
use super::whitespace::{CR, LF, is_whitespace, normalize_line_ending};

/// One of the two streams under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Reference,
    Candidate,
}

impl Side {
    const fn role(self) -> StreamRole {
        match self {
            Self::Reference => StreamRole::Reference,
            Self::Candidate => StreamRole::Candidate,
        }
    }
}

/// Scan states. Every transition is made by [`Comparator::step`].
///
/// - `Syncing`: at least one cursor is on whitespace; cursors on whitespace
///   advance together and shape differences are flagged.
/// - `Comparing`: at least one cursor is on a non-whitespace character (end
///   of stream counts as one); characters must match exactly.
/// - `Draining(side)`: the other side has ended; the rest of `side` must be
///   whitespace.
/// - `Finished`: terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Syncing,
    Comparing,
    Draining(Side),
    Finished(Classification),
}

#[derive(Debug)]
struct Cursor<S> {
    stream: S,
    current: Option<u8>,
    role: StreamRole,
}

impl<S: CharStream> Cursor<S> {
    fn prime(stream: S, role: StreamRole) -> Result<Self> {
        let mut cursor = Self {
            stream,
            current: None,
            role,
        };
        cursor.advance()?;
        Ok(cursor)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self
            .stream
            .next_char()
            .map_err(|source| CheckerError::StreamRead {
                role: self.role,
                source,
            })?;
        Ok(())
    }

    fn on_whitespace(&self) -> bool {
        self.current.is_some_and(is_whitespace)
    }

    const fn at_end(&self) -> bool {
        self.current.is_none()
    }
}

/// Lock-step scanner over a reference and a candidate stream.
///
/// Owns both cursors for the length of one comparison. Streams are never
/// closed; pass `&mut stream` to keep using them afterwards.
#[derive(Debug)]
pub struct Comparator<R, C> {
    reference: Cursor<R>,
    candidate: Cursor<C>,
    accumulated: Classification,
}

impl<R: CharStream, C: CharStream> Comparator<R, C> {
    /// Position both streams on their first character.
    ///
    /// # Errors
    /// Returns [`CheckerError::StreamRead`] if either first read fails.
    pub fn new(reference: R, candidate: C) -> Result<Self> {
        Ok(Self {
            reference: Cursor::prime(reference, StreamRole::Reference)?,
            candidate: Cursor::prime(candidate, StreamRole::Candidate)?,
            accumulated: Classification::ExactMatch,
        })
    }

    /// Classification collected so far, before any terminal decision.
    #[must_use]
    pub const fn accumulated(&self) -> Classification {
        self.accumulated
    }

    /// Drive the state machine to a terminal state.
    ///
    /// # Errors
    /// Returns [`CheckerError::StreamRead`] if a stream fails mid-scan.
    pub fn run(mut self) -> Result<Classification> {
        let mut state = ScanState::Syncing;
        loop {
            if let ScanState::Finished(result) = state {
                debug!(result = %result, "comparison finished");
                return Ok(result);
            }
            let next = self.step(state)?;
            if std::mem::discriminant(&next) != std::mem::discriminant(&state) {
                trace!(from = ?state, to = ?next, "scan transition");
            }
            state = next;
        }
    }

    /// Perform one transition.
    ///
    /// # Errors
    /// Returns [`CheckerError::StreamRead`] if advancing a stream fails.
    pub fn step(&mut self, state: ScanState) -> Result<ScanState> {
        match state {
            ScanState::Syncing => self.sync(),
            ScanState::Comparing => self.compare(),
            ScanState::Draining(side) => self.drain(side),
            ScanState::Finished(result) => Ok(ScanState::Finished(result)),
        }
    }

    fn flag_whitespace(&mut self) {
        self.accumulated = Classification::WhitespaceMismatch;
    }

    fn sync(&mut self) -> Result<ScanState> {
        if !self.reference.on_whitespace() && !self.candidate.on_whitespace() {
            return Ok(ScanState::Comparing);
        }

        if self.reference.current != self.candidate.current {
            // End of stream is settled in one place, by `compare`.
            if self.reference.at_end() || self.candidate.at_end() {
                return Ok(ScanState::Comparing);
            }
            if self.reference.current == Some(CR) && self.candidate.current == Some(LF) {
                self.reference.advance()?;
                if self.reference.current != self.candidate.current {
                    self.flag_whitespace();
                }
            } else {
                self.flag_whitespace();
            }
        }

        if self.reference.on_whitespace() {
            self.reference.advance()?;
        }
        if self.candidate.on_whitespace() {
            self.candidate.advance()?;
        }
        Ok(ScanState::Syncing)
    }

    fn compare(&mut self) -> Result<ScanState> {
        if self.reference.on_whitespace() && self.candidate.on_whitespace() {
            return Ok(ScanState::Syncing);
        }

        match (self.reference.current, self.candidate.current) {
            (None, None) => Ok(ScanState::Finished(self.accumulated)),
            (None, Some(c)) => Ok(Self::begin_drain(Side::Candidate, c)),
            (Some(c), None) => Ok(Self::begin_drain(Side::Reference, c)),
            (Some(a), Some(b)) if a != b => {
                Ok(ScanState::Finished(Classification::ContentMismatch))
            }
            (Some(_), Some(_)) => {
                self.reference.advance()?;
                self.candidate.advance()?;
                Ok(ScanState::Comparing)
            }
        }
    }

    const fn begin_drain(side: Side, current: u8) -> ScanState {
        if is_whitespace(current) {
            ScanState::Draining(side)
        } else {
            ScanState::Finished(Classification::ContentMismatch)
        }
    }

    fn drain(&mut self, side: Side) -> Result<ScanState> {
        let next = match side {
            Side::Reference => {
                self.reference.advance()?;
                self.reference.current
            }
            Side::Candidate => {
                self.candidate.advance()?;
                self.candidate.current
            }
        };

        Ok(match next {
            None => ScanState::Finished(self.accumulated),
            Some(c) if is_whitespace(normalize_line_ending(c)) => ScanState::Draining(side),
            Some(c) => {
                debug!(side = %side.role(), byte = c, "non-whitespace in trailing remainder");
                ScanState::Finished(Classification::ContentMismatch)
            }
        })
    }
}

/// Compare two character streams.
///
/// # Errors
/// Returns [`CheckerError::StreamRead`] if either stream fails to read.
pub fn compare<R: CharStream, C: CharStream>(
    reference: R,
    candidate: C,
) -> Result<Classification> {
    Comparator::new(reference, candidate)?.run()
}

/// Compare two in-memory outputs.
///
/// # Errors
/// Never fails in practice; the signature matches [`compare`].
pub fn compare_bytes(reference: &[u8], candidate: &[u8]) -> Result<Classification> {
    compare(ByteStream::new(reference), ByteStream::new(candidate))
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
