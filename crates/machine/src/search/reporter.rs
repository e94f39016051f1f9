//! Probe reporting.
//!
//! Every candidate a search simulates is handed to a [`Reporter`] as a [`Probe`]. The
//! [`WriteReporter`] prints the classic three-line trace:
//!
//! ```text
//! 46: [3, 0]
//! [3, 0] == [3, 0]
//! VALID
//! ```

use std::fmt;
use std::io::Write;

use crate::common::error::SearchError;

/// One simulated candidate and its verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probe<'a> {
    /// Seed loaded into register A.
    pub seed: u64,
    /// Digits the machine emitted.
    pub output: &'a [u8],
    /// Target suffix the output was compared against; `None` when the output is longer than the target.
    pub expected: Option<&'a [u8]>,
    /// Whether the search accepted the candidate.
    pub matched: bool,
}

impl fmt::Display for Probe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {:?}", self.seed, self.output)?;
        match self.expected {
            Some(expected) => write!(f, "{:?} == {:?}", self.output, expected)?,
            None => write!(f, "{:?} == <none>", self.output)?,
        }
        if self.matched {
            write!(f, "\nVALID")?;
        }
        Ok(())
    }
}

/// Receiver for search probes.
pub trait Reporter {
    /// Handles one probe.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Io`] when the probe cannot be written; the search stops.
    fn report(&mut self, probe: &Probe<'_>) -> Result<(), SearchError>;
}

/// Reporter that discards every probe.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    #[inline]
    fn report(&mut self, _probe: &Probe<'_>) -> Result<(), SearchError> {
        Ok(())
    }
}

/// Reporter that writes each probe as text to a writer.
#[derive(Debug)]
pub struct WriteReporter<W: Write> {
    out: W,
}

impl<W: Write> WriteReporter<W> {
    /// Wraps a writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for WriteReporter<W> {
    fn report(&mut self, probe: &Probe<'_>) -> Result<(), SearchError> {
        writeln!(self.out, "{probe}")?;
        Ok(())
    }
}
