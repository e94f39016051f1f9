//! Reporter that records every probe it sees.

use std::io;

use quinesearch_core::common::SearchError;
use quinesearch_core::search::{Probe, Reporter};

/// Owned copy of a [`Probe`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recorded {
    /// Seed that was simulated.
    pub seed: u64,
    /// Its output.
    pub output: Vec<u8>,
    /// Target suffix it was compared against.
    pub expected: Option<Vec<u8>>,
    /// Verdict.
    pub matched: bool,
}

/// Collects probes, optionally failing after a fixed number of them.
#[derive(Debug, Default)]
pub struct Recorder {
    /// Probes seen so far, in order.
    pub probes: Vec<Recorded>,
    /// Number of probes accepted before every further report fails.
    pub fail_after: Option<usize>,
}

impl Recorder {
    /// A recorder that fails once `n` probes have been recorded.
    pub const fn failing_after(n: usize) -> Self {
        Self {
            probes: Vec::new(),
            fail_after: Some(n),
        }
    }

    /// Seeds of all accepted probes, in order.
    pub fn accepted(&self) -> Vec<u64> {
        self.probes
            .iter()
            .filter(|p| p.matched)
            .map(|p| p.seed)
            .collect()
    }
}

impl Reporter for Recorder {
    fn report(&mut self, probe: &Probe<'_>) -> Result<(), SearchError> {
        if self.fail_after.is_some_and(|n| self.probes.len() >= n) {
            return Err(SearchError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "recorder closed",
            )));
        }
        self.probes.push(Recorded {
            seed: probe.seed,
            output: probe.output.to_vec(),
            expected: probe.expected.map(<[u8]>::to_vec),
            matched: probe.matched,
        });
        Ok(())
    }
}
