//! Search statistics collection and reporting.
//!
//! This module tracks how much work a search did. It provides:
//! 1. **Candidates:** Simulated, accepted (suffix match), and rejected counts.
//! 2. **Machine work:** Total loop iterations executed across all simulations.
//! 3. **Progress:** Deepest digit count matched and host wall time.

use std::fmt;
use std::time::{Duration, Instant};

/// Counters collected while a search runs.
#[derive(Clone, Debug)]
pub struct SearchStats {
    start_time: Instant,
    /// Candidates passed to the machine.
    pub simulated: u64,
    /// Candidates whose output matched a suffix of the target.
    pub accepted: u64,
    /// Candidates whose output did not match.
    pub rejected: u64,
    /// Loop iterations executed by the machine, summed over all candidates.
    pub iterations: u64,
    /// Longest target suffix matched so far.
    pub max_depth: usize,
}

impl Default for SearchStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            simulated: 0,
            accepted: 0,
            rejected: 0,
            iterations: 0,
            max_depth: 0,
        }
    }
}

impl SearchStats {
    /// Records one simulated candidate.
    ///
    /// # Arguments
    ///
    /// * `output_len` - Number of digits the candidate emitted (equal to its loop iterations).
    /// * `matched` - Whether the output matched the target suffix.
    pub fn record(&mut self, output_len: usize, matched: bool) {
        self.simulated += 1;
        self.iterations += output_len as u64;
        if matched {
            self.accepted += 1;
            self.max_depth = self.max_depth.max(output_len);
        } else {
            self.rejected += 1;
        }
    }

    /// Wall time since the counters were created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Fraction of simulated candidates that matched, or 0 when nothing ran.
    pub fn acceptance_rate(&self) -> f64 {
        if self.simulated == 0 {
            0.0
        } else {
            self.accepted as f64 / self.simulated as f64
        }
    }

    /// Prints the statistics block to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.elapsed().as_secs_f64();
        let rate = if seconds > 0.0 {
            self.simulated as f64 / seconds
        } else {
            0.0
        };
        writeln!(
            f,
            "=========================================================="
        )?;
        writeln!(f, "SEED SEARCH STATISTICS")?;
        writeln!(
            f,
            "=========================================================="
        )?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "candidates_simulated     {}", self.simulated)?;
        writeln!(f, "candidates_accepted      {}", self.accepted)?;
        writeln!(f, "candidates_rejected      {}", self.rejected)?;
        writeln!(
            f,
            "acceptance_rate          {:.4}",
            self.acceptance_rate()
        )?;
        writeln!(f, "machine_iterations       {}", self.iterations)?;
        writeln!(f, "max_depth                {}", self.max_depth)?;
        writeln!(f, "candidates_per_sec       {rate:.2}")?;
        write!(
            f,
            "----------------------------------------------------------"
        )
    }
}
