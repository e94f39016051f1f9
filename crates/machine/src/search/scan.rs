//! Linear scan with multiplicative escalation.
//!
//! A cursor starts at 0. Each candidate whose output is a suffix of the target moves the
//! cursor to `cursor * 8`, so the next candidates share its digits as their high digits;
//! any other candidate moves it to `cursor + 1`. A candidate whose output is longer than the
//! target never matches.
//!
//! The walk is order dependent: a short accidental match can push the cursor past the
//! answer. [`Searcher::digits`] does not have this problem.

use crate::common::constants::DIGIT_RADIX;
use crate::common::error::SearchError;
use crate::machine::simulate;

use super::reporter::{Probe, Reporter};
use super::suffix::expected_suffix;
use super::{Outcome, Searcher};

impl Searcher {
    /// Walks the cursor upward until a full match or the ceiling.
    ///
    /// Returns [`Outcome::Found`] on the first candidate whose output equals the whole target,
    /// otherwise [`Outcome::Exhausted`] with the cursor the scan stopped at.
    ///
    /// # Errors
    ///
    /// Propagates reporter failures.
    pub fn scan(&mut self, reporter: &mut dyn Reporter) -> Result<Outcome, SearchError> {
        let mut cursor = 0u64;

        while cursor < self.ceiling {
            let output = simulate(cursor);
            let expected = expected_suffix(&self.target, output.len());
            let matched = expected == Some(output.as_slice());

            self.stats.record(output.len(), matched);
            reporter.report(&Probe {
                seed: cursor,
                output: &output,
                expected,
                matched,
            })?;

            if !matched {
                cursor += 1;
                continue;
            }
            if output.len() == self.target.len() {
                return Ok(Outcome::Found(cursor));
            }

            tracing::debug!(cursor, depth = output.len(), "suffix matched, escalating");
            cursor = match cursor {
                // 0 * 8 would revisit the same candidate forever.
                0 => 1,
                // A partial match has fewer digits than a validated target, so the cursor is
                // below 8^20; the check only guards the register width.
                _ => match cursor.checked_mul(DIGIT_RADIX) {
                    Some(next) => next,
                    None => return Ok(Outcome::Exhausted { cursor }),
                },
            };
        }

        Ok(Outcome::Exhausted { cursor })
    }
}
