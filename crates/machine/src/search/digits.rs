//! Digit-construction search.
//!
//! The last `d` output digits of a seed are exactly the output of its top `d` octal digits:
//! each iteration only reads A and bits above it (the shift into C moves right). The search
//! therefore fixes the seed from its most significant digit down, and a partial candidate at
//! depth `d` must emit exactly `d` digits equal to the last `d` target digits. Children are
//! tried in ascending order, so the first full-depth candidate is the smallest seed.

use crate::common::constants::DIGIT_RADIX;
use crate::common::error::SearchError;
use crate::machine::simulate;

use super::reporter::{Probe, Reporter};
use super::suffix::expected_suffix;
use super::{Outcome, Searcher};

impl Searcher {
    /// Builds the seed digit by digit, backtracking on mismatch.
    ///
    /// Returns [`Outcome::Found`] with the smallest matching seed or [`Outcome::NotFound`].
    ///
    /// # Errors
    ///
    /// Propagates reporter failures, and returns [`SearchError::SeedOverflow`] if a candidate
    /// cannot be extended within 64 bits.
    pub fn digits(&mut self, reporter: &mut dyn Reporter) -> Result<Outcome, SearchError> {
        let goal = self.target.len();
        let mut stack: Vec<(u64, usize)> = vec![(0, 0)];
        let mut survivors = Vec::with_capacity(DIGIT_RADIX as usize);

        while let Some((prefix, depth)) = stack.pop() {
            if depth == goal {
                return Ok(Outcome::Found(prefix));
            }

            // Validated targets stop at MAX_TARGET_LEN digits, so every extended prefix is
            // below 8^20 and this cannot fail for a searcher built by `Searcher::new`.
            let base = prefix
                .checked_mul(DIGIT_RADIX)
                .ok_or(SearchError::SeedOverflow(prefix))?;

            survivors.clear();
            for digit in 0..DIGIT_RADIX {
                let candidate = base | digit;
                let output = simulate(candidate);
                let expected = expected_suffix(&self.target, output.len());
                // A leading zero digit does not lengthen the output, so it cannot extend the match.
                let matched = output.len() == depth + 1 && expected == Some(output.as_slice());

                self.stats.record(output.len(), matched);
                reporter.report(&Probe {
                    seed: candidate,
                    output: &output,
                    expected,
                    matched,
                })?;

                if matched {
                    tracing::debug!(candidate, depth = depth + 1, "suffix matched");
                    survivors.push(candidate);
                }
            }

            stack.extend(survivors.iter().rev().map(|&c| (c, depth + 1)));
        }

        Ok(Outcome::NotFound)
    }
}
