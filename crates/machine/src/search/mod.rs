//! Seed search.
//!
//! This module finds seeds whose machine output equals the configured target. It provides:
//! 1. **Suffix matching:** Right-aligned comparison of an output against the target.
//! 2. **Digit search:** Builds the seed one octal digit at a time and backtracks (default).
//! 3. **Linear scan:** The cursor walk that multiplies by 8 after each suffix match.
//! 4. **Reporting:** The [`Reporter`] seam every simulated candidate passes through.

/// Digit-construction search.
pub mod digits;

/// Probe reporting (null and writer-backed reporters).
pub mod reporter;

/// Linear scan with multiplicative escalation.
pub mod scan;

/// Suffix comparison helpers.
pub mod suffix;

use std::fmt;

use crate::common::error::{ConfigError, SearchError};
use crate::config::{SearchConfig, Strategy};
use crate::stats::SearchStats;

pub use reporter::{NullReporter, Probe, Reporter, WriteReporter};
pub use suffix::{expected_suffix, is_suffix_match};

/// Result of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A seed whose output equals the whole target.
    Found(u64),
    /// The digit search ran out of branches; no seed produces the target.
    NotFound,
    /// The linear scan reached its ceiling (or could not advance) without a full match.
    Exhausted {
        /// Cursor value when the scan stopped.
        cursor: u64,
    },
}

impl Outcome {
    /// The found seed, if any.
    pub const fn seed(self) -> Option<u64> {
        match self {
            Self::Found(seed) => Some(seed),
            Self::NotFound | Self::Exhausted { .. } => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(seed) => write!(f, "found {seed} ({seed:#o})"),
            Self::NotFound => write!(f, "no seed produces the target"),
            Self::Exhausted { cursor } => write!(f, "scan exhausted at cursor {cursor}"),
        }
    }
}

/// Search driver bound to one target.
#[derive(Debug)]
pub struct Searcher {
    target: Vec<u8>,
    ceiling: u64,
    strategy: Strategy,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher from a configuration.
    ///
    /// # Errors
    ///
    /// Returns the validation error of [`SearchConfig::validate`].
    pub fn new(config: &SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            target: config.target.clone(),
            ceiling: config.ceiling,
            strategy: config.strategy,
            stats: SearchStats::default(),
        })
    }

    /// Target digits this searcher reproduces.
    pub fn target(&self) -> &[u8] {
        &self.target
    }

    /// Counters accumulated by every search run on this searcher.
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Runs the configured strategy.
    ///
    /// # Errors
    ///
    /// Propagates reporter failures and candidate overflow.
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> Result<Outcome, SearchError> {
        tracing::info!(
            strategy = %self.strategy,
            target = ?self.target,
            ceiling = self.ceiling,
            "starting seed search"
        );
        let outcome = match self.strategy {
            Strategy::Digits => self.digits(reporter)?,
            Strategy::Scan => self.scan(reporter)?,
        };
        tracing::info!(
            %outcome,
            simulated = self.stats.simulated,
            accepted = self.stats.accepted,
            "seed search finished"
        );
        Ok(outcome)
    }
}
