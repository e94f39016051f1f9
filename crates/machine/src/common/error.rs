//! Error types.
//!
//! Two families exist:
//! 1. **Configuration:** Problems found while loading or validating a [`SearchConfig`](crate::config::SearchConfig).
//! 2. **Search:** Failures raised while a search is running.

use std::io;

use thiserror::Error;

use super::constants::MAX_TARGET_LEN;

/// Errors raised while loading or validating a search configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    /// The configuration file is not valid JSON for a `SearchConfig`.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The target has no digits.
    #[error("target must contain at least one digit")]
    EmptyTarget,

    /// The target is longer than a 64-bit seed can encode.
    #[error("target has {0} digits, at most {max} are supported", max = MAX_TARGET_LEN)]
    TargetTooLong(usize),

    /// A target element is not an octal digit.
    #[error("target digit {digit} at index {index} is outside 0..=7")]
    InvalidDigit {
        /// Position of the offending element.
        index: usize,
        /// The offending value.
        digit: u8,
    },

    /// The strategy name is not one of `digits` or `scan`.
    #[error("unknown strategy `{0}`, expected `digits` or `scan`")]
    UnknownStrategy(String),

    /// The scan ceiling leaves no candidate to try.
    #[error("scan ceiling must be greater than zero")]
    ZeroCeiling,
}

/// Errors raised while a search is running.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A probe reporter failed to write.
    #[error("failed to report probe: {0}")]
    Io(#[from] io::Error),

    /// Appending a digit to a candidate overflowed the register width.
    ///
    /// Targets longer than [`MAX_TARGET_LEN`] are rejected before a search starts, so a
    /// validated search never produces this.
    #[error("candidate {0:#o} cannot be extended without overflowing")]
    SeedOverflow(u64),
}
