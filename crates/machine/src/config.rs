//! Search configuration.
//!
//! A [`SearchConfig`] carries everything a search needs to know. It provides:
//! 1. **Defaults:** The sixteen-digit program target, the 10^15 scan ceiling, and the digit strategy.
//! 2. **Loading:** JSON deserialization where every field is optional.
//! 3. **Validation:** Rejection of targets and ceilings no search can work with.
//!
//! The CLI uses `SearchConfig::default()` and overrides individual fields from flags.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::constants::{DEFAULT_TARGET, DIGIT_RADIX, MAX_TARGET_LEN, SCAN_CEILING};
use crate::common::error::ConfigError;

/// Search strategy selection.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Builds the seed one octal digit at a time, backtracking on mismatch.
    #[default]
    Digits,
    /// Walks a cursor upward, multiplying it by 8 after each suffix match.
    Scan,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digits => write!(f, "digits"),
            Self::Scan => write!(f, "scan"),
        }
    }
}

/// Accepts the same lowercase names as the JSON form.
impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "digits" => Ok(Self::Digits),
            "scan" => Ok(Self::Scan),
            _ => Err(ConfigError::UnknownStrategy(s.to_owned())),
        }
    }
}

/// Configuration for one search.
///
/// # Examples
///
/// ```
/// use quinesearch_core::config::{SearchConfig, Strategy};
///
/// let json = r#"{ "target": [3, 0], "strategy": "scan" }"#;
/// let config = SearchConfig::from_json(json).unwrap();
/// assert_eq!(config.target, vec![3, 0]);
/// assert_eq!(config.strategy, Strategy::Scan);
/// assert_eq!(config.ceiling, 1_000_000_000_000_000);
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Digit sequence the machine output must equal.
    pub target: Vec<u8>,
    /// Exclusive upper bound on the linear scan cursor.
    pub ceiling: u64,
    /// Which search to run.
    pub strategy: Strategy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_vec(),
            ceiling: SCAN_CEILING,
            strategy: Strategy::default(),
        }
    }
}

impl SearchConfig {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any validation error
    /// reported by [`SearchConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the errors of
    /// [`SearchConfig::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded search config");
        Self::from_json(&json)
    }

    /// Checks that a search can run with this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the target is empty, longer than [`MAX_TARGET_LEN`], or holds a
    /// value outside 0..=7, or when the ceiling is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        if self.target.len() > MAX_TARGET_LEN {
            return Err(ConfigError::TargetTooLong(self.target.len()));
        }
        if let Some((index, &digit)) = self
            .target
            .iter()
            .enumerate()
            .find(|&(_, &d)| u64::from(d) >= DIGIT_RADIX)
        {
            return Err(ConfigError::InvalidDigit { index, digit });
        }
        if self.ceiling == 0 {
            return Err(ConfigError::ZeroCeiling);
        }
        Ok(())
    }
}
