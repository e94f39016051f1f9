//! Common constants and types shared by the machine and the search driver.
//!
//! This module provides:
//! 1. **Constants:** The default target, the scan ceiling, and the bit masks the program uses.
//! 2. **Error Handling:** Configuration and search error enums.

/// Constants used throughout the crate.
pub mod constants;

/// Error types for configuration loading and searching.
pub mod error;

pub use constants::{DEFAULT_TARGET, MAX_TARGET_LEN, SCAN_CEILING};
pub use error::{ConfigError, SearchError};
