//! Seed search for a fixed three-register machine.
//!
//! This crate finds the initial value of register A that makes a small, hard-coded
//! bit-manipulation program print a chosen digit sequence. It is organised as:
//! 1. **Common:** Constants (default target, scan ceiling, masks) and error types.
//! 2. **Machine:** Register file, the fixed program table, and the runner.
//! 3. **Search:** Suffix matching, digit-construction search, and the legacy linear scan.
//! 4. **Config:** The search configuration value (target, ceiling, strategy).
//! 5. **Stats:** Counters collected while searching.

/// Common constants and error types.
pub mod common;
/// Search configuration (target, ceiling, strategy) and its JSON loader.
pub mod config;
/// The fixed register machine (registers, program, runner).
pub mod machine;
/// Seed search strategies and probe reporting.
pub mod search;
/// Search statistics collection and reporting.
pub mod stats;

/// Search configuration; use `SearchConfig::default()` or load it from JSON.
pub use crate::config::SearchConfig;
/// Runs the fixed program for one seed and returns its output digits.
pub use crate::machine::simulate;
/// Search entry point; construct with `Searcher::new`.
pub use crate::search::Searcher;
