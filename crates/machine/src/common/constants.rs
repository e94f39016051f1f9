//! Crate-wide constants.
//!
//! Masks and widths follow directly from the program: registers are consumed three
//! bits at a time, and register C is truncated to 32 bits after every shift.

/// Digit sequence the default search must reproduce.
///
/// This is also the fixed program itself, encoded as opcode/operand pairs.
pub const DEFAULT_TARGET: [u8; 16] = [2, 4, 1, 1, 7, 5, 4, 6, 0, 3, 1, 4, 5, 5, 3, 0];

/// Exclusive upper bound on the linear scan cursor (10^15).
pub const SCAN_CEILING: u64 = 1_000_000_000_000_000;

/// Number of bits consumed from register A per iteration.
pub const DIGIT_BITS: u32 = 3;

/// Mask selecting one octal digit.
pub const DIGIT_MASK: u64 = 0b111;

/// Number of distinct values an output digit can take.
pub const DIGIT_RADIX: u64 = 1 << DIGIT_BITS;

/// Mask applied to register C after the shift in `cdv`.
pub const SCRATCH_MASK: u64 = 0xFFFF_FFFF;

/// Longest target whose seeds still fit a 64-bit register (8^21 = 2^63).
pub const MAX_TARGET_LEN: usize = 21;
