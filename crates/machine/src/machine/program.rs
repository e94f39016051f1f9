//! The fixed program.
//!
//! The machine always runs the same eight operations. Each one is encoded as an
//! opcode/operand pair; flattening the encoded program gives back
//! [`DEFAULT_TARGET`](crate::common::DEFAULT_TARGET), which is what makes the default
//! search a quine search.

use std::fmt;

/// One operation of the fixed program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// `B := A mod 8`.
    Bst,
    /// `B := B xor lit`.
    Bxl(u64),
    /// `C := (A >> B) & 0xFFFF_FFFF`.
    Cdv,
    /// `B := B xor C`.
    Bxc,
    /// `A := A >> lit`.
    Adv(u32),
    /// Emit `B mod 8`.
    Out,
    /// Jump to the given operation index unless A is zero.
    Jnz(usize),
}

/// The program every simulation runs, in execution order.
pub const PROGRAM: [Op; 8] = [
    Op::Bst,
    Op::Bxl(1),
    Op::Cdv,
    Op::Bxc,
    Op::Adv(3),
    Op::Bxl(4),
    Op::Out,
    Op::Jnz(0),
];

impl Op {
    /// Returns the opcode/operand pair this operation is encoded as.
    ///
    /// Combo operands 4, 5 and 6 name registers A, B and C; everything else is a literal.
    pub const fn encode(self) -> [u8; 2] {
        match self {
            Self::Adv(n) => [0, n as u8],
            Self::Bxl(n) => [1, n as u8],
            Self::Bst => [2, 4],
            Self::Jnz(target) => [3, target as u8],
            Self::Bxc => [4, 6],
            Self::Out => [5, 5],
            Self::Cdv => [7, 5],
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bst => write!(f, "bst  B, A & 7"),
            Self::Bxl(n) => write!(f, "bxl  B, {n}"),
            Self::Cdv => write!(f, "cdv  C, A >> B"),
            Self::Bxc => write!(f, "bxc  B, C"),
            Self::Adv(n) => write!(f, "adv  A, {n}"),
            Self::Out => write!(f, "out  B & 7"),
            Self::Jnz(target) => write!(f, "jnz  {target}"),
        }
    }
}

/// Flattens the program into its opcode/operand encoding.
pub fn encoded() -> Vec<u8> {
    PROGRAM.iter().flat_map(|op| op.encode()).collect()
}
