//! Register file.
//!
//! The machine has three registers:
//! 1. **A:** Holds the seed and is consumed three bits per iteration.
//! 2. **B:** Scratch; holds the digit being computed.
//! 3. **C:** Scratch; holds the shifted copy of A.

use std::fmt;

/// Register names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg {
    /// Seed/working register.
    A,
    /// First scratch register.
    B,
    /// Second scratch register.
    C,
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

/// Register file holding A, B and C.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    regs: [u64; 3],
}

impl Registers {
    /// Creates a register file with A set to `seed` and both scratch registers cleared.
    ///
    /// # Arguments
    ///
    /// * `seed` - Initial value of register A.
    pub const fn seeded(seed: u64) -> Self {
        Self { regs: [seed, 0, 0] }
    }

    /// Reads a register.
    #[inline]
    pub const fn read(&self, reg: Reg) -> u64 {
        self.regs[reg as usize]
    }

    /// Writes a register.
    #[inline]
    pub const fn write(&mut self, reg: Reg, val: u64) {
        self.regs[reg as usize] = val;
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A={:#o} B={:#o} C={:#o}",
            self.regs[0], self.regs[1], self.regs[2]
        )
    }
}
