//! The fixed register machine.
//!
//! This module runs the hard-coded program against one seed. It provides:
//! 1. **Registers:** The A/B/C register file.
//! 2. **Program:** The fixed operation table and its disassembly.
//! 3. **Runner:** Single-operation stepping and a run-to-halt loop collecting output digits.

/// Fixed operation table.
pub mod program;

/// A/B/C register file.
pub mod regs;

use crate::common::constants::{DIGIT_BITS, DIGIT_MASK, SCRATCH_MASK};

pub use program::{Op, PROGRAM};
pub use regs::{Reg, Registers};

/// Result of executing one operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// The program has more operations to run.
    Continue,
    /// The program fell off the end; no further operation will execute.
    Halt,
}

/// Machine state for one simulation.
#[derive(Clone, Debug)]
pub struct Machine {
    regs: Registers,
    pc: usize,
    output: Vec<u8>,
    iterations: u64,
}

impl Machine {
    /// Creates a machine with A set to `seed`, B and C cleared and the program counter at 0.
    pub fn new(seed: u64) -> Self {
        Self {
            regs: Registers::seeded(seed),
            pc: 0,
            output: Vec::with_capacity(output_len(seed)),
            iterations: 0,
        }
    }

    /// Current register values.
    pub const fn registers(&self) -> Registers {
        self.regs
    }

    /// Index of the next operation to execute.
    pub const fn pc(&self) -> usize {
        self.pc
    }

    /// Digits emitted so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Number of completed passes through the loop body.
    pub const fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Returns true once the program counter has left the program.
    pub const fn is_halted(&self) -> bool {
        self.pc >= PROGRAM.len()
    }

    /// Executes the operation at the program counter.
    ///
    /// A halted machine is left untouched and reports [`Flow::Halt`].
    pub fn step(&mut self) -> Flow {
        let Some(&op) = PROGRAM.get(self.pc) else {
            return Flow::Halt;
        };

        let a = self.regs.read(Reg::A);
        let b = self.regs.read(Reg::B);
        let c = self.regs.read(Reg::C);
        let mut next = self.pc + 1;

        match op {
            Op::Bst => self.regs.write(Reg::B, a & DIGIT_MASK),
            Op::Bxl(lit) => self.regs.write(Reg::B, b ^ lit),
            Op::Cdv => self.regs.write(Reg::C, shr(a, b) & SCRATCH_MASK),
            Op::Bxc => self.regs.write(Reg::B, b ^ c),
            Op::Adv(n) => self.regs.write(Reg::A, shr(a, u64::from(n))),
            Op::Out => self.output.push((b & DIGIT_MASK) as u8),
            Op::Jnz(target) => {
                self.iterations += 1;
                tracing::trace!(
                    iteration = self.iterations,
                    regs = %self.regs,
                    digit = ?self.output.last(),
                    "loop body complete"
                );
                if a != 0 {
                    next = target;
                }
            }
        }

        self.pc = next;
        if self.is_halted() {
            Flow::Halt
        } else {
            Flow::Continue
        }
    }

    /// Steps until the program halts and returns the emitted digits.
    pub fn run(&mut self) -> &[u8] {
        while self.step() == Flow::Continue {}
        &self.output
    }

    /// Consumes the machine and returns its output.
    pub fn into_output(self) -> Vec<u8> {
        self.output
    }
}

/// Runs the fixed program with A set to `seed` and returns the emitted digits.
///
/// The loop body always runs at least once, so a seed of 0 still emits one digit.
pub fn simulate(seed: u64) -> Vec<u8> {
    let mut machine = Machine::new(seed);
    let _ = machine.run();
    machine.into_output()
}

/// Number of digits `simulate(seed)` emits: one per octal digit of the seed, and one for 0.
pub const fn output_len(seed: u64) -> usize {
    if seed == 0 {
        1
    } else {
        let bits = u64::BITS - seed.leading_zeros();
        bits.div_ceil(DIGIT_BITS) as usize
    }
}

/// Logical right shift that yields 0 instead of overflowing for shifts of 64 or more.
#[inline]
const fn shr(val: u64, amount: u64) -> u64 {
    if amount >= u64::BITS as u64 {
        0
    } else {
        val >> amount
    }
}
