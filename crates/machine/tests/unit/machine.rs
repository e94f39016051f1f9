//! # Machine Tests
//!
//! Stepping, halting and output of the fixed program.

use pretty_assertions::assert_eq;
use rstest::rstest;

use quinesearch_core::machine::{Flow, Machine, PROGRAM, Reg, Registers, output_len, simulate};

use crate::common::reference_output;

#[test]
fn test_seed_zero_emits_one_digit() {
    assert_eq!(simulate(0), vec![5]);
}

#[rstest]
#[case(1, &[5])]
#[case(2, &[7])]
#[case(4, &[1])]
#[case(5, &[0])]
#[case(7, &[2])]
#[case(8, &[1, 5])]
#[case(46, &[3, 0])]
#[case(202972175280682, &[2, 4, 1, 1, 7, 5, 4, 6, 0, 3, 1, 4, 5, 5, 3, 0])]
fn test_simulate_known_seeds(#[case] seed: u64, #[case] expected: &[u8]) {
    assert_eq!(simulate(seed), expected);
}

#[test]
fn test_new_machine_registers() {
    let machine = Machine::new(0o17);
    assert_eq!(machine.registers(), Registers::seeded(0o17));
    assert_eq!(machine.registers().read(Reg::A), 0o17);
    assert_eq!(machine.registers().read(Reg::B), 0);
    assert_eq!(machine.registers().read(Reg::C), 0);
    assert_eq!(machine.pc(), 0);
    assert!(machine.output().is_empty());
    assert!(!machine.is_halted());
}

#[test]
fn test_single_steps_follow_loop_body() {
    // A = 0o15: low digit 5, B = 5 ^ 1 = 4, C = (13 >> 4) & mask = 0.
    let mut machine = Machine::new(0o15);

    assert_eq!(machine.step(), Flow::Continue);
    assert_eq!(machine.registers().read(Reg::B), 5);

    assert_eq!(machine.step(), Flow::Continue);
    assert_eq!(machine.registers().read(Reg::B), 4);

    assert_eq!(machine.step(), Flow::Continue);
    assert_eq!(machine.registers().read(Reg::C), 0);

    assert_eq!(machine.step(), Flow::Continue);
    assert_eq!(machine.registers().read(Reg::B), 4);

    assert_eq!(machine.step(), Flow::Continue);
    assert_eq!(machine.registers().read(Reg::A), 1);

    assert_eq!(machine.step(), Flow::Continue);
    assert_eq!(machine.registers().read(Reg::B), 0);

    assert_eq!(machine.step(), Flow::Continue);
    assert_eq!(machine.output(), &[0]);

    // A is still non-zero, so jnz loops back.
    assert_eq!(machine.step(), Flow::Continue);
    assert_eq!(machine.pc(), 0);
    assert_eq!(machine.iterations(), 1);
}

#[test]
fn test_run_halts_after_one_pass_per_digit() {
    let mut machine = Machine::new(0o777);
    let output = machine.run().to_vec();
    assert!(machine.is_halted());
    assert_eq!(machine.pc(), PROGRAM.len());
    assert_eq!(machine.iterations(), 3);
    assert_eq!(output.len(), 3);
    assert_eq!(machine.registers().read(Reg::A), 0);
    assert_eq!(machine.into_output(), output);
}

#[rstest]
#[case(0, 1)]
#[case(7, 1)]
#[case(8, 2)]
#[case(63, 2)]
#[case(64, 3)]
#[case(u64::MAX, 22)]
fn test_output_len(#[case] seed: u64, #[case] len: usize) {
    assert_eq!(output_len(seed), len);
    assert_eq!(simulate(seed).len(), len);
}

#[test]
fn test_scratch_register_is_masked_to_32_bits() {
    // Low digit 0: B = 1, so C = A >> 1, which exceeds 32 bits before masking.
    let seed = 0o712345670123456701230u64;
    let mut machine = Machine::new(seed);
    for _ in 0..3 {
        let _ = machine.step();
    }
    assert!(seed >> 1 > 0xFFFF_FFFF);
    assert_eq!(machine.registers().read(Reg::C), 1314767180);
    assert_eq!(simulate(seed), reference_output(seed));
}

#[test]
fn test_ceiling_seed_terminates_quickly() {
    let seed = 1_000_000_000_000_000 - 1;
    let mut machine = Machine::new(seed);
    let _ = machine.run();
    assert_eq!(machine.iterations(), 17);
    assert_eq!(
        machine.output(),
        &[5, 5, 5, 6, 3, 5, 5, 1, 4, 7, 0, 0, 1, 4, 6, 1, 6]
    );
}

#[test]
fn test_simulate_is_idempotent() {
    for seed in [0, 1, 46, 0o5611504432025052, u64::MAX] {
        assert_eq!(simulate(seed), simulate(seed));
    }
}

#[test]
fn test_run_with_trace_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("quinesearch_core=trace")
        .with_test_writer()
        .try_init();
    assert_eq!(simulate(0o5611504432025052).len(), 16);
}
