//! # Program Table Tests

use quinesearch_core::common::DEFAULT_TARGET;
use quinesearch_core::machine::program::{Op, PROGRAM, encoded};

#[test]
fn test_program_encodes_to_default_target() {
    assert_eq!(encoded(), DEFAULT_TARGET.to_vec());
}

#[test]
fn test_program_ends_with_backward_jump() {
    assert_eq!(PROGRAM.last(), Some(&Op::Jnz(0)));
    assert_eq!(PROGRAM.iter().filter(|op| **op == Op::Out).count(), 1);
}

#[test]
fn test_disassembly() {
    let lines: Vec<String> = PROGRAM.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        [
            "bst  B, A & 7",
            "bxl  B, 1",
            "cdv  C, A >> B",
            "bxc  B, C",
            "adv  A, 3",
            "bxl  B, 4",
            "out  B & 7",
            "jnz  0",
        ]
    );
}
