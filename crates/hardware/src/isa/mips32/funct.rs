//! Reduced MIPS32 Function Codes.
//!
//! The function field (bits 26-31) selects the operation of an R-type
//! instruction, i.e. one whose opcode is [`super::opcodes::OP_SPECIAL`].

/// Jump register (JR).
pub const JR: u64 = 0b001000;

/// Add (ADD).
pub const ADD: u64 = 0b100000;

/// Bitwise AND (AND).
pub const AND: u64 = 0b100100;
