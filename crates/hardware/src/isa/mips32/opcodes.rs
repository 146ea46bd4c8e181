//! Reduced MIPS32 Major Opcodes.
//!
//! Defines the major opcodes (bits 0-5, most significant first) understood by the engine.

/// Register-register operations; the function code selects the operation.
pub const OP_SPECIAL: u64 = 0b000000;

/// Unconditional jump (J).
pub const OP_J: u64 = 0b000010;

/// Branch on equal (BEQ).
pub const OP_BEQ: u64 = 0b000100;

/// Add immediate (ADDI).
pub const OP_ADDI: u64 = 0b001000;

/// AND immediate (ANDI).
pub const OP_ANDI: u64 = 0b001100;

/// Load word (LW).
pub const OP_LW: u64 = 0b100011;

/// Store word (SW).
pub const OP_SW: u64 = 0b101011;
