//! Reduced MIPS32 instruction set.
//!
//! Opcode and function-code tables for the subset the engine executes.

/// R-type function codes.
pub mod funct;

/// Major opcodes.
pub mod opcodes;
