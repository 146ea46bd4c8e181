//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the field layout, opcode and function-code tables, decoding logic,
//! and disassembler for the reduced 32-bit MIPS subset: `add`, `and`, `jr`,
//! `addi`, `andi`, `lw`, `sw`, `beq` and `j`.

/// Instruction decoding into a closed set of instruction kinds.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field layout and extraction utilities.
pub mod instruction;

/// Opcode and function-code tables.
pub mod mips32;

pub use decode::{Instruction, decode};
