//! Reduced MIPS32 instruction-level simulator library.
//!
//! This crate implements a non-pipelined simulator for a small 32-bit MIPS
//! load/store subset with the following:
//! 1. **Bits:** A fixed-width `BitVector` with two's-complement arithmetic, slicing, padding and sign extension.
//! 2. **Core:** A 32-entry register file, program counter, and the fetch-decode-execute engine.
//! 3. **Memory:** A word-addressed data memory and an append-only instruction memory.
//! 4. **ISA:** Field extraction, decoding and disassembly for `add`, `and`, `jr`, `addi`, `andi`, `lw`, `sw`, `beq`, `j`.
//! 5. **Simulation:** Plain-text listing loader, configuration, and statistics collection.
//!
//! # Example
//!
//! ```
//! use mipsim_core::Cpu;
//! use mipsim_core::core::cpu::HaltReason;
//! use mipsim_core::common::BitVector;
//!
//! let mut cpu = Cpu::default();
//! cpu.set_register(0, &BitVector::from_value(32, 4)).unwrap();
//! // add $0, $0, $0
//! let slot = cpu.load_instruction("00000000000000000000000000100000".parse().unwrap()).unwrap();
//! assert_eq!(slot, 0);
//! let reason = cpu.execute().unwrap();
//! assert_eq!(reason, HaltReason::EndOfProgram);
//! assert_eq!(cpu.get_register(0).unwrap().to_integer(), 8);
//! ```

/// Common types and constants (bit vectors, errors, machine constants).
pub mod common;
/// Simulator configuration (defaults and JSON deserialization).
pub mod config;
/// CPU core (register file, machine state, execution engine).
pub mod core;
/// Instruction set (field layout, opcodes, decode, disassembly).
pub mod isa;
/// Instruction listing loader.
pub mod sim;
/// Data and instruction memories.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main engine type; owns the machine state and runs programs.
pub use crate::core::Cpu;
