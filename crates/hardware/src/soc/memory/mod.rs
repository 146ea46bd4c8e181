//! Machine memories.
//!
//! This module implements the two stores the engine reads and writes. It provides:
//! 1. **Data Memory:** A fixed-capacity, word-addressed store of 32-digit words.
//! 2. **Instruction Memory:** A fixed-capacity, append-only list of encoded instructions.
//!
//! Both are arena-style containers: every access is bounds-checked and reported
//! through [`crate::common::SimError`] rather than by panicking.

/// Word-addressed data memory.
pub mod data;

/// Append-only instruction memory.
pub mod instruction;

pub use data::DataMemory;
pub use instruction::InstructionMemory;
