//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Word Constants:** Word width in digits and bytes.
//! 2. **Capacity Constants:** Default sizes of the register file and both memories.
//! 3. **Compatibility Constants:** The text-segment origin used by the MARS toolchain.

/// Width of a machine word, register, and instruction in binary digits.
pub const WORD_BITS: usize = 32;

/// Size of a machine word in bytes; the program counter advances by this amount.
pub const WORD_BYTES: u64 = 4;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Default number of words in data memory.
pub const DATA_MEMORY_WORDS: usize = 500;

/// Default number of instruction slots in instruction memory.
pub const INSTRUCTION_MEMORY_SLOTS: usize = 200;

/// Byte address at which MARS places the first instruction of `.text`.
pub const MARS_TEXT_BASE: u64 = 0x0040_0000;

/// `MARS_TEXT_BASE` expressed as a word index, which is how it appears in a J-type field.
pub const MARS_TEXT_BASE_WORD: u64 = MARS_TEXT_BASE / WORD_BYTES;
