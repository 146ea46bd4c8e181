//! Simulator error taxonomy.
//!
//! This module defines every condition the simulator can report. It provides:
//! 1. **Bit-level errors:** Malformed digit patterns and invalid slice ranges.
//! 2. **Storage errors:** Out-of-range register indices and memory addresses, full instruction memory.
//! 3. **Execution errors:** Misaligned program counter (the only fatal condition) and unknown encodings.
//! 4. **Collaborator errors:** Malformed listing lines, I/O failures, and configuration errors.
//!
//! Only [`SimError::MisalignedProgramCounter`] stops a run. Every other variant is
//! reported and absorbed by the engine, which then carries on with the next instruction.

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type SimResult<T> = Result<T, SimError>;

/// Conditions reported by the simulator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A bit-setting operation received the wrong number of digits or a non-digit character.
    ///
    /// The target vector keeps its prior value.
    #[error("malformed bit pattern: {reason}")]
    MalformedBitPattern {
        /// What was wrong with the input.
        reason: String,
    },

    /// A slice was requested with `start > end` or `end` past the last digit.
    #[error("invalid bit range [{start}, {end}] for a vector of length {len}")]
    InvalidRange {
        /// First requested digit index.
        start: usize,
        /// Last requested digit index (inclusive).
        end: usize,
        /// Length of the vector being sliced.
        len: usize,
    },

    /// A register index outside `0..=31`.
    #[error("register index {0} out of range")]
    OutOfRangeRegisterIndex(u64),

    /// A data memory address outside `[0, capacity)`.
    #[error("memory address {address} out of range (capacity {capacity})")]
    OutOfRangeMemoryAddress {
        /// The computed effective address.
        address: u64,
        /// Number of words in data memory.
        capacity: usize,
    },

    /// The program counter was not a multiple of four at fetch time.
    ///
    /// This is the only condition that halts a run.
    #[error("misaligned program counter {0:#x}")]
    MisalignedProgramCounter(u64),

    /// An opcode that no instruction kind is bound to.
    #[error("unknown opcode {0}")]
    UnknownOpcode(u64),

    /// An R-type function code that no operation is bound to.
    #[error("unknown function code {0}")]
    UnknownFunctionCode(u64),

    /// A jump whose target lies outside instruction memory.
    #[error("jump target {target:#x} outside instruction memory")]
    JumpTargetOutOfRange {
        /// The rejected byte address (or raw field when below the MARS origin).
        target: u64,
    },

    /// Instruction memory already holds its full complement of instructions.
    #[error("instruction memory full: {capacity} instructions already loaded")]
    InstructionCapacityExceeded {
        /// Number of slots in instruction memory.
        capacity: usize,
    },

    /// A line of an instruction listing could not be parsed.
    #[error("line {line}: {reason}")]
    MalformedInstruction {
        /// 1-based line number in the listing.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// Reading a listing or configuration file failed.
    #[error("io error: {0}")]
    Io(String),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SimError {
    /// Returns `true` if this condition must stop the run loop.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::MisalignedProgramCounter(_))
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
