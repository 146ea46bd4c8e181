//! Storage surrounding the processor core.
//!
//! The reduced machine has no bus, devices or memory-mapped I/O; the SoC layer
//! consists solely of the data and instruction memories the engine owns.

/// Data and instruction memories.
pub mod memory;

pub use memory::{DataMemory, InstructionMemory};
