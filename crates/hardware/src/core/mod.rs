//! Core processor implementation.
//!
//! This module contains the execution engine, the machine state it owns, and
//! the architectural register file.

/// Architectural components (general-purpose register file).
pub mod arch;

/// Execution engine: machine state, instruction handlers, and the run loop.
pub mod cpu;

pub use self::cpu::{Cpu, MachineState};
