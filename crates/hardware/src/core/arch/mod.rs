//! Architectural state components.
//!
//! The reduced MIPS machine exposes a single architectural register set: the
//! 32-entry general-purpose register file. The program counter lives on the
//! machine state itself (see [`crate::core::cpu::MachineState`]).

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::RegisterFile;
