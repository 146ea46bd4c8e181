//! Simulation utilities and program loading.
//!
//! Provides the plain-text listing loader that fills instruction memory
//! before a run.

/// Plain-text instruction listing loader.
pub mod loader;

pub use loader::{LoadReport, ParsedProgram, load_file, load_program, parse_instruction, parse_program};
