//! Instruction Listing Loader.
//!
//! This module reads programs written as plain-text listings. It performs:
//! 1. **Parsing:** One instruction per line, 32 `0`/`1` digits, whitespace anywhere ignored.
//! 2. **Comments:** Blank lines are skipped; `#` and `//` start a comment that runs to end of line.
//! 3. **Loading:** Parsed instructions are appended to the engine's instruction memory in order.
//!
//! Malformed lines are reported and skipped; they never abort a load.
//!
//! ```text
//! # op     rs    rt    rd    shamt funct
//! 000000 00001 00010 00011 00000 100000   # add $3, $1, $2
//! 001000 00001 00001 0000000000000111     # addi $1, $1, 7
//! ```

use std::fs;
use std::path::Path;

use crate::common::constants::WORD_BITS;
use crate::common::{BitVector, SimError, SimResult};
use crate::core::Cpu;

/// Outcome of parsing a listing.
#[derive(Clone, Debug, Default)]
pub struct ParsedProgram {
    /// Well-formed instructions in listing order.
    pub instructions: Vec<BitVector>,
    /// One [`SimError::MalformedInstruction`] per skipped line.
    pub errors: Vec<SimError>,
}

/// Outcome of loading a listing into an engine.
#[derive(Clone, Debug, Default)]
pub struct LoadReport {
    /// Instructions now in instruction memory.
    pub loaded: usize,
    /// Well-formed instructions turned away because instruction memory was full.
    pub rejected: usize,
    /// Lines that could not be parsed.
    pub skipped: Vec<SimError>,
}

/// Strips a trailing `#` or `//` comment.
fn strip_comment(line: &str) -> &str {
    let cut = [line.find('#'), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..cut]
}

/// Parses one instruction written as 32 binary digits, ignoring whitespace.
///
/// `line` is the 1-based listing line used in the error.
///
/// # Errors
///
/// Returns [`SimError::MalformedInstruction`] if the text holds a character
/// other than `0`, `1` or whitespace, or does not hold exactly 32 digits.
pub fn parse_instruction(text: &str, line: usize) -> SimResult<BitVector> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if let Some(bad) = digits.chars().find(|c| *c != '0' && *c != '1') {
        return Err(SimError::MalformedInstruction {
            line,
            reason: format!("unexpected character {bad:?}"),
        });
    }
    if digits.len() != WORD_BITS {
        return Err(SimError::MalformedInstruction {
            line,
            reason: format!("expected {WORD_BITS} digits, got {}", digits.len()),
        });
    }
    digits
        .parse()
        .map_err(|err: SimError| SimError::MalformedInstruction {
            line,
            reason: err.to_string(),
        })
}

/// Parses a whole listing, skipping (and reporting) malformed lines.
pub fn parse_program(text: &str) -> ParsedProgram {
    let mut program = ParsedProgram::default();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }
        match parse_instruction(line, idx + 1) {
            Ok(inst) => program.instructions.push(inst),
            Err(err) => {
                tracing::warn!(%err, "skipping listing line");
                program.errors.push(err);
            }
        }
    }
    program
}

/// Parses a listing and appends its instructions to `cpu`'s instruction memory.
///
/// Instructions beyond the memory's capacity are rejected (and reported by the engine).
pub fn load_program(cpu: &mut Cpu, text: &str) -> LoadReport {
    let program = parse_program(text);
    let mut report = LoadReport {
        skipped: program.errors,
        ..LoadReport::default()
    };
    for inst in program.instructions {
        match cpu.load_instruction(inst) {
            Ok(_) => report.loaded += 1,
            Err(_) => report.rejected += 1,
        }
    }
    tracing::debug!(
        loaded = report.loaded,
        rejected = report.rejected,
        skipped = report.skipped.len(),
        "listing loaded"
    );
    report
}

/// Reads a listing from disk and loads it into `cpu`.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read.
pub fn load_file(cpu: &mut Cpu, path: impl AsRef<Path>) -> SimResult<LoadReport> {
    let text = fs::read_to_string(path)?;
    Ok(load_program(cpu, &text))
}
