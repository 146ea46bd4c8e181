//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the simulator. It provides:
//! 1. **Retirement:** Count of instructions fetched and executed.
//! 2. **Instruction mix:** Counts by format (R, I, J) and by memory/branch class.
//! 3. **Control flow:** Taken and not-taken branches, jumps.
//! 4. **Diagnostics:** Unknown encodings and other reported conditions.

use std::fmt;

use serde::Serialize;

use crate::common::SimResult;
use crate::isa::decode::{Format, Instruction};

/// Execution statistics for one machine, cleared by a reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Number of instructions fetched and executed (including no-ops from unknown encodings).
    pub instructions_retired: u64,

    /// Count of R-type instructions retired.
    pub inst_r_type: u64,
    /// Count of I-type instructions retired.
    pub inst_i_type: u64,
    /// Count of J-type instructions retired.
    pub inst_j_type: u64,

    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,

    /// Branches whose condition held.
    pub branches_taken: u64,
    /// Branches whose condition failed.
    pub branches_not_taken: u64,
    /// Unconditional jumps (`j`, `jr`) that changed the PC.
    pub jumps: u64,

    /// Encodings with an unknown opcode or function code.
    pub unknown_encodings: u64,
    /// Non-fatal conditions reported during execution.
    pub diagnostics: u64,
}

impl SimStats {
    /// Records the retirement of one instruction.
    pub fn record(&mut self, inst: &Instruction) {
        self.instructions_retired += 1;
        match inst.format() {
            Some(Format::R) => self.inst_r_type += 1,
            Some(Format::I) => self.inst_i_type += 1,
            Some(Format::J) => self.inst_j_type += 1,
            None => self.unknown_encodings += 1,
        }
        match inst {
            Instruction::Lw(_) => self.inst_load += 1,
            Instruction::Sw(_) => self.inst_store += 1,
            _ => {}
        }
    }

    /// Serializes the statistics as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::SimError::Config`] if serialization fails.
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Prints all statistics to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "EXECUTION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "  instructions retired  {:>10}", self.instructions_retired)?;
        writeln!(f, "  r-type                {:>10}", self.inst_r_type)?;
        writeln!(f, "  i-type                {:>10}", self.inst_i_type)?;
        writeln!(f, "  j-type                {:>10}", self.inst_j_type)?;
        writeln!(f, "  loads                 {:>10}", self.inst_load)?;
        writeln!(f, "  stores                {:>10}", self.inst_store)?;
        writeln!(f, "  branches taken        {:>10}", self.branches_taken)?;
        writeln!(f, "  branches not taken    {:>10}", self.branches_not_taken)?;
        writeln!(f, "  jumps                 {:>10}", self.jumps)?;
        writeln!(f, "  unknown encodings     {:>10}", self.unknown_encodings)?;
        writeln!(f, "  diagnostics           {:>10}", self.diagnostics)?;
        write!(f, "==========================================================")
    }
}
