//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Halting Checks:** Stops cleanly when the PC runs past instruction memory or reaches an empty slot.
//! 2. **Alignment:** Treats a PC that is not a multiple of four as fatal.
//! 3. **Sequencing:** Advances the PC before executing, so branch offsets are relative to the next instruction.
//! 4. **Observability:** Records statistics and, when enabled, traces each instruction.
//!
//! One instruction completes entirely before the next is fetched. There is no
//! timeout inside the engine; [`Cpu::run_bounded`] is the caller-side budget.

use std::fmt;

use super::Cpu;
use super::handlers::{self, Outcome};
use crate::common::constants::{WORD_BITS, WORD_BYTES};
use crate::common::{BitVector, SimError, SimResult};
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;

/// Why a run stopped without a fatal error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HaltReason {
    /// The PC reached a slot that holds no instruction.
    EndOfProgram,
    /// The PC ran past the last instruction slot.
    CapacityReached,
    /// The caller's step budget ran out (only from [`Cpu::run_bounded`]).
    StepLimit,
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfProgram => write!(f, "end of program"),
            Self::CapacityReached => write!(f, "instruction memory capacity reached"),
            Self::StepLimit => write!(f, "step limit reached"),
        }
    }
}

/// Result of a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction was executed; the loop may continue.
    Continue,
    /// The machine halted before fetching.
    Halted(HaltReason),
}

impl Cpu {
    /// Executes one iteration of the fetch-decode-execute loop.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MisalignedProgramCounter`] if the PC is not a
    /// multiple of four. Every other condition is reported and absorbed.
    pub fn step(&mut self) -> SimResult<StepOutcome> {
        let pc = self.state.pc.to_integer();
        let slot = pc / WORD_BYTES;

        if slot >= self.state.imem.capacity() as u64 {
            return Ok(StepOutcome::Halted(HaltReason::CapacityReached));
        }
        if pc % WORD_BYTES != 0 {
            let err = SimError::MisalignedProgramCounter(pc);
            tracing::error!(%err, "run halted");
            return Err(err);
        }
        let Some(raw) = self.state.imem.fetch(slot as usize).cloned() else {
            return Ok(StepOutcome::Halted(HaltReason::EndOfProgram));
        };

        self.state.pc = self
            .state
            .pc
            .add(&BitVector::from_value(WORD_BITS, WORD_BYTES as i64));

        let inst = decode(&raw);
        if self.trace {
            tracing::trace!(pc, raw = %raw, asm = %disassemble(&inst), "execute");
        }
        self.stats.record(&inst);

        match handlers::execute(&mut self.state, &inst, self.compat_jump_offset) {
            Ok(Outcome::Sequential) => {}
            Ok(Outcome::BranchTaken) => self.stats.branches_taken += 1,
            Ok(Outcome::BranchNotTaken) => self.stats.branches_not_taken += 1,
            Ok(Outcome::Jumped) => self.stats.jumps += 1,
            Err(err) => self.report(err),
        }
        Ok(StepOutcome::Continue)
    }

    /// Runs the loop until the program ends or instruction memory is exhausted.
    ///
    /// A program that never reaches either condition (e.g. `jr` to itself)
    /// runs forever; use [`Cpu::run_bounded`] to cap it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MisalignedProgramCounter`] if a fetch is attempted
    /// from a PC that is not a multiple of four.
    pub fn execute(&mut self) -> SimResult<HaltReason> {
        loop {
            if let StepOutcome::Halted(reason) = self.step()? {
                tracing::debug!(%reason, retired = self.stats.instructions_retired, "run halted");
                return Ok(reason);
            }
        }
    }

    /// Runs the loop for at most `max_steps` instructions.
    ///
    /// # Errors
    ///
    /// Same as [`Cpu::execute`].
    pub fn run_bounded(&mut self, max_steps: u64) -> SimResult<HaltReason> {
        for _ in 0..max_steps {
            if let StepOutcome::Halted(reason) = self.step()? {
                tracing::debug!(%reason, retired = self.stats.instructions_retired, "run halted");
                return Ok(reason);
            }
        }
        tracing::debug!(max_steps, "step budget exhausted");
        Ok(HaltReason::StepLimit)
    }
}
