//! CPU Core Definition and Initialization.
//!
//! This module defines the execution engine and the machine state it owns. It
//! coordinates the following:
//! 1. **State Management:** A single `MachineState` holds the program counter, registers and both memories.
//! 2. **Collaborator Surface:** Loading instructions, presetting registers, and inspecting state between runs.
//! 3. **Reporting:** Non-fatal conditions are logged and kept in a diagnostics list.
//! 4. **Observability:** Execution statistics and a console dump of the machine.

/// Fetch/step/run loop and halting conditions.
pub mod execution;

/// Per-instruction handlers operating on the machine state.
pub mod handlers;

use std::fmt;

use crate::common::constants::WORD_BITS;
use crate::common::{BitVector, SimError, SimResult};
use crate::config::Config;
use crate::core::arch::RegisterFile;
use crate::soc::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

pub use execution::{HaltReason, StepOutcome};

/// Complete architectural state of the machine.
///
/// Instruction handlers receive this by mutable reference; nothing else holds
/// onto it during a run.
#[derive(Clone, Debug)]
pub struct MachineState {
    /// Program Counter (byte address of the next instruction).
    pub pc: BitVector,
    /// General Purpose Registers.
    pub regs: RegisterFile,
    /// Word-addressed data memory.
    pub data: DataMemory,
    /// Loaded program.
    pub imem: InstructionMemory,
}

impl MachineState {
    /// Creates a zeroed machine with the capacities from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            pc: BitVector::new(WORD_BITS),
            regs: RegisterFile::new(),
            data: DataMemory::new(config.memory.data_words),
            imem: InstructionMemory::new(config.memory.instruction_slots),
        }
    }
}

/// The execution engine.
///
/// Owns the machine state exclusively. Instructions and register presets are
/// applied before a run or between runs; [`Cpu::execute`] then runs the
/// fetch-decode-execute loop to one of its halting conditions.
#[derive(Debug)]
pub struct Cpu {
    state: MachineState,
    /// Interpret J-type targets as MARS-encoded absolute addresses.
    compat_jump_offset: bool,
    /// Log every executed instruction at `trace` level.
    trace: bool,
    stats: SimStats,
    diagnostics: Vec<SimError>,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Cpu {
    /// Creates a new engine with a zeroed machine sized by `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            state: MachineState::new(config),
            compat_jump_offset: config.general.compat_jump_offset,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
            diagnostics: Vec::new(),
        }
    }

    /// Appends an instruction to instruction memory and returns its slot.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MalformedBitPattern`] if the vector is not 32 digits
    /// wide, or [`SimError::InstructionCapacityExceeded`] once every slot is
    /// used. Both are also reported; nothing is loaded.
    pub fn load_instruction(&mut self, instruction: BitVector) -> SimResult<usize> {
        if instruction.len() != WORD_BITS {
            let err = SimError::MalformedBitPattern {
                reason: format!(
                    "instruction must be {WORD_BITS} digits, got {}",
                    instruction.len()
                ),
            };
            self.report(err.clone());
            return Err(err);
        }
        match self.state.imem.load(instruction) {
            Ok(slot) => {
                tracing::debug!(slot, "instruction loaded");
                Ok(slot)
            }
            Err(err) => {
                self.report(err.clone());
                Err(err)
            }
        }
    }

    /// Presets a register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRangeRegisterIndex`] if `idx > 31`; nothing changes.
    pub fn set_register(&mut self, idx: usize, value: &BitVector) -> SimResult<()> {
        self.state.regs.write(idx, value)
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRangeRegisterIndex`] if `idx > 31`.
    pub fn get_register(&self, idx: usize) -> SimResult<&BitVector> {
        self.state.regs.read(idx)
    }

    /// Reads a data memory word.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRangeMemoryAddress`] if `address` is past the end of memory.
    pub fn get_data_memory(&self, address: u64) -> SimResult<&BitVector> {
        self.state.data.load(address)
    }

    /// The program counter.
    pub const fn program_counter(&self) -> &BitVector {
        &self.state.pc
    }

    /// Read-only view of the whole machine.
    pub const fn state(&self) -> &MachineState {
        &self.state
    }

    /// Zeroes registers, data memory and PC, empties instruction memory, and
    /// clears statistics and diagnostics.
    pub fn reset(&mut self) {
        self.state.pc.assign(0);
        self.state.regs.reset();
        self.state.data.reset();
        self.state.imem.reset();
        self.stats = SimStats::default();
        self.diagnostics.clear();
    }

    /// Toggles MARS jump-target compatibility.
    pub const fn set_compat_jump_offset(&mut self, enabled: bool) {
        self.compat_jump_offset = enabled;
    }

    /// Whether MARS jump-target compatibility is on.
    pub const fn compat_jump_offset(&self) -> bool {
        self.compat_jump_offset
    }

    /// Toggles per-instruction trace logging.
    pub const fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    /// Execution statistics since construction or the last reset.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Non-fatal conditions reported since construction or the last reset, oldest first.
    pub fn diagnostics(&self) -> &[SimError] {
        &self.diagnostics
    }

    /// Number of loaded instructions.
    pub fn instruction_count(&self) -> usize {
        self.state.imem.len()
    }

    /// The loaded instructions in load order.
    pub fn instructions(&self) -> impl Iterator<Item = &BitVector> {
        self.state.imem.iter()
    }

    /// Logs a non-fatal condition and records it.
    fn report(&mut self, err: SimError) {
        tracing::warn!(%err, pc = self.state.pc.to_integer(), "reported");
        self.stats.diagnostics += 1;
        self.diagnostics.push(err);
    }

    /// Renders the program counter, registers and loaded program.
    pub fn dump_state(&self) -> String {
        self.state.to_string()
    }
}

impl fmt::Display for MachineState {
    /// The console dump: PC, registers, then the loaded program.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "---------------------------------------------------";
        writeln!(f, "{rule}")?;
        writeln!(f, "PC: {:#}", self.pc)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "REGISTERS")?;
        writeln!(f, "{rule}")?;
        write!(f, "{}", self.regs)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "INSTRUCTIONS")?;
        writeln!(f, "{rule}")?;
        for (i, inst) in self.imem.iter().enumerate() {
            writeln!(f, "{i} | {inst:#}")?;
        }
        writeln!(f, "               ---------END---------")
    }
}
