//! General-Purpose Register File.
//!
//! This module implements the 32-entry register file. It performs the following:
//! 1. **Storage:** Maintains 32 registers, each holding one 32-digit `BitVector`.
//! 2. **Bounds Checking:** Rejects indices outside `0..=31` with a result instead of panicking.
//! 3. **Debugging:** Renders the complete register state for console dumps.
//!
//! No register is hardwired; register 0 stores whatever is written to it.

use std::fmt;

use crate::common::constants::{NUM_REGISTERS, WORD_BITS};
use crate::common::{BitVector, SimError, SimResult};

/// General-purpose register file.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: Vec<BitVector>,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self {
            regs: vec![BitVector::new(WORD_BITS); NUM_REGISTERS],
        }
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRangeRegisterIndex`] if `idx > 31`.
    pub fn read(&self, idx: usize) -> SimResult<&BitVector> {
        self.regs
            .get(idx)
            .ok_or(SimError::OutOfRangeRegisterIndex(idx as u64))
    }

    /// Writes a register.
    ///
    /// Values narrower than 32 digits are zero-extended; wider values keep
    /// their low-order 32 digits.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRangeRegisterIndex`] if `idx > 31`; no register changes.
    pub fn write(&mut self, idx: usize, value: &BitVector) -> SimResult<()> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(SimError::OutOfRangeRegisterIndex(idx as u64))?;
        *slot = value.fit(WORD_BITS);
        Ok(())
    }

    /// Sets every register to zero, keeping the 32-digit width.
    pub fn reset(&mut self) {
        for reg in &mut self.regs {
            reg.assign(0);
        }
    }

    /// Iterates over the registers in index order.
    pub fn iter(&self) -> impl Iterator<Item = &BitVector> {
        self.regs.iter()
    }

    /// Renders one line per register in the console dump format.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, reg) in self.regs.iter().enumerate() {
            let label = format!("Register {i}:");
            writeln!(f, "{label:<13}{reg:#}")?;
        }
        Ok(())
    }
}
