//! Word-addressed data memory.
//!
//! A fixed-capacity store of 32-digit words, keyed by word index. Every address
//! in `[0, capacity)` holds a word from construction onward; addresses outside
//! that range are rejected with [`SimError::OutOfRangeMemoryAddress`].

use crate::common::constants::WORD_BITS;
use crate::common::{BitVector, SimError, SimResult};

/// Fixed-capacity, word-addressed data memory.
#[derive(Clone, Debug)]
pub struct DataMemory {
    words: Vec<BitVector>,
}

impl DataMemory {
    /// Creates a memory of `capacity` words, all zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![BitVector::new(WORD_BITS); capacity],
        }
    }

    /// Number of addressable words.
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    fn out_of_range(&self, address: u64) -> SimError {
        SimError::OutOfRangeMemoryAddress {
            address,
            capacity: self.capacity(),
        }
    }

    /// Reads the word at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRangeMemoryAddress`] if `address >= capacity`.
    pub fn load(&self, address: u64) -> SimResult<&BitVector> {
        usize::try_from(address)
            .ok()
            .and_then(|idx| self.words.get(idx))
            .ok_or_else(|| self.out_of_range(address))
    }

    /// Writes `value` (fitted to 32 digits) at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRangeMemoryAddress`] if `address >= capacity`;
    /// memory is unchanged.
    pub fn store(&mut self, address: u64, value: &BitVector) -> SimResult<()> {
        let err = self.out_of_range(address);
        let slot = usize::try_from(address)
            .ok()
            .and_then(|idx| self.words.get_mut(idx))
            .ok_or(err)?;
        *slot = value.fit(WORD_BITS);
        Ok(())
    }

    /// Zeroes every word.
    pub fn reset(&mut self) {
        for word in &mut self.words {
            word.assign(0);
        }
    }
}
