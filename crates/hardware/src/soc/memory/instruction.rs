//! Instruction memory.
//!
//! An append-only list of encoded instructions with a fixed number of slots.
//! Instructions are loaded in order before a run; a slot that was never
//! written reads as absent, which the run loop treats as the end of the program.

use crate::common::{BitVector, SimError, SimResult};

/// Fixed-capacity, append-only instruction store.
#[derive(Clone, Debug)]
pub struct InstructionMemory {
    slots: Vec<BitVector>,
    capacity: usize,
}

impl InstructionMemory {
    /// Creates an empty instruction memory with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Total number of slots.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of loaded instructions.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no instruction has been loaded.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` once every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Appends an instruction at the next free slot and returns that slot's index.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InstructionCapacityExceeded`] when every slot is
    /// occupied; nothing is loaded.
    pub fn load(&mut self, instruction: BitVector) -> SimResult<usize> {
        if self.is_full() {
            return Err(SimError::InstructionCapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.slots.push(instruction);
        Ok(self.slots.len() - 1)
    }

    /// The instruction in `slot`, or `None` if the slot was never written.
    pub fn fetch(&self, slot: usize) -> Option<&BitVector> {
        self.slots.get(slot)
    }

    /// Iterates over the loaded instructions in load order.
    pub fn iter(&self) -> impl Iterator<Item = &BitVector> {
        self.slots.iter()
    }

    /// Removes every loaded instruction.
    pub fn reset(&mut self) {
        self.slots.clear();
    }
}
