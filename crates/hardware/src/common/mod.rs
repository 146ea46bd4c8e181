//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Bit Vectors:** The fixed-width digit sequence that registers, memory words and instructions are made of.
//! 2. **Constants:** Word width, default capacities, and toolchain compatibility origins.
//! 3. **Error Handling:** The reportable-condition taxonomy and the crate-wide result alias.

/// Fixed-width bit vector with two's-complement arithmetic.
pub mod bits;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for reported and fatal conditions.
pub mod error;

pub use bits::BitVector;
pub use constants::{WORD_BITS, WORD_BYTES};
pub use error::{SimError, SimResult};
