//! Instruction encoding and field extraction.
//!
//! Provides the field layout of the three instruction formats and a trait that
//! slices those fields out of a 32-digit [`BitVector`]. Digit 0 is the most
//! significant digit of the instruction.
//!
//! ```text
//! R-type: opcode[0..=5] | rs[6..=10] | rt[11..=15] | rd[16..=20] | shamt[21..=25] | funct[26..=31]
//! I-type: opcode[0..=5] | rs[6..=10] | rt[11..=15] | immediate[16..=31]
//! J-type: opcode[0..=5] | target[6..=31]
//! ```

use crate::common::BitVector;

/// First and last digit of the opcode field.
pub const OPCODE_FIELD: (usize, usize) = (0, 5);
/// First and last digit of the `rs` register field.
pub const RS_FIELD: (usize, usize) = (6, 10);
/// First and last digit of the `rt` register field.
pub const RT_FIELD: (usize, usize) = (11, 15);
/// First and last digit of the `rd` register field.
pub const RD_FIELD: (usize, usize) = (16, 20);
/// First and last digit of the shift-amount field.
pub const SHAMT_FIELD: (usize, usize) = (21, 25);
/// First and last digit of the function-code field.
pub const FUNCT_FIELD: (usize, usize) = (26, 31);
/// First and last digit of the I-type immediate field.
pub const IMMEDIATE_FIELD: (usize, usize) = (16, 31);
/// First and last digit of the J-type target field.
pub const TARGET_FIELD: (usize, usize) = (6, 31);

/// Trait for extracting instruction fields from an encoded instruction.
///
/// The fields are parsed on demand; an instruction is never stored in decoded
/// form. On a vector shorter than 32 digits every field reads as zero.
pub trait InstructionFields {
    /// Extracts the opcode field (digits 0-5).
    fn opcode(&self) -> u64;

    /// Extracts the `rs` register index (digits 6-10).
    fn rs(&self) -> usize;

    /// Extracts the `rt` register index (digits 11-15).
    fn rt(&self) -> usize;

    /// Extracts the `rd` register index (digits 16-20).
    fn rd(&self) -> usize;

    /// Extracts the shift amount (digits 21-25); carried but unused by the subset.
    fn shamt(&self) -> u64;

    /// Extracts the R-type function code (digits 26-31).
    fn funct(&self) -> u64;

    /// Extracts the raw 16-digit I-type immediate (digits 16-31), not yet sign-extended.
    fn immediate(&self) -> BitVector;

    /// Extracts the raw 26-digit J-type target (digits 6-31).
    fn target(&self) -> BitVector;
}

fn field(inst: &BitVector, (start, end): (usize, usize)) -> BitVector {
    inst.try_slice(start, end).unwrap_or_default()
}

impl InstructionFields for BitVector {
    #[inline]
    fn opcode(&self) -> u64 {
        field(self, OPCODE_FIELD).to_integer()
    }

    #[inline]
    fn rs(&self) -> usize {
        field(self, RS_FIELD).to_integer() as usize
    }

    #[inline]
    fn rt(&self) -> usize {
        field(self, RT_FIELD).to_integer() as usize
    }

    #[inline]
    fn rd(&self) -> usize {
        field(self, RD_FIELD).to_integer() as usize
    }

    #[inline]
    fn shamt(&self) -> u64 {
        field(self, SHAMT_FIELD).to_integer()
    }

    #[inline]
    fn funct(&self) -> u64 {
        field(self, FUNCT_FIELD).to_integer()
    }

    #[inline]
    fn immediate(&self) -> BitVector {
        field(self, IMMEDIATE_FIELD)
    }

    #[inline]
    fn target(&self) -> BitVector {
        field(self, TARGET_FIELD)
    }
}
