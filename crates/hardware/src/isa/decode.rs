//! Reduced MIPS32 Instruction Decoder.
//!
//! This module turns a 32-digit encoded instruction into a structured
//! [`Instruction`]. Every encoding maps to exactly one variant: unrecognised
//! opcodes and function codes are explicit variants rather than a silent
//! fallback, so the executor's `match` is exhaustive.

use crate::common::BitVector;
use crate::common::constants::WORD_BITS;
use crate::isa::instruction::InstructionFields;
use crate::isa::mips32::{funct, opcodes};

/// Register operands of an R-type instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RType {
    /// First source register.
    pub rs: usize,
    /// Second source register.
    pub rt: usize,
    /// Destination register.
    pub rd: usize,
}

/// Operands of an I-type instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IType {
    /// Source (or base) register.
    pub rs: usize,
    /// Destination register, or the value register for stores and branches.
    pub rt: usize,
    /// The immediate, already sign-extended to 32 digits.
    pub imm: BitVector,
}

/// Operand of a J-type instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JType {
    /// The raw 26-digit target field.
    pub target: BitVector,
}

/// A decoded instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `rd = rs + rt` (two's complement, wrapping).
    Add(RType),
    /// `rd = rs & rt`.
    And(RType),
    /// `pc = rs`.
    Jr(RType),
    /// `rt = rs + imm` (two's complement, wrapping).
    Addi(IType),
    /// `rt = rs & imm`.
    Andi(IType),
    /// `rt = memory[rs + imm]`.
    Lw(IType),
    /// `memory[rs + imm] = rt`.
    Sw(IType),
    /// `if rs == rt { pc += imm * 4 }`, relative to the incremented PC.
    Beq(IType),
    /// `pc = target`.
    J(JType),
    /// R-type encoding whose function code is not bound to an operation.
    UnknownFunction(u64),
    /// Encoding whose opcode is not bound to an instruction.
    UnknownOpcode(u64),
}

/// Instruction format class, used for statistics and tracing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Register-register.
    R,
    /// Register-immediate.
    I,
    /// Jump.
    J,
}

impl Instruction {
    /// The encoding format, or `None` for unknown encodings.
    pub const fn format(&self) -> Option<Format> {
        match self {
            Self::Add(_) | Self::And(_) | Self::Jr(_) => Some(Format::R),
            Self::Addi(_) | Self::Andi(_) | Self::Lw(_) | Self::Sw(_) | Self::Beq(_) => {
                Some(Format::I)
            }
            Self::J(_) => Some(Format::J),
            Self::UnknownFunction(_) | Self::UnknownOpcode(_) => None,
        }
    }
}

/// Decodes an encoded instruction.
///
/// # Examples
///
/// ```
/// use mipsim_core::common::BitVector;
/// use mipsim_core::isa::decode::{decode, Instruction, RType};
///
/// let raw: BitVector = "000000 00001 00010 00011 00000 100000".parse().unwrap();
/// assert_eq!(decode(&raw), Instruction::Add(RType { rs: 1, rt: 2, rd: 3 }));
/// ```
pub fn decode(inst: &BitVector) -> Instruction {
    match inst.opcode() {
        opcodes::OP_SPECIAL => decode_r_type(inst),
        opcodes::OP_J => Instruction::J(JType {
            target: inst.target(),
        }),
        opcodes::OP_ADDI => Instruction::Addi(decode_i_type(inst)),
        opcodes::OP_ANDI => Instruction::Andi(decode_i_type(inst)),
        opcodes::OP_LW => Instruction::Lw(decode_i_type(inst)),
        opcodes::OP_SW => Instruction::Sw(decode_i_type(inst)),
        opcodes::OP_BEQ => Instruction::Beq(decode_i_type(inst)),
        other => Instruction::UnknownOpcode(other),
    }
}

/// Decodes an R-type instruction by function code.
fn decode_r_type(inst: &BitVector) -> Instruction {
    let operands = RType {
        rs: inst.rs(),
        rt: inst.rt(),
        rd: inst.rd(),
    };
    match inst.funct() {
        funct::ADD => Instruction::Add(operands),
        funct::AND => Instruction::And(operands),
        funct::JR => Instruction::Jr(operands),
        other => Instruction::UnknownFunction(other),
    }
}

/// Decodes the register fields and sign-extended immediate of an I-type instruction.
fn decode_i_type(inst: &BitVector) -> IType {
    IType {
        rs: inst.rs(),
        rt: inst.rt(),
        imm: inst.immediate().sign_extend(WORD_BITS),
    }
}
