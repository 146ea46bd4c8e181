//! Instruction Disassembler for the reduced MIPS32 subset.
//!
//! Converts a decoded [`Instruction`] into a mnemonic string for debug
//! tracing, console dumps, and test diagnostics. Registers print as `$n` and
//! immediates print as signed decimals.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::common::BitVector;
//! use mipsim_core::isa::decode::decode;
//! use mipsim_core::isa::disasm::disassemble;
//!
//! let raw: BitVector = "001000 00001 00001 0000000000000111".parse().unwrap();
//! assert_eq!(disassemble(&decode(&raw)), "addi $1, $1, 7");
//! ```

use crate::isa::decode::{IType, Instruction, RType};

fn three_reg(mnemonic: &str, op: RType) -> String {
    format!("{mnemonic} ${}, ${}, ${}", op.rd, op.rs, op.rt)
}

fn reg_imm(mnemonic: &str, op: &IType) -> String {
    format!("{mnemonic} ${}, ${}, {}", op.rt, op.rs, op.imm.to_signed())
}

fn mem(mnemonic: &str, op: &IType) -> String {
    format!("{mnemonic} ${}, {}(${})", op.rt, op.imm.to_signed(), op.rs)
}

/// Disassembles a decoded instruction into a human-readable string.
///
/// Returns a mnemonic like `"add $3, $1, $2"`, or `"unknown ..."` naming the
/// unrecognised field for unknown encodings.
pub fn disassemble(inst: &Instruction) -> String {
    match inst {
        Instruction::Add(op) => three_reg("add", *op),
        Instruction::And(op) => three_reg("and", *op),
        Instruction::Jr(op) => format!("jr ${}", op.rs),
        Instruction::Addi(op) => reg_imm("addi", op),
        Instruction::Andi(op) => reg_imm("andi", op),
        Instruction::Lw(op) => mem("lw", op),
        Instruction::Sw(op) => mem("sw", op),
        Instruction::Beq(op) => format!("beq ${}, ${}, {}", op.rs, op.rt, op.imm.to_signed()),
        Instruction::J(op) => format!("j {:#x}", op.target.to_integer()),
        Instruction::UnknownFunction(code) => format!("unknown (funct {code})"),
        Instruction::UnknownOpcode(code) => format!("unknown (opcode {code})"),
    }
}
