//! Instruction encoding builder.
//!
//! Produces 32-digit `BitVector` encodings so tests can describe instructions
//! by their fields instead of by hand-written digit strings.

use mipsim_core::common::BitVector;
use mipsim_core::isa::mips32::{funct, opcodes};

#[derive(Debug, Default)]
pub struct InstructionBuilder {
    opcode: u64,
    rs: u64,
    rt: u64,
    rd: u64,
    shamt: u64,
    funct: u64,
    imm: i64,
    target: u64,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn opcode(mut self, op: u64) -> Self {
        self.opcode = op;
        self
    }

    pub const fn rs(mut self, rs: u64) -> Self {
        self.rs = rs;
        self
    }

    pub const fn rt(mut self, rt: u64) -> Self {
        self.rt = rt;
        self
    }

    pub const fn rd(mut self, rd: u64) -> Self {
        self.rd = rd;
        self
    }

    pub const fn shamt(mut self, shamt: u64) -> Self {
        self.shamt = shamt;
        self
    }

    pub const fn funct(mut self, funct: u64) -> Self {
        self.funct = funct;
        self
    }

    pub const fn imm(mut self, imm: i64) -> Self {
        self.imm = imm;
        self
    }

    pub const fn target(mut self, target: u64) -> Self {
        self.target = target;
        self
    }

    /// Encodes as an R-type word.
    pub fn build_r(&self) -> BitVector {
        let word = (self.opcode & 0x3F) << 26
            | (self.rs & 0x1F) << 21
            | (self.rt & 0x1F) << 16
            | (self.rd & 0x1F) << 11
            | (self.shamt & 0x1F) << 6
            | (self.funct & 0x3F);
        BitVector::from_value(32, word as i64)
    }

    /// Encodes as an I-type word.
    pub fn build_i(&self) -> BitVector {
        let word = (self.opcode & 0x3F) << 26
            | (self.rs & 0x1F) << 21
            | (self.rt & 0x1F) << 16
            | (self.imm as u64 & 0xFFFF);
        BitVector::from_value(32, word as i64)
    }

    /// Encodes as a J-type word.
    pub fn build_j(&self) -> BitVector {
        let word = (self.opcode & 0x3F) << 26 | (self.target & 0x03FF_FFFF);
        BitVector::from_value(32, word as i64)
    }

    // Shorthand for the supported subset, operands in assembly order.

    pub fn add(rd: u64, rs: u64, rt: u64) -> BitVector {
        Self::new().rd(rd).rs(rs).rt(rt).funct(funct::ADD).build_r()
    }

    pub fn and(rd: u64, rs: u64, rt: u64) -> BitVector {
        Self::new().rd(rd).rs(rs).rt(rt).funct(funct::AND).build_r()
    }

    pub fn jr(rs: u64) -> BitVector {
        Self::new().rs(rs).funct(funct::JR).build_r()
    }

    pub fn addi(rt: u64, rs: u64, imm: i64) -> BitVector {
        Self::new().opcode(opcodes::OP_ADDI).rt(rt).rs(rs).imm(imm).build_i()
    }

    pub fn andi(rt: u64, rs: u64, imm: i64) -> BitVector {
        Self::new().opcode(opcodes::OP_ANDI).rt(rt).rs(rs).imm(imm).build_i()
    }

    pub fn lw(rt: u64, offset: i64, base: u64) -> BitVector {
        Self::new().opcode(opcodes::OP_LW).rt(rt).rs(base).imm(offset).build_i()
    }

    pub fn sw(rt: u64, offset: i64, base: u64) -> BitVector {
        Self::new().opcode(opcodes::OP_SW).rt(rt).rs(base).imm(offset).build_i()
    }

    pub fn beq(rs: u64, rt: u64, offset: i64) -> BitVector {
        Self::new().opcode(opcodes::OP_BEQ).rs(rs).rt(rt).imm(offset).build_i()
    }

    pub fn j(target: u64) -> BitVector {
        Self::new().opcode(opcodes::OP_J).target(target).build_j()
    }
}
