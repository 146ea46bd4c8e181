//! Instruction Handlers.
//!
//! One free function per instruction kind, each operating on a borrowed
//! [`MachineState`]. Handlers run after the program counter has been advanced,
//! so relative branch targets are computed from the address of the next
//! instruction.
//!
//! A handler that hits an out-of-range register, memory address or jump target
//! returns the error before mutating anything; the engine reports it and moves on.

use super::MachineState;
use crate::common::constants::{MARS_TEXT_BASE_WORD, WORD_BITS, WORD_BYTES};
use crate::common::{BitVector, SimError, SimResult};
use crate::isa::decode::{IType, Instruction, JType, RType};

/// Control-flow effect of an executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Execution continues at the already-incremented PC.
    Sequential,
    /// A `beq` condition held and the PC was moved.
    BranchTaken,
    /// A `beq` condition failed.
    BranchNotTaken,
    /// A `j` or `jr` replaced the PC.
    Jumped,
}

/// Executes a decoded instruction against the machine state.
///
/// # Errors
///
/// Unknown encodings yield [`SimError::UnknownOpcode`] or
/// [`SimError::UnknownFunctionCode`]; operand errors come from the individual
/// handlers. None of these are fatal.
pub fn execute(
    state: &mut MachineState,
    inst: &Instruction,
    compat_jump_offset: bool,
) -> SimResult<Outcome> {
    match inst {
        Instruction::Add(op) => add(state, *op),
        Instruction::And(op) => and(state, *op),
        Instruction::Jr(op) => jr(state, *op),
        Instruction::Addi(op) => addi(state, op),
        Instruction::Andi(op) => andi(state, op),
        Instruction::Lw(op) => lw(state, op),
        Instruction::Sw(op) => sw(state, op),
        Instruction::Beq(op) => beq(state, op),
        Instruction::J(op) => jump(state, op, compat_jump_offset),
        Instruction::UnknownFunction(code) => Err(SimError::UnknownFunctionCode(*code)),
        Instruction::UnknownOpcode(code) => Err(SimError::UnknownOpcode(*code)),
    }
}

/// `rd = rs + rt`, wrapping at 32 digits.
pub fn add(state: &mut MachineState, op: RType) -> SimResult<Outcome> {
    let sum = state.regs.read(op.rs)?.add(state.regs.read(op.rt)?);
    state.regs.write(op.rd, &sum)?;
    Ok(Outcome::Sequential)
}

/// `rd = rs & rt`.
pub fn and(state: &mut MachineState, op: RType) -> SimResult<Outcome> {
    let result = state.regs.read(op.rs)?.and(state.regs.read(op.rt)?);
    state.regs.write(op.rd, &result)?;
    Ok(Outcome::Sequential)
}

/// `pc = rs`, replacing the incremented PC outright.
pub fn jr(state: &mut MachineState, op: RType) -> SimResult<Outcome> {
    state.pc = state.regs.read(op.rs)?.clone();
    Ok(Outcome::Jumped)
}

/// `rt = rs + sign_extend(imm)`, wrapping at 32 digits.
pub fn addi(state: &mut MachineState, op: &IType) -> SimResult<Outcome> {
    let sum = state.regs.read(op.rs)?.add(&op.imm);
    state.regs.write(op.rt, &sum)?;
    Ok(Outcome::Sequential)
}

/// `rt = rs & sign_extend(imm)`.
pub fn andi(state: &mut MachineState, op: &IType) -> SimResult<Outcome> {
    let result = state.regs.read(op.rs)?.and(&op.imm);
    state.regs.write(op.rt, &result)?;
    Ok(Outcome::Sequential)
}

/// `rs + sign_extend(imm)`, read as the word index it denotes.
fn effective_address(state: &MachineState, op: &IType) -> SimResult<u64> {
    Ok(state.regs.read(op.rs)?.add(&op.imm).to_integer())
}

/// `rt = memory[rs + imm]`; `rt` is untouched if the address is out of range.
pub fn lw(state: &mut MachineState, op: &IType) -> SimResult<Outcome> {
    let address = effective_address(state, op)?;
    let value = state.data.load(address)?.clone();
    state.regs.write(op.rt, &value)?;
    Ok(Outcome::Sequential)
}

/// `memory[rs + imm] = rt`; base in `rs`, value in `rt`.
pub fn sw(state: &mut MachineState, op: &IType) -> SimResult<Outcome> {
    let address = effective_address(state, op)?;
    let value = state.regs.read(op.rt)?.clone();
    state.data.store(address, &value)?;
    Ok(Outcome::Sequential)
}

/// `if rs == rt { pc += imm * 4 }`.
pub fn beq(state: &mut MachineState, op: &IType) -> SimResult<Outcome> {
    if state.regs.read(op.rs)? != state.regs.read(op.rt)? {
        return Ok(Outcome::BranchNotTaken);
    }
    let offset = BitVector::from_value(WORD_BITS, op.imm.to_signed() * WORD_BYTES as i64);
    state.pc = state.pc.add(&offset);
    Ok(Outcome::BranchTaken)
}

/// `pc = target`.
///
/// Without compatibility the 26-digit field, zero-extended, is the new PC.
/// With compatibility the field is a MARS word address based at
/// `0x0040_0000`; the origin is removed and the result scaled to bytes.
/// The field (or, with compatibility, the de-originated word index) must lie
/// in `[0, slots)`; otherwise the jump is rejected and the PC keeps its
/// incremented value.
pub fn jump(state: &mut MachineState, op: &JType, compat_jump_offset: bool) -> SimResult<Outcome> {
    let raw = op.target.to_integer();
    let slots = state.imem.capacity() as u64;
    let target = if compat_jump_offset {
        let word = raw
            .checked_sub(MARS_TEXT_BASE_WORD)
            .filter(|word| *word < slots)
            .ok_or(SimError::JumpTargetOutOfRange { target: raw })?;
        BitVector::from_value(WORD_BITS, (word * WORD_BYTES) as i64)
    } else {
        if raw >= slots {
            return Err(SimError::JumpTargetOutOfRange { target: raw });
        }
        op.target.pad(WORD_BITS)
    };
    state.pc = target;
    Ok(Outcome::Jumped)
}
