//! MIPS-I Instruction Decoder.
//!
//! Splits a 32-bit instruction word into the fields the execution engine
//! dispatches on. Every field is extracted unconditionally; which ones are
//! meaningful depends on the opcode.

use crate::isa::instruction::InstructionBits;
use crate::isa::mips1::opcodes;

/// Decoded instruction fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw instruction word.
    pub raw: u32,
    /// Primary opcode.
    pub opcode: u32,
    /// `rs` field.
    pub rs: usize,
    /// `rt` field.
    pub rt: usize,
    /// `rd` field.
    pub rd: usize,
    /// Shift amount (`fd` for FPU operations).
    pub shamt: u32,
    /// Function field.
    pub funct: u32,
    /// Immediate, sign- or zero-extended per opcode.
    pub imm: u32,
    /// 26-bit jump target.
    pub target: u32,
}

/// Decodes an instruction word into its component fields.
///
/// `ANDI`, `ORI`, `XORI` and `LUI` take a zero-extended immediate; every
/// other opcode gets it sign-extended.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();
    let imm = match opcode {
        opcodes::ANDI | opcodes::ORI | opcodes::XORI | opcodes::LUI => inst.imm16(),
        _ => inst.simm(),
    };

    Decoded {
        raw: inst,
        opcode,
        rs: inst.rs(),
        rt: inst.rt(),
        rd: inst.rd(),
        shamt: inst.shamt(),
        funct: inst.funct(),
        imm,
        target: inst.target(),
    }
}

/// Computes the target of a PC-relative branch.
///
/// # Arguments
///
/// * `npc` - Address of the delay slot.
/// * `imm` - Sign-extended 16-bit word offset.
#[inline]
pub fn branch_target(npc: u32, imm: u32) -> u32 {
    npc.wrapping_add(imm << 2)
}

/// Computes the target of a direct `J`/`JAL`.
///
/// The top four bits come from the delay-slot address.
#[inline]
pub fn jump_target(npc: u32, target: u32) -> u32 {
    (npc & crate::common::constants::JUMP_REGION_MASK) | (target << 2)
}
