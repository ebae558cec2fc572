//! Instruction encoding and field extraction.
//!
//! Provides bit extraction for the fixed MIPS-I fields:
//!
//! ```text
//!  31    26 25   21 20   16 15   11 10    6 5      0
//! |  op    |  rs   |  rt   |  rd   | shamt | funct  |   R-type
//! |  op    |  rs   |  rt   |      immediate         |   I-type
//! |  op    |            target                      |   J-type
//! ```

/// Bit shift of the primary opcode field.
pub const OPCODE_SHIFT: u32 = 26;
/// Mask for a 5-bit register or shift-amount field.
pub const REG_MASK: u32 = 0x1F;
/// Mask for the 6-bit opcode and function fields.
pub const FUNCT_MASK: u32 = 0x3F;
/// Mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;
/// Mask for the 26-bit jump target field.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Primary opcode (bits 26-31).
    fn opcode(&self) -> u32;
    /// First source register, also the coprocessor sub-op and FPU format (bits 21-25).
    fn rs(&self) -> usize;
    /// Second source / load destination register, also the `REGIMM` selector (bits 16-20).
    fn rt(&self) -> usize;
    /// Destination register of R-type instructions (bits 11-15).
    fn rd(&self) -> usize;
    /// Shift amount; the FPU destination `fd` (bits 6-10).
    fn shamt(&self) -> u32;
    /// Function field of `SPECIAL` and FPU instructions (bits 0-5).
    fn funct(&self) -> u32;
    /// Raw 16-bit immediate (bits 0-15), not extended.
    fn imm16(&self) -> u32;
    /// Immediate sign-extended to 32 bits.
    fn simm(&self) -> u32;
    /// 26-bit jump target (bits 0-25).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self >> OPCODE_SHIFT
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> 21) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> 16) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 11) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 6) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn simm(&self) -> u32 {
        (*self as u16) as i16 as i32 as u32
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}
