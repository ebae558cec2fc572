//! MIPS-I Primary Opcodes.

/// R-type register-register operations, selected by `funct`.
pub const SPECIAL: u32 = 0;
/// Sign-comparison branches against zero, selected by `rt`.
pub const REGIMM: u32 = 1;
/// Jump.
pub const J: u32 = 2;
/// Jump and link.
pub const JAL: u32 = 3;
/// Branch on equal.
pub const BEQ: u32 = 4;
/// Branch on not equal.
pub const BNE: u32 = 5;
/// Branch on less than or equal to zero.
pub const BLEZ: u32 = 6;
/// Branch on greater than zero.
pub const BGTZ: u32 = 7;
/// Add immediate (traps on overflow).
pub const ADDI: u32 = 8;
/// Add immediate unsigned (no trap).
pub const ADDIU: u32 = 9;
/// Set on less than immediate.
pub const SLTI: u32 = 10;
/// Set on less than immediate unsigned.
pub const SLTIU: u32 = 11;
/// And immediate.
pub const ANDI: u32 = 12;
/// Or immediate.
pub const ORI: u32 = 13;
/// Exclusive-or immediate.
pub const XORI: u32 = 14;
/// Load upper immediate.
pub const LUI: u32 = 15;
/// Coprocessor 0 operation.
pub const COP0: u32 = 16;
/// Coprocessor 1 (FPU) operation.
pub const COP1: u32 = 17;
/// Coprocessor 2 operation.
pub const COP2: u32 = 18;
/// Coprocessor 3 operation.
pub const COP3: u32 = 19;
/// Load byte.
pub const LB: u32 = 32;
/// Load halfword.
pub const LH: u32 = 33;
/// Load word left.
pub const LWL: u32 = 34;
/// Load word.
pub const LW: u32 = 35;
/// Load byte unsigned.
pub const LBU: u32 = 36;
/// Load halfword unsigned.
pub const LHU: u32 = 37;
/// Load word right.
pub const LWR: u32 = 38;
/// Store byte.
pub const SB: u32 = 40;
/// Store halfword.
pub const SH: u32 = 41;
/// Store word left.
pub const SWL: u32 = 42;
/// Store word.
pub const SW: u32 = 43;
/// Store word right.
pub const SWR: u32 = 46;
/// Load word to coprocessor 0.
pub const LWC0: u32 = 48;
/// Load word to coprocessor 1.
pub const LWC1: u32 = 49;
/// Load word to coprocessor 2.
pub const LWC2: u32 = 50;
/// Load word to coprocessor 3.
pub const LWC3: u32 = 51;
/// Store word from coprocessor 0.
pub const SWC0: u32 = 56;
/// Store word from coprocessor 1.
pub const SWC1: u32 = 57;
/// Store word from coprocessor 2.
pub const SWC2: u32 = 58;
/// Store word from coprocessor 3.
pub const SWC3: u32 = 59;
