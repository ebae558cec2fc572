//! `SPECIAL` Function Codes (bits 0-5).

/// Shift left logical by `shamt`.
pub const SLL: u32 = 0;
/// Shift right logical by `shamt`.
pub const SRL: u32 = 2;
/// Shift right arithmetic by `shamt`.
pub const SRA: u32 = 3;
/// Shift left logical by register.
pub const SLLV: u32 = 4;
/// Shift right logical by register.
pub const SRLV: u32 = 6;
/// Shift right arithmetic by register.
pub const SRAV: u32 = 7;
/// Jump register.
pub const JR: u32 = 8;
/// Jump and link register.
pub const JALR: u32 = 9;
/// System call.
pub const SYSCALL: u32 = 12;
/// Breakpoint trap.
pub const BREAK: u32 = 13;
/// Move from HI.
pub const MFHI: u32 = 16;
/// Move to HI.
pub const MTHI: u32 = 17;
/// Move from LO.
pub const MFLO: u32 = 18;
/// Move to LO.
pub const MTLO: u32 = 19;
/// Signed 64-bit multiply.
pub const MULT: u32 = 24;
/// Unsigned 64-bit multiply.
pub const MULTU: u32 = 25;
/// Signed divide.
pub const DIV: u32 = 26;
/// Unsigned divide.
pub const DIVU: u32 = 27;
/// Add (traps on overflow).
pub const ADD: u32 = 32;
/// Add unsigned (no trap).
pub const ADDU: u32 = 33;
/// Subtract (traps on overflow).
pub const SUB: u32 = 34;
/// Subtract unsigned (no trap).
pub const SUBU: u32 = 35;
/// Bitwise and.
pub const AND: u32 = 36;
/// Bitwise or.
pub const OR: u32 = 37;
/// Bitwise exclusive-or.
pub const XOR: u32 = 38;
/// Bitwise not-or.
pub const NOR: u32 = 39;
/// Set on less than (signed).
pub const SLT: u32 = 42;
/// Set on less than unsigned.
pub const SLTU: u32 = 43;
