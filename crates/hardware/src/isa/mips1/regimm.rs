//! `REGIMM` Selectors (`rt` field of opcode 1).

/// Branch on less than zero.
pub const BLTZ: usize = 0;
/// Branch on greater than or equal to zero.
pub const BGEZ: usize = 1;
/// Branch on less than zero and link.
pub const BLTZAL: usize = 16;
/// Branch on greater than or equal to zero and link.
pub const BGEZAL: usize = 17;
