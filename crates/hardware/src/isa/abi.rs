//! MIPS O32 Application Binary Interface (ABI) register constants.
//!
//! Defines the register indices used by the loader, the syscall convention,
//! and the link-register instructions, plus the ABI names used in dumps and
//! disassembly.

/// `$zero` (hard-wired zero).
pub const REG_ZERO: usize = 0;
/// `$at` (assembler temporary).
pub const REG_AT: usize = 1;
/// `$v0` (syscall service number and result).
pub const REG_V0: usize = 2;
/// `$v1` (second result).
pub const REG_V1: usize = 3;
/// `$a0` (first argument; `argc` at program start).
pub const REG_A0: usize = 4;
/// `$a1` (second argument; `argv` at program start).
pub const REG_A1: usize = 5;
/// `$a2` (third argument).
pub const REG_A2: usize = 6;
/// `$a3` (fourth argument).
pub const REG_A3: usize = 7;
/// `$t0` (first temporary).
pub const REG_T0: usize = 8;
/// `$gp` (global pointer, seeded by the loader).
pub const REG_GP: usize = 28;
/// `$sp` (stack pointer).
pub const REG_SP: usize = 29;
/// `$fp` (frame pointer).
pub const REG_FP: usize = 30;
/// `$ra` (return address written by `JAL`, `BLTZAL`, `BGEZAL`).
pub const REG_RA: usize = 31;

/// ABI names for `$0`-`$31`.
pub const REG_NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Returns the ABI name for an integer register index.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}
