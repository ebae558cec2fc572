//! MIPS-I Base Integer Instruction Set.
//!
//! Encodings for the primary opcodes, the `SPECIAL` function field, and the
//! `REGIMM` branch selector.

/// `SPECIAL` (opcode 0) function codes.
pub mod funct;

/// Primary opcodes (bits 26-31).
pub mod opcodes;

/// `REGIMM` (opcode 1) selectors carried in the `rt` field.
pub mod regimm;
