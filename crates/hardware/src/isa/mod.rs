//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic for the
//! MIPS-I instruction set as executed by this simulator.
//!
//! # Encodings
//!
//! * `mips1`: Primary opcodes, `SPECIAL` function codes, and `REGIMM` selectors.
//! * `cop`: Coprocessor sub-operations and the FPU formats and functions.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Coprocessor and FPU encodings.
pub mod cop;

/// Instruction decoding into R/I/J-type fields.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base MIPS-I integer instruction set.
pub mod mips1;
