//! Coprocessor Instruction Encodings.
//!
//! The `COPz` opcodes carry a sub-operation in the `rs` field. For
//! coprocessor 1 the same field also selects an FPU arithmetic format.

/// FPU formats and function codes.
pub mod fpu;

/// Coprocessor sub-operations (`rs` field of `COPz`).
pub mod subops;
