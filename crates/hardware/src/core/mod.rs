//! Core processor implementation.
//!
//! This module contains the CPU implementation: architectural register
//! state, the functional units, and the fetch-decode-execute step that
//! ties them together.

/// Architectural state (register files, coprocessor banks).
pub mod arch;

/// CPU core implementation and instruction execution.
pub mod cpu;

/// Execution units (ALU, FPU, LSU).
pub mod units;

pub use self::cpu::Cpu;
