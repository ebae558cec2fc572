//! MIPS-I system simulator library.
//!
//! This crate implements an instruction-set simulator for 32-bit little-endian
//! MIPS-I executables with the following:
//! 1. **Core:** A PC/nPC delay-pair interpreter, GPR/HI/LO/FPR state, and coprocessor banks.
//! 2. **Memory:** A fixed table of named, disjoint segments with aligned little-endian access.
//! 3. **ISA:** Decoding, execution and disassembly of the integer, coprocessor and FPU sets.
//! 4. **Simulation:** ELF loading, breakpoints, syscall services, and the run loop.
//! 5. **Support:** Configuration, faults and statistics collection.

/// Common types and constants (access widths, registers, faults).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (arch state, execution units, step and trap reporting).
pub mod core;
/// Instruction set (decode, opcode tables, ABI names, disassembly).
pub mod isa;
/// Machine, loader, breakpoints and syscall services.
pub mod sim;
/// Guest address space and segments.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Processor state and the single-step engine.
pub use crate::core::Cpu;
/// Top-level machine; construct with `Machine::new` and load an image.
pub use crate::sim::{Machine, RunStatus};
