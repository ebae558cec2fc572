//! Execution units and functional components.
//!
//! This module contains the functional units the execution engine dispatches
//! to: the integer ALU, the floating-point unit, and the load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Floating-Point Unit for coprocessor 1 arithmetic.
pub mod fpu;

/// Load/Store Unit for memory access operations.
pub mod lsu;
