//! Architectural state definitions.
//!
//! Register storage as the program sees it:
//! - [`gpr`]: the 32 integer registers.
//! - [`fpr`]: the FPU register file with its aliased single/double/integer views.
//! - [`cop`]: the general and control banks of the four coprocessor units.

/// Coprocessor general and control register banks.
pub mod cop;

/// Floating-point register file.
pub mod fpr;

/// General-purpose register file.
pub mod gpr;
