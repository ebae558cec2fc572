//! # Unit Components
//!
//! This module organizes the unit tests by the crate module they exercise:
//! shared types, the processor core, the ISA tables, the address space, and
//! the simulation layer.





/// Unit tests for the machine, loader, breakpoints and syscalls.
pub mod sim;
