//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Instruction width, segment table capacity, jump-region masks.
//! 2. **Access Widths:** The byte/half/word granularity of every memory access.
//! 3. **Error Handling:** Execution faults, segment allocation and image load errors.
//! 4. **Register Management:** A unified interface for the integer, HI/LO and FPU registers.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access width definitions.
pub mod data;

/// Error types and fault definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{INSTRUCTION_BYTES, MAX_SEGMENTS};
pub use data::AccessWidth;
pub use error::{Fault, LoadError, SegmentError};
pub use reg::RegisterFile;
