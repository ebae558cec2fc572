//! System-wide constants.
//!
//! Values fixed by the MIPS-I architecture or by the simulator's memory model.
//! Anything a user may reasonably want to change lives in [`crate::config`] instead.

/// Width of every MIPS-I instruction in bytes.
pub const INSTRUCTION_BYTES: u32 = 4;

/// Maximum number of simultaneously allocated memory segments.
pub const MAX_SEGMENTS: usize = 16;

/// Number of general-purpose integer registers.
pub const NUM_GPRS: usize = 32;

/// Number of coprocessor units addressable by the `COPz` opcodes.
pub const NUM_COPROCESSORS: usize = 4;

/// Registers per coprocessor bank (general and control banks alike).
pub const COP_BANK_SIZE: usize = 32;

/// Number of single-precision slots in the FPU register file.
pub const NUM_FPR_SLOTS: usize = 32;

/// Mask selecting the 256 MiB region a direct jump stays within.
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Distance from the end of the register-info segment to the global-pointer seed.
///
/// The register-info block is `gprmask, cprmask[4], gp_value`; the seed is its last word.
pub const GP_SEED_END_OFFSET: u32 = 4;

/// Alignment of the stack pointer handed to the guest.
pub const STACK_ALIGN: u32 = 8;
