//! MIPS General-Purpose Register File.
//!
//! This module implements the integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`$0`-`$31`).
//! 2. **Invariant Enforcement:** Forces register `$0` back to zero at instruction boundaries.
//! 3. **Debugging:** Provides register dumps labelled with ABI names.

use crate::common::constants::NUM_GPRS;
use crate::isa::abi;

/// General-Purpose Register file.
///
/// Writes to `$0` are stored like any other register; the execution engine
/// calls [`Gpr::force_zero`] before and after every instruction, so no
/// instruction ever observes a non-zero `$0`.
#[derive(Clone, Debug, Default)]
pub struct Gpr {
    regs: [u32; NUM_GPRS],
}

impl Gpr {
    /// Creates a new register file with all registers cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    #[inline(always)]
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    #[inline(always)]
    pub fn write(&mut self, idx: usize, val: u32) {
        self.regs[idx] = val;
    }

    /// Restores the hard-wired zero register.
    #[inline(always)]
    pub fn force_zero(&mut self) {
        self.regs[abi::REG_ZERO] = 0;
    }

    /// Clears every register.
    pub fn clear(&mut self) {
        self.regs = [0; NUM_GPRS];
    }

    /// Formats the registers four to a line, labelled by ABI name.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for i in 0..8 {
            let line = [i, i + 8, i + 16, i + 24]
                .iter()
                .map(|&r| format!("{:>5} = {:#010x}", abi::reg_name(r), self.regs[r]))
                .collect::<Vec<_>>()
                .join("    ");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
