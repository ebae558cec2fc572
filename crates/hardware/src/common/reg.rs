//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, the single interface for
//! the register state an instruction can name. It provides:
//! 1. **Unified Storage:** Integer registers, the HI/LO multiply/divide pair, and the FPU file.
//! 2. **Abstraction:** One set of methods for reading and writing each register class.
//! 3. **Observability:** Dump helpers for the debugger's register display.

use crate::core::arch::fpr::Fpr;
use crate::core::arch::gpr::Gpr;

/// Unified register file.
#[derive(Clone, Debug, Default)]
pub struct RegisterFile {
    gpr: Gpr,
    fpr: Fpr,
    /// High half of a 64-bit product, or the remainder of a division.
    pub hi: u32,
    /// Low half of a 64-bit product, or the quotient of a division.
    pub lo: u32,
}

impl RegisterFile {
    /// Creates a new register file with all registers cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    #[inline(always)]
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). A write to `$0` lasts only until the
    ///   next instruction boundary.
    /// * `val` - The 32-bit value to write.
    #[inline(always)]
    pub fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    /// Forces `$0` back to zero.
    #[inline(always)]
    pub fn force_zero(&mut self) {
        self.gpr.force_zero();
    }

    /// Returns the FPU register file.
    #[inline]
    pub fn fpr(&self) -> &Fpr {
        &self.fpr
    }

    /// Returns the mutable FPU register file.
    #[inline]
    pub fn fpr_mut(&mut self) -> &mut Fpr {
        &mut self.fpr
    }

    /// Clears every register, including HI/LO and the FPU file.
    pub fn clear(&mut self) {
        self.gpr.clear();
        self.fpr.clear();
        self.hi = 0;
        self.lo = 0;
    }

    /// Formats the integer registers and the HI/LO pair.
    pub fn dump(&self) -> String {
        let mut out = self.gpr.dump();
        out.push_str(&format!("  $hi = {:#010x}      $lo = {:#010x}\n", self.hi, self.lo));
        out
    }
}
