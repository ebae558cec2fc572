//! Coprocessor Register Banks.
//!
//! Each of the four coprocessor units owns 32 general and 32 control registers.
//! The `MFCz`/`MTCz`/`CFCz`/`CTCz` and `LWCz`/`SWCz` instructions move data
//! between these banks and the integer register file or memory.
//!
//! Coprocessor 1's general bank is the FPU register file itself; the CPU
//! routes those accesses to [`super::fpr::Fpr`] instead of the bank stored here.

use crate::common::constants::{COP_BANK_SIZE, NUM_COPROCESSORS};

/// General and control registers for one coprocessor unit.
#[derive(Clone, Debug, Default)]
pub struct CopBank {
    /// General registers (`MFCz`/`MTCz`, `LWCz`/`SWCz`).
    pub general: [u32; COP_BANK_SIZE],
    /// Control registers (`CFCz`/`CTCz`).
    pub control: [u32; COP_BANK_SIZE],
}

/// All coprocessor banks, indexed by coprocessor number.
#[derive(Clone, Debug, Default)]
pub struct Coprocessors {
    banks: [CopBank; NUM_COPROCESSORS],
}

impl Coprocessors {
    /// Creates cleared banks for every coprocessor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bank for coprocessor `z`.
    #[inline]
    pub fn bank(&self, z: usize) -> &CopBank {
        &self.banks[z]
    }

    /// Returns the mutable bank for coprocessor `z`.
    #[inline]
    pub fn bank_mut(&mut self, z: usize) -> &mut CopBank {
        &mut self.banks[z]
    }

    /// Clears every bank.
    pub fn clear(&mut self) {
        self.banks = Default::default();
    }
}
