//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains registers, the PC/nPC delay pair, and coprocessor banks.
//! 2. **Execution:** Fetch, decode and execute one instruction per step.
//! 3. **Memory Access:** Integer and coprocessor loads and stores through the LSU.
//! 4. **Fault Reporting:** Turns a fault into a diagnostic for the trap channel.

/// Coprocessor transfers and FPU instruction execution.
pub mod coprocessor;

/// Instruction fetch, decode, and execution.
pub mod execution;

/// Load and store instruction handling.
pub mod memory;

/// Fault reporting for the trap channel.
pub mod trap;

use crate::common::RegisterFile;
use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::arch::cop::Coprocessors;
use crate::isa::cop::fpu::{FCSR, FCSR_COND_BIT};
use crate::stats::SimStats;

/// Coprocessor number of the FPU.
pub(crate) const FPU_COP: usize = 1;

/// Result of one successfully executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Keep running.
    Continue,
    /// The program requested exit with this status.
    Exit(i32),
    /// A `BREAK` instruction stopped the machine.
    Halt,
}

/// Main CPU structure containing all processor state.
///
/// `pc` is the address of the next instruction to fetch; `npc` is the address
/// that becomes `pc` after that instruction executes. A branch or jump changes
/// only the value that will follow `npc`, which is what gives every control
/// transfer its one-instruction delay slot.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    /// General Purpose, HI/LO and Floating Point Registers.
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: u32,
    /// Next Program Counter.
    pub npc: u32,
    /// Coprocessor general and control register banks.
    pub cop: Coprocessors,
    /// Enable instruction tracing.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a new CPU with every register cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry point, priming the delay pair with `npc = entry + 4`.
    pub fn set_entry(&mut self, entry: u32) {
        self.pc = entry;
        self.npc = entry.wrapping_add(INSTRUCTION_BYTES);
    }

    /// Clears every register, the coprocessor banks and the counters.
    ///
    /// `pc` and `npc` are left at zero; the loader sets the entry point.
    pub fn reset(&mut self) {
        self.regs.clear();
        self.cop.clear();
        self.pc = 0;
        self.npc = 0;
        self.stats = SimStats::default();
    }

    /// Returns the FPU condition flag, bit 23 of COP1 control register 31.
    #[inline]
    pub fn fp_cond(&self) -> bool {
        self.cop.bank(FPU_COP).control[FCSR] & FCSR_COND_BIT != 0
    }

    /// Sets or clears the FPU condition flag, leaving the other `FCR31` bits alone.
    #[inline]
    pub fn set_fp_cond(&mut self, cond: bool) {
        let fcsr = &mut self.cop.bank_mut(FPU_COP).control[FCSR];
        if cond {
            *fcsr |= FCSR_COND_BIT;
        } else {
            *fcsr &= !FCSR_COND_BIT;
        }
    }
}
