//! Fault Reporting.
//!
//! This module implements the trap channel's reporting half. It performs the following:
//! 1. **Capture:** Records the fault together with the PC and, when fetchable, the instruction.
//! 2. **Diagnostics:** Formats a message including the instruction's disassembly.
//! 3. **Logging:** Emits the report at `error` level.
//!
//! Faults are never retried; the caller that receives a report decides what
//! to tell the user and which process exit code to use.

use std::fmt;

use tracing::error;

use super::Cpu;
use crate::common::Fault;
use crate::isa::disasm::disassemble;
use crate::soc::AddressSpace;

/// A fault captured at the instruction boundary where it occurred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaultReport {
    /// The fault raised.
    pub fault: Fault,
    /// Address of the faulting instruction.
    pub pc: u32,
    /// The faulting instruction word, if `pc` itself could be fetched.
    pub inst: Option<u32>,
}

impl FaultReport {
    /// Returns the signed status distinguishing fault categories.
    pub const fn status_code(&self) -> i32 {
        self.fault.status_code()
    }
}

impl fmt::Display for FaultReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at pc {:#010x}", self.fault, self.pc)?;
        if let Some(inst) = self.inst {
            write!(f, ": {inst:#010x}  {}", disassemble(self.pc, inst))?;
        }
        Ok(())
    }
}

impl Cpu {
    /// Routes a fault through the trap channel.
    ///
    /// Forces `$0` back to zero, captures the instruction at `pc` when it is
    /// fetchable, and logs the diagnostic.
    ///
    /// # Arguments
    ///
    /// * `fault` - The fault returned by [`Cpu::step`].
    /// * `mem` - The address space, used to fetch the faulting instruction.
    pub fn report_fault(&mut self, fault: Fault, mem: &AddressSpace) -> FaultReport {
        self.regs.force_zero();
        let report = FaultReport {
            fault,
            pc: self.pc,
            inst: mem.read_word(self.pc).ok(),
        };
        error!(kind = report.fault.kind(), status = report.status_code(), "{report}");
        report
    }
}
