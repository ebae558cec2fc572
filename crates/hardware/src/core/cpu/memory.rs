//! Load and Store Instructions.
//!
//! This module provides the interface between the CPU and the guest address
//! space. It performs the following:
//! 1. **Address Generation:** `rs + sign_extend(offset)`, wrapping at 32 bits.
//! 2. **Integer Access:** Byte, half, word and partial-word loads and stores through the LSU.
//! 3. **Coprocessor Access:** `LWCz`/`SWCz`, with coprocessor 1 addressing the FPU file.

use super::{Cpu, FPU_COP};
use super::execution::{Executed, cont};
use crate::common::Fault;
use crate::core::units::lsu::{LoadKind, Lsu, StoreKind};
use crate::isa::decode::Decoded;
use crate::isa::mips1::opcodes as op;
use crate::soc::AddressSpace;
use crate::stats::InstClass;

impl Cpu {
    /// Computes the effective address `rs + offset`.
    #[inline]
    fn effective_address(&self, d: &Decoded) -> u32 {
        self.regs.read(d.rs).wrapping_add(d.imm)
    }

    /// Executes an integer load into `rt`.
    pub(super) fn exec_load(&mut self, d: &Decoded, mem: &AddressSpace) -> Result<Executed, Fault> {
        let kind = match d.opcode {
            op::LB => LoadKind::Byte,
            op::LBU => LoadKind::ByteUnsigned,
            op::LH => LoadKind::Half,
            op::LHU => LoadKind::HalfUnsigned,
            op::LW => LoadKind::Word,
            op::LWL => LoadKind::WordLeft,
            _ => LoadKind::WordRight,
        };
        let addr = self.effective_address(d);
        let val = Lsu::load(mem, kind, addr, self.regs.read(d.rt))?;
        self.regs.write(d.rt, val);
        cont(InstClass::Load)
    }

    /// Executes an integer store of `rt`.
    pub(super) fn exec_store(
        &mut self,
        d: &Decoded,
        mem: &mut AddressSpace,
    ) -> Result<Executed, Fault> {
        let kind = match d.opcode {
            op::SB => StoreKind::Byte,
            op::SH => StoreKind::Half,
            op::SW => StoreKind::Word,
            op::SWL => StoreKind::WordLeft,
            _ => StoreKind::WordRight,
        };
        let addr = self.effective_address(d);
        Lsu::store(mem, kind, addr, self.regs.read(d.rt))?;
        cont(InstClass::Store)
    }

    /// Executes `LWCz`: loads a word into general register `rt` of coprocessor `z`.
    pub(super) fn exec_load_cop(
        &mut self,
        d: &Decoded,
        mem: &AddressSpace,
    ) -> Result<Executed, Fault> {
        let z = (d.opcode - op::LWC0) as usize;
        let val = mem.read_word(self.effective_address(d))?;
        if z == FPU_COP {
            self.regs.fpr_mut().write_word(d.rt, val);
        } else {
            self.cop.bank_mut(z).general[d.rt] = val;
        }
        cont(InstClass::Load)
    }

    /// Executes `SWCz`: stores general register `rt` of coprocessor `z`.
    pub(super) fn exec_store_cop(
        &mut self,
        d: &Decoded,
        mem: &mut AddressSpace,
    ) -> Result<Executed, Fault> {
        let z = (d.opcode - op::SWC0) as usize;
        let val = if z == FPU_COP {
            self.regs.fpr().read_word(d.rt)
        } else {
            self.cop.bank(z).general[d.rt]
        };
        mem.write_word(self.effective_address(d), val)?;
        cont(InstClass::Store)
    }
}
