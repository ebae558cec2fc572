//! Coprocessor and FPU Instructions.
//!
//! This module executes the `COPz` opcodes. It performs the following:
//! 1. **Transfers:** `MFCz`/`MTCz` against the general bank, `CFCz`/`CTCz` against the control bank.
//! 2. **Condition Branches:** `BC1T`/`BC1F` on the FPU condition flag, bit 23 of `FCR31`.
//! 3. **FPU Arithmetic:** S/D/W-format arithmetic, conversion and compare on coprocessor 1.
//!
//! Coprocessor 1's general bank is the FPU register file. Double-precision
//! operands name the even register of an even/odd pair; an odd register in a
//! double-precision position is an illegal instruction.

use super::{Cpu, FPU_COP};
use super::execution::{Executed, cont};
use crate::common::Fault;
use crate::core::units::fpu::{FpOp, Fpu, compare};
use crate::isa::cop::{fpu, subops};
use crate::isa::decode::{Decoded, branch_target};
use crate::isa::mips1::opcodes as op;
use crate::stats::InstClass;

/// Operand format of an FPU instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Single,
    Double,
    Word,
}

impl Cpu {
    /// Executes a `COPz` instruction.
    pub(super) fn exec_cop(&mut self, d: &Decoded, next: &mut u32) -> Result<Executed, Fault> {
        let z = (d.opcode - op::COP0) as usize;
        let illegal = Fault::IllegalInstruction { inst: d.raw };

        match d.rs {
            subops::MF => {
                let val = if z == FPU_COP {
                    self.regs.fpr().read_word(d.rd)
                } else {
                    self.cop.bank(z).general[d.rd]
                };
                self.regs.write(d.rt, val);
            }
            subops::MT => {
                let val = self.regs.read(d.rt);
                if z == FPU_COP {
                    self.regs.fpr_mut().write_word(d.rd, val);
                } else {
                    self.cop.bank_mut(z).general[d.rd] = val;
                }
            }
            subops::CF => {
                let val = self.cop.bank(z).control[d.rd];
                self.regs.write(d.rt, val);
            }
            subops::CT => {
                self.cop.bank_mut(z).control[d.rd] = self.regs.read(d.rt);
            }
            subops::BC => {
                if z != FPU_COP {
                    return Err(illegal);
                }
                let want = d.rt & subops::BC_TRUE_BIT != 0;
                if self.fp_cond() == want {
                    *next = branch_target(self.npc, d.imm);
                }
                return cont(InstClass::Branch);
            }
            fpu::FMT_S | fpu::FMT_D | fpu::FMT_W if z == FPU_COP => {
                let fmt = match d.rs {
                    fpu::FMT_S => Format::Single,
                    fpu::FMT_D => Format::Double,
                    _ => Format::Word,
                };
                self.exec_fpu(d, fmt)?;
            }
            _ => return Err(illegal),
        }
        cont(InstClass::Fp)
    }

    /// Validates that `slot` may hold a double-precision operand.
    #[inline]
    const fn double_slot(slot: usize, inst: u32) -> Result<usize, Fault> {
        if slot & 1 == 0 {
            Ok(slot)
        } else {
            Err(Fault::IllegalInstruction { inst })
        }
    }

    /// Reads FPU register `slot` in format `fmt`, widened to `f64`.
    fn read_fp(&self, fmt: Format, slot: usize, inst: u32) -> Result<f64, Fault> {
        let fpr = self.regs.fpr();
        Ok(match fmt {
            Format::Single => f64::from(fpr.read_single(slot)),
            Format::Double => fpr.read_double(Self::double_slot(slot, inst)?),
            Format::Word => f64::from(fpr.read_int(slot)),
        })
    }

    fn exec_fpu(&mut self, d: &Decoded, fmt: Format) -> Result<(), Fault> {
        let (ft, fs, fd) = (d.rt, d.rd, d.shamt as usize);
        let inst = d.raw;
        let illegal = Fault::IllegalInstruction { inst };

        match (fmt, d.funct) {
            (Format::Single, fpu::ADD..=fpu::DIV) => {
                let op = fp_op(d.funct);
                let fpr = self.regs.fpr();
                let val = Fpu::single(op, fpr.read_single(fs), fpr.read_single(ft))?;
                self.regs.fpr_mut().write_single(fd, val);
            }
            (Format::Double, fpu::ADD..=fpu::DIV) => {
                let (fs, ft, fd) = (
                    Self::double_slot(fs, inst)?,
                    Self::double_slot(ft, inst)?,
                    Self::double_slot(fd, inst)?,
                );
                let op = fp_op(d.funct);
                let fpr = self.regs.fpr();
                let val = Fpu::double(op, fpr.read_double(fs), fpr.read_double(ft))?;
                self.regs.fpr_mut().write_double(fd, val);
            }
            (Format::Single, fpu::ABS | fpu::MOV | fpu::NEG) => {
                let v = self.regs.fpr().read_single(fs);
                let val = match d.funct {
                    fpu::ABS => v.abs(),
                    fpu::NEG => -v,
                    _ => v,
                };
                self.regs.fpr_mut().write_single(fd, val);
            }
            (Format::Double, fpu::ABS | fpu::MOV | fpu::NEG) => {
                let (fs, fd) = (Self::double_slot(fs, inst)?, Self::double_slot(fd, inst)?);
                let v = self.regs.fpr().read_double(fs);
                let val = match d.funct {
                    fpu::ABS => v.abs(),
                    fpu::NEG => -v,
                    _ => v,
                };
                self.regs.fpr_mut().write_double(fd, val);
            }
            (Format::Double | Format::Word, fpu::CVT_S) => {
                let v = self.read_fp(fmt, fs, inst)?;
                self.regs.fpr_mut().write_single(fd, v as f32);
            }
            (Format::Single | Format::Word, fpu::CVT_D) => {
                let fd = Self::double_slot(fd, inst)?;
                let v = self.read_fp(fmt, fs, inst)?;
                self.regs.fpr_mut().write_double(fd, v);
            }
            (Format::Single | Format::Double, fpu::CVT_W) => {
                let v = self.read_fp(fmt, fs, inst)?;
                self.regs.fpr_mut().write_int(fd, Fpu::to_word(v));
            }
            (Format::Single | Format::Double, f) if f >= fpu::C_BASE => {
                let a = self.read_fp(fmt, fs, inst)?;
                let b = self.read_fp(fmt, ft, inst)?;
                self.set_fp_cond(compare::evaluate(f & fpu::COND_MASK, a, b));
            }
            _ => return Err(illegal),
        }
        Ok(())
    }
}

/// Maps an arithmetic function code to its operation.
const fn fp_op(funct: u32) -> FpOp {
    match funct {
        fpu::ADD => FpOp::Add,
        fpu::SUB => FpOp::Sub,
        fpu::MUL => FpOp::Mul,
        _ => FpOp::Div,
    }
}
