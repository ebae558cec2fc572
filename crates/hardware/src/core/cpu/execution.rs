//! Main Execution Step.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. Each step:
//! 1. **Fetch:** Forces `$0` to zero and reads the word at `pc`.
//! 2. **Decode:** Splits the word into its fields.
//! 3. **Execute:** Dispatches on the opcode; branches only replace the address that follows `npc`.
//! 4. **Advance:** Shifts the delay pair, `pc <- npc` and `npc <- next`.
//!
//! Every operand is read and every memory access is validated before the
//! first register or memory write, so a faulting instruction leaves the
//! machine exactly as it was before the step.

use tracing::trace;

use super::{Cpu, StepOutcome};
use crate::common::Fault;
use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::units::alu::{Alu, AluOp, MulDivOp};
use crate::isa::abi;
use crate::isa::decode::{Decoded, branch_target, decode, jump_target};
use crate::isa::disasm::disassemble;
use crate::isa::mips1::{funct, opcodes as op, regimm};
use crate::sim::syscall::{SyscallHandler, SyscallResult};
use crate::soc::AddressSpace;
use crate::stats::InstClass;

/// What an executed instruction did, for statistics and the run loop.
pub(super) type Executed = (InstClass, StepOutcome);

/// Shorthand for an instruction that continues normally.
#[inline]
pub(super) const fn cont(class: InstClass) -> Result<Executed, Fault> {
    Ok((class, StepOutcome::Continue))
}

impl Cpu {
    /// Executes exactly one instruction.
    ///
    /// # Arguments
    ///
    /// * `mem` - The guest address space.
    /// * `sys` - Handler for `SYSCALL` instructions.
    ///
    /// # Returns
    ///
    /// The step outcome, or the fault raised by the instruction. On `Exit`
    /// and `Halt` the delay pair is not advanced, so `pc` still addresses the
    /// instruction that stopped the program.
    pub fn step(
        &mut self,
        mem: &mut AddressSpace,
        sys: &mut dyn SyscallHandler,
    ) -> Result<StepOutcome, Fault> {
        self.regs.force_zero();

        let pc = self.pc;
        let inst = mem.read_word(pc)?;
        if self.trace {
            trace!(pc = %format_args!("{pc:#010x}"), "{}", disassemble(pc, inst));
        }

        let mut next = self.npc.wrapping_add(INSTRUCTION_BYTES);
        let (class, outcome) = self.execute(&decode(inst), mem, sys, &mut next)?;

        self.stats.record(class);
        if outcome == StepOutcome::Continue {
            self.pc = self.npc;
            self.npc = next;
        }
        self.regs.force_zero();
        Ok(outcome)
    }

    /// Return address written by the linking instructions.
    #[inline]
    const fn link_address(&self) -> u32 {
        self.npc.wrapping_add(INSTRUCTION_BYTES)
    }

    fn execute(
        &mut self,
        d: &Decoded,
        mem: &mut AddressSpace,
        sys: &mut dyn SyscallHandler,
        next: &mut u32,
    ) -> Result<Executed, Fault> {
        let rs = self.regs.read(d.rs);
        let rt = self.regs.read(d.rt);

        match d.opcode {
            op::SPECIAL => self.exec_special(d, mem, sys, next),
            op::REGIMM => self.exec_regimm(d, next),

            op::J => {
                *next = jump_target(self.npc, d.target);
                cont(InstClass::Branch)
            }
            op::JAL => {
                *next = jump_target(self.npc, d.target);
                self.regs.write(abi::REG_RA, self.link_address());
                cont(InstClass::Branch)
            }
            op::BEQ | op::BNE | op::BLEZ | op::BGTZ => {
                let taken = match d.opcode {
                    op::BEQ => rs == rt,
                    op::BNE => rs != rt,
                    op::BLEZ => (rs as i32) <= 0,
                    _ => (rs as i32) > 0,
                };
                if taken {
                    *next = branch_target(self.npc, d.imm);
                }
                cont(InstClass::Branch)
            }

            op::ADDI..=op::XORI => {
                let alu_op = match d.opcode {
                    op::ADDI => AluOp::Add,
                    op::ADDIU => AluOp::Addu,
                    op::SLTI => AluOp::Slt,
                    op::SLTIU => AluOp::Sltu,
                    op::ANDI => AluOp::And,
                    op::ORI => AluOp::Or,
                    _ => AluOp::Xor,
                };
                let val = Alu::execute(alu_op, rs, d.imm)?;
                self.regs.write(d.rt, val);
                cont(InstClass::Alu)
            }
            op::LUI => {
                self.regs.write(d.rt, d.imm << 16);
                cont(InstClass::Alu)
            }

            op::COP0..=op::COP3 => self.exec_cop(d, next),

            op::LB | op::LH | op::LWL | op::LW | op::LBU | op::LHU | op::LWR => {
                self.exec_load(d, mem)
            }
            op::SB | op::SH | op::SWL | op::SW | op::SWR => self.exec_store(d, mem),
            op::LWC0..=op::LWC3 => self.exec_load_cop(d, mem),
            op::SWC0..=op::SWC3 => self.exec_store_cop(d, mem),

            _ => Err(Fault::IllegalInstruction { inst: d.raw }),
        }
    }

    fn exec_special(
        &mut self,
        d: &Decoded,
        mem: &mut AddressSpace,
        sys: &mut dyn SyscallHandler,
        next: &mut u32,
    ) -> Result<Executed, Fault> {
        let rs = self.regs.read(d.rs);
        let rt = self.regs.read(d.rt);

        let alu_op = match d.funct {
            funct::SLL | funct::SLLV => Some(AluOp::Sll),
            funct::SRL | funct::SRLV => Some(AluOp::Srl),
            funct::SRA | funct::SRAV => Some(AluOp::Sra),
            funct::ADD => Some(AluOp::Add),
            funct::ADDU => Some(AluOp::Addu),
            funct::SUB => Some(AluOp::Sub),
            funct::SUBU => Some(AluOp::Subu),
            funct::AND => Some(AluOp::And),
            funct::OR => Some(AluOp::Or),
            funct::XOR => Some(AluOp::Xor),
            funct::NOR => Some(AluOp::Nor),
            funct::SLT => Some(AluOp::Slt),
            funct::SLTU => Some(AluOp::Sltu),
            _ => None,
        };
        if let Some(alu_op) = alu_op {
            let val = match d.funct {
                funct::SLL | funct::SRL | funct::SRA => Alu::execute(alu_op, rt, d.shamt)?,
                funct::SLLV | funct::SRLV | funct::SRAV => Alu::execute(alu_op, rt, rs)?,
                _ => Alu::execute(alu_op, rs, rt)?,
            };
            self.regs.write(d.rd, val);
            return cont(InstClass::Alu);
        }

        match d.funct {
            funct::JR => {
                *next = rs;
                cont(InstClass::Branch)
            }
            funct::JALR => {
                *next = rs;
                self.regs.write(d.rd, self.link_address());
                cont(InstClass::Branch)
            }
            funct::SYSCALL => {
                let service = self.regs.read(abi::REG_V0);
                let args = [
                    self.regs.read(abi::REG_A0),
                    self.regs.read(abi::REG_A1),
                    self.regs.read(abi::REG_A2),
                ];
                match sys.dispatch(service, args, mem)? {
                    SyscallResult::Return(v) => {
                        self.regs.write(abi::REG_V0, v as u32);
                        cont(InstClass::Syscall)
                    }
                    SyscallResult::Exit(status) => Ok((InstClass::Syscall, StepOutcome::Exit(status))),
                }
            }
            funct::BREAK => Ok((InstClass::Syscall, StepOutcome::Halt)),
            funct::MFHI => {
                self.regs.write(d.rd, self.regs.hi);
                cont(InstClass::Alu)
            }
            funct::MTHI => {
                self.regs.hi = rs;
                cont(InstClass::Alu)
            }
            funct::MFLO => {
                self.regs.write(d.rd, self.regs.lo);
                cont(InstClass::Alu)
            }
            funct::MTLO => {
                self.regs.lo = rs;
                cont(InstClass::Alu)
            }
            funct::MULT | funct::MULTU | funct::DIV | funct::DIVU => {
                let op = match d.funct {
                    funct::MULT => MulDivOp::Mult,
                    funct::MULTU => MulDivOp::Multu,
                    funct::DIV => MulDivOp::Div,
                    _ => MulDivOp::Divu,
                };
                let (hi, lo) = Alu::mul_div(op, rs, rt)?;
                self.regs.hi = hi;
                self.regs.lo = lo;
                cont(InstClass::Alu)
            }
            _ => Err(Fault::IllegalInstruction { inst: d.raw }),
        }
    }

    /// Executes `BLTZ`, `BGEZ`, `BLTZAL` and `BGEZAL`.
    ///
    /// The linking forms write `$ra` whether or not the branch is taken.
    fn exec_regimm(&mut self, d: &Decoded, next: &mut u32) -> Result<Executed, Fault> {
        let rs = self.regs.read(d.rs) as i32;
        let (taken, link) = match d.rt {
            regimm::BLTZ => (rs < 0, false),
            regimm::BGEZ => (rs >= 0, false),
            regimm::BLTZAL => (rs < 0, true),
            regimm::BGEZAL => (rs >= 0, true),
            _ => return Err(Fault::IllegalInstruction { inst: d.raw }),
        };
        if taken {
            *next = branch_target(self.npc, d.imm);
        }
        if link {
            self.regs.write(abi::REG_RA, self.link_address());
        }
        cont(InstClass::Branch)
    }
}
