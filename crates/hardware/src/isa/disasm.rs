//! Instruction Disassembler for MIPS-I.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for fault diagnostics and instruction tracing.
//!
//! Branch and jump targets are resolved to absolute addresses, which is why
//! the instruction's own address is an input.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! let text = disassemble(0x0040_0000, 0x2408_0005); // addiu $t0, $zero, 5
//! assert_eq!(text, "addiu $t0, $zero, 5");
//! ```

use crate::common::constants::INSTRUCTION_BYTES;
use crate::isa::abi::reg_name;
use crate::isa::cop::{fpu, subops};
use crate::isa::decode::{Decoded, branch_target, decode, jump_target};
use crate::isa::mips1::{funct, opcodes as op, regimm};

/// Disassembles one instruction.
///
/// Returns a mnemonic like `"addu $v0, $a0, $a1"`, or a bracketed field dump
/// such as `"<op=63>"` for unrecognised encodings.
///
/// # Arguments
///
/// * `pc` - Address the instruction was fetched from.
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(pc: u32, inst: u32) -> String {
    let d = decode(inst);
    let npc = pc.wrapping_add(INSTRUCTION_BYTES);
    let (rs, rt) = (reg_name(d.rs), reg_name(d.rt));
    let simm = d.imm as i32;

    match d.opcode {
        op::SPECIAL => disasm_special(&d),
        op::REGIMM => {
            let mn = match d.rt {
                regimm::BLTZ => "bltz",
                regimm::BGEZ => "bgez",
                regimm::BLTZAL => "bltzal",
                regimm::BGEZAL => "bgezal",
                _ => {
                    return format!(
                        "<op=regimm,rs={},rt={},imm={:#06x}>",
                        d.rs,
                        d.rt,
                        inst & 0xFFFF
                    );
                }
            };
            format!("{mn} {rs}, {:#010x}", branch_target(npc, d.imm))
        }
        op::J => format!("j {:#010x}", jump_target(npc, d.target)),
        op::JAL => format!("jal {:#010x}", jump_target(npc, d.target)),
        op::BEQ => format!("beq {rs}, {rt}, {:#010x}", branch_target(npc, d.imm)),
        op::BNE => format!("bne {rs}, {rt}, {:#010x}", branch_target(npc, d.imm)),
        op::BLEZ => format!("blez {rs}, {:#010x}", branch_target(npc, d.imm)),
        op::BGTZ => format!("bgtz {rs}, {:#010x}", branch_target(npc, d.imm)),
        op::ADDI => format!("addi {rt}, {rs}, {simm}"),
        op::ADDIU => format!("addiu {rt}, {rs}, {simm}"),
        op::SLTI => format!("slti {rt}, {rs}, {simm}"),
        op::SLTIU => format!("sltiu {rt}, {rs}, {simm}"),
        op::ANDI => format!("andi {rt}, {rs}, {:#x}", d.imm),
        op::ORI => format!("ori {rt}, {rs}, {:#x}", d.imm),
        op::XORI => format!("xori {rt}, {rs}, {:#x}", d.imm),
        op::LUI => format!("lui {rt}, {:#x}", d.imm),
        op::COP0..=op::COP3 => disasm_cop(&d, npc),
        op::LB | op::LH | op::LWL | op::LW | op::LBU | op::LHU | op::LWR | op::SB | op::SH
        | op::SWL | op::SW | op::SWR => {
            let mn = match d.opcode {
                op::LB => "lb",
                op::LH => "lh",
                op::LWL => "lwl",
                op::LW => "lw",
                op::LBU => "lbu",
                op::LHU => "lhu",
                op::LWR => "lwr",
                op::SB => "sb",
                op::SH => "sh",
                op::SWL => "swl",
                op::SW => "sw",
                _ => "swr",
            };
            format!("{mn} {rt}, {simm}({rs})")
        }
        op::LWC1 => format!("lwc1 $f{}, {simm}({rs})", d.rt),
        op::SWC1 => format!("swc1 $f{}, {simm}({rs})", d.rt),
        op::LWC0 | op::LWC2 | op::LWC3 => {
            format!("lwc{} {rt}, {simm}({rs})", d.opcode - op::LWC0)
        }
        op::SWC0 | op::SWC2 | op::SWC3 => {
            format!("swc{} {rt}, {simm}({rs})", d.opcode - op::SWC0)
        }
        _ => format!("<op={}>", d.opcode),
    }
}

/// Disassembles a `SPECIAL` (R-type) instruction.
fn disasm_special(d: &Decoded) -> String {
    let (rs, rt, rd) = (reg_name(d.rs), reg_name(d.rt), reg_name(d.rd));
    match d.funct {
        funct::SLL if d.raw == 0 => "nop".to_string(),
        funct::SLL => format!("sll {rd}, {rt}, {}", d.shamt),
        funct::SRL => format!("srl {rd}, {rt}, {}", d.shamt),
        funct::SRA => format!("sra {rd}, {rt}, {}", d.shamt),
        funct::SLLV => format!("sllv {rd}, {rt}, {rs}"),
        funct::SRLV => format!("srlv {rd}, {rt}, {rs}"),
        funct::SRAV => format!("srav {rd}, {rt}, {rs}"),
        funct::JR => format!("jr {rs}"),
        funct::JALR => format!("jalr {rd}, {rs}"),
        funct::SYSCALL => "syscall".to_string(),
        funct::BREAK => "break".to_string(),
        funct::MFHI => format!("mfhi {rd}"),
        funct::MTHI => format!("mthi {rs}"),
        funct::MFLO => format!("mflo {rd}"),
        funct::MTLO => format!("mtlo {rs}"),
        funct::MULT => format!("mult {rs}, {rt}"),
        funct::MULTU => format!("multu {rs}, {rt}"),
        funct::DIV => format!("div {rs}, {rt}"),
        funct::DIVU => format!("divu {rs}, {rt}"),
        funct::ADD => format!("add {rd}, {rs}, {rt}"),
        funct::ADDU => format!("addu {rd}, {rs}, {rt}"),
        funct::SUB => format!("sub {rd}, {rs}, {rt}"),
        funct::SUBU => format!("subu {rd}, {rs}, {rt}"),
        funct::AND => format!("and {rd}, {rs}, {rt}"),
        funct::OR => format!("or {rd}, {rs}, {rt}"),
        funct::XOR => format!("xor {rd}, {rs}, {rt}"),
        funct::NOR => format!("nor {rd}, {rs}, {rt}"),
        funct::SLT => format!("slt {rd}, {rs}, {rt}"),
        funct::SLTU => format!("sltu {rd}, {rs}, {rt}"),
        _ => format!(
            "<op=special,rs={},rt={},rd={},sa={},funct={}>",
            d.rs, d.rt, d.rd, d.shamt, d.funct
        ),
    }
}

/// Disassembles a `COPz` instruction, including FPU arithmetic for coprocessor 1.
fn disasm_cop(d: &Decoded, npc: u32) -> String {
    let z = d.opcode - op::COP0;
    let rt = reg_name(d.rt);
    let fs = d.rd;

    match d.rs {
        subops::MF if z == 1 => format!("mfc1 {rt}, $f{fs}"),
        subops::MT if z == 1 => format!("mtc1 {rt}, $f{fs}"),
        subops::MF => format!("mfc{z} {rt}, ${}", d.rd),
        subops::MT => format!("mtc{z} {rt}, ${}", d.rd),
        subops::CF => format!("cfc{z} {rt}, ${}", d.rd),
        subops::CT => format!("ctc{z} {rt}, ${}", d.rd),
        subops::BC => {
            let tf = if d.rt & subops::BC_TRUE_BIT != 0 { 't' } else { 'f' };
            format!("bc{z}{tf} {:#010x}", branch_target(npc, d.imm))
        }
        fpu::FMT_S | fpu::FMT_D | fpu::FMT_W if z == 1 => disasm_fpu(d),
        _ => format!("<op=cop{z},rs={}>", d.rs),
    }
}

/// Disassembles an FPU arithmetic, conversion, or compare instruction.
fn disasm_fpu(d: &Decoded) -> String {
    let fmt = match d.rs {
        fpu::FMT_S => 's',
        fpu::FMT_D => 'd',
        _ => 'w',
    };
    let (ft, fs, fd) = (d.rt, d.rd, d.shamt);

    match d.funct {
        fpu::ADD => format!("add.{fmt} $f{fd}, $f{fs}, $f{ft}"),
        fpu::SUB => format!("sub.{fmt} $f{fd}, $f{fs}, $f{ft}"),
        fpu::MUL => format!("mul.{fmt} $f{fd}, $f{fs}, $f{ft}"),
        fpu::DIV => format!("div.{fmt} $f{fd}, $f{fs}, $f{ft}"),
        fpu::ABS => format!("abs.{fmt} $f{fd}, $f{fs}"),
        fpu::MOV => format!("mov.{fmt} $f{fd}, $f{fs}"),
        fpu::NEG => format!("neg.{fmt} $f{fd}, $f{fs}"),
        fpu::CVT_S => format!("cvt.s.{fmt} $f{fd}, $f{fs}"),
        fpu::CVT_D => format!("cvt.d.{fmt} $f{fd}, $f{fs}"),
        fpu::CVT_W => format!("cvt.w.{fmt} $f{fd}, $f{fs}"),
        f if f >= fpu::C_BASE => {
            let cond = fpu::COND_NAMES[(f & fpu::COND_MASK) as usize];
            format!("c.{cond}.{fmt} $f{fs}, $f{ft}")
        }
        _ => format!("<op=cop1,fmt={},funct={}>", d.rs, d.funct),
    }
}
