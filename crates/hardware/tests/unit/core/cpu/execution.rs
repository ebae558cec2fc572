//! # Integer Execution Tests
//!
//! Whole-instruction arithmetic, logic, shifts and HI/LO through the machine.

use mipsim_core::common::Fault;
use mipsim_core::RunStatus;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::inst;
use crate::common::harness::{TEXT_BASE, TestContext, reg::*};

fn expect_fault(ctx: &mut TestContext) -> Fault {
    match ctx.run(1) {
        RunStatus::Fault(report) => report.fault,
        other => panic!("expected a fault, got {other:?}"),
    }
}

#[test]
fn zero_register_ignores_writes() {
    let mut ctx = TestContext::new().load_program(&[
        inst().addiu(ZERO, ZERO, 5).build(),
        inst().lui(ZERO, 0x1234).build(),
        inst().addu(T0, ZERO, ZERO).build(),
    ]);
    ctx.step();
    assert_eq!(ctx.get_reg(ZERO), 0);
    ctx.step();
    assert_eq!(ctx.get_reg(ZERO), 0);
    ctx.set_reg(T0, 99);
    ctx.step();
    assert_eq!(ctx.get_reg(T0), 0);
}

#[test]
fn add_overflow_faults_without_writing() {
    let mut ctx = TestContext::new().load_program(&[inst().add(T2, T0, T1).build()]);
    ctx.set_reg(T0, 0x7FFF_FFFF);
    ctx.set_reg(T1, 1);
    ctx.set_reg(T2, 0xDEAD);

    assert_eq!(expect_fault(&mut ctx), Fault::ArithmeticOverflow);
    assert_eq!(ctx.get_reg(T2), 0xDEAD);
    assert_eq!(ctx.cpu().pc, TEXT_BASE);
}

#[test]
fn addu_wraps_silently() {
    let mut ctx = TestContext::new().load_program(&[inst().addu(T2, T0, T1).build()]);
    ctx.set_reg(T0, 0x7FFF_FFFF);
    ctx.set_reg(T1, 1);
    ctx.step();
    assert_eq!(ctx.get_reg(T2), 0x8000_0000);
}

#[test]
fn addi_sign_extends_and_traps_on_overflow() {
    let mut ctx = TestContext::new().load_program(&[
        inst().addi(T0, ZERO, -1).build(),
        inst().addi(T1, T2, 1).build(),
    ]);
    ctx.set_reg(T2, 0x7FFF_FFFF);
    ctx.step();
    assert_eq!(ctx.get_reg(T0), 0xFFFF_FFFF);
    assert_eq!(expect_fault(&mut ctx), Fault::ArithmeticOverflow);
    assert_eq!(ctx.get_reg(T1), 0);
}

#[test]
fn sub_overflow_faults() {
    let mut ctx = TestContext::new().load_program(&[inst().sub(T2, T0, T1).build()]);
    ctx.set_reg(T0, 0x8000_0000);
    ctx.set_reg(T1, 1);
    assert_eq!(expect_fault(&mut ctx), Fault::ArithmeticOverflow);
}

#[rstest]
#[case::ori(inst().ori(T0, ZERO, -1).build(), 0x0000_FFFF)]
#[case::andi(inst().andi(T0, T1, -1).build(), 0x0000_5678)]
#[case::xori(inst().xori(T0, T1, 0x8000).build(), 0x1234_D678)]
#[case::addiu(inst().addiu(T0, T1, -0x5678).build(), 0x1234_0000)]
#[case::slti(inst().slti(T0, T1, -1).build(), 0)]
#[case::sltiu_sign_extended_compare(inst().sltiu(T0, ZERO, -1).build(), 1)]
#[case::lui(inst().lui(T0, 0xABCD).build(), 0xABCD_0000)]
fn immediate_forms(#[case] word: u32, #[case] expected: u32) {
    let mut ctx = TestContext::new().load_program(&[word]);
    ctx.set_reg(T1, 0x1234_5678);
    ctx.step();
    assert_eq!(ctx.get_reg(T0), expected);
}

#[rstest]
#[case::and(inst().and(T2, T0, T1).build(), 0x0000_0F00)]
#[case::or(inst().or(T2, T0, T1).build(), 0xF0F0_FFFF)]
#[case::xor(inst().xor(T2, T0, T1).build(), 0xF0F0_F0FF)]
#[case::nor(inst().nor(T2, T0, T1).build(), 0x0F0F_0000)]
#[case::slt(inst().slt(T2, T0, T1).build(), 1)]
#[case::sltu(inst().sltu(T2, T0, T1).build(), 0)]
#[case::subu(inst().subu(T2, T1, T0).build(), 0x0F10_F0FF)]
fn register_forms(#[case] word: u32, #[case] expected: u32) {
    let mut ctx = TestContext::new().load_program(&[word]);
    ctx.set_reg(T0, 0xF0F0_0F00);
    ctx.set_reg(T1, 0x0000_FFFF);
    ctx.step();
    assert_eq!(ctx.get_reg(T2), expected);
}

#[rstest]
#[case::sll(inst().sll(T0, T1, 4).build(), 0x0000_0001, 0x0000_0010)]
#[case::srl(inst().srl(T0, T1, 4).build(), 0x8000_0000, 0x0800_0000)]
#[case::sra(inst().sra(T0, T1, 4).build(), 0x8000_0000, 0xF800_0000)]
#[case::sllv_masks_amount(inst().sllv(T0, T1, T2).build(), 0x0000_0001, 0x0000_0008)]
#[case::srav_masks_amount(inst().srav(T0, T1, T2).build(), 0x8000_0000, 0xF000_0000)]
fn shifts(#[case] word: u32, #[case] value: u32, #[case] expected: u32) {
    let mut ctx = TestContext::new().load_program(&[word]);
    ctx.set_reg(T1, value);
    ctx.set_reg(T2, 35);
    ctx.step();
    assert_eq!(ctx.get_reg(T0), expected);
}

#[test]
fn mult_fills_hi_lo() {
    let mut ctx = TestContext::new().load_program(&[
        inst().mult(T0, T1).build(),
        inst().mfhi(T2).build(),
        inst().mflo(T3).build(),
    ]);
    ctx.set_reg(T0, (-3i32) as u32);
    ctx.set_reg(T1, 5);
    assert_eq!(ctx.run(3), RunStatus::BudgetExhausted);
    assert_eq!(ctx.get_reg(T2), 0xFFFF_FFFF);
    assert_eq!(ctx.get_reg(T3), (-15i32) as u32);
}

#[test]
fn multu_high_word() {
    let mut ctx = TestContext::new().load_program(&[inst().multu(T0, T1).build()]);
    ctx.set_reg(T0, 0xFFFF_FFFF);
    ctx.set_reg(T1, 2);
    ctx.step();
    assert_eq!(ctx.cpu().regs.hi, 1);
    assert_eq!(ctx.cpu().regs.lo, 0xFFFF_FFFE);
}

#[test]
fn div_truncates_toward_zero() {
    let mut ctx = TestContext::new().load_program(&[inst().div(T0, T1).build()]);
    ctx.set_reg(T0, (-7i32) as u32);
    ctx.set_reg(T1, 2);
    ctx.step();
    assert_eq!(ctx.cpu().regs.lo, (-3i32) as u32);
    assert_eq!(ctx.cpu().regs.hi, (-1i32) as u32);
}

#[test]
fn divide_by_zero_leaves_hi_lo() {
    let mut ctx = TestContext::new().load_program(&[
        inst().mthi(T2).build(),
        inst().mtlo(T3).build(),
        inst().divu(T0, ZERO).build(),
    ]);
    ctx.set_reg(T2, 0x1111);
    ctx.set_reg(T3, 0x2222);
    assert_eq!(ctx.run(2), RunStatus::BudgetExhausted);

    assert_eq!(expect_fault(&mut ctx), Fault::DivideByZero);
    assert_eq!(ctx.cpu().regs.hi, 0x1111);
    assert_eq!(ctx.cpu().regs.lo, 0x2222);
    assert_eq!(ctx.cpu().pc, TEXT_BASE + 8);
}

#[test]
fn unknown_opcode_is_illegal() {
    let word = 0xFC00_0000;
    let mut ctx = TestContext::new().load_program(&[word]);
    assert_eq!(expect_fault(&mut ctx), Fault::IllegalInstruction { inst: word });
}

#[test]
fn unknown_special_function_is_illegal() {
    let word = inst().special(0x3F, T0, T1, T2).build();
    let mut ctx = TestContext::new().load_program(&[word]);
    assert_eq!(expect_fault(&mut ctx), Fault::IllegalInstruction { inst: word });
}

#[test]
fn every_step_counts_one_cycle() {
    let mut ctx = TestContext::new().load_program(&[
        inst().addiu(T0, ZERO, 1).build(),
        inst().nop().build(),
        inst().addiu(T0, T0, 1).build(),
    ]);
    assert_eq!(ctx.run(3), RunStatus::BudgetExhausted);
    assert_eq!(ctx.machine.stats().cycles, 3);
    assert_eq!(ctx.machine.stats().inst_alu, 3);
}
