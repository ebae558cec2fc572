//! # Load/Store Execution Tests
//!
//! Loads and stores decoded and executed through the machine.

use mipsim_core::RunStatus;
use mipsim_core::common::Fault;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::inst;
use crate::common::harness::{DATA_BASE, DATA_SIZE, TestContext, reg::*};

fn with_base(words: &[u32]) -> TestContext {
    let mut ctx = TestContext::new().load_program(words);
    ctx.set_reg(S0, DATA_BASE);
    ctx
}

fn expect_fault(ctx: &mut TestContext) -> Fault {
    match ctx.run(1) {
        RunStatus::Fault(report) => report.fault,
        other => panic!("expected a fault, got {other:?}"),
    }
}

#[test]
fn store_then_load_word_with_negative_offset() {
    let mut ctx = with_base(&[
        inst().sw(T1, T0, -4).build(),
        inst().lw(T2, S0, 4).build(),
    ]);
    ctx.set_reg(T0, DATA_BASE + 8);
    ctx.set_reg(T1, 0xCAFE_F00D);

    assert_eq!(ctx.run(2), RunStatus::BudgetExhausted);
    assert_eq!(ctx.read_word(DATA_BASE + 4), 0xCAFE_F00D);
    assert_eq!(ctx.get_reg(T2), 0xCAFE_F00D);
}

#[rstest]
#[case::lb(inst().lb(T0, S0, 1).build(), 0xFFFF_FF80)]
#[case::lbu(inst().lbu(T0, S0, 1).build(), 0x0000_0080)]
#[case::lh(inst().lh(T0, S0, 2).build(), 0xFFFF_8001)]
#[case::lhu(inst().lhu(T0, S0, 2).build(), 0x0000_8001)]
#[case::lw(inst().lw(T0, S0, 0).build(), 0x8001_8000)]
fn narrow_loads(#[case] word: u32, #[case] expected: u32) {
    let mut ctx = with_base(&[word]);
    ctx.write_word(DATA_BASE, 0x8001_8000);
    ctx.step();
    assert_eq!(ctx.get_reg(T0), expected);
}

#[test]
fn narrow_stores_keep_neighbours() {
    let mut ctx = with_base(&[
        inst().sb(T0, S0, 1).build(),
        inst().sh(T0, S0, 2).build(),
    ]);
    ctx.write_word(DATA_BASE, 0x1122_3344);
    ctx.set_reg(T0, 0xAABB_CCDD);

    ctx.step();
    assert_eq!(ctx.read_word(DATA_BASE), 0x1122_DD44);
    ctx.step();
    assert_eq!(ctx.read_word(DATA_BASE), 0xCCDD_DD44);
}

#[test]
fn store_word_right_at_byte_three() {
    let mut ctx = with_base(&[inst().swr(T0, S0, 7).build()]);
    ctx.write_word(DATA_BASE + 4, 0x1122_3344);
    ctx.set_reg(T0, 0xAABB_CCDD);
    ctx.step();
    assert_eq!(ctx.read_word(DATA_BASE + 4), 0xDD22_3344);
}

#[test]
fn unaligned_word_load_pair() {
    let mut ctx = with_base(&[
        inst().lwr(T0, S0, 1).build(),
        inst().lwl(T0, S0, 4).build(),
    ]);
    ctx.write_word(DATA_BASE, 0x3322_1100);
    ctx.write_word(DATA_BASE + 4, 0x7766_5544);
    ctx.set_reg(T0, 0xDEAD_BEEF);

    assert_eq!(ctx.run(2), RunStatus::BudgetExhausted);
    assert_eq!(ctx.get_reg(T0), 0x4433_2211);
}

#[test]
fn unaligned_word_store_pair() {
    let mut ctx = with_base(&[
        inst().swr(T0, S0, 1).build(),
        inst().swl(T0, S0, 4).build(),
    ]);
    ctx.set_reg(T0, 0x4433_2211);

    assert_eq!(ctx.run(2), RunStatus::BudgetExhausted);
    assert_eq!(ctx.read_word(DATA_BASE), 0x3322_1100);
    assert_eq!(ctx.read_word(DATA_BASE + 4), 0x0000_0044);
}

#[rstest]
#[case::lw(inst().lw(T0, S0, 2).build(), DATA_BASE + 2, 4)]
#[case::lh(inst().lh(T0, S0, 1).build(), DATA_BASE + 1, 2)]
#[case::lhu(inst().lhu(T0, S0, 3).build(), DATA_BASE + 3, 2)]
#[case::sw(inst().sw(T0, S0, 1).build(), DATA_BASE + 1, 4)]
#[case::sh(inst().sh(T0, S0, 5).build(), DATA_BASE + 5, 2)]
fn misaligned_access_faults(#[case] word: u32, #[case] addr: u32, #[case] width: u32) {
    let mut ctx = with_base(&[word]);
    ctx.set_reg(T0, 0xFFFF_FFFF);
    assert_eq!(expect_fault(&mut ctx), Fault::AddressError { addr, width });
    assert_eq!(ctx.read_word(DATA_BASE), 0);
    assert_eq!(ctx.read_word(DATA_BASE + 4), 0);
}

#[test]
fn store_to_unmapped_address_faults_and_writes_nothing() {
    let mut ctx = with_base(&[inst().sw(T0, S0, 0).build()]);
    ctx.set_reg(S0, DATA_BASE + DATA_SIZE);
    ctx.set_reg(T0, 1);
    assert_eq!(
        expect_fault(&mut ctx),
        Fault::SegmentationFault {
            addr: DATA_BASE + DATA_SIZE
        }
    );
}

#[test]
fn last_word_of_segment_is_accessible() {
    let mut ctx = with_base(&[
        inst().sw(T0, S0, (DATA_SIZE - 4) as i32).build(),
        inst().lw(T1, S0, (DATA_SIZE - 4) as i32).build(),
    ]);
    ctx.set_reg(T0, 0x5A5A_5A5A);
    assert_eq!(ctx.run(2), RunStatus::BudgetExhausted);
    assert_eq!(ctx.get_reg(T1), 0x5A5A_5A5A);
}

#[test]
fn load_into_zero_register_is_discarded() {
    let mut ctx = with_base(&[inst().lw(ZERO, S0, 0).build()]);
    ctx.write_word(DATA_BASE, 0x1234_5678);
    ctx.step();
    assert_eq!(ctx.get_reg(ZERO), 0);
}

#[test]
fn loads_and_stores_are_counted() {
    let mut ctx = with_base(&[
        inst().sw(T0, S0, 0).build(),
        inst().lw(T1, S0, 0).build(),
        inst().lbu(T1, S0, 0).build(),
    ]);
    assert_eq!(ctx.run(3), RunStatus::BudgetExhausted);
    assert_eq!(ctx.machine.stats().inst_store, 1);
    assert_eq!(ctx.machine.stats().inst_load, 2);
}
