//! # Breakpoint Tests
//!
//! The breakpoint set on its own, then the stop / skip / resume protocol
//! through a running machine.

use mipsim_core::RunStatus;
use mipsim_core::sim::Breakpoints;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::inst;
use crate::common::harness::{TEXT_BASE, TestContext, reg::*};

// ─── Set ────────────────────────────────────────────────────────────────────

#[test]
fn ids_start_at_one_and_increase() {
    let mut bps = Breakpoints::new();
    assert!(bps.is_empty());
    assert_eq!(bps.add(0x0040_0000), 1);
    assert_eq!(bps.add(0x0040_0010), 2);
    assert_eq!(bps.len(), 2);
}

#[test]
fn adding_an_existing_address_returns_its_id() {
    let mut bps = Breakpoints::new();
    let id = bps.add(0x0040_0008);
    assert_eq!(bps.add(0x0040_0008), id);
    assert_eq!(bps.len(), 1);
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut bps = Breakpoints::new();
    let first = bps.add(0x100);
    assert!(bps.remove(first));
    assert_eq!(bps.add(0x100), first + 1);
}

#[test]
fn removing_an_unknown_id_changes_nothing() {
    let mut bps = Breakpoints::new();
    let _ = bps.add(0x100);
    assert!(!bps.remove(42));
    assert_eq!(bps.len(), 1);
    assert!(bps.is_hit(0x100));
}

#[test]
fn skipped_breakpoint_reports_once_then_rearms() {
    let mut bps = Breakpoints::new();
    let _ = bps.add(0x200);
    assert!(bps.is_hit(0x200));

    bps.skip_current(0x200);
    assert!(!bps.at(0x200).unwrap().enabled);
    assert!(!bps.is_hit(0x200));
    assert!(bps.at(0x200).unwrap().enabled);
    assert!(bps.is_hit(0x200));
}

#[test]
fn skip_at_an_address_without_breakpoint_is_ignored() {
    let mut bps = Breakpoints::new();
    let _ = bps.add(0x200);
    bps.skip_current(0x204);
    assert!(bps.is_hit(0x200));
    assert!(!bps.is_hit(0x204));
}

#[test]
fn unskip_all_rearms_everything() {
    let mut bps = Breakpoints::new();
    let _ = bps.add(0x10);
    let _ = bps.add(0x20);
    bps.skip_current(0x10);
    bps.skip_current(0x20);
    bps.unskip_all();
    assert!(bps.list().iter().all(|bp| bp.enabled));
}

#[test]
fn dump_lists_by_id_and_marks_skipping() {
    let mut bps = Breakpoints::new();
    assert_eq!(bps.dump(), "  no breakpoints\n");
    let _ = bps.add(0x0040_0010);
    let _ = bps.add(0x0040_0000);
    bps.skip_current(0x0040_0000);

    let dump = bps.dump();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("1: 0x00400010"), "{dump}");
    assert!(lines[1].contains("2: 0x00400000 (skipping)"), "{dump}");
}

// ─── Protocol ───────────────────────────────────────────────────────────────

/// `t0` counts down from 3; the loop body at `TEXT_BASE + 4` runs three times.
fn countdown() -> TestContext {
    TestContext::new().load_program(&[
        inst().addiu(T0, ZERO, 3).build(),
        inst().addiu(T0, T0, -1).build(),
        inst().bne(T0, ZERO, -2).build(),
        inst().nop().build(),
        inst().addiu(V0, ZERO, 10).build(),
        inst().syscall().build(),
    ])
}

#[test]
fn run_stops_before_the_breakpoint_instruction() {
    let mut ctx = countdown();
    let id = ctx.machine.add_breakpoint(TEXT_BASE + 4);

    assert_eq!(ctx.run(0), RunStatus::Breakpoint(id));
    assert_eq!(ctx.cpu().pc, TEXT_BASE + 4);
    assert_eq!(ctx.get_reg(T0), 3);
}

#[test]
fn run_again_without_skipping_stops_in_place() {
    let mut ctx = countdown();
    let id = ctx.machine.add_breakpoint(TEXT_BASE + 4);
    assert_eq!(ctx.run(0), RunStatus::Breakpoint(id));
    assert_eq!(ctx.run(0), RunStatus::Breakpoint(id));
    assert_eq!(ctx.machine.stats().cycles, 1);
}

#[test]
fn skip_executes_the_instruction_and_loop_retriggers() {
    let mut ctx = countdown();
    let id = ctx.machine.add_breakpoint(TEXT_BASE + 4);
    assert_eq!(ctx.run(0), RunStatus::Breakpoint(id));

    ctx.machine.skip_current();
    ctx.step();
    assert_eq!(ctx.get_reg(T0), 2);

    assert_eq!(ctx.run(0), RunStatus::Breakpoint(id));
    assert_eq!(ctx.cpu().pc, TEXT_BASE + 4);
    assert_eq!(ctx.get_reg(T0), 2);

    for remaining in [1, 0] {
        ctx.machine.skip_current();
        let status = ctx.run(0);
        assert_eq!(ctx.get_reg(T0), remaining);
        if remaining > 0 {
            assert_eq!(status, RunStatus::Breakpoint(id));
        } else {
            assert!(matches!(status, RunStatus::Exit(_)), "{status:?}");
        }
    }
}

#[test]
fn removed_breakpoint_no_longer_stops() {
    let mut ctx = countdown();
    let id = ctx.machine.add_breakpoint(TEXT_BASE + 4);
    assert!(ctx.machine.remove_breakpoint(id));
    assert!(matches!(ctx.run(0), RunStatus::Exit(_)));
}

#[test]
fn breakpoint_on_entry_stops_before_anything_runs() {
    let mut ctx = countdown();
    let id = ctx.machine.add_breakpoint(TEXT_BASE);
    assert_eq!(ctx.run(0), RunStatus::Breakpoint(id));
    assert_eq!(ctx.machine.stats().cycles, 0);
}

#[test]
fn reset_rearms_skipped_breakpoints() {
    let mut ctx = countdown();
    let id = ctx.machine.add_breakpoint(TEXT_BASE);
    assert_eq!(ctx.run(0), RunStatus::Breakpoint(id));
    ctx.machine.skip_current();
    ctx.machine.reset().unwrap();

    assert_eq!(ctx.run(0), RunStatus::Breakpoint(id));
    assert_eq!(ctx.machine.format_breakpoints().matches("skipping").count(), 0);
}
