//! # Machine Tests
//!
//! End-to-end runs, lifecycle, the initial stack and the debugger dumps.

use mipsim_core::common::AccessWidth;
use mipsim_core::common::constants::STACK_ALIGN;
use mipsim_core::config::Config;
use mipsim_core::isa::abi::{REG_A0, REG_A1, REG_SP};
use mipsim_core::sim::simulator::STACK_SEGMENT;
use mipsim_core::{Machine, RunStatus};
use pretty_assertions::assert_eq;

use crate::common::builder::elf::ElfBuilder;
use crate::common::builder::instruction::inst;
use crate::common::harness::{DATA_BASE, DATA_SIZE, TEXT_BASE, TestContext, program, reg::*};

fn exit_with_sum() -> Vec<u32> {
    vec![
        inst().addiu(T0, ZERO, 5).build(),
        inst().addiu(T1, ZERO, 7).build(),
        inst().addu(A0, T0, T1).build(),
        inst().addiu(V0, ZERO, 10).build(),
        inst().syscall().build(),
    ]
}

// ─── Running ────────────────────────────────────────────────────────────────

#[test]
fn program_runs_to_exit() {
    let mut ctx = TestContext::new().load_program(&exit_with_sum());
    assert_eq!(ctx.run(0), RunStatus::Exit(12));
    assert!(ctx.machine.is_halted());
    assert_eq!(ctx.cpu().pc, TEXT_BASE + 16);
    assert_eq!(ctx.machine.stats().cycles, 5);
}

#[test]
fn budget_stops_between_instructions() {
    let mut ctx = TestContext::new().load_program(&exit_with_sum());
    assert_eq!(ctx.run(2), RunStatus::BudgetExhausted);
    assert!(!ctx.machine.is_halted());
    assert_eq!(ctx.cpu().pc, TEXT_BASE + 8);
    assert_eq!(ctx.run(0), RunStatus::Exit(12));
}

#[test]
fn budget_of_exactly_the_program_length_still_exits() {
    let mut ctx = TestContext::new().load_program(&exit_with_sum());
    assert_eq!(ctx.run(5), RunStatus::Exit(12));
}

#[test]
fn break_halts() {
    let mut ctx = TestContext::new().load_program(&[
        inst().addiu(T0, ZERO, 1).build(),
        inst().brk().build(),
        inst().addiu(T0, ZERO, 2).build(),
    ]);
    assert_eq!(ctx.run(0), RunStatus::Halted);
    assert_eq!(ctx.get_reg(T0), 1);
    assert_eq!(ctx.cpu().pc, TEXT_BASE + 4);
    assert_eq!(ctx.run(0), RunStatus::Halted);
}

#[test]
fn exited_machine_stays_halted() {
    let mut ctx = TestContext::new().load_program(&exit_with_sum());
    assert_eq!(ctx.run(0), RunStatus::Exit(12));
    assert_eq!(ctx.run(0), RunStatus::Halted);
    assert_eq!(ctx.machine.stats().cycles, 5);
}

#[test]
fn reset_restores_the_loaded_image() {
    let mut ctx = TestContext::new().load_program(&[
        inst().lui(S0, (DATA_BASE >> 16) as i32).build(),
        inst().lw(T0, S0, 0).build(),
        inst().addiu(T0, T0, 1).build(),
        inst().sw(T0, S0, 0).build(),
        inst().addu(A0, T0, ZERO).build(),
        inst().addiu(V0, ZERO, 10).build(),
        inst().syscall().build(),
    ]);
    assert_eq!(ctx.run(0), RunStatus::Exit(1));
    assert_eq!(ctx.read_word(DATA_BASE), 1);

    ctx.machine.reset().unwrap();
    assert!(!ctx.machine.is_halted());
    assert_eq!(ctx.cpu().pc, TEXT_BASE);
    assert_eq!(ctx.read_word(DATA_BASE), 0);
    assert_eq!(ctx.machine.stats().cycles, 0);
    assert_eq!(ctx.run(0), RunStatus::Exit(1));
}

#[test]
fn reset_without_an_image_empties_the_machine() {
    let mut machine = Machine::new(Config::default());
    machine.reset().unwrap();
    assert!(machine.memory.is_empty());
    assert_eq!(machine.cpu.pc, 0);
}

#[test]
fn loading_replaces_the_previous_image() {
    let mut ctx = TestContext::new().load_program(&exit_with_sum());
    assert_eq!(ctx.run(0), RunStatus::Exit(12));

    ctx = ctx.load(&program(&[inst().brk().build()]).entry(TEXT_BASE));
    assert!(!ctx.machine.is_halted());
    assert_eq!(ctx.run(0), RunStatus::Halted);
}

#[test]
fn rejected_image_cannot_run() {
    let image = ElfBuilder::new()
        .entry(TEXT_BASE)
        .text(
            TEXT_BASE,
            &[
                inst().addiu(A0, ZERO, 5).build(),
                inst().addiu(V0, ZERO, 10).build(),
                inst().syscall().build(),
            ],
        )
        .section(".data", TEXT_BASE + 4, &[1, 2, 3, 4])
        .build();
    let mut machine = Machine::new(Config::default());

    assert!(machine.load_image(image, &[]).is_err());
    assert!(machine.memory.is_empty());
    assert!(machine.is_halted());
    assert_eq!(machine.run(0), RunStatus::Halted);
}

#[test]
fn failed_reload_discards_the_previous_program() {
    let mut ctx = TestContext::new().load_program(&exit_with_sum());
    let mut truncated = program(&[0]).build();
    truncated.truncate(20);

    assert!(ctx.machine.load_image(truncated, &[]).is_err());
    assert!(ctx.machine.memory.is_empty());
    assert_eq!(ctx.run(0), RunStatus::Halted);

    ctx.machine.reset().unwrap();
    assert!(ctx.machine.memory.is_empty());
}

// ─── Stack ──────────────────────────────────────────────────────────────────

#[test]
fn arguments_are_pushed_below_the_stack_top() {
    let mut machine = Machine::new(Config::default());
    let args = ["prog".to_string(), "-v".to_string(), "input file".to_string()];
    let _ = machine.load_image(program(&[0]).build(), &args).unwrap();

    let regs = &machine.cpu.regs;
    let (argc, argv, sp) = (regs.read(REG_A0), regs.read(REG_A1), regs.read(REG_SP));
    let top = machine.config().memory.stack_top;

    assert_eq!(argc, 3);
    assert_eq!(sp % STACK_ALIGN, 0);
    assert!(sp <= argv && argv < top);
    for (i, arg) in args.iter().enumerate() {
        let ptr = machine.memory.read_word(argv + 4 * i as u32).unwrap();
        assert!(ptr > argv && ptr < top);
        assert_eq!(machine.memory.read_cstring(ptr).unwrap(), arg.as_bytes());
    }
    assert_eq!(machine.memory.read_word(argv + 12).unwrap(), 0);
}

#[test]
fn stack_segment_follows_configuration() {
    let mut config = Config::default();
    config.memory.stack_top = 0x7000_0000;
    config.memory.stack_size = 0x2000;
    let mut machine = Machine::new(config);
    let _ = machine.load_image(program(&[0]).build(), &[]).unwrap();

    let stack = machine
        .memory
        .iter()
        .map(|(_, s)| s)
        .find(|s| s.name() == STACK_SEGMENT)
        .unwrap();
    assert_eq!(stack.base(), 0x7000_0000 - 0x2000);
    assert_eq!(stack.size(), 0x2000);
    assert_eq!(machine.cpu.regs.read(REG_A0), 0);
    assert_eq!(machine.memory.read_word(machine.cpu.regs.read(REG_A1)).unwrap(), 0);
}

#[test]
fn stack_overlapping_the_image_is_a_load_error() {
    let mut config = Config::default();
    config.memory.stack_top = DATA_BASE + 0x100;
    config.memory.stack_size = 0x200;
    let mut machine = Machine::new(config);
    assert!(machine.load_image(program(&[0]).build(), &[]).is_err());
}

#[test]
fn guest_can_use_the_stack() {
    let mut ctx = TestContext::new().load_program(&[
        inst().addiu(29, 29, -8).build(),
        inst().addiu(T0, ZERO, 77).build(),
        inst().sw(T0, 29, 4).build(),
        inst().lw(A0, 29, 4).build(),
        inst().addiu(V0, ZERO, 10).build(),
        inst().syscall().build(),
    ]);
    assert_eq!(ctx.run(0), RunStatus::Exit(77));
}

// ─── Dumps ──────────────────────────────────────────────────────────────────

#[test]
fn register_dump_names_every_register_and_the_delay_pair() {
    let mut ctx = TestContext::new().load_program(&exit_with_sum());
    ctx.set_reg(T0, 0xDEAD_BEEF);
    let dump = ctx.machine.format_registers();

    for name in ["$zero", "$t0", "$sp", "$ra", "$pc", "$npc"] {
        assert!(dump.contains(name), "missing {name} in\n{dump}");
    }
    assert!(dump.contains("0xdeadbeef"), "{dump}");
    assert!(dump.contains(&format!("$pc = {TEXT_BASE:#010x}")), "{dump}");
}

#[test]
fn segment_dump_lists_loaded_sections() {
    let machine = Machine::new(Config::default());
    assert_eq!(machine.format_segments(), "  no segments\n");

    let ctx = TestContext::new().load_program(&exit_with_sum());
    let dump = ctx.machine.format_segments();
    for name in [".text", ".bss", STACK_SEGMENT] {
        assert!(dump.contains(name), "missing {name} in\n{dump}");
    }
}

#[test]
fn stack_dump_starts_at_sp_and_stops_at_unmapped_memory() {
    let ctx = TestContext::new().load_program(&exit_with_sum());
    let sp = ctx.get_reg(29);
    let dump = ctx.machine.format_stack(2);
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(&format!("  {sp:#010x}: ")), "{dump}");

    let top = ctx.machine.config().memory.stack_top;
    let words = (top - sp) / 4 + 3;
    let dump = ctx.machine.format_stack(words);
    assert!(dump.ends_with("<unmapped>\n"), "{dump}");
    assert_eq!(dump.lines().count() as u32, (top - sp) / 4 + 1);
}

#[test]
fn memory_dump_formats_each_width() {
    let mut ctx = TestContext::new().load_program(&exit_with_sum());
    ctx.write_word(DATA_BASE, 0x1122_3344);

    assert_eq!(
        ctx.machine.format_memory(DATA_BASE, 2, AccessWidth::Word),
        format!("  {DATA_BASE:#010x}: 0x11223344\n  {:#010x}: 0x00000000\n", DATA_BASE + 4)
    );
    assert_eq!(
        ctx.machine.format_memory(DATA_BASE, 2, AccessWidth::Half),
        format!("  {DATA_BASE:#010x}: 0x3344\n  {:#010x}: 0x1122\n", DATA_BASE + 2)
    );
    assert_eq!(
        ctx.machine.format_memory(DATA_BASE + 3, 1, AccessWidth::Byte),
        format!("  {:#010x}: 0x11\n", DATA_BASE + 3)
    );
}

#[test]
fn memory_dump_stops_at_the_first_unreadable_value() {
    let ctx = TestContext::new().load_program(&exit_with_sum());
    let dump = ctx.machine.format_memory(DATA_BASE + 2, 4, AccessWidth::Word);
    assert_eq!(dump, format!("  {:#010x}: <misaligned>\n", DATA_BASE + 2));

    let end = DATA_BASE + DATA_SIZE;
    let dump = ctx.machine.format_memory(end - 4, 4, AccessWidth::Word);
    assert_eq!(dump.lines().count(), 2, "{dump}");
    assert!(dump.ends_with(&format!("  {end:#010x}: <unmapped>\n")), "{dump}");
}

#[test]
fn breakpoint_dump_reflects_the_set() {
    let mut ctx = TestContext::new().load_program(&exit_with_sum());
    let _ = ctx.machine.add_breakpoint(TEXT_BASE + 8);
    assert!(ctx.machine.format_breakpoints().contains("0x00400008"));
}
