//! Machine: owns the CPU, the address space and the breakpoint set side-by-side.
//!
//! The machine is the single value a driver threads through a debugging
//! session. It performs:
//! 1. **Loading:** Runs the image loader, builds the stack, and pushes program arguments.
//! 2. **Running:** Drives the execution engine under a step budget, stopping at breakpoints.
//! 3. **Trap handling:** Maps faults to a report and leaves the machine halted.
//! 4. **Inspection:** Register, segment, memory, stack and breakpoint dumps.

use std::fmt;
use std::path::Path;

use tracing::{debug, info, warn};

use super::breakpoint::Breakpoints;
use super::loader::{LoadedImage, load_elf};
use super::syscall::{HostServices, SyscallHandler};
use crate::common::{AccessWidth, Fault, LoadError};
use crate::common::constants::{INSTRUCTION_BYTES, STACK_ALIGN};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::StepOutcome;
use crate::core::cpu::trap::FaultReport;
use crate::isa::abi;
use crate::soc::AddressSpace;
use crate::stats::SimStats;

/// Name of the segment holding the guest stack.
pub const STACK_SEGMENT: &str = "stack";

/// Why a call to [`Machine::run`] returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// The step budget ran out; the machine can keep running.
    BudgetExhausted,
    /// Execution stopped before the instruction at an enabled breakpoint.
    Breakpoint(u32),
    /// An instruction faulted.
    Fault(FaultReport),
    /// The program requested exit with this status.
    Exit(i32),
    /// The machine is halted and must be reset before it runs again.
    Halted,
}

/// A complete simulated machine.
pub struct Machine {
    /// Processor state.
    pub cpu: Cpu,
    /// Guest memory.
    pub memory: AddressSpace,
    breakpoints: Breakpoints,
    syscalls: Box<dyn SyscallHandler>,
    image: Option<Vec<u8>>,
    args: Vec<String>,
    halted: bool,
    config: Config,
}

impl fmt::Debug for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("cpu", &self.cpu)
            .field("memory", &self.memory)
            .field("breakpoints", &self.breakpoints)
            .field("image_len", &self.image.as_ref().map(Vec::len))
            .field("args", &self.args)
            .field("halted", &self.halted)
            .finish_non_exhaustive()
    }
}

impl Machine {
    /// Creates an empty machine whose syscalls go to the host's stdin and stdout.
    pub fn new(config: Config) -> Self {
        let services = HostServices::new(&config.syscall);
        Self::with_syscalls(config, Box::new(services))
    }

    /// Creates an empty machine with a caller-supplied syscall handler.
    pub fn with_syscalls(config: Config, syscalls: Box<dyn SyscallHandler>) -> Self {
        let mut cpu = Cpu::new();
        cpu.trace = config.general.trace_instructions;
        Self {
            cpu,
            memory: AddressSpace::new(),
            breakpoints: Breakpoints::new(),
            syscalls,
            image: None,
            args: Vec::new(),
            halted: false,
            config,
        }
    }

    /// Reads an executable from disk and loads it.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be read, otherwise the
    /// errors of [`Machine::load_image`].
    pub fn load_file(&mut self, path: impl AsRef<Path>, args: &[String]) -> Result<LoadedImage, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.load_image(bytes, args)
    }

    /// Loads an executable image and prepares it to run.
    ///
    /// Any previous program is discarded. The image is retained so that
    /// [`Machine::reset`] can reload it.
    ///
    /// # Arguments
    ///
    /// * `image` - The complete ELF file.
    /// * `args` - Program arguments, `argv[0]` first.
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if the image is malformed or incompatible, or if
    /// the stack or the arguments cannot be placed. The machine is then left
    /// empty and halted until another image loads.
    pub fn load_image(&mut self, image: Vec<u8>, args: &[String]) -> Result<LoadedImage, LoadError> {
        self.args = args.to_vec();
        self.image = None;
        let loaded = self.materialize(&image)?;
        self.image = Some(image);
        Ok(loaded)
    }

    /// Returns the machine to the state right after loading.
    ///
    /// Breakpoints are kept and re-armed; registers, counters and memory are
    /// rebuilt from the retained image.
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if the retained image can no longer be placed,
    /// which only happens if the stack configuration changed.
    pub fn reset(&mut self) -> Result<(), LoadError> {
        self.breakpoints.unskip_all();
        match self.image.take() {
            Some(image) => {
                let result = self.materialize(&image).map(|_| ());
                self.image = Some(image);
                result
            }
            None => {
                self.clear();
                Ok(())
            }
        }
    }

    fn clear(&mut self) {
        self.cpu.reset();
        self.memory.free_all_segments();
        self.halted = false;
    }

    /// Rebuilds memory and registers from `image`.
    ///
    /// A rejected image leaves no segments behind and the machine halted, so
    /// nothing from it can run.
    fn materialize(&mut self, image: &[u8]) -> Result<LoadedImage, LoadError> {
        self.clear();
        let result = load_elf(image, &mut self.memory, &mut self.cpu)
            .and_then(|loaded| self.push_arguments().map(|()| loaded));
        if let Err(e) = &result {
            warn!(error = %e, "image rejected");
            self.cpu.reset();
            self.memory.free_all_segments();
            self.halted = true;
        }
        result
    }

    /// Allocates the stack segment and lays out `argc`/`argv`.
    ///
    /// Argument strings sit at the top of the stack with a NULL-terminated
    /// pointer array below them. `$sp` is aligned down from the array.
    fn push_arguments(&mut self) -> Result<(), LoadError> {
        let top = self.config.memory.stack_top;
        let size = self.config.memory.stack_size;
        let _ = self
            .memory
            .allocate_segment(top.wrapping_sub(size), size, STACK_SEGMENT)?;

        let mut sp = top;
        let mut pointers = Vec::with_capacity(self.args.len() + 1);
        for arg in &self.args {
            let mut bytes = arg.as_bytes().to_vec();
            bytes.push(0);
            sp = sp.wrapping_sub(bytes.len() as u32);
            self.memory.write_bytes(sp, &bytes)?;
            pointers.push(sp);
        }
        pointers.push(0);

        sp &= !(INSTRUCTION_BYTES - 1);
        sp = sp.wrapping_sub(INSTRUCTION_BYTES * pointers.len() as u32);
        let argv = sp;
        let mut slot = argv;
        for ptr in pointers {
            self.memory.write_word(slot, ptr)?;
            slot = slot.wrapping_add(INSTRUCTION_BYTES);
        }
        sp &= !(STACK_ALIGN - 1);

        self.cpu.regs.write(abi::REG_A0, self.args.len() as u32);
        self.cpu.regs.write(abi::REG_A1, argv);
        self.cpu.regs.write(abi::REG_SP, sp);
        debug!(
            argc = self.args.len(),
            argv = %format_args!("{argv:#010x}"),
            sp = %format_args!("{sp:#010x}"),
            "arguments pushed"
        );
        Ok(())
    }

    /// Runs the loaded program.
    ///
    /// Before each fetch `$0` is forced to zero and the breakpoint set is
    /// consulted; a hit returns without executing the instruction.
    ///
    /// # Arguments
    ///
    /// * `budget` - Maximum instructions to execute; `0` means no limit.
    ///
    /// # Returns
    ///
    /// Why execution stopped. After `Exit`, `Halted` or `Fault` the machine
    /// stays halted until [`Machine::reset`].
    pub fn run(&mut self, budget: u64) -> RunStatus {
        if self.halted {
            return RunStatus::Halted;
        }
        let mut executed: u64 = 0;
        loop {
            self.cpu.regs.force_zero();
            let pc = self.cpu.pc;
            if self.breakpoints.is_hit(pc) {
                let id = self.breakpoints.at(pc).map_or(0, |bp| bp.id);
                info!(id, pc = %format_args!("{pc:#010x}"), "breakpoint hit");
                return RunStatus::Breakpoint(id);
            }

            match self.cpu.step(&mut self.memory, self.syscalls.as_mut()) {
                Ok(StepOutcome::Continue) => {}
                Ok(StepOutcome::Exit(status)) => {
                    self.halted = true;
                    info!(status, "program exited");
                    return RunStatus::Exit(status);
                }
                Ok(StepOutcome::Halt) => {
                    self.halted = true;
                    info!(pc = %format_args!("{pc:#010x}"), "break instruction halted the machine");
                    return RunStatus::Halted;
                }
                Err(fault) => {
                    self.halted = true;
                    return RunStatus::Fault(self.cpu.report_fault(fault, &self.memory));
                }
            }

            executed += 1;
            if budget != 0 && executed >= budget {
                return RunStatus::BudgetExhausted;
            }
        }
    }

    /// Returns `true` once the program has exited, halted or faulted.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Returns the configuration the machine was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the execution counters.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Returns the breakpoint set.
    pub const fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Sets a breakpoint at `addr` and returns its id.
    pub fn add_breakpoint(&mut self, addr: u32) -> u32 {
        self.breakpoints.add(addr)
    }

    /// Removes breakpoint `id`; returns `false` if there was none.
    pub fn remove_breakpoint(&mut self, id: u32) -> bool {
        self.breakpoints.remove(id)
    }

    /// Disarms the breakpoint at the current `pc` so the next run steps past it.
    pub fn skip_current(&mut self) {
        self.breakpoints.skip_current(self.cpu.pc);
    }

    /// Formats the integer registers, HI/LO and the delay pair.
    pub fn format_registers(&self) -> String {
        let mut out = self.cpu.regs.dump();
        out.push_str(&format!(
            "  $pc = {:#010x}     $npc = {:#010x}\n",
            self.cpu.pc, self.cpu.npc
        ));
        out
    }

    /// Formats the segment table.
    pub fn format_segments(&self) -> String {
        if self.memory.is_empty() {
            return "  no segments\n".to_string();
        }
        self.memory.dump()
    }

    /// Formats `count` values of `width` starting at `addr`, one per line.
    ///
    /// Stops at the first value that cannot be read, marking it `<unmapped>`
    /// or `<misaligned>`.
    pub fn format_memory(&self, addr: u32, count: u32, width: AccessWidth) -> String {
        let digits = 2 + 2 * width.bytes() as usize;
        let mut out = String::new();
        for i in 0..count {
            let at = addr.wrapping_add(i.wrapping_mul(width.bytes()));
            let value = match width {
                AccessWidth::Byte => self.memory.read_byte(at).map(u32::from),
                AccessWidth::Half => self.memory.read_half(at).map(u32::from),
                AccessWidth::Word => self.memory.read_word(at),
            };
            match value {
                Ok(v) => out.push_str(&format!("  {at:#010x}: {v:#0digits$x}\n")),
                Err(Fault::AddressError { .. }) => {
                    out.push_str(&format!("  {at:#010x}: <misaligned>\n"));
                    break;
                }
                Err(_) => {
                    out.push_str(&format!("  {at:#010x}: <unmapped>\n"));
                    break;
                }
            }
        }
        out
    }

    /// Formats `words` words starting at `$sp`, stopping early at unmapped memory.
    pub fn format_stack(&self, words: u32) -> String {
        self.format_memory(self.cpu.regs.read(abi::REG_SP), words, AccessWidth::Word)
    }

    /// Formats the breakpoint set.
    pub fn format_breakpoints(&self) -> String {
        self.breakpoints.dump()
    }
}
