//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the simulator. It provides:
//! 1. **Cycle count:** One cycle per executed instruction.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, syscall, FP).
//! 3. **Throughput:** Host time and derived simulated MIPS.

use std::time::Instant;

/// Instruction categories counted by [`SimStats`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstClass {
    /// Integer arithmetic, logic, shifts, multiply/divide and HI/LO moves.
    Alu,
    /// Integer and coprocessor loads.
    Load,
    /// Integer and coprocessor stores.
    Store,
    /// Branches and jumps, taken or not.
    Branch,
    /// `SYSCALL` and `BREAK`.
    Syscall,
    /// FPU arithmetic, conversions, compares and coprocessor moves.
    Fp,
}

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Count of ALU instructions executed.
    pub inst_alu: u64,
    /// Count of load instructions executed.
    pub inst_load: u64,
    /// Count of store instructions executed.
    pub inst_store: u64,
    /// Count of branch/jump instructions executed.
    pub inst_branch: u64,
    /// Count of `SYSCALL`/`BREAK` instructions executed.
    pub inst_syscall: u64,
    /// Count of coprocessor/FPU instructions executed.
    pub inst_fp: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_syscall: 0,
            inst_fp: 0,
        }
    }
}

impl SimStats {
    /// Records one executed instruction of the given class.
    #[inline]
    pub fn record(&mut self, class: InstClass) {
        self.cycles += 1;
        match class {
            InstClass::Alu => self.inst_alu += 1,
            InstClass::Load => self.inst_load += 1,
            InstClass::Store => self.inst_store += 1,
            InstClass::Branch => self.inst_branch += 1,
            InstClass::Syscall => self.inst_syscall += 1,
            InstClass::Fp => self.inst_fp += 1,
        }
    }

    /// Formats the statistics summary.
    pub fn summary(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let mips = if seconds > 0.0 {
            (self.cycles as f64 / seconds) / 1_000_000.0
        } else {
            0.0
        };
        let pct = |n: u64| (n as f64 / cyc) * 100.0;

        let mut out = String::new();
        out.push_str("==========================================================\n");
        out.push_str("MIPS SIMULATION STATISTICS\n");
        out.push_str("==========================================================\n");
        out.push_str(&format!("host_seconds             {seconds:.4} s\n"));
        out.push_str(&format!("sim_cycles               {}\n", self.cycles));
        out.push_str(&format!("sim_mips                 {mips:.2}\n"));
        out.push_str("----------------------------------------------------------\n");
        out.push_str("INSTRUCTION MIX\n");
        for (name, n) in [
            ("alu", self.inst_alu),
            ("load", self.inst_load),
            ("store", self.inst_store),
            ("branch", self.inst_branch),
            ("syscall", self.inst_syscall),
            ("fp", self.inst_fp),
        ] {
            out.push_str(&format!("  op.{name:<19} {n} ({:.2}%)\n", pct(n)));
        }
        out.push_str("==========================================================\n");
        out
    }

    /// Prints the statistics summary to stdout.
    pub fn print(&self) {
        print!("{}", self.summary());
    }
}
