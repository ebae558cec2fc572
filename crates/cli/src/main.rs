//! MIPS-I simulator CLI.
//!
//! This binary runs one statically linked executable to completion. It performs:
//! 1. **Setup:** Reads an optional JSON config, applies flag overrides, installs logging.
//! 2. **Loading:** Loads the ELF image and pushes the program arguments.
//! 3. **Run loop:** Runs under the step budget, reporting and stepping past breakpoints.
//! 4. **Exit:** Maps the final run status to the process exit code.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mipsim_core::config::Config;
use mipsim_core::{Machine, RunStatus};

/// Process exit code for a fault is this base plus the fault's status magnitude.
const FAULT_EXIT_BASE: i32 = 128;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS-I instruction-set simulator",
    long_about = "Load a statically linked little-endian MIPS-I ELF executable and run it.\n\nExamples:\n  mipsim hello\n  mipsim --break 0x400020 --steps 1000 prog arg1 arg2\n  mipsim --dir sandbox --config sim.json prog"
)]
struct Cli {
    /// Executable image to run.
    image: PathBuf,

    /// Arguments passed to the program as argv[1..].
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    args: Vec<String>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sandbox directory for the file syscalls.
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Instructions per run invocation (0 = unbounded).
    #[arg(long, default_value_t = 0)]
    steps: u64,

    /// Breakpoint address in hex (repeatable).
    #[arg(long = "break", value_name = "HEXADDR", value_parser = parse_hex)]
    breakpoints: Vec<u32>,

    /// Log every executed instruction.
    #[arg(long)]
    trace: bool,

    /// Print execution statistics at exit.
    #[arg(long)]
    stats: bool,
}

/// Parses `0x`-prefixed or bare hexadecimal.
fn parse_hex(s: &str) -> Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid address '{s}': {e}"))
}

fn init_logging(trace: bool) {
    let default = if trace { "warn,mipsim_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.trace);

    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    if cli.dir.is_some() {
        config.syscall.sandbox_dir.clone_from(&cli.dir);
    }
    if cli.trace {
        config.general.trace_instructions = true;
    }

    let mut machine = Machine::new(config);
    let mut argv = vec![cli.image.display().to_string()];
    argv.extend(cli.args.iter().cloned());
    match machine.load_file(&cli.image, &argv) {
        Ok(loaded) => info!(
            image = %cli.image.display(),
            entry = %format_args!("{:#010x}", loaded.entry),
            segments = loaded.segments.len(),
            "image loaded"
        ),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
    for &addr in &cli.breakpoints {
        let id = machine.add_breakpoint(addr);
        println!("[*] Breakpoint {id} at {addr:#010x}");
    }

    let code = loop {
        let status = machine.run(cli.steps);
        show_display(&machine);
        match status {
            RunStatus::BudgetExhausted => {}
            RunStatus::Breakpoint(id) => {
                println!("\n[*] Breakpoint {id} at {:#010x}", machine.cpu.pc);
                print!("{}", machine.format_registers());
                machine.skip_current();
            }
            RunStatus::Exit(status) => {
                println!("\n[*] Exit code {status}");
                break status;
            }
            RunStatus::Halted => {
                println!("\n[*] Halted at {:#010x}", machine.cpu.pc);
                break 0;
            }
            RunStatus::Fault(report) => {
                eprintln!("\n[!] FATAL: {report}");
                eprint!("{}", machine.format_registers());
                break FAULT_EXIT_BASE + report.status_code().abs();
            }
        }
    };

    if cli.stats {
        machine.stats().print();
    }
    process::exit(code);
}

/// Prints the debug displays the configuration asks for after each run.
fn show_display(machine: &Machine) {
    let display = &machine.config().general.display;
    if display.dump_registers {
        print!("{}", machine.format_registers());
    }
    if display.print_stack > 0 {
        print!("{}", machine.format_stack(display.print_stack));
    }
}
