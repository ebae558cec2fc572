//! Simulation control and program loading.
//!
//! Provides the ELF loader, the breakpoint set, the syscall services, and
//! the `Machine` that ties them to the CPU and the address space.

/// Breakpoint set and the step-past protocol.
pub mod breakpoint;
/// ELF image loading.
pub mod loader;
/// Machine lifecycle and the run loop.
pub mod simulator;
/// Syscall dispatch and host services.
pub mod syscall;

pub use breakpoint::{Breakpoint, Breakpoints};
pub use loader::{LoadedImage, load_elf};
pub use simulator::{Machine, RunStatus};
pub use syscall::{HostServices, SyscallHandler, SyscallResult};
