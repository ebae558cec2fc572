//! Syscall Services.
//!
//! This module implements the services a guest program reaches with the
//! `SYSCALL` instruction. It provides:
//! 1. **Dispatch seam:** The `SyscallHandler` trait the execution engine calls.
//! 2. **Host services:** `HostServices`, console I/O, a seeded PRNG, the user
//!    identity, and file access confined to a sandbox directory.
//!
//! The service number arrives in `$v0` and up to three arguments in
//! `$a0`-`$a2`. A returned value is written back to `$v0`; negative values
//! signal service failure and never stop the program. Guest memory faults
//! while reading or writing service buffers are execution faults.

use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::common::Fault;
use crate::config::SyscallConfig;
use crate::soc::AddressSpace;

/// Service numbers understood by [`HostServices`].
pub mod services {
    /// Print `$a0` as a signed decimal.
    pub const PRINT_INT: u32 = 1;
    /// Print the NUL-terminated string at `$a0`.
    pub const PRINT_STRING: u32 = 2;
    /// Print the low byte of `$a0`.
    pub const PUTC: u32 = 3;
    /// Read one byte of input; -1 at end of input.
    pub const GETC: u32 = 4;
    /// Return a non-negative 31-bit pseudo-random integer.
    pub const RAND: u32 = 6;
    /// Copy the user identity into buffer `$a0` of length `$a1`.
    pub const GETUSER: u32 = 7;
    /// Read sandbox file `$a0` into buffer `$a1` of length `$a2`.
    pub const READFILE: u32 = 8;
    /// Write buffer `$a1` of length `$a2` to sandbox file `$a0`.
    pub const WRITEFILE: u32 = 9;
    /// Terminate the program with status `$a0`.
    pub const EXIT: u32 = 10;
}

/// Value returned by service failures.
const FAILURE: i32 = -1;

/// Outcome of one service request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyscallResult {
    /// Write this value to `$v0` and continue.
    Return(i32),
    /// Stop the program with this exit status.
    Exit(i32),
}

/// Handler for `SYSCALL` instructions.
pub trait SyscallHandler {
    /// Performs service `service` with arguments `$a0`-`$a2`.
    ///
    /// # Arguments
    ///
    /// * `service` - The service number from `$v0`.
    /// * `args` - The values of `$a0`, `$a1` and `$a2`.
    /// * `memory` - Guest memory, for string and buffer arguments.
    fn dispatch(
        &mut self,
        service: u32,
        args: [u32; 3],
        memory: &mut AddressSpace,
    ) -> Result<SyscallResult, Fault>;
}

/// Default syscall handler backed by host I/O and the filesystem.
pub struct HostServices {
    input: Box<dyn Read>,
    output: Box<dyn Write>,
    rng_state: u64,
    user: Option<String>,
    sandbox_dir: Option<PathBuf>,
}

impl fmt::Debug for HostServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostServices")
            .field("rng_state", &self.rng_state)
            .field("user", &self.user)
            .field("sandbox_dir", &self.sandbox_dir)
            .finish_non_exhaustive()
    }
}

impl HostServices {
    /// Creates services reading stdin and writing stdout.
    ///
    /// The user identity falls back to `$NETID`, then `$USER`, when the
    /// configuration does not name one.
    pub fn new(config: &SyscallConfig) -> Self {
        Self::with_io(config, Box::new(io::stdin()), Box::new(io::stdout()))
    }

    /// Creates services over caller-supplied input and output streams.
    pub fn with_io(config: &SyscallConfig, input: Box<dyn Read>, output: Box<dyn Write>) -> Self {
        let user = config
            .user
            .clone()
            .or_else(|| std::env::var("NETID").ok())
            .or_else(|| std::env::var("USER").ok());
        Self {
            input,
            output,
            rng_state: config.rand_seed.max(1),
            user,
            sandbox_dir: config.sandbox_dir.clone(),
        }
    }

    /// Writes `bytes` to the output stream, flushing so interleaved guest
    /// output and host diagnostics stay ordered.
    fn emit(&mut self, bytes: &[u8]) -> i32 {
        match self.output.write_all(bytes).and_then(|()| self.output.flush()) {
            Ok(()) => 0,
            Err(e) => {
                warn!(error = %e, "guest output failed");
                FAILURE
            }
        }
    }

    fn getc(&mut self) -> i32 {
        let mut byte = [0u8; 1];
        match self.input.read(&mut byte) {
            Ok(1) => i32::from(byte[0]),
            _ => FAILURE,
        }
    }

    /// Advances the xorshift generator and returns its top 31 bits.
    fn rand(&mut self) -> i32 {
        let mut x = self.rng_state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.rng_state = x;
        (x >> 33) as i32
    }

    fn getuser(&self, memory: &mut AddressSpace, buf: u32, len: u32) -> Result<i32, Fault> {
        let Some(user) = self.user.as_deref() else {
            warn!("getuser: no identity configured and neither $NETID nor $USER is set");
            return Ok(FAILURE);
        };
        let len = len as i32;
        if len <= 0 {
            return Ok(FAILURE);
        }
        let keep = user.len().min(len as usize - 1);
        let mut bytes = user.as_bytes()[..keep].to_vec();
        bytes.push(0);
        memory.write_bytes(buf, &bytes)?;
        Ok(0)
    }

    /// Resolves a guest-supplied name inside the sandbox, or `None` if refused.
    fn sandbox_path(&self, name: &[u8]) -> Option<PathBuf> {
        let Some(dir) = self.sandbox_dir.as_deref() else {
            warn!("file access refused: no sandbox directory configured");
            return None;
        };
        if !sane_filename(name) {
            warn!(name = %name.escape_ascii(), "file access refused: illegal file name");
            return None;
        }
        let name = std::str::from_utf8(name).ok()?;
        Some(Path::new(dir).join(name))
    }

    fn readfile(
        &self,
        memory: &mut AddressSpace,
        name_addr: u32,
        buf: u32,
        len: u32,
    ) -> Result<i32, Fault> {
        let name = memory.read_cstring(name_addr)?;
        let Some(path) = self.sandbox_path(&name) else {
            return Ok(FAILURE);
        };
        let len = len as i32;
        if len <= 0 {
            return Ok(FAILURE);
        }
        let Ok(file) = fs::File::open(&path) else {
            return Ok(FAILURE);
        };
        let mut data = Vec::new();
        if file.take(len as u64).read_to_end(&mut data).is_err() {
            return Ok(FAILURE);
        }
        memory.write_bytes(buf, &data)?;
        Ok(data.len() as i32)
    }

    fn writefile(
        &self,
        memory: &mut AddressSpace,
        name_addr: u32,
        buf: u32,
        len: u32,
    ) -> Result<i32, Fault> {
        let name = memory.read_cstring(name_addr)?;
        let Some(path) = self.sandbox_path(&name) else {
            return Ok(FAILURE);
        };
        let len = len as i32;
        if len <= 0 {
            return Ok(FAILURE);
        }
        let data = memory.read_bytes(buf, len as usize)?;
        match fs::write(&path, &data) {
            Ok(()) => Ok(len),
            Err(_) => Ok(FAILURE),
        }
    }
}

impl SyscallHandler for HostServices {
    fn dispatch(
        &mut self,
        service: u32,
        args: [u32; 3],
        memory: &mut AddressSpace,
    ) -> Result<SyscallResult, Fault> {
        let [a0, a1, a2] = args;
        let value = match service {
            services::PRINT_INT => self.emit((a0 as i32).to_string().as_bytes()),
            services::PRINT_STRING => {
                let s = memory.read_cstring(a0)?;
                self.emit(&s)
            }
            services::PUTC => self.emit(&[a0 as u8]),
            services::GETC => self.getc(),
            services::RAND => self.rand(),
            services::GETUSER => self.getuser(memory, a0, a1)?,
            services::READFILE => self.readfile(memory, a0, a1, a2)?,
            services::WRITEFILE => self.writefile(memory, a0, a1, a2)?,
            services::EXIT => return Ok(SyscallResult::Exit(a0 as i32)),
            _ => FAILURE,
        };
        Ok(SyscallResult::Return(value))
    }
}

/// Returns `true` for a non-empty name that does not start with `.` and uses
/// only `A-Z`, `a-z`, `0-9`, `_`, `.` and `-`.
pub fn sane_filename(name: &[u8]) -> bool {
    !name.is_empty()
        && name.first() != Some(&b'.')
        && name
            .iter()
            .all(|&c| c.is_ascii_alphanumeric() || matches!(c, b'_' | b'.' | b'-'))
}
