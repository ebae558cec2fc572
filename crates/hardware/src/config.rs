//! Configuration system for the MIPS simulator.
//!
//! This module defines all configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline stack placement and syscall settings.
//! 2. **Structures:** Hierarchical config for general, memory, and syscall behavior.
//! 3. **Loading:** JSON parsing from strings or files.
//!
//! Every field is optional in JSON; omitted fields take their defaults, and
//! `Config::default()` gives the same values for programmatic use.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants for the simulator.
mod defaults {
    /// Exclusive end of the stack segment (2 GiB).
    ///
    /// The stack grows down from here; the first pushed byte is at `STACK_TOP - 1`.
    pub const STACK_TOP: u32 = 0x8000_0000;

    /// Size of the stack segment (1 MiB).
    pub const STACK_SIZE: u32 = 0x0010_0000;

    /// Seed for the `rand` syscall's xorshift generator.
    pub const RAND_SEED: u64 = 123_456_789;
}

/// Errors produced while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config '{path}': {source}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "stack_size": 65536 },
///     "syscall": { "user": "alice" }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.memory.stack_size, 65536);
/// assert_eq!(config.memory.stack_top, 0x8000_0000);
/// assert_eq!(config.syscall.user.as_deref(), Some("alice"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Stack placement
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Syscall service settings
    #[serde(default)]
    pub syscall: SyscallConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every executed instruction (address and disassembly) at `trace` level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Debug display options consulted by the driver after each run
    #[serde(default)]
    pub display: DisplayOptions,
}

/// What the driver prints when a run returns control.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayOptions {
    /// Print the register file
    #[serde(default)]
    pub dump_registers: bool,

    /// Number of stack words to print (0 = none)
    #[serde(default)]
    pub print_stack: u32,
}

/// Stack segment placement.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Exclusive end address of the stack segment
    #[serde(default = "MemoryConfig::default_stack_top")]
    pub stack_top: u32,

    /// Size of the stack segment in bytes
    #[serde(default = "MemoryConfig::default_stack_size")]
    pub stack_size: u32,
}

impl MemoryConfig {
    /// Returns the default stack top.
    fn default_stack_top() -> u32 {
        defaults::STACK_TOP
    }

    /// Returns the default stack size.
    fn default_stack_size() -> u32 {
        defaults::STACK_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            stack_top: defaults::STACK_TOP,
            stack_size: defaults::STACK_SIZE,
        }
    }
}

/// Syscall service settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SyscallConfig {
    /// Directory the file services may read and write; `None` disables them
    #[serde(default)]
    pub sandbox_dir: Option<PathBuf>,

    /// Identity returned by `getuser`; `None` falls back to `$NETID`, then `$USER`
    #[serde(default)]
    pub user: Option<String>,

    /// Seed for the `rand` service
    #[serde(default = "SyscallConfig::default_rand_seed")]
    pub rand_seed: u64,
}

impl SyscallConfig {
    /// Returns the default random seed.
    fn default_rand_seed() -> u64 {
        defaults::RAND_SEED
    }
}

impl Default for SyscallConfig {
    fn default() -> Self {
        Self {
            sandbox_dir: None,
            user: None,
            rand_seed: defaults::RAND_SEED,
        }
    }
}
