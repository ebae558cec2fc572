//! Fault and error definitions.
//!
//! This module defines every way the simulator can fail. It provides:
//! 1. **Execution Faults:** The non-resumable conditions raised while interpreting guest code.
//! 2. **Segment Errors:** Allocation failures in the fixed-capacity segment table.
//! 3. **Load Errors:** Malformed or incompatible executable images, reported before execution.

use thiserror::Error;

/// Execution faults raised by the interpreter.
///
/// A fault aborts the current `run` invocation. It is never retried; the
/// machine is left halted until it is reset.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// Access address is not a multiple of the access width.
    #[error("address error: {addr:#010x} is not aligned for a {width}-byte access")]
    AddressError {
        /// The misaligned address.
        addr: u32,
        /// Width of the attempted access in bytes.
        width: u32,
    },

    /// Access address does not fall inside any allocated segment.
    #[error("segmentation fault: address {addr:#010x} is not mapped")]
    SegmentationFault {
        /// The unmapped address.
        addr: u32,
    },

    /// Signed `ADD`, `ADDI` or `SUB` overflowed 32 bits.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,

    /// Integer `DIV` or `DIVU` with a zero divisor.
    #[error("integer divide by zero")]
    DivideByZero,

    /// Floating-point `DIV.fmt` with a zero divisor.
    #[error("floating-point divide by zero")]
    FloatDivideByZero,

    /// Unimplemented opcode, function field, or operand encoding.
    #[error("illegal instruction {inst:#010x}")]
    IllegalInstruction {
        /// The raw instruction word.
        inst: u32,
    },
}

impl Fault {
    /// Returns the signed status the trap handler uses to tell fault categories apart.
    ///
    /// All codes are negative so they never collide with a program exit status
    /// of zero or a positive step count.
    pub const fn status_code(&self) -> i32 {
        match self {
            Self::AddressError { .. } => -1,
            Self::SegmentationFault { .. } => -2,
            Self::ArithmeticOverflow => -3,
            Self::DivideByZero => -4,
            Self::FloatDivideByZero => -5,
            Self::IllegalInstruction { .. } => -6,
        }
    }

    /// Short category name used in diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddressError { .. } => "AddressError",
            Self::SegmentationFault { .. } => "SegmentationFault",
            Self::ArithmeticOverflow => "ArithmeticOverflow",
            Self::DivideByZero => "DivideByZero",
            Self::FloatDivideByZero => "FloatDivideByZero",
            Self::IllegalInstruction { .. } => "IllegalInstruction",
        }
    }
}

/// Segment table allocation failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// The requested range intersects an existing segment.
    #[error(
        "segment '{name}' at {base:#010x} (+{size:#x}) overlaps existing segment '{existing}'"
    )]
    Overlap {
        /// Name of the segment being allocated.
        name: String,
        /// Requested base address.
        base: u32,
        /// Requested size in bytes.
        size: u32,
        /// Name of the segment already occupying part of the range.
        existing: String,
    },

    /// A segment of zero bytes was requested.
    #[error("segment '{name}' at {base:#010x} has zero size")]
    ZeroSize {
        /// Name of the segment being allocated.
        name: String,
        /// Requested base address.
        base: u32,
    },

    /// Every slot in the segment table is in use.
    #[error("segment table full ({capacity} segments)")]
    TableFull {
        /// Capacity of the table.
        capacity: usize,
    },

    /// The requested range runs past the top of the 32-bit address space.
    #[error("segment '{name}' at {base:#010x} (+{size:#x}) wraps the address space")]
    OutOfRange {
        /// Name of the segment being allocated.
        name: String,
        /// Requested base address.
        base: u32,
        /// Requested size in bytes.
        size: u32,
    },
}

/// Errors produced while materializing an executable image.
///
/// Load errors are reported before any instruction executes.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The image is smaller than an ELF file header.
    #[error("image is {len} bytes, smaller than the {min}-byte file header")]
    TooSmall {
        /// Actual image length.
        len: usize,
        /// Minimum acceptable length.
        min: usize,
    },

    /// The ELF structures could not be parsed.
    #[error("malformed image: {0}")]
    Parse(#[from] object::read::Error),

    /// The image is not encoded little-endian.
    #[error("image is not little-endian")]
    NotLittleEndian,

    /// The image targets a different architecture.
    #[error("image targets machine {machine}, expected MIPS")]
    WrongMachine {
        /// The `e_machine` value found in the header.
        machine: u16,
    },

    /// The image is relocatable, shared, or a core file rather than a final executable.
    #[error("image type {kind} is not a final executable")]
    NotExecutable {
        /// The `e_type` value found in the header.
        kind: u16,
    },

    /// A section or program header points outside the file.
    #[error("{what} extends past the end of the image")]
    Truncated {
        /// Description of the offending structure.
        what: String,
    },

    /// A loadable section could not be placed.
    #[error(transparent)]
    Segment(#[from] SegmentError),

    /// Copying initial data into a fresh segment faulted.
    #[error("populating memory: {0}")]
    Fault(#[from] Fault),
}
