//! Load/Store Unit (LSU).
//!
//! This module provides the Load/Store Unit, responsible for every data
//! memory access the execution engine performs. It includes:
//! - [`unaligned`]: Byte-merge rules for the partial-word instructions.

/// Partial-word (`LWL`/`LWR`/`SWL`/`SWR`) merge rules.
pub mod unaligned;

use crate::common::Fault;
use crate::soc::AddressSpace;

/// Width and extension of an integer load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadKind {
    /// Sign-extended byte.
    Byte,
    /// Zero-extended byte.
    ByteUnsigned,
    /// Sign-extended half-word.
    Half,
    /// Zero-extended half-word.
    HalfUnsigned,
    /// Full word.
    Word,
    /// Load word left.
    WordLeft,
    /// Load word right.
    WordRight,
}

/// Width of an integer store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    /// Low byte.
    Byte,
    /// Low half-word.
    Half,
    /// Full word.
    Word,
    /// Store word left.
    WordLeft,
    /// Store word right.
    WordRight,
}

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Performs a load and returns the value to write to the destination register.
    ///
    /// # Arguments
    ///
    /// * `mem`  - The address space to read.
    /// * `kind` - Width, extension, or partial-word form.
    /// * `addr` - Effective address.
    /// * `reg`  - Current destination register value, merged by `WordLeft`/`WordRight`.
    ///
    /// Partial-word loads read the aligned cell containing `addr`, so they can
    /// fault only with `SegmentationFault`.
    pub fn load(mem: &AddressSpace, kind: LoadKind, addr: u32, reg: u32) -> Result<u32, Fault> {
        Ok(match kind {
            LoadKind::Byte => mem.read_byte(addr)? as i8 as i32 as u32,
            LoadKind::ByteUnsigned => u32::from(mem.read_byte(addr)?),
            LoadKind::Half => mem.read_half(addr)? as i16 as i32 as u32,
            LoadKind::HalfUnsigned => u32::from(mem.read_half(addr)?),
            LoadKind::Word => mem.read_word(addr)?,
            LoadKind::WordLeft => {
                let cell = mem.read_word(unaligned::word_base(addr))?;
                unaligned::merge_lwl(addr, reg, cell)
            }
            LoadKind::WordRight => {
                let cell = mem.read_word(unaligned::word_base(addr))?;
                unaligned::merge_lwr(addr, reg, cell)
            }
        })
    }

    /// Performs a store of `val` at `addr`.
    ///
    /// Partial-word stores read, merge and rewrite the aligned cell containing `addr`.
    pub fn store(mem: &mut AddressSpace, kind: StoreKind, addr: u32, val: u32) -> Result<(), Fault> {
        match kind {
            StoreKind::Byte => mem.write_byte(addr, val as u8),
            StoreKind::Half => mem.write_half(addr, val as u16),
            StoreKind::Word => mem.write_word(addr, val),
            StoreKind::WordLeft => {
                let base = unaligned::word_base(addr);
                let cell = mem.read_word(base)?;
                mem.write_word(base, unaligned::merge_swl(addr, val, cell))
            }
            StoreKind::WordRight => {
                let base = unaligned::word_base(addr);
                let cell = mem.read_word(base)?;
                mem.write_word(base, unaligned::merge_swr(addr, val, cell))
            }
        }
    }
}
