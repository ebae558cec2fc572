//! Unaligned partial-word access.
//!
//! `LWL`, `LWR`, `SWL` and `SWR` move the bytes of a possibly unaligned word
//! that fall within one aligned 4-byte cell. The low two bits of the requested
//! address select which bytes are merged; untouched bytes of the register (for
//! loads) or the memory cell (for stores) are preserved.
//!
//! Byte order is little-endian: byte `b` of the cell holds bits `8b..8b+7`.
//! Every shift below is at most 24, so no shift reaches the word width.

/// Mask selecting the byte offset within a word.
pub const BYTE_OFFSET_MASK: u32 = 0b11;

/// Returns the word-aligned base of `addr`.
#[inline]
pub const fn word_base(addr: u32) -> u32 {
    addr & !BYTE_OFFSET_MASK
}

#[inline]
const fn byte_offset(addr: u32) -> u32 {
    addr & BYTE_OFFSET_MASK
}

/// Merges the cell for `LWL`: bytes `0..=b` of the cell fill the top of the register.
///
/// # Arguments
///
/// * `addr` - The requested (unmasked) address.
/// * `reg`  - Current value of the destination register.
/// * `cell` - The aligned word at `word_base(addr)`.
pub const fn merge_lwl(addr: u32, reg: u32, cell: u32) -> u32 {
    let b = byte_offset(addr);
    (reg & (0x00FF_FFFF >> (b * 8))) | (cell << ((3 - b) * 8))
}

/// Merges the cell for `LWR`: bytes `b..=3` of the cell fill the bottom of the register.
pub const fn merge_lwr(addr: u32, reg: u32, cell: u32) -> u32 {
    let b = byte_offset(addr);
    (reg & (0xFFFF_FF00 << ((3 - b) * 8))) | (cell >> (b * 8))
}

/// Merges the register for `SWL`: the top `b + 1` register bytes land in cell bytes `0..=b`.
pub const fn merge_swl(addr: u32, reg: u32, cell: u32) -> u32 {
    let b = byte_offset(addr);
    (cell & (0xFFFF_FF00 << (b * 8))) | (reg >> ((3 - b) * 8))
}

/// Merges the register for `SWR`: the bottom `4 - b` register bytes land in cell bytes `b..=3`.
pub const fn merge_swr(addr: u32, reg: u32, cell: u32) -> u32 {
    let b = byte_offset(addr);
    (cell & (0x00FF_FFFF >> ((3 - b) * 8))) | (reg << (b * 8))
}
