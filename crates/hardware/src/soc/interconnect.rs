//! Guest Address Space.
//!
//! This module implements the segment table that routes every guest memory
//! access. It provides:
//! 1. **Segment allocation:** Disjoint, named segments in a fixed-capacity slot table.
//! 2. **Translation:** Alignment check first, then a linear scan for the owning segment.
//! 3. **Access:** Little-endian byte, half and word accessors built on translation.
//! 4. **Bulk transfer:** Byte-run and NUL-terminated string copies for syscall buffers.

use tracing::debug;

use super::memory::Segment;
use crate::common::constants::MAX_SEGMENTS;
use crate::common::{AccessWidth, Fault, SegmentError};

/// Index of a segment within the address space's slot table.
pub type SegmentId = usize;

/// Fixed-capacity table of disjoint memory segments.
///
/// Slots are scanned in index order, which also fixes the order of dumps.
#[derive(Clone, Debug, Default)]
pub struct AddressSpace {
    slots: [Option<Segment>; MAX_SEGMENTS],
}

impl AddressSpace {
    /// Creates an empty address space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a zero-filled segment covering `[base, base + size)`.
    ///
    /// # Arguments
    ///
    /// * `base` - First guest address of the segment.
    /// * `size` - Length in bytes; must be non-zero.
    /// * `name` - Name shown in dumps and diagnostics.
    ///
    /// # Returns
    ///
    /// The slot index of the new segment, or a `SegmentError` if the range is
    /// empty, wraps past 4 GiB, overlaps an existing segment, or the table is full.
    pub fn allocate_segment(
        &mut self,
        base: u32,
        size: u32,
        name: &str,
    ) -> Result<SegmentId, SegmentError> {
        if size == 0 {
            return Err(SegmentError::ZeroSize {
                name: name.to_string(),
                base,
            });
        }
        if u64::from(base) + u64::from(size) > 1 << 32 {
            return Err(SegmentError::OutOfRange {
                name: name.to_string(),
                base,
                size,
            });
        }
        if let Some(existing) = self.iter().find(|(_, s)| s.overlaps(base, size)) {
            return Err(SegmentError::Overlap {
                name: name.to_string(),
                base,
                size,
                existing: existing.1.name().to_string(),
            });
        }

        let id = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(SegmentError::TableFull {
                capacity: MAX_SEGMENTS,
            })?;
        self.slots[id] = Some(Segment::new(name, base, size));
        debug!(slot = id, base = %format_args!("{base:#010x}"), size, name, "segment allocated");
        Ok(id)
    }

    /// Releases every segment and its storage.
    pub fn free_all_segments(&mut self) {
        self.slots = Default::default();
    }

    /// Returns the segment in slot `id`, if allocated.
    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    /// Iterates allocated segments in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &Segment)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (i, s)))
    }

    /// Returns the number of allocated segments.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns `true` if no segment is allocated.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Resolves a guest address to a segment slot and byte offset.
    ///
    /// Alignment is checked before the segment lookup, so a misaligned address
    /// always reports `AddressError` even when it is also unmapped.
    ///
    /// # Arguments
    ///
    /// * `addr` - Guest address of the access.
    /// * `width` - Access width; the whole access must lie in one segment.
    pub fn translate(&self, addr: u32, width: AccessWidth) -> Result<(SegmentId, usize), Fault> {
        if !width.is_aligned(addr) {
            return Err(Fault::AddressError {
                addr,
                width: width.bytes(),
            });
        }
        self.iter()
            .find(|(_, s)| s.contains(addr))
            .and_then(|(id, s)| {
                let offset = addr - s.base();
                (u64::from(offset) + u64::from(width.bytes()) <= u64::from(s.size()))
                    .then_some((id, offset as usize))
            })
            .ok_or(Fault::SegmentationFault { addr })
    }

    #[inline]
    fn resolve(&self, addr: u32, width: AccessWidth) -> Result<(&Segment, usize), Fault> {
        let (id, offset) = self.translate(addr, width)?;
        self.slots[id]
            .as_ref()
            .map(|s| (s, offset))
            .ok_or(Fault::SegmentationFault { addr })
    }

    #[inline]
    fn resolve_mut(&mut self, addr: u32, width: AccessWidth) -> Result<(&mut Segment, usize), Fault> {
        let (id, offset) = self.translate(addr, width)?;
        self.slots[id]
            .as_mut()
            .map(|s| (s, offset))
            .ok_or(Fault::SegmentationFault { addr })
    }

    /// Reads one byte.
    pub fn read_byte(&self, addr: u32) -> Result<u8, Fault> {
        let (seg, off) = self.resolve(addr, AccessWidth::Byte)?;
        Ok(seg.buffer().read_u8(off))
    }

    /// Reads a little-endian half-word from a 2-byte aligned address.
    pub fn read_half(&self, addr: u32) -> Result<u16, Fault> {
        let (seg, off) = self.resolve(addr, AccessWidth::Half)?;
        Ok(seg.buffer().read_u16(off))
    }

    /// Reads a little-endian word from a 4-byte aligned address.
    pub fn read_word(&self, addr: u32) -> Result<u32, Fault> {
        let (seg, off) = self.resolve(addr, AccessWidth::Word)?;
        Ok(seg.buffer().read_u32(off))
    }

    /// Writes one byte.
    pub fn write_byte(&mut self, addr: u32, val: u8) -> Result<(), Fault> {
        let (seg, off) = self.resolve_mut(addr, AccessWidth::Byte)?;
        seg.buffer_mut().write_u8(off, val);
        Ok(())
    }

    /// Writes a little-endian half-word to a 2-byte aligned address.
    pub fn write_half(&mut self, addr: u32, val: u16) -> Result<(), Fault> {
        let (seg, off) = self.resolve_mut(addr, AccessWidth::Half)?;
        seg.buffer_mut().write_u16(off, val);
        Ok(())
    }

    /// Writes a little-endian word to a 4-byte aligned address.
    pub fn write_word(&mut self, addr: u32, val: u32) -> Result<(), Fault> {
        let (seg, off) = self.resolve_mut(addr, AccessWidth::Word)?;
        seg.buffer_mut().write_u32(off, val);
        Ok(())
    }

    /// Reads `len` bytes starting at `addr`, one byte access at a time.
    ///
    /// The run may cross segment boundaries; it faults at the first unmapped byte.
    pub fn read_bytes(&self, addr: u32, len: usize) -> Result<Vec<u8>, Fault> {
        (0..len)
            .map(|i| self.read_byte(addr.wrapping_add(i as u32)))
            .collect()
    }

    /// Writes `data` starting at `addr`, one byte access at a time.
    ///
    /// Every destination byte is translated before the first write, so a run
    /// that reaches unmapped memory faults without modifying anything.
    pub fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), Fault> {
        for i in 0..data.len() {
            let _ = self.translate(addr.wrapping_add(i as u32), AccessWidth::Byte)?;
        }
        for (i, &b) in data.iter().enumerate() {
            self.write_byte(addr.wrapping_add(i as u32), b)?;
        }
        Ok(())
    }

    /// Reads a NUL-terminated string starting at `addr`.
    ///
    /// The terminator is not included. The bytes are returned as stored; guest
    /// strings carry no encoding.
    pub fn read_cstring(&self, addr: u32) -> Result<Vec<u8>, Fault> {
        let mut out = Vec::with_capacity(16);
        let mut cursor = addr;
        loop {
            let b = self.read_byte(cursor)?;
            if b == 0 {
                break;
            }
            out.push(b);
            cursor = cursor.wrapping_add(1);
        }
        Ok(out)
    }

    /// Formats the segment table, one segment per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (id, seg) in self.iter() {
            out.push_str(&format!(
                "  [{id:>2}] {:#010x} - {:#010x}  {:>8} bytes  {}\n",
                seg.base(),
                seg.end().saturating_sub(1),
                seg.size(),
                seg.name()
            ));
        }
        out
    }
}
