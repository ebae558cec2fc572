//! Memory Segments.
//!
//! This module implements the unit of guest memory. It provides:
//! 1. **Buffer:** Owned, zero-initialized backing storage (`SegmentBuffer`).
//! 2. **Segment:** A named buffer mapped at a fixed base address.

/// Owned byte storage backing each segment.
pub mod buffer;

use self::buffer::SegmentBuffer;

/// A named, contiguous range of guest memory with its own storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    name: String,
    base: u32,
    buffer: SegmentBuffer,
}

impl Segment {
    /// Creates a zero-filled segment.
    ///
    /// # Arguments
    ///
    /// * `name` - Human-readable name shown in dumps (usually the section name).
    /// * `base` - First guest address covered.
    /// * `size` - Length in bytes.
    pub fn new(name: impl Into<String>, base: u32, size: u32) -> Self {
        Self {
            name: name.into(),
            base,
            buffer: SegmentBuffer::new(size as usize),
        }
    }

    /// Returns the segment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the first guest address covered.
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Returns the segment length in bytes.
    pub fn size(&self) -> u32 {
        self.buffer.len() as u32
    }

    /// Returns the exclusive end address, widened so a segment ending at 4 GiB is representable.
    pub fn end(&self) -> u64 {
        u64::from(self.base) + u64::from(self.size())
    }

    /// Returns `true` if `addr` falls inside the segment.
    #[inline]
    pub fn contains(&self, addr: u32) -> bool {
        addr >= self.base && u64::from(addr) < self.end()
    }

    /// Returns `true` if `[base, base + size)` intersects this segment.
    pub fn overlaps(&self, base: u32, size: u32) -> bool {
        let end = u64::from(base) + u64::from(size);
        u64::from(base) < self.end() && u64::from(self.base) < end
    }

    /// Returns the backing storage.
    #[inline]
    pub const fn buffer(&self) -> &SegmentBuffer {
        &self.buffer
    }

    /// Returns the mutable backing storage.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut SegmentBuffer {
        &mut self.buffer
    }
}
