//! Segment Backing Storage.
//!
//! This module provides the owned byte buffer behind every memory segment.
//! Callers translate and bounds-check addresses before reaching the buffer, so
//! out-of-range offsets here are programming errors and panic via slice indexing.

/// Zero-initialized backing storage for one segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentBuffer {
    data: Vec<u8>,
}

impl SegmentBuffer {
    /// Creates a zero-filled buffer of the specified size.
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the buffer in bytes.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size],
        }
    }

    /// Returns the size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_u8(&self, offset: usize) -> u8 {
        self.data[offset]
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_u8(&mut self, offset: usize, val: u8) {
        self.data[offset] = val;
    }

    /// Reads a little-endian half-word.
    #[inline]
    pub fn read_u16(&self, offset: usize) -> u16 {
        u16::from_le_bytes([self.data[offset], self.data[offset + 1]])
    }

    /// Writes a little-endian half-word.
    #[inline]
    pub fn write_u16(&mut self, offset: usize, val: u16) {
        self.write_slice(offset, &val.to_le_bytes());
    }

    /// Reads a little-endian word.
    #[inline]
    pub fn read_u32(&self, offset: usize) -> u32 {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&self.data[offset..offset + 4]);
        u32::from_le_bytes(buf)
    }

    /// Writes a little-endian word.
    #[inline]
    pub fn write_u32(&mut self, offset: usize, val: u32) {
        self.write_slice(offset, &val.to_le_bytes());
    }

    /// Returns a view of `len` bytes starting at `offset`.
    pub fn read_slice(&self, offset: usize, len: usize) -> &[u8] {
        &self.data[offset..offset + len]
    }

    /// Copies `data` into the buffer starting at `offset`.
    pub fn write_slice(&mut self, offset: usize, data: &[u8]) {
        self.data[offset..offset + data.len()].copy_from_slice(data);
    }
}
