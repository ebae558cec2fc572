//! MIPS Floating-Point Register File.
//!
//! This module implements the FPU (coprocessor 1) register file. It performs the following:
//! 1. **Storage:** A single little-endian byte buffer backing all register views.
//! 2. **Aliasing:** Single, double and integer views that read and write the same bytes.
//! 3. **Pairing:** Double-precision slot `n` occupies single slots `2n` and `2n + 1`.
//!
//! No type punning is involved: every view goes through explicit
//! `to_le_bytes`/`from_le_bytes` conversions on the shared buffer.

use crate::common::constants::NUM_FPR_SLOTS;

/// Size in bytes of one single-precision slot.
const SLOT_BYTES: usize = 4;

/// Floating-Point Register file.
#[derive(Clone, Debug)]
pub struct Fpr {
    bytes: [u8; NUM_FPR_SLOTS * SLOT_BYTES],
}

impl Default for Fpr {
    fn default() -> Self {
        Self {
            bytes: [0; NUM_FPR_SLOTS * SLOT_BYTES],
        }
    }
}

impl Fpr {
    /// Creates a new register file with every slot cleared.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn word_bytes(&self, slot: usize) -> [u8; 4] {
        let off = slot * SLOT_BYTES;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&self.bytes[off..off + 4]);
        buf
    }

    /// Reads single slot `slot` as a raw 32-bit integer (the `MFC1`/`SWC1` view).
    ///
    /// # Arguments
    ///
    /// * `slot` - Register index (0-31).
    #[inline]
    pub fn read_word(&self, slot: usize) -> u32 {
        u32::from_le_bytes(self.word_bytes(slot))
    }

    /// Writes single slot `slot` from a raw 32-bit integer.
    #[inline]
    pub fn write_word(&mut self, slot: usize, val: u32) {
        let off = slot * SLOT_BYTES;
        self.bytes[off..off + 4].copy_from_slice(&val.to_le_bytes());
    }

    /// Reads single slot `slot` as an `f32`.
    #[inline]
    pub fn read_single(&self, slot: usize) -> f32 {
        f32::from_le_bytes(self.word_bytes(slot))
    }

    /// Writes single slot `slot` as an `f32`.
    #[inline]
    pub fn write_single(&mut self, slot: usize, val: f32) {
        let off = slot * SLOT_BYTES;
        self.bytes[off..off + 4].copy_from_slice(&val.to_le_bytes());
    }

    /// Reads the double held in the even/odd pair starting at single slot `slot`.
    ///
    /// The low-order word lives in the even slot.
    ///
    /// # Arguments
    ///
    /// * `slot` - Even register index (0, 2, ..., 30).
    #[inline]
    pub fn read_double(&self, slot: usize) -> f64 {
        let off = slot * SLOT_BYTES;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&self.bytes[off..off + 8]);
        f64::from_le_bytes(buf)
    }

    /// Writes a double into the even/odd pair starting at single slot `slot`.
    #[inline]
    pub fn write_double(&mut self, slot: usize, val: f64) {
        let off = slot * SLOT_BYTES;
        self.bytes[off..off + 8].copy_from_slice(&val.to_le_bytes());
    }

    /// Reads single slot `slot` as a signed integer (the `W` format view).
    #[inline]
    pub fn read_int(&self, slot: usize) -> i32 {
        i32::from_le_bytes(self.word_bytes(slot))
    }

    /// Writes single slot `slot` from a signed integer.
    #[inline]
    pub fn write_int(&mut self, slot: usize, val: i32) {
        self.write_word(slot, val as u32);
    }

    /// Clears every slot.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}
