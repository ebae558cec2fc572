//! Guest Memory System.
//!
//! This module organizes the storage the simulated program can address:
//! the segment table that routes accesses, and the segments themselves.

/// Segment table and address translation.
pub mod interconnect;

/// Memory segments and their backing storage.
pub mod memory;

pub use interconnect::{AddressSpace, SegmentId};
pub use memory::Segment;
