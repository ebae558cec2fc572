//! Breakpoint Set.
//!
//! This module tracks the instruction addresses that suspend a run. It provides:
//! 1. **Management:** Add by address with increasing ids, remove by id.
//! 2. **Hit detection:** An address index consulted before every fetch.
//! 3. **Stepping past:** A per-entry disarm that lasts for exactly one check.
//!
//! After a run stops at a breakpoint, the caller disarms it with
//! [`Breakpoints::skip_current`] and resumes. The next check at that address
//! sees the disarmed entry, reports no hit, and re-arms it, so the instruction
//! executes once and the breakpoint fires again the next time control returns.

use std::collections::HashMap;

use tracing::warn;

/// A single breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Identifier, unique for the lifetime of the set.
    pub id: u32,
    /// Instruction address that triggers the breakpoint.
    pub addr: u32,
    /// Cleared while stepping past the breakpoint.
    pub enabled: bool,
}

/// Set of breakpoints keyed by id, with a side index by address.
#[derive(Clone, Debug)]
pub struct Breakpoints {
    entries: HashMap<u32, Breakpoint>,
    by_addr: HashMap<u32, u32>,
    next_id: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            by_addr: HashMap::new(),
            next_id: 1,
        }
    }
}

impl Breakpoints {
    /// Creates an empty set; the first id handed out is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an enabled breakpoint at `addr`.
    ///
    /// # Returns
    ///
    /// The new id, or the existing id if `addr` already has a breakpoint.
    pub fn add(&mut self, addr: u32) -> u32 {
        if let Some(&id) = self.by_addr.get(&addr) {
            return id;
        }
        let id = self.next_id;
        self.next_id += 1;
        let _ = self.entries.insert(
            id,
            Breakpoint {
                id,
                addr,
                enabled: true,
            },
        );
        let _ = self.by_addr.insert(addr, id);
        id
    }

    /// Removes breakpoint `id`.
    ///
    /// An unknown id is reported and otherwise ignored.
    ///
    /// # Returns
    ///
    /// `true` if a breakpoint was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        match self.entries.remove(&id) {
            Some(bp) => {
                let _ = self.by_addr.remove(&bp.addr);
                true
            }
            None => {
                warn!(id, "no such breakpoint");
                false
            }
        }
    }

    /// Checks whether fetching from `addr` should stop the run.
    ///
    /// A disarmed entry at `addr` reports no hit and is re-armed.
    pub fn is_hit(&mut self, addr: u32) -> bool {
        let Some(id) = self.by_addr.get(&addr) else {
            return false;
        };
        match self.entries.get_mut(id) {
            Some(bp) if bp.enabled => true,
            Some(bp) => {
                bp.enabled = true;
                false
            }
            None => false,
        }
    }

    /// Disarms the breakpoint at `pc`, if any, for the next check.
    pub fn skip_current(&mut self, pc: u32) {
        if let Some(bp) = self
            .by_addr
            .get(&pc)
            .and_then(|id| self.entries.get_mut(id))
        {
            bp.enabled = false;
        }
    }

    /// Re-arms every breakpoint.
    pub fn unskip_all(&mut self) {
        for bp in self.entries.values_mut() {
            bp.enabled = true;
        }
    }

    /// Returns the breakpoint at `addr`, if any.
    pub fn at(&self, addr: u32) -> Option<&Breakpoint> {
        self.by_addr.get(&addr).and_then(|id| self.entries.get(id))
    }

    /// Returns every breakpoint ordered by id.
    pub fn list(&self) -> Vec<Breakpoint> {
        let mut all: Vec<_> = self.entries.values().copied().collect();
        all.sort_by_key(|bp| bp.id);
        all
    }

    /// Returns the number of breakpoints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no breakpoint is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Formats the set, one breakpoint per line.
    pub fn dump(&self) -> String {
        if self.is_empty() {
            return "  no breakpoints\n".to_string();
        }
        self.list()
            .iter()
            .map(|bp| {
                let state = if bp.enabled { "" } else { " (skipping)" };
                format!("  {:>3}: {:#010x}{state}\n", bp.id, bp.addr)
            })
            .collect()
    }
}
