//! Memory access widths.
//!
//! Every load, store and fetch is tagged with the number of bytes it moves.
//! Alignment checks are performed against this width before any segment lookup.

use std::fmt;

/// Width of a single memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessWidth {
    /// One byte (`LB`, `LBU`, `SB`).
    Byte,
    /// Two bytes (`LH`, `LHU`, `SH`).
    Half,
    /// Four bytes (`LW`, `SW`, instruction fetch).
    Word,
}

impl AccessWidth {
    /// Returns the number of bytes moved by this access.
    #[inline]
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Returns `true` if `addr` is naturally aligned for this width.
    #[inline]
    pub const fn is_aligned(self, addr: u32) -> bool {
        addr & (self.bytes() - 1) == 0
    }
}

impl fmt::Display for AccessWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte => write!(f, "byte"),
            Self::Half => write!(f, "half"),
            Self::Word => write!(f, "word"),
        }
    }
}
