//! Coprocessor Sub-Operations (`rs` field of `COPz`).

/// Move from coprocessor general register.
pub const MF: usize = 0;
/// Move from coprocessor control register.
pub const CF: usize = 2;
/// Move to coprocessor general register.
pub const MT: usize = 4;
/// Move to coprocessor control register.
pub const CT: usize = 6;
/// Branch on coprocessor condition.
pub const BC: usize = 8;

/// `rt` bit selecting `BCzT` (set) over `BCzF` (clear).
pub const BC_TRUE_BIT: usize = 1;
