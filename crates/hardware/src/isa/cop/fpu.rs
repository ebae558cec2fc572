//! FPU Formats and Function Codes.

/// Single-precision format (`rs` = 16).
pub const FMT_S: usize = 16;
/// Double-precision format (`rs` = 17).
pub const FMT_D: usize = 17;
/// 32-bit integer format (`rs` = 20).
pub const FMT_W: usize = 20;

/// `fd = fs + ft`.
pub const ADD: u32 = 0;
/// `fd = fs - ft`.
pub const SUB: u32 = 1;
/// `fd = fs * ft`.
pub const MUL: u32 = 2;
/// `fd = fs / ft`.
pub const DIV: u32 = 3;
/// `fd = |fs|`.
pub const ABS: u32 = 5;
/// `fd = fs`.
pub const MOV: u32 = 6;
/// `fd = -fs`.
pub const NEG: u32 = 7;
/// Convert to single.
pub const CVT_S: u32 = 32;
/// Convert to double.
pub const CVT_D: u32 = 33;
/// Convert to word.
pub const CVT_W: u32 = 36;
/// COP1 control register holding the condition flag (`FCR31`).
pub const FCSR: usize = 31;
/// Bit of [`FCSR`] that `C.cond` sets and `BC1T`/`BC1F` test.
pub const FCSR_COND_BIT: u32 = 1 << 23;

/// First of the sixteen `C.cond` compare codes (48-63).
pub const C_BASE: u32 = 48;

/// Condition bit: true when the operands are unordered.
pub const COND_UNORDERED: u32 = 0b0001;
/// Condition bit: true when the operands compare equal.
pub const COND_EQUAL: u32 = 0b0010;
/// Condition bit: true when `fs < ft`.
pub const COND_LESS: u32 = 0b0100;
/// Mask of the condition selector within the function field.
pub const COND_MASK: u32 = 0b1111;

/// Mnemonic suffixes for `C.cond`, indexed by the condition selector.
pub const COND_NAMES: [&str; 16] = [
    "f", "un", "eq", "ueq", "olt", "ult", "ole", "ule", "sf", "ngle", "seq", "ngl", "lt", "nge",
    "le", "ngt",
];
