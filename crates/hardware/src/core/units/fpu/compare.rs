//! Floating-point compare conditions.
//!
//! `C.cond.fmt` sets the FPU condition flag from the low four bits of the
//! function field. Bit 0 selects "unordered", bit 1 "equal", bit 2 "less";
//! the flag is the OR of the selected relations. Bit 3 requests a signalling
//! compare, which this model evaluates as quiet.

use crate::isa::cop::fpu::{COND_EQUAL, COND_LESS, COND_UNORDERED};

/// Evaluates compare condition `cond` on `fs` and `ft`.
///
/// Singles are widened to `f64` first; widening is exact, so the relation is unchanged.
///
/// # Examples
///
/// ```
/// use mipsim_core::core::units::fpu::compare::evaluate;
///
/// assert!(evaluate(0b0010, 1.0, 1.0)); // c.eq
/// assert!(evaluate(0b0111, f64::NAN, 0.0)); // c.ule
/// assert!(!evaluate(0b0110, f64::NAN, 0.0)); // c.ole
/// ```
pub fn evaluate(cond: u32, fs: f64, ft: f64) -> bool {
    let unordered = fs.is_nan() || ft.is_nan();
    (cond & COND_UNORDERED != 0 && unordered)
        || (cond & COND_EQUAL != 0 && !unordered && fs == ft)
        || (cond & COND_LESS != 0 && !unordered && fs < ft)
}
