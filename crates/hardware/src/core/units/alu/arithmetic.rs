//! ALU arithmetic operations.
//!
//! Implements 32-bit addition and subtraction, with and without the signed
//! overflow trap, and the multiply/divide family that writes HI/LO.
//!
//! Division truncates toward zero; the remainder takes the sign of the dividend.
//! `0x8000_0000 / -1` wraps to `0x8000_0000` with remainder zero.

use super::{AluOp, MulDivOp};
use crate::common::Fault;

/// Number of bits in a 32-bit word (used for high-product shift).
const WORD_BITS: u32 = 32;

/// Executes an add or subtract.
///
/// # Returns
///
/// The 32-bit result. `Add` and `Sub` return `Fault::ArithmeticOverflow` when
/// the signed result does not fit; `Addu` and `Subu` wrap.
pub fn execute(op: AluOp, a: u32, b: u32) -> Result<u32, Fault> {
    match op {
        AluOp::Add => (a as i32)
            .checked_add(b as i32)
            .map(|v| v as u32)
            .ok_or(Fault::ArithmeticOverflow),
        AluOp::Sub => (a as i32)
            .checked_sub(b as i32)
            .map(|v| v as u32)
            .ok_or(Fault::ArithmeticOverflow),
        AluOp::Addu => Ok(a.wrapping_add(b)),
        AluOp::Subu => Ok(a.wrapping_sub(b)),
        _ => Ok(0),
    }
}

/// Executes a multiply or divide, returning `(hi, lo)`.
pub fn mul_div(op: MulDivOp, a: u32, b: u32) -> Result<(u32, u32), Fault> {
    match op {
        MulDivOp::Mult => {
            let p = i64::from(a as i32) * i64::from(b as i32);
            Ok(((p >> WORD_BITS) as u32, p as u32))
        }
        MulDivOp::Multu => {
            let p = u64::from(a) * u64::from(b);
            Ok(((p >> WORD_BITS) as u32, p as u32))
        }
        MulDivOp::Div => {
            if b == 0 {
                return Err(Fault::DivideByZero);
            }
            let (n, d) = (a as i32, b as i32);
            Ok((n.wrapping_rem(d) as u32, n.wrapping_div(d) as u32))
        }
        MulDivOp::Divu => {
            if b == 0 {
                return Err(Fault::DivideByZero);
            }
            Ok((a % b, a / b))
        }
    }
}
