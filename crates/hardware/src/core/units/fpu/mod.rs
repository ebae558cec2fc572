//! Floating-Point Unit (FPU).
//!
//! This module implements the coprocessor 1 arithmetic used by the execution
//! engine: binary arithmetic, sign manipulation, format conversion and
//! compares for the single (S), double (D) and word (W) formats.
//!
//! Operations are organized into submodules:
//! - [`compare`]: `C.cond` evaluation for the shared condition flag.

/// Compare-condition evaluation.
pub mod compare;

use crate::common::Fault;

/// Binary floating-point arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FpOp {
    /// `fs + ft`.
    Add,
    /// `fs - ft`.
    Sub,
    /// `fs * ft`.
    Mul,
    /// `fs / ft`.
    Div,
}

/// Floating-Point Unit (FPU) for floating-point operations.
#[derive(Debug)]
pub struct Fpu;

impl Fpu {
    /// Executes a single-precision binary operation.
    ///
    /// Division by zero of either sign returns `Fault::FloatDivideByZero`.
    pub fn single(op: FpOp, a: f32, b: f32) -> Result<f32, Fault> {
        Ok(match op {
            FpOp::Add => a + b,
            FpOp::Sub => a - b,
            FpOp::Mul => a * b,
            FpOp::Div if b == 0.0 => return Err(Fault::FloatDivideByZero),
            FpOp::Div => a / b,
        })
    }

    /// Executes a double-precision binary operation.
    ///
    /// Division by zero of either sign returns `Fault::FloatDivideByZero`.
    pub fn double(op: FpOp, a: f64, b: f64) -> Result<f64, Fault> {
        Ok(match op {
            FpOp::Add => a + b,
            FpOp::Sub => a - b,
            FpOp::Mul => a * b,
            FpOp::Div if b == 0.0 => return Err(Fault::FloatDivideByZero),
            FpOp::Div => a / b,
        })
    }

    /// Converts to a 32-bit integer, truncating toward zero.
    ///
    /// Out-of-range values saturate and NaN converts to zero.
    #[inline]
    pub fn to_word(v: f64) -> i32 {
        v as i32
    }
}
