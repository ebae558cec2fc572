//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the execution engine.
//! It handles 32-bit arithmetic, logical operations and shifts, plus the
//! multiply/divide operations that produce a HI/LO result pair.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Addu, Sub, Subu, Mult, Multu, Div, Divu
//! - [`logic`]:      And, Or, Xor, Nor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, xor, nor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::common::Fault;

/// Single-result integer ALU operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Signed add; traps on overflow.
    Add,
    /// Wrapping add.
    Addu,
    /// Signed subtract; traps on overflow.
    Sub,
    /// Wrapping subtract.
    Subu,
    /// Bitwise and.
    And,
    /// Bitwise or.
    Or,
    /// Bitwise exclusive-or.
    Xor,
    /// Bitwise not-or.
    Nor,
    /// Signed set-less-than.
    Slt,
    /// Unsigned set-less-than.
    Sltu,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
}

/// Operations writing the HI/LO register pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MulDivOp {
    /// Signed 64-bit product.
    Mult,
    /// Unsigned 64-bit product.
    Multu,
    /// Signed quotient and remainder.
    Div,
    /// Unsigned quotient and remainder.
    Divu,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes a single-result integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - First operand; the value to shift for shift operations.
    /// * `b`  - Second operand; the shift amount for shift operations (low 5 bits used).
    ///
    /// # Returns
    ///
    /// The 32-bit result, or `Fault::ArithmeticOverflow` from `Add`/`Sub`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Addu, 0x7FFF_FFFF, 1), Ok(0x8000_0000));
    /// assert!(Alu::execute(AluOp::Add, 0x7FFF_FFFF, 1).is_err());
    /// assert_eq!(Alu::execute(AluOp::Sra, 0x8000_0000, 4), Ok(0xF800_0000));
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> Result<u32, Fault> {
        match op {
            AluOp::Add | AluOp::Addu | AluOp::Sub | AluOp::Subu => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Nor | AluOp::Slt | AluOp::Sltu => {
                Ok(logic::execute(op, a, b))
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => Ok(shifts::execute(op, a, b)),
        }
    }

    /// Executes a multiply or divide operation.
    ///
    /// # Returns
    ///
    /// `(hi, lo)`: the high and low product halves, or remainder and quotient.
    /// Divides by zero return `Fault::DivideByZero`.
    pub fn mul_div(op: MulDivOp, a: u32, b: u32) -> Result<(u32, u32), Fault> {
        arithmetic::mul_div(op, a, b)
    }
}
