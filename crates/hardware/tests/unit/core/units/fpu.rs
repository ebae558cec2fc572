//! # FPU Tests
//!
//! Arithmetic, the divide-by-zero fault, word conversion, and the compare
//! condition table.

use mipsim_core::common::Fault;
use mipsim_core::core::units::fpu::compare::evaluate;
use mipsim_core::core::units::fpu::{FpOp, Fpu};
use mipsim_core::isa::cop::fpu::{COND_EQUAL, COND_LESS, COND_UNORDERED};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(FpOp::Add, 1.5, 2.25, 3.75)]
#[case(FpOp::Sub, 1.5, 2.25, -0.75)]
#[case(FpOp::Mul, -1.5, 4.0, -6.0)]
#[case(FpOp::Div, 1.0, 4.0, 0.25)]
fn single_arithmetic(#[case] op: FpOp, #[case] a: f32, #[case] b: f32, #[case] want: f32) {
    assert_eq!(Fpu::single(op, a, b), Ok(want));
}

#[rstest]
#[case(FpOp::Add, 0.1, 0.2, 0.1 + 0.2)]
#[case(FpOp::Div, 1.0, 3.0, 1.0 / 3.0)]
fn double_arithmetic(#[case] op: FpOp, #[case] a: f64, #[case] b: f64, #[case] want: f64) {
    assert_eq!(Fpu::double(op, a, b), Ok(want));
}

#[rstest]
#[case(0.0)]
#[case(-0.0)]
fn division_by_either_zero_faults(#[case] zero: f64) {
    assert_eq!(Fpu::double(FpOp::Div, 1.0, zero), Err(Fault::FloatDivideByZero));
    assert_eq!(Fpu::single(FpOp::Div, 1.0, zero as f32), Err(Fault::FloatDivideByZero));
}

#[test]
fn zero_dividend_still_faults() {
    assert_eq!(Fpu::double(FpOp::Div, 0.0, 0.0), Err(Fault::FloatDivideByZero));
}

#[rstest]
#[case(2.9, 2)]
#[case(-2.9, -2)]
#[case(1e20, i32::MAX)]
#[case(-1e20, i32::MIN)]
#[case(f64::NAN, 0)]
fn to_word_truncates_and_saturates(#[case] v: f64, #[case] want: i32) {
    assert_eq!(Fpu::to_word(v), want);
}

const UN: u32 = COND_UNORDERED;
const EQ: u32 = COND_EQUAL;
const LT: u32 = COND_LESS;

#[rstest]
#[case::false_never(0, 1.0, 1.0, false)]
#[case::un_ordered(UN, 1.0, 2.0, false)]
#[case::un_nan(UN, f64::NAN, 2.0, true)]
#[case::eq_equal(EQ, 2.0, 2.0, true)]
#[case::eq_signed_zero(EQ, 0.0, -0.0, true)]
#[case::eq_nan(EQ, f64::NAN, f64::NAN, false)]
#[case::ueq_nan(UN | EQ, f64::NAN, 1.0, true)]
#[case::olt_less(LT, 1.0, 2.0, true)]
#[case::olt_greater(LT, 2.0, 1.0, false)]
#[case::ult_nan(UN | LT, 1.0, f64::NAN, true)]
#[case::ole_equal(LT | EQ, 2.0, 2.0, true)]
#[case::ole_nan(LT | EQ, f64::NAN, 2.0, false)]
#[case::ule_nan(UN | LT | EQ, f64::NAN, 2.0, true)]
fn compare_conditions(#[case] cond: u32, #[case] a: f64, #[case] b: f64, #[case] want: bool) {
    assert_eq!(evaluate(cond, a, b), want);
}

#[test]
fn signalling_bit_evaluates_like_quiet() {
    for cond in 0..8 {
        for (a, b) in [(1.0, 2.0), (2.0, 2.0), (f64::NAN, 0.0)] {
            assert_eq!(evaluate(cond | 0b1000, a, b), evaluate(cond, a, b));
        }
    }
}
