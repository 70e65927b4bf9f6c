// ============================================================================
// Arithmetic Operators
// Binary operations over mixed fractions via improper form
// ============================================================================
//
// Every operator converts both operands to improper form, combines them with
// the cross-multiplication identity, and converts back to canonical mixed
// form. Improper operands built from u32 fields are below 2^64 in magnitude
// with denominators below 2^32, so every product fits in i128.

use super::conversion::{to_improper_fraction, to_proper_fraction};
use crate::domain::{Fraction, Operator, CANONICAL_ZERO};
use crate::numeric::{simplify, NumericResult};

/// a/b + c/d = (ad + bc) / bd
pub fn add_fractions(f1: &Fraction, f2: &Fraction) -> NumericResult<Fraction> {
    let a = to_improper_fraction(f1);
    let b = to_improper_fraction(f2);

    let num = a.num * b.den + b.num * a.den;
    let den = a.den * b.den;

    let simplified = simplify(num, den)?;
    to_proper_fraction(simplified.num, simplified.den)
}

/// a/b - c/d = (ad - bc) / bd
pub fn subtract_fractions(f1: &Fraction, f2: &Fraction) -> NumericResult<Fraction> {
    let a = to_improper_fraction(f1);
    let b = to_improper_fraction(f2);

    let num = a.num * b.den - b.num * a.den;
    let den = a.den * b.den;

    let simplified = simplify(num, den)?;
    to_proper_fraction(simplified.num, simplified.den)
}

/// a/b × c/d = ac / bd
pub fn multiply_fractions(f1: &Fraction, f2: &Fraction) -> NumericResult<Fraction> {
    let a = to_improper_fraction(f1);
    let b = to_improper_fraction(f2);

    let num = a.num * b.num;
    let den = a.den * b.den;

    let simplified = simplify(num, den)?;
    to_proper_fraction(simplified.num, simplified.den)
}

/// a/b ÷ c/d = ad / bc
///
/// Dividing by a zero-valued fraction returns [`CANONICAL_ZERO`].
pub fn divide_fractions(f1: &Fraction, f2: &Fraction) -> NumericResult<Fraction> {
    let a = to_improper_fraction(f1);
    let b = to_improper_fraction(f2);

    if b.num == 0 {
        return Ok(CANONICAL_ZERO);
    }

    let num = a.num * b.den;
    let den = a.den * b.num;

    let simplified = simplify(num, den)?;
    to_proper_fraction(simplified.num, simplified.den)
}

/// Dispatch `f1 op f2`
pub fn perform_operation(f1: &Fraction, op: Operator, f2: &Fraction) -> NumericResult<Fraction> {
    match op {
        Operator::Add => add_fractions(f1, f2),
        Operator::Subtract => subtract_fractions(f1, f2),
        Operator::Multiply => multiply_fractions(f1, f2),
        Operator::Divide => divide_fractions(f1, f2),
    }
}
