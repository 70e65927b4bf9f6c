// ============================================================================
// Conversion Engine
// Mixed <-> improper <-> decimal conversions
// ============================================================================

use crate::domain::{Fraction, Sign, CANONICAL_ZERO};
use crate::numeric::{simplify, ImproperFraction, NumericError, NumericResult};
use rust_decimal::Decimal;

/// Convert a mixed number to an improper fraction.
///
/// `3 5/8` becomes `29/8`. An absent fractional part (numerator or
/// denominator zero) is dropped entirely and the result is `±whole/1`.
///
/// Never overflows: `whole * denominator + numerator < 2^64`.
pub fn to_improper_fraction(frac: &Fraction) -> ImproperFraction {
    let sign = frac.sign.as_i128();
    if !frac.has_fractional_part() {
        return ImproperFraction::new(sign * frac.whole as i128, 1);
    }
    let magnitude = frac.whole as i128 * frac.denominator as i128 + frac.numerator as i128;
    ImproperFraction::new(sign * magnitude, frac.denominator as i128)
}

/// Convert an improper fraction to canonical mixed form.
///
/// `29/8` becomes `3 5/8`. The result is reduced, has `numerator <
/// denominator`, uses `0/0` for the fractional part of an exact integer, and
/// is positive when zero. A zero denominator yields [`CANONICAL_ZERO`].
///
/// # Errors
/// Returns `Overflow` if the whole part or denominator exceeds `u32::MAX`.
pub fn to_proper_fraction(num: i128, den: i128) -> NumericResult<Fraction> {
    if den == 0 {
        return Ok(CANONICAL_ZERO);
    }

    let simplified = simplify(num, den)?;
    let abs_num = simplified.num.unsigned_abs();
    let abs_den = simplified.den.unsigned_abs();

    let whole = u32::try_from(abs_num / abs_den).map_err(|_| NumericError::Overflow)?;
    let remainder = u32::try_from(abs_num % abs_den).map_err(|_| NumericError::Overflow)?;
    let denominator = if remainder == 0 {
        0
    } else {
        u32::try_from(abs_den).map_err(|_| NumericError::Overflow)?
    };
    let sign = if simplified.num < 0 {
        Sign::Negative
    } else {
        Sign::Positive
    };

    Ok(Fraction::new(sign, whole, remainder, denominator))
}

/// Reduce the fractional part to lowest terms, e.g. `4/8` to `1/2`.
///
/// Carries into the whole part when the fraction is improper (`7/4` to
/// `1 3/4`) and drops any incomplete fractional part.
pub fn simplify_proper_fraction(frac: &Fraction) -> NumericResult<Fraction> {
    let imp = to_improper_fraction(frac);
    let simplified = simplify(imp.num, imp.den)?;
    to_proper_fraction(simplified.num, simplified.den)
}

/// Floating-point value of the fraction.
pub fn to_decimal(frac: &Fraction) -> f64 {
    to_improper_fraction(frac).to_f64()
}

/// Exact decimal value of the fraction (28 significant digits for
/// repeating expansions).
pub fn to_exact_decimal(frac: &Fraction) -> NumericResult<Decimal> {
    to_improper_fraction(frac).to_decimal()
}
