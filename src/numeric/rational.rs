// ============================================================================
// Rational Primitives
// GCD reduction and the improper-fraction value type
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single signed numerator over a denominator, with no separate whole part.
///
/// Values produced by [`simplify`] always carry a positive denominator.
/// Values produced from a mixed fraction carry its denominator unchanged
/// (or `1` when the fractional part is absent), so they are not necessarily
/// in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImproperFraction {
    pub num: i128,
    pub den: i128,
}

impl ImproperFraction {
    /// `0/1`, the result of simplifying anything over a zero denominator.
    pub const ZERO: Self = Self { num: 0, den: 1 };

    #[inline]
    pub const fn new(num: i128, den: i128) -> Self {
        Self { num, den }
    }

    /// Floating-point value. A zero denominator yields `inf`/`NaN`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Exact decimal value, rounded to `Decimal`'s 28 significant digits for
    /// non-terminating expansions.
    ///
    /// # Errors
    /// - `DivisionByZero` if the denominator is zero
    /// - `Overflow` if either side exceeds `Decimal`'s 96-bit mantissa
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        if self.den == 0 {
            return Err(NumericError::DivisionByZero);
        }
        let num =
            Decimal::try_from_i128_with_scale(self.num, 0).map_err(|_| NumericError::Overflow)?;
        let den =
            Decimal::try_from_i128_with_scale(self.den, 0).map_err(|_| NumericError::Overflow)?;
        num.checked_div(den)
            .map(|d| d.normalize())
            .ok_or(NumericError::Overflow)
    }
}

impl fmt::Display for ImproperFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Greatest common divisor of `|a|` and `|b|` (Euclidean algorithm).
///
/// `gcd(0, 0) == 0`; callers must not divide by it, [`simplify`] guards this.
pub fn gcd(a: i128, b: i128) -> u128 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Reduce `num/den` to lowest terms with a positive denominator.
///
/// A zero denominator is not an error: it yields `0/1`.
///
/// # Errors
/// Returns `Overflow` only when the reduced magnitude does not fit `i128`
/// (e.g. `i128::MIN / -1`).
pub fn simplify(num: i128, den: i128) -> NumericResult<ImproperFraction> {
    if den == 0 {
        return Ok(ImproperFraction::ZERO);
    }

    let divisor = gcd(num, den);
    let abs_num = i128::try_from(num.unsigned_abs() / divisor).map_err(|_| NumericError::Overflow)?;
    let abs_den = i128::try_from(den.unsigned_abs() / divisor).map_err(|_| NumericError::Overflow)?;

    // Sign folds into the numerator
    let negative = (num < 0) != (den < 0);
    let num = if negative { -abs_num } else { abs_num };

    Ok(ImproperFraction::new(num, abs_den))
}
