// ============================================================================
// Classification & Equality Predicates
// ============================================================================

use super::conversion::to_improper_fraction;
use crate::domain::{Fraction, Sign};

/// Zero when there is no whole part and the fractional part is absent.
///
/// A dangling numerator without a denominator (or vice versa) does not make
/// the value non-zero.
#[inline]
pub fn is_zero(frac: &Fraction) -> bool {
    frac.whole == 0 && !frac.has_fractional_part()
}

/// Both numerator and denominator are non-zero.
#[inline]
pub fn is_complete_fraction(frac: &Fraction) -> bool {
    frac.has_fractional_part()
}

/// Drop an incomplete fractional part.
///
/// Fractions without a complete fractional part get `0/0` and lose a
/// negative sign on zero. Complete fractions are returned unchanged.
pub fn clear_incomplete_fraction(frac: &Fraction) -> Fraction {
    if frac.has_fractional_part() {
        return *frac;
    }
    Fraction {
        sign: if frac.whole == 0 {
            Sign::Positive
        } else {
            frac.sign
        },
        whole: frac.whole,
        numerator: 0,
        denominator: 0,
    }
}

/// Field-wise equality.
#[inline]
pub fn are_fractions_deep_equal(f1: &Fraction, f2: &Fraction) -> bool {
    f1 == f2
}

/// Equality of the unreduced improper forms.
///
/// `1/2` and `2/4` are *not* equal here (`1/2` vs `2/4`), but `2 5/0` and
/// `2` are. Used to tell whether simplification changed anything.
pub fn are_fractions_equal(f1: &Fraction, f2: &Fraction) -> bool {
    to_improper_fraction(f1) == to_improper_fraction(f2)
}
