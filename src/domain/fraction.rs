// ============================================================================
// Mixed Fraction Domain Model
// ============================================================================

use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Sign
// ============================================================================

/// Sign of a mixed fraction, applied to whole and fractional part as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// `+1` or `-1`
    #[inline]
    pub const fn as_i128(self) -> i128 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }

    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

impl Neg for Sign {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.flip()
    }
}

// ============================================================================
// Fraction
// ============================================================================

/// A mixed number `sign × (whole + numerator/denominator)`.
///
/// All magnitudes are unsigned; the sign is carried solely by `sign`.
///
/// When either `numerator` or `denominator` is zero the fractional part is
/// considered absent. This lets a fraction that is still being typed (a
/// numerator with no denominator yet) live in the same type; arithmetic
/// ignores the dangling field.
///
/// Values are immutable in practice: every operation returns a new
/// `Fraction`.
///
/// # Example
/// ```
/// use fraction_calc::domain::{Fraction, Sign};
///
/// // 3 5/8
/// let f = Fraction::new(Sign::Positive, 3, 5, 8);
/// assert_eq!(f.to_string(), "3 5/8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fraction {
    pub sign: Sign,
    pub whole: u32,
    pub numerator: u32,
    pub denominator: u32,
}

/// The empty operand: `0` with no fractional part. Initial and reset state
/// of every calculator operand.
pub const DEFAULT_FRACTION: Fraction = Fraction {
    sign: Sign::Positive,
    whole: 0,
    numerator: 0,
    denominator: 0,
};

/// Zero as returned by the fallback paths (division by zero, zero
/// denominator during reconstruction). Note the `1` denominator: it is not
/// deep-equal to [`DEFAULT_FRACTION`].
pub const CANONICAL_ZERO: Fraction = Fraction {
    sign: Sign::Positive,
    whole: 0,
    numerator: 0,
    denominator: 1,
};

impl Fraction {
    pub const fn new(sign: Sign, whole: u32, numerator: u32, denominator: u32) -> Self {
        Self {
            sign,
            whole,
            numerator,
            denominator,
        }
    }

    /// Build from a signed integer with no fractional part.
    pub const fn from_whole(value: i64) -> Self {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        // Saturates at u32::MAX
        let magnitude = value.unsigned_abs();
        let whole = if magnitude > u32::MAX as u64 {
            u32::MAX
        } else {
            magnitude as u32
        };
        Self::new(sign, whole, 0, 0)
    }

    /// A positive proper fraction `numerator/denominator` with no whole part.
    pub const fn from_parts(numerator: u32, denominator: u32) -> Self {
        Self::new(Sign::Positive, 0, numerator, denominator)
    }

    /// Same magnitude, opposite sign.
    #[inline]
    pub const fn negated(self) -> Self {
        Self {
            sign: self.sign.flip(),
            ..self
        }
    }

    /// Whether both numerator and denominator are set.
    #[inline]
    pub const fn has_fractional_part(&self) -> bool {
        self.numerator != 0 && self.denominator != 0
    }

    /// Display form with an optional leading `0` for an empty value.
    ///
    /// Unset numerator/denominator fields render as a blank so a
    /// half-typed fraction like `3/` still shows where it stands.
    pub fn format(&self, show_zero: bool) -> String {
        let minus = if self.sign.is_negative() { "-" } else { "" };

        if self.numerator == 0 && self.denominator == 0 {
            if self.whole == 0 {
                return format!("{}{}", minus, if show_zero { "0" } else { "" });
            }
            return format!("{}{}", minus, self.whole);
        }

        let numerator = blank_if_zero(self.numerator);
        let denominator = blank_if_zero(self.denominator);
        if self.whole == 0 {
            format!("{}{}/{}", minus, numerator, denominator)
        } else {
            format!("{}{} {}/{}", minus, self.whole, numerator, denominator)
        }
    }
}

fn blank_if_zero(value: u32) -> String {
    if value == 0 {
        " ".to_string()
    } else {
        value.to_string()
    }
}

impl Default for Fraction {
    fn default() -> Self {
        DEFAULT_FRACTION
    }
}

impl Neg for Fraction {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(true))
    }
}
