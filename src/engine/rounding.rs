// ============================================================================
// Rounding Engine
// Re-expresses a fraction over a fixed (typically power-of-two) denominator
// ============================================================================
//
// All three directions work on the exact rational num * new_den / den with
// integer division; no floating point is involved.

use super::conversion::{to_improper_fraction, to_proper_fraction};
use super::factory::create_rounding_policy;
use crate::domain::{CalculatorConfig, Fraction};
use crate::interfaces::RoundingPolicy;
use crate::numeric::{NumericError, NumericResult};

/// Direction applied to `num / den`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Ceil,
    Nearest,
    Floor,
}

/// Integer `num / den` rounded in `direction`. `den` must be positive.
fn divide_rounded(num: i128, den: i128, direction: Direction) -> i128 {
    let floor = num.div_euclid(den);
    let exact = num.rem_euclid(den) == 0;
    match direction {
        Direction::Floor => floor,
        Direction::Ceil => {
            if exact {
                floor
            } else {
                floor + 1
            }
        },
        Direction::Nearest => {
            // Round the magnitude half-up, then restore the sign
            let magnitude = (2 * num.abs() + den) / (2 * den);
            if num < 0 {
                -magnitude
            } else {
                magnitude
            }
        },
    }
}

fn rescale(frac: &Fraction, new_den: u32, direction: Direction) -> NumericResult<Fraction> {
    if new_den == 0 {
        return Err(NumericError::InvalidDenominator);
    }
    let imp = to_improper_fraction(frac);
    let new_den = new_den as i128;
    let rounded = divide_rounded(imp.num * new_den, imp.den, direction);
    to_proper_fraction(rounded, new_den)
}

/// Round to the nearest multiple of `1/new_den` (halves away from zero).
///
/// ```
/// use fraction_calc::domain::Fraction;
/// use fraction_calc::engine::round_fraction;
///
/// // 1/3 ≈ 2.67/8 -> 3/8
/// let rounded = round_fraction(&Fraction::from_parts(1, 3), 8).unwrap();
/// assert_eq!(rounded, Fraction::from_parts(3, 8));
/// ```
pub fn round_fraction(frac: &Fraction, new_den: u32) -> NumericResult<Fraction> {
    rescale(frac, new_den, Direction::Nearest)
}

/// Round up to a multiple of `1/new_den`.
pub fn ceil_fraction(frac: &Fraction, new_den: u32) -> NumericResult<Fraction> {
    rescale(frac, new_den, Direction::Ceil)
}

/// Round down to a multiple of `1/new_den`.
pub fn floor_fraction(frac: &Fraction, new_den: u32) -> NumericResult<Fraction> {
    rescale(frac, new_den, Direction::Floor)
}

// ============================================================================
// Rounding Policies
// ============================================================================

/// Ceiling policy ("round up" on the rounding switch)
pub struct RoundUp;

impl RoundingPolicy for RoundUp {
    fn round(&self, frac: &Fraction, new_den: u32) -> NumericResult<Fraction> {
        ceil_fraction(frac, new_den)
    }

    fn name(&self) -> &str {
        "Up"
    }
}

/// Round-to-nearest policy
pub struct RoundNearest;

impl RoundingPolicy for RoundNearest {
    fn round(&self, frac: &Fraction, new_den: u32) -> NumericResult<Fraction> {
        round_fraction(frac, new_den)
    }

    fn name(&self) -> &str {
        "Nearest"
    }
}

/// Floor policy
pub struct RoundDown;

impl RoundingPolicy for RoundDown {
    fn round(&self, frac: &Fraction, new_den: u32) -> NumericResult<Fraction> {
        floor_fraction(frac, new_den)
    }

    fn name(&self) -> &str {
        "Down"
    }
}

/// A rounding policy bound to its target denominator
pub struct BinaryRounder {
    policy: Box<dyn RoundingPolicy>,
    denominator: u32,
}

impl BinaryRounder {
    /// # Errors
    /// Returns `InvalidDenominator` for a zero denominator.
    pub fn new(policy: Box<dyn RoundingPolicy>, denominator: u32) -> NumericResult<Self> {
        policy.check_denominator(denominator)?;
        Ok(Self {
            policy,
            denominator,
        })
    }

    /// Build the rounder described by `config`, or `None` when rounding is
    /// inactive (decimal keypad, mode off, or denominator off).
    pub fn from_config(config: &CalculatorConfig) -> Option<Self> {
        let denominator = config.rounding_denominator()?;
        let policy = create_rounding_policy(config)?;
        Self::new(policy, denominator).ok()
    }

    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Round `frac` with the bound policy and denominator
    pub fn apply(&self, frac: &Fraction) -> NumericResult<Fraction> {
        let rounded = self.policy.round(frac, self.denominator)?;
        tracing::trace!(
            "Rounded {} {} to x/{}: {}",
            frac,
            self.policy.name(),
            self.denominator,
            rounded
        );
        Ok(rounded)
    }
}

impl std::fmt::Debug for BinaryRounder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryRounder")
            .field("policy", &self.policy.name())
            .field("denominator", &self.denominator)
            .finish()
    }
}
