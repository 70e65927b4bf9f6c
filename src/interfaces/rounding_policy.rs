// ============================================================================
// Rounding Policy Interface
// Defines the contract for denominator-constrained rounding
// ============================================================================

use crate::domain::Fraction;
use crate::numeric::{NumericError, NumericResult};

/// Strategy pattern interface for rounding a fraction onto a fixed denominator
/// Implementations: RoundUp (ceiling), RoundNearest, RoundDown (floor)
pub trait RoundingPolicy: Send + Sync {
    /// Re-express `frac` over `new_den`, then normalize
    ///
    /// # Arguments
    /// * `frac` - The value to round
    /// * `new_den` - Target denominator (positive)
    ///
    /// # Returns
    /// The rounded fraction in canonical form. Its denominator field may be
    /// smaller than `new_den` after reduction, or `0` for a whole number.
    fn round(&self, frac: &Fraction, new_den: u32) -> NumericResult<Fraction>;

    /// Get the policy name for logging
    fn name(&self) -> &str;

    /// Reject non-positive target denominators
    fn check_denominator(&self, new_den: u32) -> NumericResult<()> {
        if new_den == 0 {
            Err(NumericError::InvalidDenominator)
        } else {
            Ok(())
        }
    }
}
