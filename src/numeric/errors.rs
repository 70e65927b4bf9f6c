// ============================================================================
// Numeric Errors
// Error types for mixed-fraction arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during fraction arithmetic and conversion.
///
/// Division by a zero-valued fraction is *not* an error: it yields the
/// canonical zero fraction. `DivisionByZero` is only reported by the exact
/// decimal conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result does not fit the mixed-fraction field range (u32)
    Overflow,
    /// Attempted exact division by zero
    DivisionByZero,
    /// Target rounding denominator is not positive
    InvalidDenominator,
    /// Input digit or tag is invalid
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded fraction range")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidDenominator => {
                write!(f, "invalid denominator: target denominator must be positive")
            },
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
