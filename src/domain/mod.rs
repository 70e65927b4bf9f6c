// ============================================================================
// Domain Models Module
// Contains the fraction value type, operators and configuration
// ============================================================================

pub mod config;
pub mod fraction;
pub mod operator;

pub use config::{BinaryRoundingDenominator, BinaryRoundingMode, CalculatorConfig, DenominatorMode};
pub use fraction::{Fraction, Sign, CANONICAL_ZERO, DEFAULT_FRACTION};
pub use operator::Operator;
