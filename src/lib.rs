// ============================================================================
// Fraction Calculator Library
// Exact mixed-number arithmetic with binary-denominator rounding
// ============================================================================

//! # Fraction Calculator
//!
//! A pure, stateless mixed-number arithmetic engine for fraction calculators.
//!
//! ## Features
//!
//! - **Exact rational arithmetic** over mixed numbers (`3 5/8`), no floats
//! - **Canonical results**: reduced, sign-normalized, `0/0` for whole numbers
//! - **Binary rounding** onto ruler graduations (x/2 … x/256), up/nearest/down
//! - **Input-tolerant**: half-typed fractions and division by zero never panic
//! - **Explicit session state** with one pure transition per keypress
//!
//! ## Example
//!
//! ```rust
//! use fraction_calc::prelude::*;
//!
//! // 1 1/2 + 2 1/3 = 3 5/6
//! let a = Fraction::new(Sign::Positive, 1, 1, 2);
//! let b = Fraction::new(Sign::Positive, 2, 1, 3);
//! let sum = add_fractions(&a, &b).unwrap();
//! assert_eq!(sum.to_string(), "3 5/6");
//!
//! // Round to the nearest sixteenth
//! let rounded = round_fraction(&sum, 16).unwrap();
//! assert_eq!(rounded.to_string(), "3 13/16");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BinaryRoundingDenominator, BinaryRoundingMode, CalculatorConfig, DenominatorMode,
        Fraction, Operator, Sign, CANONICAL_ZERO, DEFAULT_FRACTION,
    };
    pub use crate::engine::{
        add_fractions, are_fractions_deep_equal, are_fractions_equal, ceil_fraction,
        clear_incomplete_fraction, create_from_config, divide_fractions, floor_fraction,
        is_complete_fraction, is_zero, multiply_fractions, perform_operation, round_fraction,
        simplify_proper_fraction, subtract_fractions, to_decimal, to_improper_fraction,
        to_proper_fraction, Action, Calculator, CalculatorBuilder, CalculatorState, Field,
    };
    pub use crate::interfaces::{
        CalculatorEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RoundingPolicy,
    };
    pub use crate::numeric::{gcd, simplify, ImproperFraction, NumericError, NumericResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_tape_measure() {
        let mut calc = CalculatorBuilder::carpenter_preset()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        // 5 3/8 ÷ 3 with nearest-sixteenth rounding
        for action in [
            Action::Input { field: Field::Whole, value: 5 },
            Action::Input { field: Field::Numerator, value: 3 },
            Action::Input { field: Field::Denominator, value: 8 },
            Action::Operation(Operator::Divide),
            Action::Input { field: Field::Whole, value: 3 },
        ] {
            calc.dispatch(action);
        }
        let events = calc.dispatch(Action::Equals);

        // 43/24 = 1 19/24 ≈ 1 13/16
        assert!(events
            .iter()
            .any(|e| matches!(e, CalculatorEvent::ResultRounded { .. })));
        assert_eq!(calc.state().result, Some(Fraction::new(Sign::Positive, 1, 19, 24)));
        assert_eq!(calc.display_value(), Fraction::new(Sign::Positive, 1, 13, 16));

        // Continue from the rounded value
        calc.dispatch(Action::Operation(Operator::Multiply));
        calc.dispatch(Action::Input { field: Field::Whole, value: 3 });
        calc.dispatch(Action::Equals);
        assert_eq!(calc.display_value(), Fraction::new(Sign::Positive, 5, 7, 16));
    }

    #[test]
    fn test_free_functions_compose() {
        let a = Fraction::new(Sign::Positive, 0, 2, 4);
        let b = Fraction::new(Sign::Negative, 1, 0, 0);

        let product = multiply_fractions(&a, &b).unwrap();
        assert_eq!(product, Fraction::new(Sign::Negative, 0, 1, 2));
        assert_eq!(to_decimal(&product), -0.5);
        assert!(are_fractions_equal(&product, &Fraction::new(Sign::Negative, 0, 1, 2)));

        let quotient = perform_operation(&product, Operator::Divide, &DEFAULT_FRACTION).unwrap();
        assert!(are_fractions_deep_equal(&quotient, &CANONICAL_ZERO));
    }
}
