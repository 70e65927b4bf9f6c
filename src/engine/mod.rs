// ============================================================================
// Engine Module
// Contains the fraction arithmetic and calculator business logic
// ============================================================================

mod arithmetic;
mod calculator;
mod calculator_state;
mod conversion;
mod predicates;
mod rounding;

pub mod factory;

pub use arithmetic::{
    add_fractions, divide_fractions, multiply_fractions, perform_operation, subtract_fractions,
};
pub use calculator::Calculator;
pub use calculator_state::{Action, CalculatorState, Field};
pub use conversion::{
    simplify_proper_fraction, to_decimal, to_exact_decimal, to_improper_fraction,
    to_proper_fraction,
};
pub use factory::{create_from_config, create_rounding_policy, CalculatorBuilder};
pub use predicates::{
    are_fractions_deep_equal, are_fractions_equal, clear_incomplete_fraction,
    is_complete_fraction, is_zero,
};
pub use rounding::{
    ceil_fraction, floor_fraction, round_fraction, BinaryRounder, RoundDown, RoundNearest, RoundUp,
};
