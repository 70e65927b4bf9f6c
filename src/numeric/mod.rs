// ============================================================================
// Numeric Module
// Integer primitives for exact rational arithmetic
// ============================================================================
//
// This module provides:
// - ImproperFraction: signed numerator over a denominator (i128)
// - gcd/simplify: Euclidean reduction with a defined zero-denominator fallback
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations in the arithmetic path
// - Mixed-fraction fields are u32, improper values are i128, so
//   cross-multiplication of two operands cannot overflow
// - Conversions that can leave the u32 range return Result (no panics)

mod errors;
mod rational;

pub use errors::{NumericError, NumericResult};
pub use rational::{gcd, simplify, ImproperFraction};
