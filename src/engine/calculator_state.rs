// ============================================================================
// Calculator State
// Immutable session record with one pure transition per user action
// ============================================================================

use super::arithmetic::perform_operation;
use super::conversion::simplify_proper_fraction;
use super::predicates::{clear_incomplete_fraction, is_zero};
use super::rounding::BinaryRounder;
use crate::domain::{CalculatorConfig, DenominatorMode, Fraction, Operator, DEFAULT_FRACTION};
use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operand field targeted by digit entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Field {
    Whole,
    Numerator,
    Denominator,
}

/// User actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    /// Clear entry, or clear everything when nothing is being typed
    Clear,
    /// Press an operator key
    Operation(Operator),
    /// Press `=`
    Equals,
    ToggleSign,
    /// Digit key (0-9). In binary mode a denominator key carries the power
    /// of two itself (2, 4, ..., 256).
    Input { field: Field, value: u32 },
    /// Backspace on a field
    Delete { field: Field },
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
}

/// Calculator session state.
///
/// `result`/`rounded_result` are set right after `=`; the next input commits
/// the shown value into `curr_operand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorState {
    pub prev_operand: Option<Fraction>,
    pub operator: Option<Operator>,
    pub curr_operand: Fraction,
    pub result: Option<Fraction>,
    pub rounded_result: Option<Fraction>,
    pub memory: Option<Fraction>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            prev_operand: None,
            operator: None,
            curr_operand: DEFAULT_FRACTION,
            result: None,
            rounded_result: None,
            memory: None,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value currently showing: rounded result, else result, else the
    /// operand being typed.
    pub fn display_value(&self) -> Fraction {
        self.shown_result().unwrap_or(self.curr_operand)
    }

    /// Whether `Clear` only clears the current entry
    pub fn is_clear_entry(&self) -> bool {
        self.result.is_none() && self.rounded_result.is_none() && self.curr_operand != DEFAULT_FRACTION
    }

    fn shown_result(&self) -> Option<Fraction> {
        self.rounded_result.or(self.result)
    }

    /// Apply one action.
    ///
    /// # Errors
    /// - `InvalidInput` for a non-digit key, a non power of two binary
    ///   denominator, or digit entry that would overflow a field
    /// - `Overflow` when a result leaves the fraction range
    pub fn apply(&self, action: &Action, config: &CalculatorConfig) -> NumericResult<Self> {
        let rounder = BinaryRounder::from_config(config);
        let rounder = rounder.as_ref();

        match *action {
            Action::Clear => Ok(self.clear()),
            Action::Operation(op) => self.operation(op, rounder),
            Action::Equals => self.equals(config, rounder),
            Action::ToggleSign => {
                let mut next = self.finish_calculation();
                next.curr_operand = next.curr_operand.negated();
                Ok(next)
            },
            Action::Input { field, value } => self.input(field, value, config),
            Action::Delete { field } => Ok(self.delete(field, config)),
            Action::MemoryClear => Ok(Self {
                memory: None,
                ..*self
            }),
            Action::MemoryRecall => match self.memory {
                Some(memory) => {
                    let mut next = self.finish_calculation();
                    next.curr_operand = memory;
                    Ok(next)
                },
                None => Ok(*self),
            },
            Action::MemoryAdd => self.update_memory(Operator::Add),
            Action::MemorySubtract => self.update_memory(Operator::Subtract),
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Commit a shown result into the current operand and drop the pending
    /// operation
    fn finish_calculation(&self) -> Self {
        match self.shown_result() {
            Some(shown) => Self {
                prev_operand: None,
                operator: None,
                curr_operand: shown,
                result: None,
                rounded_result: None,
                memory: self.memory,
            },
            None => *self,
        }
    }

    fn clear(&self) -> Self {
        if self.is_clear_entry() {
            return Self {
                curr_operand: DEFAULT_FRACTION,
                ..*self
            };
        }
        Self {
            memory: self.memory,
            ..Self::default()
        }
    }

    fn operation(&self, op: Operator, rounder: Option<&BinaryRounder>) -> NumericResult<Self> {
        let mut next = self.finish_calculation();

        // Nothing typed yet: only swap the pending operator
        if is_zero(&next.curr_operand) {
            next.operator = Some(op);
            next.prev_operand = next.prev_operand.or(Some(DEFAULT_FRACTION));
            return Ok(next);
        }

        let operand = clear_incomplete_fraction(&next.curr_operand);
        next.prev_operand = match (next.prev_operand, next.operator) {
            // Chain the pending operation
            (Some(prev), Some(pending)) => {
                let calc = perform_operation(&prev, pending, &operand)?;
                Some(round_with(rounder, &calc)?)
            },
            _ => Some(operand),
        };
        next.operator = Some(op);
        next.curr_operand = DEFAULT_FRACTION;
        Ok(next)
    }

    fn equals(&self, config: &CalculatorConfig, rounder: Option<&BinaryRounder>) -> NumericResult<Self> {
        if let Some(shown) = self.shown_result() {
            if let (true, Some(_), Some(op)) = (config.equals_repeat, self.prev_operand, self.operator) {
                // Repeat the last operation on the shown result
                let calc = perform_operation(&shown, op, &self.curr_operand)?;
                return Ok(Self {
                    prev_operand: Some(shown),
                    result: Some(calc),
                    rounded_result: rounded_if_changed(rounder, &calc)?,
                    ..*self
                });
            }
            return Ok(self.finish_calculation());
        }

        if let (Some(prev), Some(op)) = (self.prev_operand, self.operator) {
            // An empty operand reuses the previous one (`3 + =` is 6)
            let operand = if is_zero(&self.curr_operand) {
                prev
            } else {
                clear_incomplete_fraction(&self.curr_operand)
            };
            let calc = perform_operation(&prev, op, &operand)?;
            return Ok(Self {
                curr_operand: operand,
                result: Some(calc),
                rounded_result: rounded_if_changed(rounder, &calc)?,
                ..*self
            });
        }

        if is_zero(&self.curr_operand) {
            return Ok(*self);
        }

        // No pending operation: simplify and round the operand in place
        let simplified = simplify_proper_fraction(&self.curr_operand)?;
        let mut next = *self;
        if simplified != self.curr_operand {
            next.result = Some(simplified);
        }
        next.rounded_result = rounded_if_changed(rounder, &simplified)?;
        Ok(next)
    }

    fn input(&self, field: Field, value: u32, config: &CalculatorConfig) -> NumericResult<Self> {
        let mut next = self.finish_calculation();
        let operand = &mut next.curr_operand;
        match field {
            Field::Whole => operand.whole = append_digit(operand.whole, value)?,
            Field::Numerator => operand.numerator = append_digit(operand.numerator, value)?,
            Field::Denominator => {
                operand.denominator = match config.denominator_mode {
                    DenominatorMode::Binary if value.is_power_of_two() => value,
                    DenominatorMode::Binary => return Err(NumericError::InvalidInput),
                    DenominatorMode::Decimal => append_digit(operand.denominator, value)?,
                }
            },
        }
        Ok(next)
    }

    fn delete(&self, field: Field, config: &CalculatorConfig) -> Self {
        let mut next = self.finish_calculation();
        let operand = &mut next.curr_operand;
        match field {
            Field::Whole => operand.whole /= 10,
            Field::Numerator => operand.numerator /= 10,
            Field::Denominator => {
                operand.denominator = match config.denominator_mode {
                    DenominatorMode::Binary => 0,
                    DenominatorMode::Decimal => operand.denominator / 10,
                }
            },
        }
        next
    }

    fn update_memory(&self, op: Operator) -> NumericResult<Self> {
        let memory = self.memory.unwrap_or(DEFAULT_FRACTION);
        Ok(Self {
            memory: Some(perform_operation(&memory, op, &self.curr_operand)?),
            ..*self
        })
    }
}

fn append_digit(current: u32, digit: u32) -> NumericResult<u32> {
    if digit > 9 {
        return Err(NumericError::InvalidInput);
    }
    current
        .checked_mul(10)
        .and_then(|v| v.checked_add(digit))
        .ok_or(NumericError::InvalidInput)
}

fn round_with(rounder: Option<&BinaryRounder>, frac: &Fraction) -> NumericResult<Fraction> {
    match rounder {
        Some(rounder) => rounder.apply(frac),
        None => Ok(*frac),
    }
}

/// The rounded value, only if rounding changed the fields
fn rounded_if_changed(rounder: Option<&BinaryRounder>, frac: &Fraction) -> NumericResult<Option<Fraction>> {
    let rounded = round_with(rounder, frac)?;
    Ok((rounded != *frac).then_some(rounded))
}
