// ============================================================================
// Calculator Factory
// Creates calculators and rounding policies with proper configuration
// ============================================================================

use crate::domain::{
    BinaryRoundingDenominator, BinaryRoundingMode, CalculatorConfig, DenominatorMode,
};
use crate::engine::rounding::{RoundDown, RoundNearest, RoundUp};
use crate::engine::Calculator;
use crate::interfaces::{EventHandler, RoundingPolicy};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for calculator events
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use fraction_calc::prelude::*;
/// use fraction_calc::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::carpenter();
/// let calculator = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, String> {
    // Validate configuration first
    config.validate()?;

    if let (Some(policy), Some(denominator)) =
        (create_rounding_policy(&config), config.rounding_denominator())
    {
        tracing::debug!(
            "Creating calculator rounding {} to x/{}",
            policy.name(),
            denominator
        );
    }

    Ok(Calculator::new(config, event_handler))
}

/// Creates the rounding policy for a configuration, `None` when rounding is
/// inactive (decimal keypad, mode off, or denominator off)
pub fn create_rounding_policy(config: &CalculatorConfig) -> Option<Box<dyn RoundingPolicy>> {
    config.rounding_denominator()?;
    match config.binary_rounding_mode {
        BinaryRoundingMode::Off => None,
        BinaryRoundingMode::Up => Some(Box::new(RoundUp)),
        BinaryRoundingMode::Nearest => Some(Box::new(RoundNearest)),
        BinaryRoundingMode::Down => Some(Box::new(RoundDown)),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use fraction_calc::prelude::*;
/// use fraction_calc::engine::factory::CalculatorBuilder;
/// use std::sync::Arc;
///
/// let calculator = CalculatorBuilder::new()
///     .binary_keypad()
///     .round_nearest(BinaryRoundingDenominator::Sixteenths)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(calculator.config().rounding_denominator(), Some(16));
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }

    // ========================================================================
    // Keypad Configuration
    // ========================================================================

    /// Digit-by-digit denominator entry (default)
    pub fn decimal_keypad(mut self) -> Self {
        self.config.denominator_mode = DenominatorMode::Decimal;
        self
    }

    /// Power-of-two denominator keys
    pub fn binary_keypad(mut self) -> Self {
        self.config.denominator_mode = DenominatorMode::Binary;
        self
    }

    // ========================================================================
    // Rounding Configuration
    // ========================================================================

    /// Round results up to the given denominator
    pub fn round_up(self, denominator: BinaryRoundingDenominator) -> Self {
        self.rounding(BinaryRoundingMode::Up, denominator)
    }

    /// Round results to the nearest multiple of the given denominator
    pub fn round_nearest(self, denominator: BinaryRoundingDenominator) -> Self {
        self.rounding(BinaryRoundingMode::Nearest, denominator)
    }

    /// Round results down to the given denominator
    pub fn round_down(self, denominator: BinaryRoundingDenominator) -> Self {
        self.rounding(BinaryRoundingMode::Down, denominator)
    }

    /// Disable rounding
    pub fn no_rounding(mut self) -> Self {
        self.config.binary_rounding_mode = BinaryRoundingMode::Off;
        self
    }

    fn rounding(mut self, mode: BinaryRoundingMode, denominator: BinaryRoundingDenominator) -> Self {
        self.config = self
            .config
            .with_rounding_mode(mode)
            .with_rounding_denominator(denominator);
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Restrict rounding to x/32 and below
    pub fn with_carpenter_mode(mut self, enabled: bool) -> Self {
        self.config = self.config.with_carpenter_mode(enabled);
        self
    }

    /// Toggle repeat-on-equals
    pub fn with_equals_repeat(mut self, enabled: bool) -> Self {
        self.config = self.config.with_equals_repeat(enabled);
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply tape-measure configuration
    pub fn carpenter_preset() -> Self {
        Self {
            config: CalculatorConfig::carpenter(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Calculator, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
