// ============================================================================
// Calculator Configuration
// Settings that influence how results are computed and rounded
// ============================================================================

use crate::numeric::NumericError;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Denominator Mode
// ============================================================================

/// How the denominator keypad behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DenominatorMode {
    /// Denominator is typed digit by digit (any positive integer)
    #[default]
    Decimal,

    /// Denominator is picked from powers of two (ruler graduations)
    /// - Enables binary rounding of results
    Binary,
}

// ============================================================================
// Binary Rounding Mode
// ============================================================================

/// Direction used when re-expressing a result over the rounding denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BinaryRoundingMode {
    #[default]
    Off,
    /// Ceiling
    Up,
    /// Nearest, halves away from zero
    Nearest,
    /// Floor
    Down,
}

// ============================================================================
// Binary Rounding Denominator
// ============================================================================

/// Target denominator for binary rounding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryRoundingDenominator {
    #[cfg_attr(feature = "serde", serde(rename = "off"))]
    Off,
    #[cfg_attr(feature = "serde", serde(rename = "2"))]
    Halves,
    #[cfg_attr(feature = "serde", serde(rename = "4"))]
    Quarters,
    #[cfg_attr(feature = "serde", serde(rename = "8"))]
    Eighths,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "16"))]
    Sixteenths,
    #[cfg_attr(feature = "serde", serde(rename = "32"))]
    ThirtySeconds,
    #[cfg_attr(feature = "serde", serde(rename = "64"))]
    SixtyFourths,
    #[cfg_attr(feature = "serde", serde(rename = "128"))]
    OneTwentyEighths,
    #[cfg_attr(feature = "serde", serde(rename = "256"))]
    TwoFiftySixths,
}

impl BinaryRoundingDenominator {
    /// Cycle order of the rounding switch
    pub const ALL: [BinaryRoundingDenominator; 9] = [
        BinaryRoundingDenominator::Off,
        BinaryRoundingDenominator::Halves,
        BinaryRoundingDenominator::Quarters,
        BinaryRoundingDenominator::Eighths,
        BinaryRoundingDenominator::Sixteenths,
        BinaryRoundingDenominator::ThirtySeconds,
        BinaryRoundingDenominator::SixtyFourths,
        BinaryRoundingDenominator::OneTwentyEighths,
        BinaryRoundingDenominator::TwoFiftySixths,
    ];

    /// Largest denominator available in carpenter mode
    pub const CARPENTER_MAX: BinaryRoundingDenominator = BinaryRoundingDenominator::ThirtySeconds;

    /// The denominator value, or `None` when off
    pub const fn value(self) -> Option<u32> {
        match self {
            BinaryRoundingDenominator::Off => None,
            BinaryRoundingDenominator::Halves => Some(2),
            BinaryRoundingDenominator::Quarters => Some(4),
            BinaryRoundingDenominator::Eighths => Some(8),
            BinaryRoundingDenominator::Sixteenths => Some(16),
            BinaryRoundingDenominator::ThirtySeconds => Some(32),
            BinaryRoundingDenominator::SixtyFourths => Some(64),
            BinaryRoundingDenominator::OneTwentyEighths => Some(128),
            BinaryRoundingDenominator::TwoFiftySixths => Some(256),
        }
    }

    /// Next value in the switch cycle. Carpenter mode wraps back to `Off`
    /// after x/32.
    pub fn next(self, carpenter_mode: bool) -> Self {
        if carpenter_mode && self >= Self::CARPENTER_MAX {
            return Self::ALL[0];
        }
        let idx = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl TryFrom<u32> for BinaryRoundingDenominator {
    type Error = NumericError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.value() == Some(value))
            .ok_or(NumericError::InvalidDenominator)
    }
}

impl FromStr for BinaryRoundingDenominator {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("off") {
            return Ok(BinaryRoundingDenominator::Off);
        }
        let value: u32 = s.parse().map_err(|_| NumericError::InvalidInput)?;
        Self::try_from(value)
    }
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Comprehensive configuration for a calculator session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CalculatorConfig {
    /// Denominator keypad behavior
    pub denominator_mode: DenominatorMode,

    /// Rounding direction (only effective in binary mode)
    pub binary_rounding_mode: BinaryRoundingMode,

    /// Rounding target (only effective in binary mode)
    pub binary_rounding_denominator: BinaryRoundingDenominator,

    /// Restrict rounding denominators to x/32 and below
    pub carpenter_mode: bool,

    /// Whether pressing `=` on a result repeats the last operation
    pub equals_repeat: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            denominator_mode: DenominatorMode::Decimal,
            binary_rounding_mode: BinaryRoundingMode::Off,
            binary_rounding_denominator: BinaryRoundingDenominator::Sixteenths,
            carpenter_mode: false,
            equals_repeat: true,
        }
    }
}

impl CalculatorConfig {
    /// Create a new configuration with the given denominator mode
    pub fn new(denominator_mode: DenominatorMode) -> Self {
        Self {
            denominator_mode,
            ..Self::default()
        }
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding_mode(mut self, mode: BinaryRoundingMode) -> Self {
        self.binary_rounding_mode = mode;
        self
    }

    /// Builder method: Set rounding denominator
    pub fn with_rounding_denominator(mut self, denominator: BinaryRoundingDenominator) -> Self {
        self.binary_rounding_denominator = denominator;
        self
    }

    /// Builder method: Toggle carpenter mode.
    ///
    /// Turning it on clamps the rounding denominator to x/32.
    pub fn with_carpenter_mode(mut self, enabled: bool) -> Self {
        self.carpenter_mode = enabled;
        if enabled && self.binary_rounding_denominator > BinaryRoundingDenominator::CARPENTER_MAX {
            self.binary_rounding_denominator = BinaryRoundingDenominator::CARPENTER_MAX;
        }
        self
    }

    /// Builder method: Toggle repeat-on-equals
    pub fn with_equals_repeat(mut self, enabled: bool) -> Self {
        self.equals_repeat = enabled;
        self
    }

    /// The denominator results are rounded to, if rounding is active
    pub fn rounding_denominator(&self) -> Option<u32> {
        if self.denominator_mode != DenominatorMode::Binary
            || self.binary_rounding_mode == BinaryRoundingMode::Off
        {
            return None;
        }
        self.binary_rounding_denominator.value()
    }

    /// Advance the rounding denominator as the rounding switch does
    pub fn cycle_rounding_denominator(mut self) -> Self {
        self.binary_rounding_denominator = self.binary_rounding_denominator.next(self.carpenter_mode);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.carpenter_mode
            && self.binary_rounding_denominator > BinaryRoundingDenominator::CARPENTER_MAX
        {
            return Err("Rounding denominator cannot exceed 32 in carpenter mode".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Plain fraction calculator
    /// - Decimal denominator keypad
    /// - No rounding
    pub fn decimal() -> Self {
        Self::new(DenominatorMode::Decimal)
    }

    /// Tape-measure configuration
    /// - Binary denominator keypad
    /// - Round to nearest x/16
    /// - Carpenter mode (x/32 max)
    pub fn carpenter() -> Self {
        Self::new(DenominatorMode::Binary)
            .with_rounding_mode(BinaryRoundingMode::Nearest)
            .with_rounding_denominator(BinaryRoundingDenominator::Sixteenths)
            .with_carpenter_mode(true)
    }
}

// ============================================================================
// Persisted Settings
// ============================================================================

#[cfg(feature = "serde")]
impl CalculatorConfig {
    /// Parse a persisted settings blob.
    ///
    /// Never fails: unparsable input yields the defaults, and each invalid
    /// field falls back to its default individually.
    pub fn from_json_str(json: &str) -> Self {
        let defaults = Self::default();
        let value: serde_json::Value = match serde_json::from_str(json) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("Discarding unparsable calculator settings: {}", e);
                return defaults;
            },
        };

        fn field<T: serde::de::DeserializeOwned>(value: &serde_json::Value, key: &str, default: T) -> T {
            value
                .get(key)
                .cloned()
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or(default)
        }

        let config = Self {
            denominator_mode: field(&value, "denominatorMode", defaults.denominator_mode),
            binary_rounding_mode: field(&value, "binaryRoundingMode", defaults.binary_rounding_mode),
            binary_rounding_denominator: field(
                &value,
                "binaryRoundingDenominator",
                defaults.binary_rounding_denominator,
            ),
            carpenter_mode: field(&value, "carpenterMode", defaults.carpenter_mode),
            equals_repeat: field(&value, "equalsRepeat", defaults.equals_repeat),
        };

        // Re-apply the carpenter clamp in case the blob predates it
        config.with_carpenter_mode(config.carpenter_mode)
    }

    /// Serialize for persistence
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = CalculatorConfig::new(DenominatorMode::Binary);

        assert_eq!(config.denominator_mode, DenominatorMode::Binary);
        assert_eq!(config.binary_rounding_mode, BinaryRoundingMode::Off);
        assert!(config.equals_repeat);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::new(DenominatorMode::Binary)
            .with_rounding_mode(BinaryRoundingMode::Up)
            .with_rounding_denominator(BinaryRoundingDenominator::Eighths)
            .with_equals_repeat(false);

        assert_eq!(config.rounding_denominator(), Some(8));
        assert!(!config.equals_repeat);
    }

    #[test]
    fn test_rounding_only_in_binary_mode() {
        let config = CalculatorConfig::decimal()
            .with_rounding_mode(BinaryRoundingMode::Nearest)
            .with_rounding_denominator(BinaryRoundingDenominator::Quarters);
        assert_eq!(config.rounding_denominator(), None);

        let config = CalculatorConfig::new(DenominatorMode::Binary)
            .with_rounding_mode(BinaryRoundingMode::Nearest)
            .with_rounding_denominator(BinaryRoundingDenominator::Off);
        assert_eq!(config.rounding_denominator(), None);
    }

    #[test]
    fn test_carpenter_clamps_denominator() {
        let config = CalculatorConfig::new(DenominatorMode::Binary)
            .with_rounding_denominator(BinaryRoundingDenominator::TwoFiftySixths)
            .with_carpenter_mode(true);
        assert_eq!(
            config.binary_rounding_denominator,
            BinaryRoundingDenominator::ThirtySeconds
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let config = CalculatorConfig {
            carpenter_mode: true,
            binary_rounding_denominator: BinaryRoundingDenominator::SixtyFourths,
            ..CalculatorConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_denominator_cycle() {
        use BinaryRoundingDenominator::*;

        assert_eq!(Off.next(false), Halves);
        assert_eq!(ThirtySeconds.next(false), SixtyFourths);
        assert_eq!(TwoFiftySixths.next(false), Off);
        assert_eq!(ThirtySeconds.next(true), Off);
        assert_eq!(Sixteenths.next(true), ThirtySeconds);

        let config = CalculatorConfig::carpenter()
            .cycle_rounding_denominator()
            .cycle_rounding_denominator();
        assert_eq!(config.binary_rounding_denominator, Off);
    }

    #[test]
    fn test_denominator_parsing() {
        assert_eq!(
            "64".parse::<BinaryRoundingDenominator>().unwrap(),
            BinaryRoundingDenominator::SixtyFourths
        );
        assert_eq!(
            "off".parse::<BinaryRoundingDenominator>().unwrap(),
            BinaryRoundingDenominator::Off
        );
        assert_eq!(
            "12".parse::<BinaryRoundingDenominator>(),
            Err(NumericError::InvalidDenominator)
        );
        assert_eq!(
            "abc".parse::<BinaryRoundingDenominator>(),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_preset_configs() {
        let carpenter = CalculatorConfig::carpenter();
        assert_eq!(carpenter.rounding_denominator(), Some(16));
        assert!(carpenter.carpenter_mode);

        let decimal = CalculatorConfig::decimal();
        assert_eq!(decimal.rounding_denominator(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_settings_json() {
        let config = CalculatorConfig::from_json_str(
            r#"{"denominatorMode":"binary","binaryRoundingMode":"down","binaryRoundingDenominator":"8","theme":"dark"}"#,
        );
        assert_eq!(config.denominator_mode, DenominatorMode::Binary);
        assert_eq!(config.binary_rounding_mode, BinaryRoundingMode::Down);
        assert_eq!(config.rounding_denominator(), Some(8));

        let restored = CalculatorConfig::from_json_str(&config.to_json_string());
        assert_eq!(restored, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_settings_json_fallbacks() {
        let config = CalculatorConfig::from_json_str(
            r#"{"denominatorMode":"hex","binaryRoundingDenominator":"12","carpenterMode":true}"#,
        );
        assert_eq!(config.denominator_mode, DenominatorMode::Decimal);
        assert_eq!(
            config.binary_rounding_denominator,
            BinaryRoundingDenominator::Sixteenths
        );
        assert!(config.carpenter_mode);

        assert_eq!(CalculatorConfig::from_json_str("not json"), CalculatorConfig::default());
    }
}
