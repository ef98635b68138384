// ============================================================================
// Money Configuration
// Default currency and rendering configuration
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Currency label used when none is given at construction.
pub const DEFAULT_CURRENCY: &str = "Baht";

/// Largest number of fraction digits a `Decimal` can carry.
pub const MAX_FRACTION_DIGITS: u32 = 28;

/// Controls how a money amount is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatConfig {
    /// Digits printed after the decimal point for non-whole amounts
    pub fraction_digits: u32,

    /// Thousands separator for the integer digits
    /// None disables grouping
    pub group_separator: Option<char>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl FormatConfig {
    /// Two fraction digits, comma grouping: `1,234.50`
    pub const fn standard() -> Self {
        Self {
            fraction_digits: 2,
            group_separator: Some(','),
        }
    }

    /// Two fraction digits, no grouping: `1234.50`
    pub const fn plain() -> Self {
        Self {
            fraction_digits: 2,
            group_separator: None,
        }
    }

    /// Builder method: Set fraction digits
    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.fraction_digits = digits;
        self
    }

    /// Builder method: Set group separator
    pub fn with_group_separator(mut self, separator: Option<char>) -> Self {
        self.group_separator = separator;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(format!(
                "Fraction digits cannot exceed {}",
                MAX_FRACTION_DIGITS
            ));
        }

        if let Some(separator) = self.group_separator {
            if separator.is_ascii_digit()
                || separator.is_whitespace()
                || separator == '.'
                || separator == '-'
                || separator == '+'
            {
                return Err(format!("Invalid group separator: {:?}", separator));
            }
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl FormatConfig {
    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }
}
