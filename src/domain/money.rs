// ============================================================================
// Money Domain Model
// Immutable amount tagged with a currency label
// ============================================================================

use crate::numeric::{parse_amount, render_amount, MoneyError, MoneyResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;
use std::str::FromStr;

use super::config::{FormatConfig, DEFAULT_CURRENCY};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A monetary amount in a single currency.
///
/// Both fields are fixed at construction. Equality compares the amount
/// numerically (`3` equals `3.00`) and the currency exactly. Ordering sorts
/// by currency label first, then by amount.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Money {
    value: Decimal,

    #[cfg_attr(feature = "serde", serde(default = "default_currency"))]
    currency: String,
}

#[cfg(feature = "serde")]
fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an integer or decimal amount.
    #[inline]
    pub fn new(value: impl Into<Decimal>, currency: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency: currency.into(),
        }
    }

    /// Create in the default currency (`"Baht"`).
    #[inline]
    pub fn with_default_currency(value: impl Into<Decimal>) -> Self {
        Self::new(value, DEFAULT_CURRENCY)
    }

    /// Create from a floating-point amount.
    ///
    /// The amount is stored as the shortest decimal that represents the
    /// float, so `1.2` stores as `1.2`.
    ///
    /// # Errors
    /// - `NotFinite` for NaN or infinity
    /// - `Overflow` if the magnitude does not fit a `Decimal`
    /// - `PrecisionLoss` if a nonzero value is too small to represent
    pub fn from_f64(value: f64, currency: impl Into<String>) -> MoneyResult<Self> {
        if !value.is_finite() {
            return Err(MoneyError::NotFinite);
        }
        let decimal = Decimal::from_f64(value).ok_or(MoneyError::Overflow)?;
        if decimal.is_zero() && value != 0.0 {
            tracing::debug!(value, "float amount underflows decimal precision");
            return Err(MoneyError::PrecisionLoss);
        }
        Ok(Self::new(decimal, currency))
    }

    /// Zero in the given currency.
    #[inline]
    pub fn zero(currency: impl Into<String>) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The amount.
    #[inline]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// The currency label.
    #[inline]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// True when the amount has no fractional part.
    #[inline]
    pub fn is_whole(&self) -> bool {
        self.value.fract().is_zero()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Add two amounts of the same currency.
    ///
    /// Neither operand is modified.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if the currency labels differ
    /// - `Overflow` if the sum does not fit a `Decimal`
    pub fn checked_add(&self, rhs: &Money) -> MoneyResult<Money> {
        if self.currency != rhs.currency {
            tracing::debug!(
                left = %self.currency,
                right = %rhs.currency,
                "rejected addition across currencies"
            );
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency.clone(),
                right: rhs.currency.clone(),
            });
        }

        let value = self.value.checked_add(rhs.value).ok_or_else(|| {
            tracing::debug!(left = %self, right = %rhs, "money addition overflowed");
            MoneyError::Overflow
        })?;

        Ok(Money {
            value,
            currency: self.currency.clone(),
        })
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render as `"<amount> <currency>"` using the given configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn format(&self, config: &FormatConfig) -> MoneyResult<String> {
        config.validate().map_err(MoneyError::InvalidConfig)?;
        Ok(self.render(config))
    }

    fn render(&self, config: &FormatConfig) -> String {
        let amount = render_amount(self.value, config.fraction_digits, config.group_separator);
        format!("{} {}", amount, self.currency)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Money {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.currency == other.currency
    }
}

impl Eq for Money {}

impl PartialOrd for Money {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.currency
            .cmp(&other.currency)
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Decimal hashes its normalized form, so 3 and 3.00 agree
        self.value.hash(state);
        self.currency.hash(state);
    }
}

impl Add for Money {
    type Output = MoneyResult<Money>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs)
    }
}

impl Add<&Money> for &Money {
    type Output = MoneyResult<Money>;

    #[inline]
    fn add(self, rhs: &Money) -> Self::Output {
        self.checked_add(rhs)
    }
}

// ============================================================================
// Display and Parsing
// ============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&FormatConfig::standard()))
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Parse the rendered form.
    ///
    /// Everything after the first whitespace character is the currency label,
    /// kept verbatim. Without a separator the default currency applies.
    ///
    /// # Examples
    /// - "1,000 Baht" -> 1000 Baht
    /// - "1.20 Dogecoin" -> 1.2 Dogecoin
    /// - "1 " -> 1 with an empty label
    /// - "42" -> 42 Baht
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start();
        let (amount, currency) = match s.split_once(char::is_whitespace) {
            Some((amount, currency)) => (amount, currency),
            None => (s, DEFAULT_CURRENCY),
        };

        let separator = FormatConfig::standard().group_separator.unwrap_or(',');
        let value = parse_amount(amount, separator)
            .inspect_err(|_| tracing::debug!(input = s, "could not parse money"))?;

        Ok(Self::new(value, currency))
    }
}

// ============================================================================
// Tests
// ============================================================================
