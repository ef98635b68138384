// ============================================================================
// Money Errors
// Error types for money construction, arithmetic and parsing
// ============================================================================

use std::fmt;

/// Errors that can occur when building, combining or parsing money values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoneyError {
    /// Operands carry different currency labels
    CurrencyMismatch { left: String, right: String },
    /// Result does not fit the decimal representation
    Overflow,
    /// Floating-point input was NaN or infinite
    NotFinite,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Rendering configuration failed validation
    InvalidConfig(String),
    /// Input string could not be parsed as money
    InvalidInput,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::CurrencyMismatch { left, right } => {
                write!(f, "currency mismatch: cannot combine {} with {}", left, right)
            },
            MoneyError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            MoneyError::NotFinite => write!(f, "value must be a finite number"),
            MoneyError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            MoneyError::InvalidConfig(reason) => write!(f, "invalid format config: {}", reason),
            MoneyError::InvalidInput => write!(f, "invalid input: could not parse money"),
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MoneyError::CurrencyMismatch {
            left: "Baht".to_string(),
            right: "Bird".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "currency mismatch: cannot combine Baht with Bird"
        );
        assert_eq!(
            MoneyError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
        assert_eq!(
            MoneyError::NotFinite.to_string(),
            "value must be a finite number"
        );
        assert_eq!(
            MoneyError::InvalidConfig("Fraction digits cannot exceed 28".to_string()).to_string(),
            "invalid format config: Fraction digits cannot exceed 28"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MoneyError::Overflow, MoneyError::Overflow);
        assert_ne!(MoneyError::Overflow, MoneyError::InvalidInput);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(MoneyError::InvalidInput);
        assert_eq!(err.to_string(), "invalid input: could not parse money");
    }
}
