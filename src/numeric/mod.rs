// ============================================================================
// Numeric Module
// Decimal amount handling for money values
// ============================================================================
//
// This module provides:
// - MoneyError: Error types for money construction, arithmetic and parsing
// - render_amount / parse_amount: grouped decimal text in both directions
//
// Design principles:
// - Amounts are rust_decimal::Decimal, never stored as floating point
// - All fallible operations return Result (no panics)

mod errors;
mod format;

pub use errors::{MoneyError, MoneyResult};
pub use format::{parse_amount, render_amount};
