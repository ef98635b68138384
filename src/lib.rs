// ============================================================================
// Money Library
// Immutable monetary amounts tagged with a currency label
// ============================================================================

//! # Money
//!
//! An immutable value type pairing a decimal amount with a currency label.
//!
//! ## Features
//!
//! - **Exact decimal amounts** backed by `rust_decimal`
//! - **Readable rendering**: `1,000 Baht`, `1.20 Dogecoin`
//! - **Currency-first ordering** and numeric equality (`3 == 3.00`)
//! - **Checked addition** that rejects mixing currencies
//!
//! ## Example
//!
//! ```rust
//! use money::prelude::*;
//!
//! let price = Money::with_default_currency(1000);
//! assert_eq!(price.currency(), "Baht");
//! assert_eq!(price.to_string(), "1,000 Baht");
//!
//! let total = (&price + &Money::with_default_currency(100))?;
//! assert_eq!(total.to_string(), "1,100 Baht");
//!
//! let dollars = Money::new(5, "USD");
//! assert!(matches!(
//!     &price + &dollars,
//!     Err(MoneyError::CurrencyMismatch { .. })
//! ));
//! # Ok::<(), MoneyError>(())
//! ```
//!
//! Amounts cannot be changed after construction:
//!
//! ```compile_fail
//! use money::prelude::*;
//!
//! let mut m = Money::new(10, "Bananas");
//! m.currency = "Ringgit".to_string();
//! ```
//!
//! ```compile_fail
//! use money::prelude::*;
//!
//! let mut m = Money::new(10, "Bananas");
//! m.value = rust_decimal::Decimal::from(20);
//! ```

pub mod domain;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{FormatConfig, Money, DEFAULT_CURRENCY};
    pub use crate::numeric::{MoneyError, MoneyResult};
}
