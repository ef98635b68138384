// ============================================================================
// Domain Models Module
// Contains the money value object and its configuration
// ============================================================================

pub mod config;
pub mod money;

pub use config::{FormatConfig, DEFAULT_CURRENCY, MAX_FRACTION_DIGITS};
pub use money::Money;
