//! # Error Types
//!
//! Domain-specific error types for coinage-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  Value errors (caller input)                                           │
//! │  ├── Format             - Unparseable amount text                      │
//! │  ├── CurrencyMismatch   - Binary op on two different currencies        │
//! │  └── InvalidAllocation  - Empty / all-zero ratios                      │
//! │                                                                         │
//! │  Registry errors                                                       │
//! │  ├── UnknownCurrency    - Code not registered                          │
//! │  ├── DuplicateCurrency  - Code registered twice                        │
//! │  ├── TooManyDecimalPlaces - Precision above the registry limit         │
//! │  ├── InvalidConfig      - Currency table fails validation              │
//! │  └── ConfigLoadFailed   - Currency table file unreadable               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the currency codes and raw input in the message
//! 3. Errors are enum variants, never String
//! 4. Every error is a caller-input problem: fail fast, no partial results

use thiserror::Error;

// =============================================================================
// Money Error
// =============================================================================

/// Errors raised by money parsing, arithmetic and the currency registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Amount text could not be parsed for the currency.
    ///
    /// ## When This Occurs
    /// - A character outside `0-9` (after removing `_`) in either part
    /// - More than one decimal point
    /// - A non-zero digit beyond the currency's decimal places
    #[error("Invalid amount: {currency} {input}")]
    Format { currency: String, input: String },

    /// Two operands reference different currency instances.
    ///
    /// ## User Workflow
    /// ```text
    /// USD 10.00 + BHD 10.000
    ///      │
    ///      ▼
    /// CurrencyMismatch { left: "USD", right: "BHD" }
    /// ```
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },

    /// Allocation ratios cannot produce shares.
    #[error("Invalid allocation: {reason}")]
    InvalidAllocation { reason: String },

    /// Currency code is not present in the registry.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Currency code is already present in the registry.
    #[error("Currency already registered: {0}")]
    DuplicateCurrency(String),

    /// Currency precision exceeds what the registry accepts.
    #[error("{code} has {decimal_places} decimal places, maximum is {max}")]
    TooManyDecimalPlaces {
        code: String,
        decimal_places: u32,
        max: u32,
    },

    /// Currency table failed validation.
    #[error("Invalid currency configuration: {0}")]
    InvalidConfig(String),

    /// Currency table could not be read or decoded.
    #[error("Failed to load currency configuration: {0}")]
    ConfigLoadFailed(String),
}

impl MoneyError {
    pub(crate) fn format(currency: &str, input: &str) -> Self {
        MoneyError::Format {
            currency: currency.to_string(),
            input: input.to_string(),
        }
    }

    pub(crate) fn mismatch(left: &str, right: &str) -> Self {
        MoneyError::CurrencyMismatch {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

impl From<std::io::Error> for MoneyError {
    fn from(err: std::io::Error) -> Self {
        MoneyError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for MoneyError {
    fn from(err: toml::de::Error) -> Self {
        MoneyError::ConfigLoadFailed(err.to_string())
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with MoneyError.
pub type MoneyResult<T> = Result<T, MoneyError>;

// =============================================================================
// Unit Tests
// =============================================================================
