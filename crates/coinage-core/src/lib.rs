//! # coinage-core: Precision-Safe Money Values
//!
//! Currency amounts as unbounded integers in minor units, with parsing,
//! formatting, comparison, arithmetic and allocation that never lose
//! precision and never silently mix currencies.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        coinage-core                                     │
//! │                                                                         │
//! │   ┌───────────┐        ┌──────────────────────────────────────────┐    │
//! │   │  config   │──────► │  registry   CurrencyRegistry             │    │
//! │   │  (TOML)   │        │             code → Arc<Currency>         │    │
//! │   └───────────┘        └──────────────────┬───────────────────────┘    │
//! │                                           │                             │
//! │   ┌───────────┐        ┌──────────────────▼───────────────────────┐    │
//! │   │ currency  │──────► │  money      Money { Arc<Currency>,       │    │
//! │   │ (leaf)    │        │                     BigInt minor units } │    │
//! │   └───────────┘        │  allocation largest-remainder splits     │    │
//! │                        └──────────────────────────────────────────┘    │
//! │                                                                         │
//! │   NO FLOATS • NO MUTATION • SAME-INSTANCE CURRENCY CHECKS               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`currency`] - Currency descriptor and the `NUL` placeholder
//! - [`money`] - Money value type: parsing, display, comparison, arithmetic
//! - [`allocation`] - Splitting a value into exact shares
//! - [`registry`] - Code-keyed currency lookup
//! - [`config`] - Currency tables loaded from TOML
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use coinage_core::{CurrencyRegistry, Money};
//!
//! let registry = CurrencyRegistry::with_defaults();
//! let usd = registry.require("USD").unwrap();
//!
//! let bill = Money::from_string(&usd, "100").unwrap();
//! let shares = bill.allocate_equal(3).unwrap();
//!
//! assert_eq!(shares[0].to_string(), "USD 33.34");
//! assert_eq!(Money::sum(&usd, &shares).unwrap(), bill);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocation;
pub mod config;
pub mod currency;
pub mod error;
pub mod money;
pub mod registry;

#[cfg(test)]
mod props;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use coinage_core::Money` instead of
// `use coinage_core::money::Money`

pub use config::{CurrencyDef, RegistryConfig};
pub use currency::Currency;
pub use error::{MoneyError, MoneyResult};
pub use money::{Money, Sign};
pub use registry::CurrencyRegistry;
