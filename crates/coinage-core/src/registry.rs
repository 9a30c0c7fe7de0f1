//! # Currency Registry
//!
//! A code-keyed set of shared currency handles.
//!
//! The registry is built once (at startup or from a currency table, see
//! [`crate::config`]) and passed to whatever needs to resolve codes. It
//! hands out clones of the same `Arc<Currency>`, so every `Money` created
//! through it stays compatible with every other one of the same code.
//!
//! ## Usage
//! ```rust
//! use coinage_core::CurrencyRegistry;
//!
//! let registry = CurrencyRegistry::with_defaults();
//! let usd = registry.require("USD").unwrap();
//!
//! let m = registry.parse_money("USD -9876.50").unwrap();
//! assert_eq!(m.to_string(), "USD -9876.50");
//! assert!(std::sync::Arc::ptr_eq(m.currency(), &usd));
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::currency::{Currency, MAX_DECIMAL_PLACES, UNKNOWN_CODE};
use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;

/// Currencies available from [`CurrencyRegistry::with_defaults`].
const DEFAULT_CURRENCIES: &[(&str, &str, u32)] = &[
    ("USD", "US Dollar", 2),
    ("EUR", "Euro", 2),
    ("GBP", "Pound Sterling", 2),
    ("CHF", "Swiss Franc", 2),
    ("JPY", "Japanese Yen", 0),
    ("KRW", "South Korean Won", 0),
    ("BHD", "Bahraini Dinar", 3),
    ("KWD", "Kuwaiti Dinar", 3),
];

/// Resolves currency codes to shared currency instances.
#[derive(Debug, Default, Clone)]
pub struct CurrencyRegistry {
    currencies: BTreeMap<String, Arc<Currency>>,
}

impl CurrencyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the common currencies and the `NUL`
    /// placeholder.
    pub fn with_defaults() -> Self {
        let mut currencies = BTreeMap::new();
        for &(code, name, places) in DEFAULT_CURRENCIES {
            currencies.insert(code.to_string(), Arc::new(Currency::new(code, name, places)));
        }
        currencies.insert(UNKNOWN_CODE.to_string(), Currency::unknown());
        CurrencyRegistry { currencies }
    }

    /// Adds a currency and returns the shared handle to it.
    ///
    /// Fails with `DuplicateCurrency` if the code is taken (the existing
    /// instance is left untouched) and with `TooManyDecimalPlaces` above
    /// [`MAX_DECIMAL_PLACES`].
    pub fn register(&mut self, currency: Currency) -> MoneyResult<Arc<Currency>> {
        if currency.decimal_places() > MAX_DECIMAL_PLACES {
            return Err(MoneyError::TooManyDecimalPlaces {
                code: currency.code().to_string(),
                decimal_places: currency.decimal_places(),
                max: MAX_DECIMAL_PLACES,
            });
        }
        if self.currencies.contains_key(currency.code()) {
            return Err(MoneyError::DuplicateCurrency(currency.code().to_string()));
        }
        debug!(
            code = %currency.code(),
            decimal_places = currency.decimal_places(),
            "Registered currency"
        );
        let handle = Arc::new(currency);
        self.currencies
            .insert(handle.code().to_string(), Arc::clone(&handle));
        Ok(handle)
    }

    pub fn get(&self, code: &str) -> Option<Arc<Currency>> {
        self.currencies.get(code).cloned()
    }

    /// Like [`get`](Self::get), but a missing code is an error.
    pub fn require(&self, code: &str) -> MoneyResult<Arc<Currency>> {
        self.get(code)
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Registered codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.currencies.keys().map(String::as_str)
    }

    /// Parses the display form `"<CODE> <amount>"` back into a value.
    ///
    /// The amount may carry one leading `-`; the rest follows
    /// [`Money::from_string`].
    pub fn parse_money(&self, text: &str) -> MoneyResult<Money> {
        let (code, amount) = text
            .split_once(' ')
            .ok_or_else(|| MoneyError::format(UNKNOWN_CODE, text))?;
        let currency = self.require(code)?;

        match amount.strip_prefix('-') {
            Some(unsigned) if !has_digit(unsigned) => Err(MoneyError::format(code, amount)),
            Some(unsigned) => Money::from_string(&currency, unsigned)
                .map(|m| m.negate())
                .map_err(|_| MoneyError::format(code, amount)),
            None => Money::from_string(&currency, amount),
        }
    }
}

/// A bare sign such as `-` or `-._` carries no amount.
fn has_digit(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
}

// =============================================================================
// Unit Tests
// =============================================================================
