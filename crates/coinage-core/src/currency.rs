//! # Currency Module
//!
//! Immutable currency descriptors.
//!
//! A [`Currency`] names a currency and fixes how many minor-unit digits it
//! has. The derived `scale` (10^decimal_places) converts whole units to
//! minor units:
//!
//! ```text
//! ┌──────────┬────────────────────┬────────────────┬──────────┐
//! │  code    │  name              │ decimal_places │  scale   │
//! ├──────────┼────────────────────┼────────────────┼──────────┤
//! │  JPY     │  Japanese Yen      │       0        │      1   │
//! │  USD     │  US Dollar         │       2        │    100   │
//! │  BHD     │  Bahraini Dinar    │       3        │   1000   │
//! └──────────┴────────────────────┴────────────────┴──────────┘
//! ```
//!
//! Currencies are shared as `Arc<Currency>`. Two money values are only
//! compatible when they hold the *same* `Arc`, so two descriptors that
//! happen to share a code are still different currencies.

use std::fmt;
use std::sync::Arc;

use num_bigint::BigInt;
use once_cell::sync::Lazy;

/// Code of the placeholder currency.
pub const UNKNOWN_CODE: &str = "NUL";

/// Largest decimal-place count a registry or currency table accepts.
pub const MAX_DECIMAL_PLACES: u32 = 18;

static UNKNOWN: Lazy<Arc<Currency>> =
    Lazy::new(|| Arc::new(Currency::new(UNKNOWN_CODE, "Unknown currency", 0)));

/// Describes a currency: its code, display name and minor-unit digits.
///
/// ## Example
/// ```rust
/// use coinage_core::Currency;
/// use num_bigint::BigInt;
///
/// let bhd = Currency::new("BHD", "Bahraini Dinar", 3);
/// assert_eq!(bhd.code(), "BHD");
/// assert_eq!(bhd.scale(), &BigInt::from(1000));
/// ```
#[derive(Debug)]
pub struct Currency {
    code: String,
    name: String,
    decimal_places: u32,
    scale: BigInt,
}

impl Currency {
    /// Creates a currency descriptor. The scale is derived here and never
    /// set independently.
    ///
    /// `decimal_places` is not capped here; [`CurrencyRegistry::register`]
    /// rejects anything above [`MAX_DECIMAL_PLACES`].
    ///
    /// [`CurrencyRegistry::register`]: crate::registry::CurrencyRegistry::register
    pub fn new(code: impl Into<String>, name: impl Into<String>, decimal_places: u32) -> Self {
        Currency {
            code: code.into(),
            name: name.into(),
            decimal_places,
            scale: BigInt::from(10u32).pow(decimal_places),
        }
    }

    /// Returns the shared placeholder currency (`NUL`, 0 decimal places).
    ///
    /// Every call returns a handle to the same instance.
    pub fn unknown() -> Arc<Currency> {
        Arc::clone(&UNKNOWN)
    }

    /// Returns true when both handles point at the same currency instance.
    #[inline]
    pub fn same(a: &Arc<Currency>, b: &Arc<Currency>) -> bool {
        Arc::ptr_eq(a, b)
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Minor units per whole unit.
    #[inline]
    pub fn scale(&self) -> &BigInt {
        &self.scale
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
