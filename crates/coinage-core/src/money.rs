//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Minor Units?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Unbounded Integer Minor Units                            │
//! │    USD 98.76      → 9876 cents                                          │
//! │    BHD 20241.223  → 20241223 fils                                       │
//! │    No fixed width, so large sums and products never overflow            │
//! │                                                                         │
//! │  THE MIXING PROBLEM                                                     │
//! │    USD 10.00 + BHD 10.000 = ???     ❌ REJECTED (CurrencyMismatch)      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use std::sync::Arc;
//! use coinage_core::{Currency, Money};
//!
//! let usd = Arc::new(Currency::new("USD", "US Dollar", 2));
//!
//! let price = Money::from_string(&usd, "10.99").unwrap();
//! let total = price.add(&Money::new(&usd, 500)).unwrap();
//! assert_eq!(total.to_string(), "USD 15.99");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, Neg};
use std::sync::Arc;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use tracing::debug;

use crate::currency::Currency;
use crate::error::{MoneyError, MoneyResult};

// =============================================================================
// Sign
// =============================================================================

/// Sign of a money amount, independent of its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

// =============================================================================
// Money Type
// =============================================================================

/// An amount in the minor units of one currency.
///
/// ## Design Decisions
/// - **BigInt amount**: no upper or lower bound, negative values allowed
/// - **Arc<Currency>**: shared descriptor; compatibility is `Arc::ptr_eq`
/// - **Immutable**: every operation returns a new value
///
/// ## Compatibility Check
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  a.add(&b) / a.compare(&b) / a.less_than(&b) ...                        │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  same Arc<Currency>? ── no ──► Err(CurrencyMismatch { left, right })    │
/// │       │ yes                                                             │
/// │       ▼                                                                 │
/// │  integer operation on minor units                                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// `PartialEq` never fails: values in different currencies are simply not
/// equal. There is deliberately no `PartialOrd`; ordering goes through the
/// checked comparison methods.
#[derive(Debug, Clone)]
pub struct Money {
    currency: Arc<Currency>,
    amount: BigInt,
}

impl Money {
    /// Creates a Money value from an amount already in minor units.
    ///
    /// No validation is performed.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use coinage_core::{Currency, Money};
    /// use num_bigint::BigInt;
    ///
    /// let usd = Arc::new(Currency::new("USD", "US Dollar", 2));
    /// let price = Money::new(&usd, 1099); // USD 10.99
    /// assert_eq!(price.amount(), &BigInt::from(1099));
    /// ```
    pub fn new(currency: &Arc<Currency>, amount: impl Into<BigInt>) -> Self {
        Money {
            currency: Arc::clone(currency),
            amount: amount.into(),
        }
    }

    /// Returns zero in the given currency.
    pub fn zero(currency: &Arc<Currency>) -> Self {
        Money::new(currency, BigInt::zero())
    }

    /// Parses an unsigned decimal string such as `"9_876.50"`.
    ///
    /// ## Rules
    /// - `_` is removed anywhere before parsing
    /// - At most one `.`; both sides must be ASCII digits only (no signs)
    /// - Missing fractional digits are padded with zeros
    /// - Extra fractional digits are accepted only if they are all zeros
    /// - An empty whole or fractional part counts as zero, so `""` and
    ///   `"."` both parse to zero
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use coinage_core::{Currency, Money};
    /// use num_bigint::BigInt;
    ///
    /// let usd = Arc::new(Currency::new("USD", "US Dollar", 2));
    ///
    /// let m = Money::from_string(&usd, "9_876.500").unwrap();
    /// assert_eq!(m.amount(), &BigInt::from(987650));
    ///
    /// assert!(Money::from_string(&usd, "98.765").is_err());
    /// assert!(Money::from_string(&usd, "$500").is_err());
    /// ```
    pub fn from_string(currency: &Arc<Currency>, text: &str) -> MoneyResult<Self> {
        let reject = || {
            debug!(currency = %currency.code(), input = %text, "Rejected money amount");
            MoneyError::format(currency.code(), text)
        };

        let cleaned: String = text.chars().filter(|&c| c != '_').collect();
        let (whole, fraction) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));

        if !is_ascii_digits(whole) || !is_ascii_digits(fraction) {
            return Err(reject());
        }

        let places = currency.decimal_places() as usize;
        let fraction = if fraction.len() > places {
            // Only trailing zeros may sit past the currency's precision
            if fraction.trim_end_matches('0').len() > places {
                return Err(reject());
            }
            &fraction[..places]
        } else {
            fraction
        };
        let fraction = format!("{:0<width$}", fraction, width = places);

        let whole = parse_digits(whole).ok_or_else(reject)?;
        let fraction = parse_digits(&fraction).ok_or_else(reject)?;

        Ok(Money::new(currency, whole * currency.scale() + fraction))
    }

    #[inline]
    pub fn currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    /// Returns the amount in minor units.
    #[inline]
    pub fn amount(&self) -> &BigInt {
        &self.amount
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.amount.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Fails unless both values hold the same currency instance.
    fn ensure_compatible(&self, other: &Money) -> MoneyResult<()> {
        if Currency::same(&self.currency, &other.currency) {
            return Ok(());
        }
        debug!(
            left = %self.currency.code(),
            right = %other.currency.code(),
            "Currency mismatch"
        );
        Err(MoneyError::mismatch(
            self.currency.code(),
            other.currency.code(),
        ))
    }

    /// Orders two values of the same currency.
    ///
    /// ## Example
    /// ```rust
    /// use std::cmp::Ordering;
    /// use std::sync::Arc;
    /// use coinage_core::{Currency, Money};
    ///
    /// let usd = Arc::new(Currency::new("USD", "US Dollar", 2));
    /// let bhd = Arc::new(Currency::new("BHD", "Bahraini Dinar", 3));
    ///
    /// let a = Money::new(&usd, 100);
    /// assert_eq!(a.compare(&Money::new(&usd, 200)).unwrap(), Ordering::Less);
    /// assert!(a.compare(&Money::new(&bhd, 100)).is_err());
    /// ```
    pub fn compare(&self, other: &Money) -> MoneyResult<Ordering> {
        self.ensure_compatible(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    pub fn equals(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    pub fn not_equals(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Equal)
    }

    pub fn less_than(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn less_or_equal(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    pub fn greater_than(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn greater_or_equal(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    // =========================================================================
    // Sign
    // =========================================================================

    pub fn sign(&self) -> Sign {
        match self.amount.cmp(&BigInt::zero()) {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }

    pub fn negate(&self) -> Money {
        Money {
            currency: Arc::clone(&self.currency),
            amount: -&self.amount,
        }
    }

    pub fn absolute_value(&self) -> Money {
        if self.is_negative() {
            self.negate()
        } else {
            self.clone()
        }
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    pub fn add(&self, other: &Money) -> MoneyResult<Money> {
        self.ensure_compatible(other)?;
        Ok(Money {
            currency: Arc::clone(&self.currency),
            amount: &self.amount + &other.amount,
        })
    }

    pub fn subtract(&self, other: &Money) -> MoneyResult<Money> {
        self.ensure_compatible(other)?;
        Ok(Money {
            currency: Arc::clone(&self.currency),
            amount: &self.amount - &other.amount,
        })
    }

    /// Multiplies by a dimensionless integer. Never fails.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use coinage_core::{Currency, Money};
    ///
    /// let usd = Arc::new(Currency::new("USD", "US Dollar", 2));
    /// let unit_price = Money::new(&usd, 299);
    /// assert_eq!(unit_price.multiply(3).to_string(), "USD 8.97");
    /// ```
    pub fn multiply(&self, factor: impl Into<BigInt>) -> Money {
        let factor: BigInt = factor.into();
        Money {
            currency: Arc::clone(&self.currency),
            amount: &self.amount * factor,
        }
    }

    /// Adds up a collection of values in one currency.
    ///
    /// An empty collection sums to zero in `currency`.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use coinage_core::{Currency, Money};
    ///
    /// let usd = Arc::new(Currency::new("USD", "US Dollar", 2));
    /// let items = vec![Money::new(&usd, 150), Money::new(&usd, 250)];
    /// assert_eq!(Money::sum(&usd, &items).unwrap().to_string(), "USD 4.00");
    /// ```
    pub fn sum<'a, I>(currency: &Arc<Currency>, items: I) -> MoneyResult<Money>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        let mut total = Money::zero(currency);
        for item in items {
            total = total.add(item)?;
        }
        Ok(total)
    }
}

fn is_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a digit-only string; an empty string is zero.
fn parse_digits(s: &str) -> Option<BigInt> {
    if s.is_empty() {
        return Some(BigInt::zero());
    }
    BigInt::parse_bytes(s.as_bytes(), 10)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `"<CODE> <whole>"` or `"<CODE> <whole>.<fraction>"`.
///
/// The sign is written once in front of the whole part, so `-50` cents
/// renders as `USD -0.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.currency.code();
        let scale = self.currency.scale();
        if scale.is_one() {
            return write!(f, "{} {}", code, self.amount);
        }

        let sign = if self.amount.is_negative() { "-" } else { "" };
        let magnitude = self.amount.abs();
        let whole = &magnitude / scale;
        let fraction = &magnitude % scale;
        write!(
            f,
            "{} {}{}.{:0>width$}",
            code,
            sign,
            whole,
            fraction.to_string(),
            width = self.currency.decimal_places() as usize
        )
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        Currency::same(&self.currency, &other.currency) && self.amount == other.amount
    }
}

impl Eq for Money {}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money {
            currency: self.currency,
            amount: -self.amount,
        }
    }
}

impl Neg for &Money {
    type Output = Money;

    fn neg(self) -> Money {
        self.negate()
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, qty: i64) -> Money {
        Money {
            currency: self.currency,
            amount: self.amount * qty,
        }
    }
}

impl Mul<&BigInt> for &Money {
    type Output = Money;

    fn mul(self, factor: &BigInt) -> Money {
        Money {
            currency: Arc::clone(&self.currency),
            amount: &self.amount * factor,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
