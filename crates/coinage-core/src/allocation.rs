//! Splitting a money value into shares without losing a minor unit.
//!
//! Uses the Largest Remainder Method:
//! 1. Give each share `floor(|amount| * ratio / total_ratio)`
//! 2. Count the leftover minor units (always fewer than the share count)
//! 3. Hand one leftover unit each to the shares with the largest
//!    remainders, earlier shares winning ties
//! 4. Put the original sign back on every share
//!
//! The shares always sum exactly to the original amount.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;

impl Money {
    /// Splits this value in proportion to `ratios`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use coinage_core::{Currency, Money};
    ///
    /// let usd = Arc::new(Currency::new("USD", "US Dollar", 2));
    /// let bill = Money::new(&usd, 5);
    ///
    /// // 70/30 of 5 cents = 3.5 / 1.5 -> [4, 1]
    /// let shares = bill.allocate(&[70, 30]).unwrap();
    /// assert_eq!(shares, vec![Money::new(&usd, 4), Money::new(&usd, 1)]);
    /// ```
    pub fn allocate(&self, ratios: &[u32]) -> MoneyResult<Vec<Money>> {
        if ratios.is_empty() {
            return Err(invalid("no ratios given"));
        }
        let total: BigInt = ratios.iter().map(|&r| BigInt::from(r)).sum();
        if total.is_zero() {
            return Err(invalid("ratios sum to zero"));
        }

        let magnitude = self.amount().abs();
        let mut shares = Vec::with_capacity(ratios.len());
        let mut remainders = Vec::with_capacity(ratios.len());
        for (index, &ratio) in ratios.iter().enumerate() {
            let exact = &magnitude * ratio;
            shares.push(&exact / &total);
            remainders.push((index, exact % &total));
        }

        let allocated: BigInt = shares.iter().sum();
        let leftover = (&magnitude - allocated)
            .to_usize()
            .ok_or_else(|| invalid("leftover exceeds share count"))?;

        // Stable sort keeps input order among equal remainders
        remainders.sort_by(|a, b| b.1.cmp(&a.1));
        for (index, _) in remainders.iter().take(leftover) {
            shares[*index] += 1u32;
        }

        let negative = self.is_negative();
        Ok(shares
            .into_iter()
            .map(|share| Money::new(self.currency(), if negative { -share } else { share }))
            .collect())
    }

    /// Splits this value into `parts` equal shares; the first
    /// `amount % parts` shares carry one extra minor unit.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use coinage_core::{Currency, Money};
    ///
    /// let usd = Arc::new(Currency::new("USD", "US Dollar", 2));
    /// let shares = Money::new(&usd, 10000).allocate_equal(3).unwrap();
    /// let rendered: Vec<String> = shares.iter().map(|m| m.to_string()).collect();
    /// assert_eq!(rendered, ["USD 33.34", "USD 33.33", "USD 33.33"]);
    /// ```
    pub fn allocate_equal(&self, parts: usize) -> MoneyResult<Vec<Money>> {
        if parts == 0 {
            return Err(invalid("cannot split into zero parts"));
        }
        self.allocate(&vec![1; parts])
    }
}

fn invalid(reason: &str) -> MoneyError {
    MoneyError::InvalidAllocation {
        reason: reason.to_string(),
    }
}
