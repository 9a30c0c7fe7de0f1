//! Property-based tests for money operations.
//!
//! - Display / parse round-trip
//! - Underscore transparency
//! - Allocation sum invariant
//! - Add / subtract inverse

use std::sync::Arc;

use num_bigint::BigInt;
use proptest::prelude::*;

use crate::currency::Currency;
use crate::money::Money;
use crate::registry::CurrencyRegistry;

/// Strategy to generate decimal places (0 to 6).
fn decimal_places() -> impl Strategy<Value = u32> {
    0u32..=6
}

/// Strategy to generate non-negative minor-unit amounts, some past 64 bits.
fn non_negative_amount() -> impl Strategy<Value = BigInt> {
    prop_oneof![
        (0i64..1_000_000_000i64).prop_map(BigInt::from),
        (any::<u64>(), any::<u64>())
            .prop_map(|(hi, lo)| (BigInt::from(hi) << 64usize) + BigInt::from(lo)),
    ]
}

/// Strategy to generate signed minor-unit amounts.
fn signed_amount() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

fn currency(places: u32) -> Arc<Currency> {
    Arc::new(Currency::new("TST", "Test", places))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Parsing the number printed by `Display` gives back the same value.
    #[test]
    fn prop_display_round_trip(places in decimal_places(), amount in non_negative_amount()) {
        let currency = currency(places);
        let original = Money::new(&currency, amount);
        let rendered = original.to_string();
        let (_, number) = rendered.split_once(' ').unwrap();
        prop_assert_eq!(Money::from_string(&currency, number).unwrap(), original);
    }

    /// Signed values round-trip through the registry's display parser.
    #[test]
    fn prop_registry_round_trip(amount in signed_amount()) {
        let registry = CurrencyRegistry::with_defaults();
        for code in ["JPY", "USD", "BHD"] {
            let currency = registry.require(code).unwrap();
            let original = Money::new(&currency, amount);
            prop_assert_eq!(registry.parse_money(&original.to_string()).unwrap(), original);
        }
    }

    /// Underscores never change the parsed amount.
    #[test]
    fn prop_underscores_are_ignored(
        digits in "[0-9]{1,12}",
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..4),
    ) {
        let jpy = currency(0);
        let mut spaced = digits.clone();
        for cut in cuts {
            spaced.insert(cut.index(spaced.len() + 1), '_');
        }
        prop_assert_eq!(
            Money::from_string(&jpy, &spaced).unwrap(),
            Money::from_string(&jpy, &digits).unwrap()
        );
    }

    /// Shares always add back up to the original amount.
    #[test]
    fn prop_allocation_sum_invariant(
        amount in signed_amount(),
        ratios in prop::collection::vec(0u32..1000, 1..12),
    ) {
        prop_assume!(ratios.iter().any(|&r| r > 0));
        let usd = currency(2);
        let original = Money::new(&usd, amount);
        let shares = original.allocate(&ratios).unwrap();
        prop_assert_eq!(shares.len(), ratios.len());
        prop_assert_eq!(Money::sum(&usd, &shares).unwrap(), original);
    }

    /// Equal shares differ by at most one minor unit, larger ones first.
    #[test]
    fn prop_allocate_equal_is_fair(amount in 0i64..1_000_000_000, parts in 1usize..50) {
        let usd = currency(2);
        let shares = Money::new(&usd, amount).allocate_equal(parts).unwrap();
        for pair in shares.windows(2) {
            let diff = pair[0].subtract(&pair[1]).unwrap();
            prop_assert!(diff.is_zero() || diff == Money::new(&usd, 1));
        }
    }

    /// Subtracting what was added restores the original.
    #[test]
    fn prop_add_subtract_inverse(a in signed_amount(), b in signed_amount()) {
        let usd = currency(2);
        let (a, b) = (Money::new(&usd, a), Money::new(&usd, b));
        prop_assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
    }
}
