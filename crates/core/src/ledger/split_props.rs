//! Property-based tests for ledger split serialization.

use std::collections::BTreeMap;

use proptest::prelude::*;

use super::error::LedgerError;
use super::split::{Ledger, MAX_LEDGER_ENTRIES};

/// Strategy to generate a sub-merchant id.
fn sub_merchant_id() -> impl Strategy<Value = String> {
    "[0-9A-Z]{4,15}"
}

/// Strategy to generate a valid split: 1-10 unique ids with amounts >= 1.
fn valid_entries() -> impl Strategy<Value = BTreeMap<String, i64>> {
    prop::collection::btree_map(sub_merchant_id(), 1i64..1_000_000, 1..=MAX_LEDGER_ENTRIES)
}

fn to_ledger(entries: &BTreeMap<String, i64>) -> Ledger {
    entries.iter().map(|(id, a)| (id.clone(), *a)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A split whose entries add up to the total always serializes.
    #[test]
    fn prop_exact_sum_accepted(entries in valid_entries()) {
        let total: i64 = entries.values().sum();
        let result = to_ledger(&entries).serialize(total);
        prop_assert!(result.is_ok(), "balanced split rejected: {:?}", result);
    }

    /// Any total other than the exact sum is rejected with SumMismatch.
    #[test]
    fn prop_off_by_delta_rejected(
        entries in valid_entries(),
        delta in prop_oneof![-1_000i64..=-1, 1i64..=1_000],
    ) {
        let sum: i64 = entries.values().sum();
        let total = sum + delta;
        prop_assume!(total != 0);

        let result = to_ledger(&entries).serialize(total);
        prop_assert_eq!(
            result,
            Err(LedgerError::SumMismatch { declared: total, allocated: sum })
        );
    }

    /// Serialized output parses back into the same set of pairs.
    #[test]
    fn prop_round_trip(entries in valid_entries()) {
        let total: i64 = entries.values().sum();
        let ledger = to_ledger(&entries);
        let wire = ledger.serialize(total).unwrap();

        prop_assert!(!wire.ends_with('|'));
        prop_assert_eq!(wire.split('|').count(), entries.len());
        prop_assert_eq!(Ledger::parse(&wire).unwrap(), ledger);
    }

    /// Any id without the entry separator survives the round trip, including
    /// ids that contain the pair separator.
    #[test]
    fn prop_round_trip_any_id(
        entries in prop::collection::btree_map("[^|]{1,15}", 1i64..1_000_000, 1..=MAX_LEDGER_ENTRIES),
    ) {
        let total: i64 = entries.values().sum();
        let ledger = to_ledger(&entries);
        let wire = ledger.serialize(total).unwrap();
        prop_assert_eq!(Ledger::parse(&wire).unwrap(), ledger);
    }

    /// An id carrying the entry separator is never serialized.
    #[test]
    fn prop_separator_in_id_rejected(
        entries in valid_entries(),
        prefix in sub_merchant_id(),
        suffix in sub_merchant_id(),
    ) {
        let bad = format!("{prefix}|{suffix}");
        let mut ledger = to_ledger(&entries);
        prop_assert_eq!(
            ledger.set(bad.clone(), 1),
            Err(LedgerError::SeparatorInSubMerchantId(bad))
        );
        prop_assert_eq!(ledger, to_ledger(&entries));
    }

    /// Serialization is stable across calls.
    #[test]
    fn prop_deterministic(entries in valid_entries()) {
        let total: i64 = entries.values().sum();
        let ledger = to_ledger(&entries);
        prop_assert_eq!(ledger.serialize(total), ledger.clone().serialize(total));
    }

    /// More than ten entries is rejected before the sum is looked at.
    #[test]
    fn prop_too_many_entries_rejected(
        entries in prop::collection::btree_map(sub_merchant_id(), 1i64..100, 11..20),
        total in 1i64..10_000,
    ) {
        let count = entries.len();
        let result = to_ledger(&entries).serialize(total);
        prop_assert_eq!(
            result,
            Err(LedgerError::TooManyEntries { count, max: MAX_LEDGER_ENTRIES })
        );
    }

    /// A non-positive entry is rejected even when the sum balances.
    #[test]
    fn prop_non_positive_entry_rejected(
        entries in valid_entries(),
        bad in -1_000i64..=0,
    ) {
        prop_assume!(entries.len() < MAX_LEDGER_ENTRIES);
        let sum: i64 = entries.values().sum();
        // "~" sorts after every generated id, so the bad entry is checked last.
        let ledger: Ledger = entries
            .iter()
            .map(|(id, a)| (id.clone(), *a))
            .chain(std::iter::once(("~BAD".to_string(), bad)))
            .collect();

        let result = ledger.serialize(sum + bad);
        let is_too_small = matches!(result, Err(LedgerError::EntryTooSmall { .. }));
        let is_zero_total = sum + bad == 0 && result == Err(LedgerError::ZeroTotal);
        prop_assert!(is_too_small || is_zero_total, "got {:?}", result);
    }
}
