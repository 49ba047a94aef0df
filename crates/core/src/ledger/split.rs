//! Proportional fund split across sub-merchants.
//!
//! The gateway settles a transaction to up to ten sub-merchants. The split
//! travels as `subId:amount|subId:amount` inside the `ledgerDetail` field.

use std::collections::BTreeMap;

use super::error::LedgerError;

/// Maximum number of sub-merchants in one split.
pub const MAX_LEDGER_ENTRIES: usize = 10;

const ENTRY_SEPARATOR: &str = "|";
const PAIR_SEPARATOR: char = ':';

/// Allocation of a transaction total across sub-merchant ids.
///
/// Keys are unique by construction. Entries iterate in sub-merchant id
/// order, which makes the serialized form deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: BTreeMap<String, i64>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the amount allocated to a sub-merchant, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, contains the `|` entry
    /// separator, or the amount is zero.
    pub fn set(&mut self, sub_merchant_id: impl Into<String>, amount: i64) -> Result<(), LedgerError> {
        let sub_merchant_id = sub_merchant_id.into();
        check_sub_merchant_id(&sub_merchant_id)?;
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        self.entries.insert(sub_merchant_id, amount);
        Ok(())
    }

    /// Returns the amount allocated to a sub-merchant, or 0 if absent.
    #[must_use]
    pub fn get(&self, sub_merchant_id: &str) -> i64 {
        self.entries.get(sub_merchant_id).copied().unwrap_or(0)
    }

    /// Number of sub-merchants in the split.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no sub-merchant has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(sub_merchant_id, amount)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(id, amount)| (id.as_str(), *amount))
    }

    /// Validates the split against `total` and renders the wire form.
    ///
    /// Checks run in this order: entry count, non-zero total, per-entry id
    /// and minimum, then exact sum. The remainder left after subtracting every
    /// entry from `total` must be exactly zero, so an over-allocated split
    /// is rejected as well as an under-allocated one.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn serialize(&self, total: i64) -> Result<String, LedgerError> {
        let count = self.entries.len();
        if count == 0 {
            return Err(LedgerError::EmptyLedger);
        }
        if count > MAX_LEDGER_ENTRIES {
            return Err(LedgerError::TooManyEntries {
                count,
                max: MAX_LEDGER_ENTRIES,
            });
        }
        if total == 0 {
            return Err(LedgerError::ZeroTotal);
        }

        let mut remainder = i128::from(total);
        let mut pairs = Vec::with_capacity(count);
        for (sub_merchant_id, &amount) in &self.entries {
            check_sub_merchant_id(sub_merchant_id)?;
            if amount < 1 {
                return Err(LedgerError::EntryTooSmall {
                    sub_merchant_id: sub_merchant_id.clone(),
                    amount,
                });
            }
            remainder -= i128::from(amount);
            pairs.push(format!("{sub_merchant_id}{PAIR_SEPARATOR}{amount}"));
        }

        if remainder != 0 {
            let allocated = self.entries.values().map(|a| i128::from(*a)).sum::<i128>();
            return Err(LedgerError::SumMismatch {
                declared: total,
                allocated: i64::try_from(allocated).unwrap_or(i64::MAX),
            });
        }

        Ok(pairs.join(ENTRY_SEPARATOR))
    }

    /// Reads a serialized split back.
    ///
    /// Only the syntax is checked here; pass the result to
    /// [`Ledger::serialize`] to re-check the split rules.
    ///
    /// # Errors
    ///
    /// Returns `MalformedEntry` for a pair without `:`, with an empty id, or
    /// with a non-integer amount, and the `set` errors for zero amounts.
    pub fn parse(detail: &str) -> Result<Self, LedgerError> {
        let mut ledger = Self::new();
        if detail.is_empty() {
            return Ok(ledger);
        }
        for pair in detail.split(ENTRY_SEPARATOR) {
            let (id, amount) = pair
                .rsplit_once(PAIR_SEPARATOR)
                .ok_or_else(|| LedgerError::MalformedEntry(pair.to_string()))?;
            if id.is_empty() {
                return Err(LedgerError::MalformedEntry(pair.to_string()));
            }
            let amount: i64 = amount
                .parse()
                .map_err(|_| LedgerError::MalformedEntry(pair.to_string()))?;
            ledger.set(id, amount)?;
        }
        Ok(ledger)
    }
}

fn check_sub_merchant_id(sub_merchant_id: &str) -> Result<(), LedgerError> {
    if sub_merchant_id.is_empty() {
        return Err(LedgerError::EmptySubMerchantId);
    }
    if sub_merchant_id.contains(ENTRY_SEPARATOR) {
        return Err(LedgerError::SeparatorInSubMerchantId(sub_merchant_id.to_string()));
    }
    Ok(())
}

/// Validates `ledger` against `total` and returns the wire form.
///
/// # Errors
///
/// See [`Ledger::serialize`].
pub fn serialize_ledger(total: i64, ledger: &Ledger) -> Result<String, LedgerError> {
    ledger.serialize(total)
}

impl<S: Into<String>> FromIterator<(S, i64)> for Ledger {
    /// Collects pairs without the `set` checks; invalid entries surface
    /// later from [`Ledger::serialize`].
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(id, a)| (id.into(), a)).collect(),
        }
    }
}
