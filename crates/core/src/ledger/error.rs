//! Ledger split error types.

use thiserror::Error;

/// Errors raised while building or serializing a fund split.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    // ========== Entry Errors ==========
    /// Sub-merchant id is empty.
    #[error("Sub-merchant id cannot be empty")]
    EmptySubMerchantId,

    /// Sub-merchant id contains the `|` entry separator.
    #[error("Sub-merchant id {0} cannot contain '|'")]
    SeparatorInSubMerchantId(String),

    /// Entry amount is zero.
    #[error("Split amount cannot be zero")]
    ZeroAmount,

    /// Entry amount is below the one-unit minimum.
    #[error("Split amount for {sub_merchant_id} must be at least 1, got {amount}")]
    EntryTooSmall {
        /// The offending sub-merchant.
        sub_merchant_id: String,
        /// Its allocated amount.
        amount: i64,
    },

    // ========== Split Errors ==========
    /// Split has no entries.
    #[error("Ledger has no entries")]
    EmptyLedger,

    /// Split has more entries than the gateway accepts.
    #[error("Ledger has {count} entries, at most {max} are allowed")]
    TooManyEntries {
        /// Number of entries supplied.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// Declared total is zero.
    #[error("Total amount cannot be zero")]
    ZeroTotal,

    /// Entries do not add up to the declared total.
    #[error("Total amount {declared} does not equal the sum of split amounts {allocated}")]
    SumMismatch {
        /// The declared transaction total.
        declared: i64,
        /// Sum of all entry amounts.
        allocated: i64,
    },

    // ========== Parse Errors ==========
    /// A serialized `id:amount` pair could not be read.
    #[error("Malformed ledger entry: {0}")]
    MalformedEntry(String),
}

impl LedgerError {
    /// Returns the error code for logs and API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptySubMerchantId => "EMPTY_SUB_MERCHANT_ID",
            Self::SeparatorInSubMerchantId(_) => "SEPARATOR_IN_SUB_MERCHANT_ID",
            Self::ZeroAmount => "ZERO_AMOUNT",
            Self::EntryTooSmall { .. } => "ENTRY_TOO_SMALL",
            Self::EmptyLedger => "EMPTY_LEDGER",
            Self::TooManyEntries { .. } => "TOO_MANY_ENTRIES",
            Self::ZeroTotal => "ZERO_TOTAL",
            Self::SumMismatch { .. } => "SUM_MISMATCH",
            Self::MalformedEntry(_) => "MALFORMED_ENTRY",
        }
    }

    /// True when the error relates several values rather than one field.
    #[must_use]
    pub const fn is_cross_field(&self) -> bool {
        matches!(self, Self::SumMismatch { .. })
    }
}

impl From<LedgerError> for bestpay_shared::AppError {
    fn from(err: LedgerError) -> Self {
        if err.is_cross_field() {
            Self::BusinessRule(err.to_string())
        } else {
            Self::Validation(err.to_string())
        }
    }
}
