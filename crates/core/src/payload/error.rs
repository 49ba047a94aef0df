//! Payload validation and assembly errors.

use thiserror::Error;

/// Errors raised before a request is signed.
///
/// Validation fails fast: only the first violated rule is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// A field is missing, too long, of the wrong parity, or unparseable.
    #[error("{field} format error")]
    FieldFormat {
        /// Wire name of the field.
        field: &'static str,
    },

    /// A rule relating several fields does not hold.
    #[error("cross-field invariant violated: {rule}")]
    CrossFieldInvariant {
        /// The rule, e.g. `orderAmt = productAmt + attachAmt`.
        rule: &'static str,
    },

    /// No merchant key was supplied to sign with.
    #[error("merchant key cannot be empty")]
    MissingMerchantKey,
}

impl PayloadError {
    /// Shorthand for a `FieldFormat` error.
    #[must_use]
    pub const fn field(field: &'static str) -> Self {
        Self::FieldFormat { field }
    }

    /// Shorthand for a `CrossFieldInvariant` error.
    #[must_use]
    pub const fn cross_field(rule: &'static str) -> Self {
        Self::CrossFieldInvariant { rule }
    }

    /// Returns the error code for logs and API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::FieldFormat { .. } => "FIELD_FORMAT_ERROR",
            Self::CrossFieldInvariant { .. } => "CROSS_FIELD_INVARIANT_VIOLATION",
            Self::MissingMerchantKey => "MISSING_MERCHANT_KEY",
        }
    }
}

impl From<PayloadError> for bestpay_shared::AppError {
    fn from(err: PayloadError) -> Self {
        match err {
            PayloadError::CrossFieldInvariant { .. } => Self::BusinessRule(err.to_string()),
            PayloadError::FieldFormat { .. } => Self::Validation(err.to_string()),
            PayloadError::MissingMerchantKey => Self::Configuration(err.to_string()),
        }
    }
}
