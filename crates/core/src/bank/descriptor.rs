//! Classification of the `bankId` codes the gateway reports on a payment.
//!
//! Purely informational: the result is for display and reconciliation,
//! nothing in request building depends on it.

use serde::Serialize;

/// Broad funding-source category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountCategory {
    /// Stored value held with the gateway (wallet, prepaid card, voucher).
    AccountBalance,
    /// Quick payment through a bound bank card.
    QuickPayment,
    /// Corporate online banking.
    CorporateBanking,
    /// Personal online banking.
    PersonalBanking,
    /// Code not recognized.
    Unknown,
}

impl AccountCategory {
    /// Human-readable category name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccountBalance => "account balance",
            Self::QuickPayment => "quick payment",
            Self::CorporateBanking => "corporate banking",
            Self::PersonalBanking => "personal banking",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a `bankId` code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankAccountDescriptor {
    /// Funding-source category.
    pub category: AccountCategory,
    /// The code as reported by the gateway.
    pub code: String,
    /// Short description of the funding source.
    pub description: &'static str,
}

static EXACT_CODES: [(&str, &str); 8] = [
    ("COMPANYACC_3AC", "instant discount"),
    ("EPAYTRAVELACC_3AC", "travel account"),
    ("EPAYACC", "wallet account"),
    ("VOUCHER_3AC", "marketing voucher"),
    ("BESTCARDOLD", "legacy prepaid card"),
    ("BESTCARD", "prepaid card"),
    ("EPAYTRAVELCARD_PRE", "travel card"),
    ("EPAYACCWM", "password-free wallet account"),
];

/// Suffix rules, checked in order; the first group with a matching suffix wins.
static SUFFIX_RULES: [(&[&str], AccountCategory, &str); 3] = [
    (
        &["_RPB2C", "_QB2C", "_Q"],
        AccountCategory::QuickPayment,
        "quick payment channel",
    ),
    (
        &["_B2B", "B2B"],
        AccountCategory::CorporateBanking,
        "corporate business",
    ),
    (
        &["_B2C", "_C", "_D"],
        AccountCategory::PersonalBanking,
        "personal business",
    ),
];

/// Classifies a `bankId` code. Total: unrecognized codes map to `Unknown`.
#[must_use]
pub fn resolve_bank_account(code: &str) -> BankAccountDescriptor {
    if let Some((_, description)) = EXACT_CODES.iter().find(|(c, _)| *c == code) {
        return BankAccountDescriptor {
            category: AccountCategory::AccountBalance,
            code: code.to_string(),
            description: *description,
        };
    }

    let (category, description) = SUFFIX_RULES
        .iter()
        .find(|(suffixes, _, _)| suffixes.iter().any(|s| code.ends_with(s)))
        .map_or((AccountCategory::Unknown, "no information"), |(_, c, d)| {
            (*c, *d)
        });

    BankAccountDescriptor {
        category,
        code: code.to_string(),
        description,
    }
}
