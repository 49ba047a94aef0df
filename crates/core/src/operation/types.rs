//! The four gateway operations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A gateway API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Barcode payment.
    PlaceOrder,
    /// Order status query.
    QueryOrder,
    /// Refund.
    Refund,
    /// Same-day reversal.
    Reverse,
}

impl Operation {
    /// Every operation, in registration order.
    pub const ALL: [Self; 4] = [Self::PlaceOrder, Self::QueryOrder, Self::Refund, Self::Reverse];

    /// Path of the operation relative to the gateway host.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::PlaceOrder => "/barcode/placeOrder",
            Self::QueryOrder => "/query/queryOrder",
            Self::Refund => "/refund/commonRefund",
            Self::Reverse => "/reverse/reverse",
        }
    }

    /// Human-readable name for logs.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PlaceOrder => "barcode payment",
            Self::QueryOrder => "order query",
            Self::Refund => "refund",
            Self::Reverse => "reversal",
        }
    }

    /// Full endpoint URL under `base_url`. A trailing `/` on the base is ignored.
    #[must_use]
    pub fn endpoint_url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
