//! Fund-split (ledger) handling.
//!
//! This module implements the sub-merchant split that can accompany a
//! payment or refund:
//! - Building a split entry by entry
//! - Validating it against the transaction total
//! - Rendering and reading the `id:amount|id:amount` wire form

pub mod error;
pub mod split;

#[cfg(test)]
mod split_props;

pub use error::LedgerError;
pub use split::{Ledger, MAX_LEDGER_ENTRIES, serialize_ledger};
