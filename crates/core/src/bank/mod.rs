//! Funding-source lookup for gateway `bankId` codes.

pub mod descriptor;

pub use descriptor::{AccountCategory, BankAccountDescriptor, resolve_bank_account};
