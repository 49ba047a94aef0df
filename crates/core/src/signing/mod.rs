//! Request MAC computation.

pub mod signer;

#[cfg(test)]
mod signer_props;

pub use signer::{Signer, sign, sign_with};
