//! Keyed digest over a canonical string.
//!
//! The key is appended as `KEY=<key>` directly after the canonical string,
//! without an `&` in between, and the digest is rendered as uppercase hex.

use bestpay_shared::MacAlgorithm;
use md5::Md5;
use sha2::{Digest, Sha256};

const KEY_PREFIX: &[u8] = b"KEY=";

/// Signs `canonical` with `key` using digest `D`.
#[must_use]
pub fn sign_with<D: Digest>(canonical: &str, key: &str) -> String {
    let mut hasher = D::new();
    hasher.update(canonical.as_bytes());
    hasher.update(KEY_PREFIX);
    hasher.update(key.as_bytes());
    hex::encode_upper(hasher.finalize())
}

/// Signs with MD5, the gateway's wire-compatible digest.
#[must_use]
pub fn sign(canonical: &str, key: &str) -> String {
    sign_with::<Md5>(canonical, key)
}

/// Signer bound to a configured digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Signer {
    algorithm: MacAlgorithm,
}

impl Signer {
    /// Creates a signer for `algorithm`.
    #[must_use]
    pub const fn new(algorithm: MacAlgorithm) -> Self {
        Self { algorithm }
    }

    /// The configured digest.
    #[must_use]
    pub const fn algorithm(&self) -> MacAlgorithm {
        self.algorithm
    }

    /// Computes the MAC of `canonical` under `key`.
    #[must_use]
    pub fn sign(&self, canonical: &str, key: &str) -> String {
        match self.algorithm {
            MacAlgorithm::Md5 => sign_with::<Md5>(canonical, key),
            MacAlgorithm::Sha256 => sign_with::<Sha256>(canonical, key),
        }
    }
}
